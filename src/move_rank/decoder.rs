//! Game decoder: packed bytes back to the SAN move sequence.
//!
//! Decoding recomputes, ply by ply, exactly the ranking the encoder used:
//! the legal moves of the current position are scored and sorted with the
//! same function, the freshly computed move count fixes the field width, and
//! the index read from the stream selects the move. No ordering information
//! travels in the bytes; the recomputation is what keeps both sides
//! synchronized.

use shakmaty::{san::SanPlus, Chess, Position};

use crate::bit_buffer::BitReader;
use crate::codec_error::{CodecError, CodecResult};
use crate::move_rank::encoder::index_width;
use crate::move_rank::scored_move::ranked_moves;

/// Decodes one game from a bit-packed buffer.
pub struct GameDecoder<'a> {
    position: Chess,
    reader: BitReader<'a>,
    ply: usize,
}

impl<'a> GameDecoder<'a> {
    /// Decoder over a game starting from the standard initial position.
    pub fn new(bytes: &'a [u8]) -> Self {
        Self::from_position(Chess::default(), bytes)
    }

    /// Decoder over a game starting from an arbitrary position; must match
    /// the position the encoder started from.
    pub fn from_position(position: Chess, bytes: &'a [u8]) -> Self {
        GameDecoder {
            position,
            reader: BitReader::new(bytes),
            ply: 0,
        }
    }

    /// Number of plies decoded so far.
    pub fn ply(&self) -> usize {
        self.ply
    }

    pub fn position(&self) -> &Chess {
        &self.position
    }

    /// Decodes the next ply and returns its notation, or `None` when the
    /// rules engine reports the game over. `CorruptStream` when the input
    /// runs out mid-field or the recovered index is out of range.
    pub fn decode_next(&mut self) -> CodecResult<Option<String>> {
        if self.position.is_game_over() {
            return Ok(None);
        }

        let ranked = ranked_moves(&self.position);
        let width = index_width(ranked.len());
        let index = self.reader.read_bits(width).map_err(|_| {
            CodecError::CorruptStream(format!(
                "input exhausted reading a {width}-bit index at ply {}",
                self.ply
            ))
        })? as usize;

        if index >= ranked.len() {
            return Err(CodecError::CorruptStream(format!(
                "move index {index} out of range at ply {} ({} legal moves)",
                self.ply,
                ranked.len()
            )));
        }

        let mv = ranked[index].mv.clone();
        let san = SanPlus::from_move_and_play_unchecked(&mut self.position, &mv);
        self.ply += 1;
        Ok(Some(san.to_string()))
    }
}

/// Decodes a game recorded from the standard initial position.
///
/// With `plies = Some(n)`, exactly `n` plies are decoded unless the game
/// ends earlier, in which case the remaining input is ignored. With
/// `plies = None`, decoding continues until the game is over; for a stream
/// whose game has not ended this eventually reports `CorruptStream`, which
/// is why callers are expected to persist the ply count (see the encoder
/// module docs).
pub fn decode_game(bytes: &[u8], plies: Option<usize>) -> CodecResult<Vec<String>> {
    decode_game_from(Chess::default(), bytes, plies)
}

/// Decodes a game recorded from an arbitrary starting position.
pub fn decode_game_from(
    position: Chess,
    bytes: &[u8],
    plies: Option<usize>,
) -> CodecResult<Vec<String>> {
    let mut decoder = GameDecoder::from_position(position, bytes);
    let mut moves = Vec::new();
    loop {
        if let Some(limit) = plies {
            if moves.len() == limit {
                break;
            }
        }
        match decoder.decode_next()? {
            Some(san) => moves.push(san),
            None => break,
        }
    }
    Ok(moves)
}
