//! Game encoder: SAN move sequence to packed bytes.
//!
//! The encoder is a small state machine over a single game. A fresh encoder
//! holds the start position and an empty bit buffer; each `encode_move` call
//! ranks the legal moves of the current position, writes the played move's
//! index as a `ceil(log2(n))`-bit field, and advances the position. The
//! consuming `finalize` returns the byte buffer and retires the encoder.
//!
//! The byte format carries no length header: callers must persist the ply
//! count alongside the bytes (or rely on the game being over) to decode.

use shakmaty::{san::SanPlus, Chess, Position};

use crate::bit_buffer::BitWriter;
use crate::codec_error::{CodecError, CodecResult};
use crate::move_rank::scored_move::ranked_moves;

/// Width in bits of a move-index field when `n` moves are legal.
///
/// `n == 1` yields zero bits: a forced move communicates no choice, but the
/// decoder still advances a ply. `n == 0` cannot occur for a move that was
/// just verified legal.
pub fn index_width(n: usize) -> u32 {
    debug_assert!(n >= 1);
    usize::BITS - (n - 1).leading_zeros()
}

/// Encodes one game, ply by ply, into a bit-packed buffer.
pub struct GameEncoder {
    position: Chess,
    writer: BitWriter,
    ply: usize,
}

impl Default for GameEncoder {
    fn default() -> Self {
        Self::new()
    }
}

impl GameEncoder {
    /// Encoder over a game starting from the standard initial position.
    pub fn new() -> Self {
        Self::from_position(Chess::default())
    }

    /// Encoder over a game starting from an arbitrary position. The decoder
    /// must be given the same starting position.
    pub fn from_position(position: Chess) -> Self {
        GameEncoder {
            position,
            writer: BitWriter::new(),
            ply: 0,
        }
    }

    /// Number of plies encoded so far.
    pub fn ply(&self) -> usize {
        self.ply
    }

    /// Number of bits written so far.
    pub fn bit_len(&self) -> usize {
        self.writer.bit_len()
    }

    /// Encodes the next ply. `san` must be a legal move in the current
    /// position; otherwise nothing is written and `InvalidMove` identifies
    /// the offending text and ply index.
    pub fn encode_move(&mut self, san: &str) -> CodecResult<()> {
        let invalid = |san: &str, ply: usize| CodecError::InvalidMove {
            san: san.to_string(),
            ply,
        };

        let parsed: SanPlus = san.parse().map_err(|_| invalid(san, self.ply))?;
        let mv = parsed
            .san
            .to_move(&self.position)
            .map_err(|_| invalid(san, self.ply))?;

        let ranked = ranked_moves(&self.position);
        let index = ranked
            .iter()
            .position(|sm| sm.mv == mv)
            .ok_or_else(|| invalid(san, self.ply))?;

        self.writer
            .write_bits(index as u32, index_width(ranked.len()));
        self.position.play_unchecked(&mv);
        self.ply += 1;
        Ok(())
    }

    /// Consumes the encoder and returns the packed bytes. Any partially
    /// filled trailing byte is zero-padded in its low bits.
    pub fn finalize(self) -> Vec<u8> {
        self.writer.into_bytes()
    }
}

/// Encodes a full move sequence from the standard initial position.
pub fn encode_game<S: AsRef<str>>(moves: &[S]) -> CodecResult<Vec<u8>> {
    let mut encoder = GameEncoder::new();
    for mv in moves {
        encoder.encode_move(mv.as_ref())?;
    }
    Ok(encoder.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;
    use shakmaty::{fen::Fen, CastlingMode};

    #[test]
    fn index_width_matches_the_ceil_log2_table() {
        let expected = [
            (1usize, 0u32),
            (2, 1),
            (3, 2),
            (4, 2),
            (5, 3),
            (8, 3),
            (9, 4),
            (16, 4),
            (20, 5),
            (33, 6),
        ];
        for (n, width) in expected {
            assert_eq!(index_width(n), width, "n = {n}");
        }
    }

    #[test]
    fn first_ply_occupies_five_bits() {
        // 20 legal moves in the start position.
        let mut encoder = GameEncoder::new();
        encoder.encode_move("e4").unwrap();
        assert_eq!(encoder.bit_len(), 5);
        assert_eq!(encoder.ply(), 1);
    }

    #[test]
    fn illegal_or_garbled_moves_are_rejected_with_ply_context() {
        let mut encoder = GameEncoder::new();
        encoder.encode_move("e4").unwrap();
        let err = encoder.encode_move("Ke2").unwrap_err();
        assert_eq!(
            err,
            CodecError::InvalidMove {
                san: "Ke2".to_string(),
                ply: 1
            }
        );
        let err = encoder.encode_move("not-a-move").unwrap_err();
        assert_eq!(
            err,
            CodecError::InvalidMove {
                san: "not-a-move".to_string(),
                ply: 1
            }
        );
        // The failed plies wrote nothing.
        assert_eq!(encoder.bit_len(), 5);
    }

    #[test]
    fn a_forced_move_writes_zero_bits() {
        // Black's only legal move is h5: the king is boxed in by the white
        // king and queen, and only the h-pawn can move.
        let position: Chess = "k7/8/KQ5p/8/8/8/8/8 b - - 0 1"
            .parse::<Fen>()
            .unwrap()
            .into_position(CastlingMode::Standard)
            .unwrap();
        let mut encoder = GameEncoder::from_position(position);
        encoder.encode_move("h5").unwrap();
        assert_eq!(encoder.bit_len(), 0);
        assert_eq!(encoder.ply(), 1);
        assert!(encoder.finalize().is_empty());
    }
}
