//! Fixed-size-ish position snapshots.
//!
//! A position is stored as its occupancy bitboard plus one nibble per
//! occupied square, two nibbles per byte with the first in the low bits, in
//! bitboard iteration order. Nibbles 0–11 are (color, role) pairs; the
//! remaining four values fold the rest of the game state into the board:
//!
//! - 12: a pawn whose double step left a legally capturable en-passant
//!   square behind it (color follows from the rank)
//! - 13/14: a white/black rook that still carries castling rights
//! - 15: the black king when Black is to move
//!
//! Halfmove and fullmove counters are not recorded; reconstructed positions
//! start their counters fresh. The packed nibble count is derived from the
//! occupancy popcount, so a truncated byte form is detectable.

use shakmaty::{
    Bitboard, Board, CastlingMode, CastlingSide, Chess, Color, EnPassantMode, FromSetup, Piece,
    Position, Rank, Role, Setup, Square,
};

use crate::codec_error::{CodecError, CodecResult};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompressedPosition {
    pub occupied: Bitboard,
    pub packed: Vec<u8>,
}

impl CompressedPosition {
    pub fn compress(position: &Chess) -> CompressedPosition {
        let board = position.board();
        let occupied = board.occupied();
        let ep_square = position.ep_square(EnPassantMode::Legal);
        let castles = position.castles();

        let mut nibbles = Vec::with_capacity(occupied.count());
        for square in occupied {
            let piece = match board.piece_at(square) {
                Some(piece) => piece,
                None => continue,
            };
            nibbles.push(square_nibble(position, piece, square, ep_square, castles));
        }

        let mut packed = Vec::with_capacity((nibbles.len() + 1) / 2);
        for pair in nibbles.chunks(2) {
            let low = pair[0];
            let high = if pair.len() == 2 { pair[1] } else { 0 };
            packed.push(low | (high << 4));
        }

        CompressedPosition { occupied, packed }
    }

    pub fn decompress(&self) -> CodecResult<Chess> {
        let n = self.occupied.count();
        if self.packed.len() != (n + 1) / 2 {
            return Err(CodecError::CorruptStream(format!(
                "{} packed bytes for {} occupied squares",
                self.packed.len(),
                n
            )));
        }

        let mut nibbles = Vec::with_capacity(n + 1);
        for byte in &self.packed {
            nibbles.push(byte & 0x0F);
            nibbles.push(byte >> 4);
        }

        let mut board = Board::empty();
        let mut turn = Color::White;
        let mut castling_rights = Bitboard::EMPTY;
        let mut ep_square = None;

        for (square, &nibble) in self.occupied.into_iter().zip(nibbles.iter()) {
            let piece = match nibble {
                0..=11 => Piece {
                    color: Color::from_white(nibble % 2 == 0),
                    role: role_from_index(nibble / 2),
                },
                12 => {
                    // Color follows from which half of the board the pawn
                    // double-stepped into.
                    let color = if square.rank() >= Rank::Fifth {
                        Color::Black
                    } else {
                        Color::White
                    };
                    let behind = match color {
                        Color::White => Rank::Third,
                        Color::Black => Rank::Sixth,
                    };
                    ep_square = Some(Square::from_coords(square.file(), behind));
                    Piece {
                        color,
                        role: Role::Pawn,
                    }
                }
                13 | 14 => {
                    castling_rights = castling_rights | Bitboard::from(square);
                    Piece {
                        color: Color::from_white(nibble == 13),
                        role: Role::Rook,
                    }
                }
                _ => {
                    turn = Color::Black;
                    Piece {
                        color: Color::Black,
                        role: Role::King,
                    }
                }
            };
            board.set_piece_at(square, piece);
        }

        let mut setup = Setup::empty();
        setup.board = board;
        setup.turn = turn;
        setup.castling_rights = castling_rights;
        setup.ep_square = ep_square;

        Chess::from_setup(setup, CastlingMode::Standard)
            .map_err(|e| CodecError::CorruptStream(format!("invalid position: {e}")))
    }

    /// Flat byte form: 8-byte big-endian occupancy, then the packed nibbles.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(8 + self.packed.len());
        bytes.extend_from_slice(&self.occupied.0.to_be_bytes());
        bytes.extend_from_slice(&self.packed);
        bytes
    }

    pub fn from_bytes(bytes: &[u8]) -> CodecResult<CompressedPosition> {
        if bytes.len() < 8 {
            return Err(CodecError::CorruptStream(format!(
                "{} bytes is too short for an occupancy bitboard",
                bytes.len()
            )));
        }
        let mut occupancy = [0u8; 8];
        occupancy.copy_from_slice(&bytes[..8]);
        let occupied = Bitboard(u64::from_be_bytes(occupancy));

        let expected = (occupied.count() + 1) / 2;
        let packed = &bytes[8..];
        if packed.len() != expected {
            return Err(CodecError::CorruptStream(format!(
                "expected {expected} packed bytes, found {}",
                packed.len()
            )));
        }

        Ok(CompressedPosition {
            occupied,
            packed: packed.to_vec(),
        })
    }
}

fn square_nibble(
    position: &Chess,
    piece: Piece,
    square: Square,
    ep_square: Option<Square>,
    castles: &shakmaty::Castles,
) -> u8 {
    // Base value: role index doubled, plus one for black.
    let mut nibble = (piece.role as u8 - 1) * 2 + u8::from(piece.color == Color::Black);

    if piece.role == Role::Pawn {
        let double_step_rank = match piece.color {
            Color::White => Rank::Fourth,
            Color::Black => Rank::Fifth,
        };
        let behind = match piece.color {
            Color::White => Rank::Third,
            Color::Black => Rank::Sixth,
        };
        if square.rank() == double_step_rank
            && ep_square == Some(Square::from_coords(square.file(), behind))
        {
            nibble = 12;
        }
    }

    if piece.role == Role::Rook {
        let kingside = castles.rook(piece.color, CastlingSide::KingSide);
        let queenside = castles.rook(piece.color, CastlingSide::QueenSide);
        if Some(square) == kingside || Some(square) == queenside {
            nibble = if piece.color == Color::White { 13 } else { 14 };
        }
    }

    if piece.role == Role::King && piece.color == Color::Black && position.turn() == Color::Black {
        nibble = 15;
    }

    nibble
}

fn role_from_index(index: u8) -> Role {
    match index {
        0 => Role::Pawn,
        1 => Role::Knight,
        2 => Role::Bishop,
        3 => Role::Rook,
        4 => Role::Queen,
        _ => Role::King,
    }
}
