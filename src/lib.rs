//! Crate root module declarations for the chess compression library.
//!
//! This file exposes the bit-packing primitive, the move-rank game codec,
//! the static Huffman byte coder, and the position snapshot codec so
//! binaries, tests, and external tooling can import stable module paths.

pub mod bit_buffer;
pub mod codec_error;

pub mod move_rank {
    pub mod decoder;
    pub mod encoder;
    pub mod psqt;
    pub mod scored_move;
}

pub mod huffman {
    pub mod codebook;
    pub mod coder;
    pub mod frequencies;
    pub mod tree;
}

pub mod position_pack;
