//! Errors used throughout the compression library.
//!
//! This module defines the canonical error type returned by the game codec,
//! the Huffman coder, and the position snapshot codec. The enum `CodecError`
//! is used as the single error type across the crate to simplify propagation
//! and matching. Each variant carries contextual information where
//! appropriate to aid diagnostics.
//!
//! Usage guidelines:
//! - `InvalidMove` is a caller error: the submitted move does not resolve to
//!   a legal move in the current position. Nothing has been written for the
//!   offending ply.
//! - `CorruptStream` means the input bytes do not correspond to a stream
//!   produced by this codec, or were truncated. It is never silently
//!   recovered; callers own any retry policy (e.g. re-fetching stored bytes).
//! - `UnknownSymbol` and `EmptyFrequencyTable` are configuration errors on
//!   the Huffman side.

use std::error::Error;
use std::fmt;

pub type CodecResult<T> = Result<T, CodecError>;

/// Unified error type for the compression library.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// The move text could not be resolved to a legal move in the current
    /// position.
    ///
    /// Payload: the offending SAN text and the zero-based ply index at which
    /// it was submitted.
    InvalidMove { san: String, ply: usize },

    /// The input ran out of bits mid-field, a decoded move index exceeded
    /// the legal-move count, or a Huffman walk fell off the tree.
    ///
    /// Payload: a diagnostic message describing where the stream broke.
    CorruptStream(String),

    /// Huffman encode was asked for a symbol outside the fixed frequency
    /// table.
    ///
    /// Payload: the unknown byte value.
    UnknownSymbol(u8),

    /// A Huffman coder was built from a table with no positive frequencies.
    EmptyFrequencyTable,
}

impl fmt::Display for CodecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CodecError::InvalidMove { san, ply } => {
                write!(f, "invalid move {san:?} at ply {ply}")
            }
            CodecError::CorruptStream(msg) => write!(f, "corrupt stream: {msg}"),
            CodecError::UnknownSymbol(symbol) => {
                write!(f, "symbol {symbol} is not in the frequency table")
            }
            CodecError::EmptyFrequencyTable => {
                write!(f, "frequency table has no positive entries")
            }
        }
    }
}

impl Error for CodecError {}
