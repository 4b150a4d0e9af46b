//! Bit-level I/O over byte buffers.
//!
//! Both the move-rank codec and the Huffman coder emit variable-width fields
//! that are not byte-aligned, so they share this pair of primitives. Bits are
//! written and read most-significant-bit first; the writer grows its buffer
//! by one byte whenever the sub-byte cursor wraps past bit 7, and any
//! partially filled trailing byte is zero-padded in its low bits.

use crate::codec_error::{CodecError, CodecResult};

/// Accumulates bits MSB-first into a growable byte buffer.
#[derive(Debug, Clone, Default)]
pub struct BitWriter {
    bytes: Vec<u8>,
    current: u8,
    cursor: u8,
}

impl BitWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a single bit.
    pub fn write_bit(&mut self, bit: bool) {
        if bit {
            self.current |= 1 << (7 - self.cursor);
        }
        self.cursor += 1;
        if self.cursor == 8 {
            self.bytes.push(self.current);
            self.current = 0;
            self.cursor = 0;
        }
    }

    /// Appends the low `width` bits of `value`, most significant first.
    ///
    /// A width of zero is a legal no-op; the move codec relies on it for
    /// positions with a single legal move.
    pub fn write_bits(&mut self, value: u32, width: u32) {
        debug_assert!(width <= 32);
        for shift in (0..width).rev() {
            self.write_bit((value >> shift) & 1 == 1);
        }
    }

    /// Number of bits written so far.
    pub fn bit_len(&self) -> usize {
        self.bytes.len() * 8 + self.cursor as usize
    }

    /// Consumes the writer and returns the buffer, flushing any partially
    /// filled trailing byte with zero padding in its low bits.
    pub fn into_bytes(mut self) -> Vec<u8> {
        if self.cursor > 0 {
            self.bytes.push(self.current);
        }
        self.bytes
    }
}

/// Reads bits MSB-first from a byte slice.
#[derive(Debug, Clone)]
pub struct BitReader<'a> {
    bytes: &'a [u8],
    byte_index: usize,
    cursor: u8,
}

impl<'a> BitReader<'a> {
    pub fn new(bytes: &'a [u8]) -> Self {
        Self {
            bytes,
            byte_index: 0,
            cursor: 0,
        }
    }

    /// Number of unread bits left in the input.
    pub fn remaining_bits(&self) -> usize {
        (self.bytes.len() - self.byte_index) * 8 - self.cursor as usize
    }

    /// Reads a single bit, or `CorruptStream` when the input is exhausted.
    pub fn read_bit(&mut self) -> CodecResult<bool> {
        if self.byte_index >= self.bytes.len() {
            return Err(CodecError::CorruptStream(format!(
                "ran out of input after {} bytes",
                self.bytes.len()
            )));
        }
        let bit = (self.bytes[self.byte_index] >> (7 - self.cursor)) & 1 == 1;
        self.cursor += 1;
        if self.cursor == 8 {
            self.cursor = 0;
            self.byte_index += 1;
        }
        Ok(bit)
    }

    /// Reads `width` bits into the low bits of a `u32`, most significant
    /// first. A width of zero reads nothing and returns zero.
    pub fn read_bits(&mut self, width: u32) -> CodecResult<u32> {
        debug_assert!(width <= 32);
        let mut value = 0u32;
        for _ in 0..width {
            value = (value << 1) | self.read_bit()? as u32;
        }
        Ok(value)
    }
}
