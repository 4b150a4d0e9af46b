//! Static Huffman byte coder.
//!
//! Couples a tree and its codebook behind one type: encoding is a codebook
//! lookup, decoding walks the tree one bit at a time until it lands on a
//! leaf. The coder for the baked-in default table is built at most once per
//! process and shared read-only; per-call coders over custom tables are
//! cheap enough to build where needed.

use once_cell::sync::Lazy;

use crate::bit_buffer::{BitReader, BitWriter};
use crate::codec_error::{CodecError, CodecResult};
use crate::huffman::codebook::CodeBook;
use crate::huffman::frequencies::default_table;
use crate::huffman::tree::{build_tree, HuffmanNode};

static DEFAULT_CODER: Lazy<StaticHuffmanCoder> = Lazy::new(|| {
    StaticHuffmanCoder::new(&default_table()).expect("baked-in frequency table is non-empty")
});

/// The process-wide coder over the baked-in frequency table. Built on first
/// use, immutable afterwards, safe to share across threads.
pub fn default_coder() -> &'static StaticHuffmanCoder {
    &DEFAULT_CODER
}

pub struct StaticHuffmanCoder {
    tree: HuffmanNode,
    codebook: CodeBook,
}

impl StaticHuffmanCoder {
    /// Builds the tree and codebook for a fixed frequency table. Zero
    /// frequencies mark absent symbols; a table with no positive entries is
    /// `EmptyFrequencyTable`.
    pub fn new(table: &[(u8, u64)]) -> CodecResult<Self> {
        let tree = build_tree(table)?;
        let codebook = CodeBook::from_tree(&tree);
        Ok(StaticHuffmanCoder { tree, codebook })
    }

    pub fn codebook(&self) -> &CodeBook {
        &self.codebook
    }

    /// The bit-string code for `symbol`.
    pub fn code_of(&self, symbol: u8) -> CodecResult<&str> {
        self.codebook.code_of(symbol)
    }

    /// Decodes one symbol from a '0'/'1' string, walking the tree from the
    /// root. Bits past the first complete symbol are not examined. Errors
    /// with `CorruptStream` when the string ends before a leaf is reached
    /// or contains a character other than '0'/'1'.
    pub fn decode_str(&self, bits: &str) -> CodecResult<u8> {
        let mut chars = bits.chars();
        let mut next_bit = move || match chars.next() {
            Some('0') => Ok(false),
            Some('1') => Ok(true),
            Some(other) => Err(CodecError::CorruptStream(format!(
                "unexpected character {other:?} in bit string"
            ))),
            None => Err(CodecError::CorruptStream(
                "bit string ended before reaching a leaf".to_string(),
            )),
        };
        self.walk(&mut next_bit)
    }

    /// Appends the code for `symbol` to `writer`.
    pub fn encode_symbol(&self, symbol: u8, writer: &mut BitWriter) -> CodecResult<()> {
        for bit in self.codebook.code_of(symbol)?.chars() {
            writer.write_bit(bit == '1');
        }
        Ok(())
    }

    /// Reads one symbol from `reader`, walking the tree bit by bit.
    pub fn decode_symbol(&self, reader: &mut BitReader<'_>) -> CodecResult<u8> {
        self.walk(&mut || reader.read_bit())
    }

    fn walk(&self, next_bit: &mut dyn FnMut() -> CodecResult<bool>) -> CodecResult<u8> {
        // A single-leaf tree still consumes its one-bit "0" code.
        if let HuffmanNode::Leaf { symbol, .. } = &self.tree {
            return if next_bit()? {
                Err(CodecError::CorruptStream(
                    "nonzero bit for a single-symbol code".to_string(),
                ))
            } else {
                Ok(*symbol)
            };
        }

        let mut node = &self.tree;
        loop {
            match node {
                HuffmanNode::Leaf { symbol, .. } => return Ok(*symbol),
                HuffmanNode::Internal { left, right, .. } => {
                    node = if next_bit()? { right } else { left };
                }
            }
        }
    }

    /// Compresses a whole byte slice. The output carries no length header;
    /// pair it with the input length for `decompress_bytes`.
    pub fn compress_bytes(&self, bytes: &[u8]) -> CodecResult<Vec<u8>> {
        let mut writer = BitWriter::new();
        for &byte in bytes {
            self.encode_symbol(byte, &mut writer)?;
        }
        Ok(writer.into_bytes())
    }

    /// Decompresses exactly `count` symbols; trailing pad bits are ignored.
    pub fn decompress_bytes(&self, bytes: &[u8], count: usize) -> CodecResult<Vec<u8>> {
        let mut reader = BitReader::new(bytes);
        let mut output = Vec::with_capacity(count);
        for _ in 0..count {
            output.push(self.decode_symbol(&mut reader)?);
        }
        Ok(output)
    }
}
