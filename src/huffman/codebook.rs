//! Symbol-to-code mapping derived from a Huffman tree.
//!
//! A depth-first walk from the root appends '0' when descending left and
//! '1' when descending right and records the accumulated path at every
//! leaf. Because every symbol sits on exactly one leaf, no code is a prefix
//! of another. A degenerate single-leaf tree gets the one-bit code "0" to
//! keep the codec total.

use std::collections::HashMap;

use crate::codec_error::{CodecError, CodecResult};
use crate::huffman::tree::HuffmanNode;

#[derive(Debug, Clone)]
pub struct CodeBook {
    codes: HashMap<u8, String>,
}

impl CodeBook {
    pub fn from_tree(root: &HuffmanNode) -> Self {
        let mut codes = HashMap::new();
        match root {
            HuffmanNode::Leaf { symbol, .. } => {
                codes.insert(*symbol, "0".to_string());
            }
            HuffmanNode::Internal { .. } => {
                let mut path = String::new();
                collect(root, &mut path, &mut codes);
            }
        }
        CodeBook { codes }
    }

    /// The bit-string for `symbol`, or `UnknownSymbol` if it was not in the
    /// frequency table the tree was built from.
    pub fn code_of(&self, symbol: u8) -> CodecResult<&str> {
        self.codes
            .get(&symbol)
            .map(String::as_str)
            .ok_or(CodecError::UnknownSymbol(symbol))
    }

    /// Number of symbols with a code.
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    pub fn entries(&self) -> impl Iterator<Item = (u8, &str)> {
        self.codes.iter().map(|(&symbol, code)| (symbol, code.as_str()))
    }
}

fn collect(node: &HuffmanNode, path: &mut String, codes: &mut HashMap<u8, String>) {
    match node {
        HuffmanNode::Leaf { symbol, .. } => {
            codes.insert(*symbol, path.clone());
        }
        HuffmanNode::Internal { left, right, .. } => {
            path.push('0');
            collect(left, path, codes);
            path.pop();
            path.push('1');
            collect(right, path, codes);
            path.pop();
        }
    }
}
