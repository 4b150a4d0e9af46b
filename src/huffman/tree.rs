//! Huffman tree construction.
//!
//! Standard greedy build over a fixed (symbol, frequency) table: the two
//! lowest-frequency nodes are repeatedly merged under a fresh internal node
//! until one root remains. Ties are broken by insertion order — the earliest
//! node with the minimum frequency wins, and merged nodes go to the back of
//! the working list — so two builds from the same table always produce the
//! same tree. The tree is built once and never mutated afterwards.

use crate::codec_error::{CodecError, CodecResult};

/// A node of the prefix-code tree. Leaves carry exactly one symbol;
/// internal nodes carry none.
#[derive(Debug, Clone)]
pub enum HuffmanNode {
    Leaf {
        symbol: u8,
        frequency: u64,
    },
    Internal {
        frequency: u64,
        left: Box<HuffmanNode>,
        right: Box<HuffmanNode>,
    },
}

impl HuffmanNode {
    pub fn frequency(&self) -> u64 {
        match self {
            HuffmanNode::Leaf { frequency, .. } => *frequency,
            HuffmanNode::Internal { frequency, .. } => *frequency,
        }
    }
}

/// Builds the tree for `table`. Entries with zero frequency are treated as
/// absent symbols; a table with no positive entries is an error.
pub fn build_tree(table: &[(u8, u64)]) -> CodecResult<HuffmanNode> {
    let mut queue: Vec<HuffmanNode> = table
        .iter()
        .filter(|(_, frequency)| *frequency > 0)
        .map(|&(symbol, frequency)| HuffmanNode::Leaf { symbol, frequency })
        .collect();

    while queue.len() > 1 {
        let left = take_lowest(&mut queue);
        let right = take_lowest(&mut queue);
        queue.push(HuffmanNode::Internal {
            frequency: left.frequency() + right.frequency(),
            left: Box::new(left),
            right: Box::new(right),
        });
    }

    queue.pop().ok_or(CodecError::EmptyFrequencyTable)
}

/// Removes and returns the earliest node with the lowest frequency.
fn take_lowest(queue: &mut Vec<HuffmanNode>) -> HuffmanNode {
    let mut lowest = 0;
    for i in 1..queue.len() {
        if queue[i].frequency() < queue[lowest].frequency() {
            lowest = i;
        }
    }
    queue.remove(lowest)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_frequency_is_the_table_total() {
        let table = [(b'a', 5u64), (b'b', 9), (b'c', 12), (b'd', 13)];
        let root = build_tree(&table).unwrap();
        assert_eq!(root.frequency(), 39);
    }

    #[test]
    fn single_symbol_builds_a_lone_leaf() {
        let root = build_tree(&[(42, 7)]).unwrap();
        assert!(matches!(root, HuffmanNode::Leaf { symbol: 42, .. }));
    }

    #[test]
    fn empty_and_all_zero_tables_are_rejected() {
        assert_eq!(build_tree(&[]).unwrap_err(), CodecError::EmptyFrequencyTable);
        assert_eq!(
            build_tree(&[(1, 0), (2, 0)]).unwrap_err(),
            CodecError::EmptyFrequencyTable
        );
    }

    #[test]
    fn equal_frequencies_build_deterministically() {
        let table: Vec<(u8, u64)> = (0..16).map(|s| (s, 3)).collect();
        let a = format!("{:?}", build_tree(&table).unwrap());
        let b = format!("{:?}", build_tree(&table).unwrap());
        assert_eq!(a, b);
    }
}
