//! Huffman tree construction by repeated minimum-weight merging.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::frequency::FrequencyTable;
use crate::symbol::Symbol;

/// A node of the Huffman tree. Every internal node has exactly two
/// children; each node exclusively owns its subtree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HuffNode {
    Leaf {
        symbol: Symbol,
        weight: u64,
    },
    Internal {
        weight: u64,
        left: Box<HuffNode>,
        right: Box<HuffNode>,
    },
}

impl HuffNode {
    pub fn leaf(symbol: Symbol, weight: u64) -> Self {
        HuffNode::Leaf { symbol, weight }
    }

    /// Merge two nodes under a new internal node whose weight is the sum
    /// of both children.
    pub fn merge(left: HuffNode, right: HuffNode) -> Self {
        HuffNode::Internal {
            weight: left.weight() + right.weight(),
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn weight(&self) -> u64 {
        match self {
            HuffNode::Leaf { weight, .. } => *weight,
            HuffNode::Internal { weight, .. } => *weight,
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, HuffNode::Leaf { .. })
    }

    pub fn leaf_count(&self) -> usize {
        match self {
            HuffNode::Leaf { .. } => 1,
            HuffNode::Internal { left, right, .. } => left.leaf_count() + right.leaf_count(),
        }
    }
}

/// Heap entry keyed by `(weight, insertion sequence)`. The sequence number
/// makes equal-weight extraction order stable, so identical inputs always
/// produce an identical tree.
struct HeapEntry {
    weight: u64,
    seq: u64,
    node: HuffNode,
}

impl PartialEq for HeapEntry {
    fn eq(&self, other: &Self) -> bool {
        self.weight == other.weight && self.seq == other.seq
    }
}

impl Eq for HeapEntry {}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // BinaryHeap is a max-heap; reverse the key for minimum extraction.
        (other.weight, other.seq).cmp(&(self.weight, self.seq))
    }
}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Builds the Huffman tree for a frequency table.
///
/// Returns `None` for an empty table (zero-byte input). A table with one
/// entry yields a lone leaf with no merge step.
pub fn build_tree(table: &FrequencyTable) -> Option<HuffNode> {
    let mut heap = BinaryHeap::with_capacity(table.distinct_symbols());
    let mut seq = 0u64;
    for (symbol, weight) in table.sorted_entries() {
        heap.push(HeapEntry {
            weight,
            seq,
            node: HuffNode::leaf(symbol, weight),
        });
        seq += 1;
    }

    while heap.len() > 1 {
        let first = heap.pop().unwrap();
        let second = heap.pop().unwrap();
        let node = HuffNode::merge(first.node, second.node);
        heap.push(HeapEntry {
            weight: node.weight(),
            seq,
            node,
        });
        seq += 1;
    }

    heap.pop().map(|entry| entry.node)
}
