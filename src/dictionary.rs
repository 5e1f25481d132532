//! Prefix-code dictionaries derived from a Huffman tree.

use std::collections::HashMap;

use crate::symbol::Symbol;
use crate::tree::HuffNode;

/// A code path from the root: `false` descends left, `true` descends right.
pub type BitPath = Vec<bool>;

/// Symbol -> code path map for encoding.
pub fn encode_table(root: &HuffNode) -> HashMap<Symbol, BitPath> {
    let mut table = HashMap::new();
    let mut path = Vec::new();
    visit_leaves(root, &mut path, &mut |symbol, path| {
        table.insert(symbol, recorded_path(path));
    });
    table
}

/// Code path -> symbol map for decoding; the exact inverse of
/// [`encode_table`] over the same tree.
pub fn decode_table(root: &HuffNode) -> HashMap<BitPath, Symbol> {
    let mut table = HashMap::new();
    let mut path = Vec::new();
    visit_leaves(root, &mut path, &mut |symbol, path| {
        table.insert(recorded_path(path), symbol);
    });
    table
}

// A one-leaf tree has no internal nodes, so its root leaf sits at an empty
// path. It gets the fixed single-bit code 0 instead.
fn recorded_path(path: &[bool]) -> BitPath {
    if path.is_empty() {
        vec![false]
    } else {
        path.to_vec()
    }
}

// Depth-first walk reaching every leaf exactly once, reusing one growable
// path buffer as the accumulator.
fn visit_leaves(node: &HuffNode, path: &mut BitPath, visit: &mut impl FnMut(Symbol, &[bool])) {
    match node {
        HuffNode::Leaf { symbol, .. } => visit(*symbol, path),
        HuffNode::Internal { left, right, .. } => {
            path.push(false);
            visit_leaves(left, path, visit);
            path.pop();
            path.push(true);
            visit_leaves(right, path, visit);
            path.pop();
        }
    }
}
