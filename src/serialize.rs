//! Postorder tree serialization embedded in the compressed file header.

use bitstream_io::{BitRead, BitWrite};

use crate::error::{Error, Result};
use crate::symbol::Symbol;
use crate::tree::HuffNode;

/// Writes the tree as a postorder bit sequence: a `1` flag plus 16 symbol
/// bits per leaf, and a lone `0` flag after both children of an internal
/// node. Total length is 17 bits per leaf plus one bit per merge.
pub fn write_tree<W: BitWrite>(writer: &mut W, node: &HuffNode) -> Result<()> {
    match node {
        HuffNode::Leaf { symbol, .. } => {
            writer.write_bit(true)?;
            writer.write::<16, Symbol>(*symbol)?;
        }
        HuffNode::Internal { left, right, .. } => {
            write_tree(writer, left)?;
            write_tree(writer, right)?;
            writer.write_bit(false)?;
        }
    }
    Ok(())
}

/// Rebuilds a tree from its postorder serialization.
///
/// A `1` flag pushes a leaf (weight 0; weight is irrelevant after
/// construction); a `0` flag pops the two most recent nodes and pushes
/// their merge, with the first pop becoming the right child. The loop is
/// driven by the declared counts: `leaf_count` leaves and `leaf_count - 1`
/// merges must be consumed, no more and no fewer.
pub fn read_tree<R: BitRead>(reader: &mut R, leaf_count: u32) -> Result<HuffNode> {
    let mut stack: Vec<HuffNode> = Vec::new();
    let mut remaining_leaves = leaf_count as u64;
    let mut remaining_internal = u64::from(leaf_count).saturating_sub(1);

    while remaining_leaves > 0 || remaining_internal > 0 {
        let flag = reader
            .read_bit()
            .map_err(|e| Error::from_read(e, "tree header"))?;

        if flag {
            if remaining_leaves == 0 {
                return Err(Error::corrupt("tree header holds more leaves than declared"));
            }
            let symbol: Symbol = reader
                .read::<16, Symbol>()
                .map_err(|e| Error::from_read(e, "tree header symbol"))?;
            stack.push(HuffNode::leaf(symbol, 0));
            remaining_leaves -= 1;
        } else {
            if remaining_internal == 0 {
                return Err(Error::corrupt("tree header holds more merges than declared"));
            }
            let right = stack
                .pop()
                .ok_or_else(|| Error::corrupt("tree merge on an empty node stack"))?;
            let left = stack
                .pop()
                .ok_or_else(|| Error::corrupt("tree merge with a single stacked node"))?;
            stack.push(HuffNode::merge(left, right));
            remaining_internal -= 1;
        }

        if stack.len() > leaf_count as usize {
            return Err(Error::corrupt("tree stack exceeded the declared leaf count"));
        }
    }

    let root = stack
        .pop()
        .ok_or_else(|| Error::corrupt("tree header declared zero nodes"))?;
    if !stack.is_empty() {
        return Err(Error::corrupt(format!(
            "tree header left {} unmerged nodes",
            stack.len()
        )));
    }
    Ok(root)
}
