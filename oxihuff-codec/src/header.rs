//! Tree header serialization.
//!
//! The tree is written as a pre-order walk, one tag bit per node:
//!
//! ```text
//! internal node:  0  <left subtree> <right subtree>
//! leaf:           1  <symbol, 9 bits>
//! ```
//!
//! Nine bits per symbol leave room for the pseudo-EOF value 256. The header
//! carries no weights and is not byte aligned.

use crate::tree::{HuffmanTree, Node, NodeId};
use oxihuff_core::symbol::is_valid_symbol;
use oxihuff_core::{
    ALPH_SIZE, BitReader, BitWriter, MAX_TREE_DEPTH, OxiHuffError, Result, SYMBOL_BITS, Symbol,
};
use std::io::{Read, Write};

impl HuffmanTree {
    /// Write the tree shape and leaf symbols.
    pub fn write_header<W: Write>(&self, writer: &mut BitWriter<W>) -> Result<()> {
        self.write_node(self.root(), writer)
    }

    fn write_node<W: Write>(&self, id: NodeId, writer: &mut BitWriter<W>) -> Result<()> {
        match *self.node(id) {
            Node::Leaf { symbol, .. } => {
                writer.write_bit(true)?;
                writer.write_bits(symbol as u32, SYMBOL_BITS)
            }
            Node::Internal { left, right, .. } => {
                writer.write_bit(false)?;
                self.write_node(left, writer)?;
                self.write_node(right, writer)
            }
        }
    }

    /// Rebuild a tree from its header. All weights are 0.
    ///
    /// # Errors
    ///
    /// [`OxiHuffError::MalformedTree`] if the stream ends inside the header,
    /// a leaf symbol is outside the alphabet or repeats, or the nesting is
    /// deeper than any real tree can be.
    pub fn read_header<R: Read>(reader: &mut BitReader<R>) -> Result<Self> {
        let mut builder = HeaderReader {
            tree: HuffmanTree::empty(),
            seen: [false; ALPH_SIZE + 1],
        };
        let root = builder.read_node(reader, 0)?;
        builder.tree.set_root(root);
        Ok(builder.tree)
    }
}

struct HeaderReader {
    tree: HuffmanTree,
    seen: [bool; ALPH_SIZE + 1],
}

impl HeaderReader {
    fn read_node<R: Read>(&mut self, reader: &mut BitReader<R>, depth: usize) -> Result<NodeId> {
        if depth > MAX_TREE_DEPTH {
            return Err(OxiHuffError::malformed_tree(
                reader.bits_read(),
                format!("tree nested deeper than {MAX_TREE_DEPTH} levels"),
            ));
        }

        let Some(is_leaf) = reader.read_bit()? else {
            return Err(OxiHuffError::malformed_tree(
                reader.bits_read(),
                "stream ended while reading node tag",
            ));
        };

        if !is_leaf {
            let left = self.read_node(reader, depth + 1)?;
            let right = self.read_node(reader, depth + 1)?;
            return Ok(self.tree.push(Node::Internal {
                weight: 0,
                left,
                right,
            }));
        }

        let Some(value) = reader.read_bits(SYMBOL_BITS)? else {
            return Err(OxiHuffError::malformed_tree(
                reader.bits_read(),
                "stream ended while reading leaf symbol",
            ));
        };
        if !is_valid_symbol(value) {
            return Err(OxiHuffError::malformed_tree(
                reader.bits_read(),
                format!("leaf symbol {value} outside alphabet"),
            ));
        }
        let symbol = value as Symbol;
        if std::mem::replace(&mut self.seen[symbol as usize], true) {
            return Err(OxiHuffError::malformed_tree(
                reader.bits_read(),
                format!("leaf symbol {symbol} appears twice"),
            ));
        }

        Ok(self.tree.push(Node::Leaf { symbol, weight: 0 }))
    }
}
