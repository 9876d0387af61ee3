//! Huffman tree construction and code derivation.
//!
//! Nodes live in an arena and refer to their children by index. A tree is
//! built once per compression pass from a [`FrequencyTable`] with the
//! classic greedy merge, or rebuilt from a serialized header on
//! decompression.
//!
//! # Tie-break
//!
//! The merge heap is keyed by `(weight, sequence)`. Leaves get sequence
//! numbers in ascending symbol order and every merged node gets the next
//! free number, so equal weights always resolve the same way and the same
//! frequency table always yields the same tree. The first node removed
//! becomes the left child.

use crate::bitcode::BitCode;
use crate::code_table::CodeTable;
use crate::frequency::FrequencyTable;
use oxihuff_core::{ALPH_SIZE, PSEUDO_EOF, Symbol};
use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::fmt;

/// Index of a node inside its tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(usize);

/// A tree node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// A symbol and its frequency.
    Leaf {
        /// The symbol this leaf decodes to.
        symbol: Symbol,
        /// Frequency; 0 for trees read from a header.
        weight: u64,
    },
    /// Two children and the sum of their weights.
    Internal {
        /// Combined weight; 0 for trees read from a header.
        weight: u64,
        /// Child reached by a `0` bit.
        left: NodeId,
        /// Child reached by a `1` bit.
        right: NodeId,
    },
}

impl Node {
    /// Node weight.
    pub fn weight(&self) -> u64 {
        match *self {
            Node::Leaf { weight, .. } | Node::Internal { weight, .. } => weight,
        }
    }

    /// Whether this node has no children.
    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf { .. })
    }
}

/// A Huffman tree over the byte alphabet plus pseudo-EOF.
#[derive(Debug, Clone)]
pub struct HuffmanTree {
    nodes: Vec<Node>,
    root: NodeId,
}

impl HuffmanTree {
    pub(crate) fn empty() -> Self {
        Self {
            nodes: Vec::with_capacity(2 * ALPH_SIZE + 1),
            root: NodeId(0),
        }
    }

    pub(crate) fn push(&mut self, node: Node) -> NodeId {
        self.nodes.push(node);
        NodeId(self.nodes.len() - 1)
    }

    pub(crate) fn set_root(&mut self, root: NodeId) {
        self.root = root;
    }

    /// Build the tree for `freq` by repeatedly merging the two lightest nodes.
    ///
    /// Never fails: the pseudo-EOF entry guarantees at least one leaf.
    pub fn from_frequencies(freq: &FrequencyTable) -> Self {
        let mut tree = Self::empty();
        let mut heap = BinaryHeap::new();
        let mut sequence = 0usize;

        for (symbol, weight) in freq.nonzero() {
            let id = tree.push(Node::Leaf { symbol, weight });
            heap.push(Reverse((weight, sequence, id)));
            sequence += 1;
        }

        let mut root = None;
        while let Some(Reverse((weight, _, left))) = heap.pop() {
            match heap.pop() {
                Some(Reverse((other, _, right))) => {
                    let merged = weight + other;
                    let id = tree.push(Node::Internal {
                        weight: merged,
                        left,
                        right,
                    });
                    heap.push(Reverse((merged, sequence, id)));
                    sequence += 1;
                }
                None => root = Some(left),
            }
        }

        let root = root.unwrap_or_else(|| {
            tree.push(Node::Leaf {
                symbol: PSEUDO_EOF,
                weight: 1,
            })
        });
        tree.set_root(root);
        tree
    }

    /// The root node id.
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Look up a node.
    ///
    /// # Panics
    ///
    /// If `id` was not handed out by this tree.
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    /// Total number of nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Leaf symbols in left-to-right order.
    pub fn leaves(&self) -> Vec<Symbol> {
        let mut symbols = Vec::new();
        self.collect_leaves(self.root, &mut symbols);
        symbols
    }

    fn collect_leaves(&self, id: NodeId, symbols: &mut Vec<Symbol>) {
        match *self.node(id) {
            Node::Leaf { symbol, .. } => symbols.push(symbol),
            Node::Internal { left, right, .. } => {
                self.collect_leaves(left, symbols);
                self.collect_leaves(right, symbols);
            }
        }
    }

    /// Number of leaves.
    pub fn leaf_count(&self) -> usize {
        self.leaves().len()
    }

    /// Whether some leaf carries `symbol`.
    pub fn contains(&self, symbol: Symbol) -> bool {
        self.leaves().contains(&symbol)
    }

    /// Derive every leaf's code from its root-to-leaf path.
    ///
    /// A tree whose root is itself a leaf gives that leaf the code `0`;
    /// the decoder consumes one bit per symbol for such a tree.
    pub fn code_table(&self) -> CodeTable {
        let mut table = CodeTable::new();
        match *self.node(self.root) {
            Node::Leaf { symbol, .. } => table.insert(symbol, BitCode::from_bits(&[false])),
            Node::Internal { .. } => {
                let mut path = BitCode::new();
                self.collect_codes(self.root, &mut path, &mut table);
            }
        }
        table
    }

    fn collect_codes(&self, id: NodeId, path: &mut BitCode, table: &mut CodeTable) {
        match *self.node(id) {
            Node::Leaf { symbol, .. } => table.insert(symbol, path.clone()),
            Node::Internal { left, right, .. } => {
                path.push(false);
                self.collect_codes(left, path, table);
                path.pop();
                path.push(true);
                self.collect_codes(right, path, table);
                path.pop();
            }
        }
    }

    fn same_shape(&self, id: NodeId, other: &HuffmanTree, other_id: NodeId) -> bool {
        match (self.node(id), other.node(other_id)) {
            (Node::Leaf { symbol: a, .. }, Node::Leaf { symbol: b, .. }) => a == b,
            (
                Node::Internal { left, right, .. },
                Node::Internal {
                    left: other_left,
                    right: other_right,
                    ..
                },
            ) => {
                self.same_shape(*left, other, *other_left)
                    && self.same_shape(*right, other, *other_right)
            }
            _ => false,
        }
    }

    fn fmt_node(&self, f: &mut fmt::Formatter<'_>, id: NodeId, depth: usize) -> fmt::Result {
        let indent = depth * 2;
        match *self.node(id) {
            Node::Leaf { symbol, weight } if symbol == PSEUDO_EOF => {
                writeln!(f, "{:indent$}leaf EOF ({weight})", "")
            }
            Node::Leaf { symbol, weight } => {
                writeln!(f, "{:indent$}leaf {symbol} ({weight})", "")
            }
            Node::Internal {
                weight,
                left,
                right,
            } => {
                writeln!(f, "{:indent$}node ({weight})", "")?;
                self.fmt_node(f, left, depth + 1)?;
                self.fmt_node(f, right, depth + 1)
            }
        }
    }
}

/// Trees are equal when they have the same shape and leaf symbols.
/// Weights are ignored, so a tree read back from a header equals the tree
/// that wrote it.
impl PartialEq for HuffmanTree {
    fn eq(&self, other: &Self) -> bool {
        self.same_shape(self.root, other, other.root)
    }
}

impl Eq for HuffmanTree {}

impl fmt::Display for HuffmanTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_node(f, self.root, 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_simple() {
        let freq = FrequencyTable::from_bytes(b"AAAB");
        let tree = HuffmanTree::from_frequencies(&freq);

        assert_eq!(tree.leaf_count(), 3);
        assert_eq!(tree.node(tree.root()).weight(), 5);
        // B and EOF merge first (weight 1 each), then join A
        assert_eq!(tree.leaves(), vec![66, PSEUDO_EOF, 65]);
    }

    #[test]
    fn test_codes_simple() {
        let freq = FrequencyTable::from_bytes(b"AAAB");
        let codes = HuffmanTree::from_frequencies(&freq).code_table();

        assert_eq!(codes.get(65).unwrap().to_string(), "1");
        assert_eq!(codes.get(66).unwrap().to_string(), "00");
        assert_eq!(codes.get(PSEUDO_EOF).unwrap().to_string(), "01");
        assert!(codes.get(67).is_none());
        assert_eq!(codes.len(), 3);
        assert_eq!(codes.max_length(), 2);
    }

    #[test]
    fn test_single_leaf_tree() {
        let tree = HuffmanTree::from_frequencies(&FrequencyTable::new());
        assert!(tree.node(tree.root()).is_leaf());
        assert_eq!(tree.leaves(), vec![PSEUDO_EOF]);

        let codes = tree.code_table();
        assert_eq!(codes.get(PSEUDO_EOF).unwrap().to_string(), "0");
    }

    #[test]
    fn test_one_distinct_byte() {
        let tree = HuffmanTree::from_frequencies(&FrequencyTable::from_bytes(&[7u8; 50]));
        assert_eq!(tree.leaf_count(), 2);
        let codes = tree.code_table();
        assert_eq!(codes.get(7).unwrap().len(), 1);
        assert_eq!(codes.get(PSEUDO_EOF).unwrap().len(), 1);
    }

    #[test]
    fn test_no_single_child_nodes() {
        let data: Vec<u8> = (0..2000u32).map(|i| (i * i % 97) as u8).collect();
        let tree = HuffmanTree::from_frequencies(&FrequencyTable::from_bytes(&data));
        // A full binary tree has exactly leaves - 1 internal nodes
        assert_eq!(tree.node_count(), 2 * tree.leaf_count() - 1);
    }

    #[test]
    fn test_weights_sum() {
        let data = b"the quick brown fox jumps over the lazy dog";
        let freq = FrequencyTable::from_bytes(data);
        let tree = HuffmanTree::from_frequencies(&freq);
        assert_eq!(tree.node(tree.root()).weight(), data.len() as u64 + 1);
    }

    #[test]
    fn test_deterministic() {
        let freq = FrequencyTable::from_bytes(b"abracadabra alakazam");
        let a = HuffmanTree::from_frequencies(&freq);
        let b = HuffmanTree::from_frequencies(&freq);
        assert_eq!(a, b);
        assert_eq!(a.to_string(), b.to_string());
        assert_eq!(a.code_table(), b.code_table());
    }

    #[test]
    fn test_shape_equality_ignores_weights() {
        let a = HuffmanTree::from_frequencies(&FrequencyTable::from_bytes(b"AAAB"));
        let b = HuffmanTree::from_frequencies(&FrequencyTable::from_bytes(b"AAAAAAB"));
        let c = HuffmanTree::from_frequencies(&FrequencyTable::from_bytes(b"AAAC"));
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    #[should_panic]
    fn test_node_from_other_tree() {
        let big = HuffmanTree::from_frequencies(&FrequencyTable::from_bytes(b"abcdefgh"));
        let small = HuffmanTree::from_frequencies(&FrequencyTable::new());
        small.node(big.root());
    }

    #[test]
    fn test_display() {
        let tree = HuffmanTree::from_frequencies(&FrequencyTable::from_bytes(b"AAAB"));
        let dump = tree.to_string();
        assert!(dump.starts_with("node (5)\n"));
        assert!(dump.contains("    leaf EOF (1)\n"));
        assert!(dump.contains("  leaf 65 (3)\n"));
    }
}
