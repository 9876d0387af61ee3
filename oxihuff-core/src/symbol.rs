//! Alphabet and format constants.
//!
//! The alphabet holds the 256 byte values plus one synthetic symbol,
//! [`PSEUDO_EOF`], which terminates every encoded payload. Symbols are
//! therefore 9 bits wide when written into a tree header.

/// A decoded unit: a byte value (0-255) or [`PSEUDO_EOF`] (256).
pub type Symbol = u16;

/// Bits per input/output word.
pub const BITS_PER_WORD: u8 = 8;

/// Bits in the magic number.
pub const BITS_PER_INT: u8 = 32;

/// Number of literal byte symbols.
pub const ALPH_SIZE: usize = 1 << BITS_PER_WORD;

/// End-of-payload marker. Always present in a tree with weight 1.
pub const PSEUDO_EOF: Symbol = ALPH_SIZE as Symbol;

/// Width of a symbol in the serialized tree header.
pub const SYMBOL_BITS: u8 = BITS_PER_WORD + 1;

/// Family prefix shared by Huffman stream magic numbers.
pub const HUFF_NUMBER: u32 = 0xface_8200;

/// Magic number of the tree-header format.
pub const HUFF_TREE: u32 = HUFF_NUMBER | 1;

/// Deepest leaf a tree over the full alphabet can have.
pub const MAX_TREE_DEPTH: usize = ALPH_SIZE;

/// Whether `symbol` belongs to the alphabet (literal or pseudo-EOF).
#[inline]
pub fn is_valid_symbol(symbol: u32) -> bool {
    symbol <= PSEUDO_EOF as u32
}
