//! # OxiHuff Core
//!
//! Core components for the OxiHuff tree-header Huffman codec.
//!
//! - [`bitstream`]: MSB-first bit-level I/O over any `Read`/`Write`
//! - [`symbol`]: Alphabet constants, the pseudo-EOF symbol and the format magic
//! - [`error`]: Error types
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │ L4: CLI                                                 │
//! │     oxihuff compress / decompress / info                │
//! ├─────────────────────────────────────────────────────────┤
//! │ L2: Codec                                               │
//! │     Frequency table, Huffman tree, header, payload      │
//! ├─────────────────────────────────────────────────────────┤
//! │ L1: BitStream (this crate)                              │
//! │     BitReader/BitWriter, symbols, errors                │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```rust
//! use oxihuff_core::bitstream::{BitReader, BitWriter};
//! use std::io::Cursor;
//!
//! let mut output = Vec::new();
//! let mut writer = BitWriter::new(&mut output);
//! writer.write_bits(0b101, 3).unwrap();
//! writer.write_bits(0x1FF, 9).unwrap();
//! writer.close().unwrap();
//!
//! let mut reader = BitReader::new(Cursor::new(output));
//! assert_eq!(reader.read_bits(3).unwrap(), Some(0b101));
//! assert_eq!(reader.read_bits(9).unwrap(), Some(0x1FF));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]
#![allow(clippy::module_name_repetitions)]

pub mod bitstream;
pub mod error;
pub mod symbol;

// Re-exports for convenience
pub use bitstream::{BitReader, BitWriter};
pub use error::{ErrorKind, OxiHuffError, Result};
pub use symbol::{
    ALPH_SIZE, BITS_PER_INT, BITS_PER_WORD, HUFF_NUMBER, HUFF_TREE, MAX_TREE_DEPTH, PSEUDO_EOF,
    SYMBOL_BITS, Symbol,
};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::bitstream::{BitReader, BitWriter};
    pub use crate::error::{ErrorKind, OxiHuffError, Result};
    pub use crate::symbol::{PSEUDO_EOF, Symbol};
}
