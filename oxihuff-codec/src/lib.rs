//! # OxiHuff Codec: Static Huffman Compression
//!
//! This crate compresses byte streams with a static Huffman code built from
//! the input's own symbol frequencies, and stores the code as a tree in the
//! stream header so the decoder needs nothing else.
//!
//! ## Stream Format
//!
//! All fields are bit-packed MSB-first with no alignment between them:
//!
//! 1. 32-bit magic number `0xface8201`
//! 2. The tree, as a pre-order walk: `0` for an internal node followed by
//!    its left and right subtrees, `1` for a leaf followed by its 9-bit
//!    symbol
//! 3. The code of every input byte
//! 4. The code of the pseudo-EOF symbol (256), which ends the payload
//! 5. Zero bits padding the final byte
//!
//! Because the pseudo-EOF code marks the end, no length field is stored.
//!
//! ## Example
//!
//! ```rust
//! use oxihuff_codec::{compress_bytes, decompress_bytes};
//!
//! let original = b"AAAB";
//! let compressed = compress_bytes(original).unwrap();
//! assert_eq!(&compressed[..4], &[0xFA, 0xCE, 0x82, 0x01]);
//!
//! let decompressed = decompress_bytes(&compressed).unwrap();
//! assert_eq!(decompressed, original);
//! ```
//!
//! ## Streams
//!
//! Compression reads its input twice (once to count, once to encode), so
//! the input must implement `Seek`:
//!
//! ```rust
//! use oxihuff_codec::{compress, decompress};
//! use std::io::Cursor;
//!
//! let mut input = Cursor::new(b"mississippi".to_vec());
//! let mut compressed = Vec::new();
//! compress(&mut input, &mut compressed).unwrap();
//!
//! let mut restored = Vec::new();
//! decompress(Cursor::new(&compressed), &mut restored).unwrap();
//! assert_eq!(restored, b"mississippi");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

mod bitcode;
mod code_table;
mod config;
mod decoder;
mod encoder;
mod frequency;
mod header;
mod stats;
mod tree;

pub use bitcode::BitCode;
pub use code_table::CodeTable;
pub use config::{DebugLevel, HuffConfig};
pub use decoder::HuffDecoder;
pub use encoder::HuffEncoder;
pub use frequency::FrequencyTable;
pub use stats::CodecStats;
pub use tree::{HuffmanTree, Node, NodeId};

pub use oxihuff_core::{ErrorKind, OxiHuffError, PSEUDO_EOF, Result, Symbol};

use std::io::{Cursor, Read, Seek, Write};

/// Compress `input` from its current position to its end into `output`.
///
/// `input` is rewound to its starting position between the counting and
/// encoding passes.
pub fn compress<R: Read + Seek, W: Write>(input: &mut R, output: W) -> Result<CodecStats> {
    compress_with(input, output, HuffConfig::DEFAULT)
}

/// Compress with an explicit configuration.
pub fn compress_with<R: Read + Seek, W: Write>(
    input: &mut R,
    output: W,
    config: HuffConfig,
) -> Result<CodecStats> {
    HuffEncoder::new(config).encode(input, output)
}

/// Decompress a complete stream from `input` into `output`.
///
/// Nothing is written to `output` unless the whole stream decodes.
pub fn decompress<R: Read, W: Write>(input: R, output: W) -> Result<CodecStats> {
    decompress_with(input, output, HuffConfig::DEFAULT)
}

/// Decompress with an explicit configuration.
pub fn decompress_with<R: Read, W: Write>(
    input: R,
    output: W,
    config: HuffConfig,
) -> Result<CodecStats> {
    HuffDecoder::new(config).decode(input, output)
}

/// Compress an in-memory buffer.
///
/// # Example
///
/// ```rust
/// use oxihuff_codec::compress_bytes;
///
/// let compressed = compress_bytes(&[b'x'; 100]).unwrap();
/// assert!(compressed.len() < 100);
/// ```
pub fn compress_bytes(data: &[u8]) -> Result<Vec<u8>> {
    let mut output = Vec::new();
    compress(&mut Cursor::new(data), &mut output)?;
    Ok(output)
}

/// Decompress an in-memory buffer.
pub fn decompress_bytes(data: &[u8]) -> Result<Vec<u8>> {
    let mut output = Vec::new();
    decompress(Cursor::new(data), &mut output)?;
    Ok(output)
}
