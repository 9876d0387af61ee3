//! Error types for OxiHuff operations.
//!
//! Every failure a compress or decompress pass can hit maps to one
//! [`OxiHuffError`] variant. [`ErrorKind`] groups them by where in the
//! stream the failure happened, so callers can tell a bad magic number from
//! a broken tree header or a truncated payload without matching every
//! variant.

use crate::symbol::Symbol;
use std::io;
use thiserror::Error;

/// The main error type for OxiHuff operations.
#[derive(Debug, Error)]
pub enum OxiHuffError {
    /// I/O error from underlying reader/writer.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The stream does not start with the expected magic number.
    #[error(
        "Unrecognized format: expected magic {expected:#010x}, found {}",
        describe_magic(.found)
    )]
    InvalidMagic {
        /// Magic number the decoder was configured for.
        expected: u32,
        /// First 32 bits of the stream, `None` if it was shorter than that.
        found: Option<u32>,
    },

    /// The serialized tree header could not be rebuilt into a tree.
    #[error("Malformed tree header at bit position {bit_position}: {message}")]
    MalformedTree {
        /// Bit position where the problem was detected.
        bit_position: u64,
        /// Description of the problem.
        message: String,
    },

    /// The payload ended before the pseudo-EOF code was decoded.
    #[error("Truncated payload: stream ended at bit position {bit_position} before end-of-data code")]
    TruncatedStream {
        /// Bit position where the stream ran out.
        bit_position: u64,
    },

    /// The source produced a symbol on the second pass that the first pass never saw.
    #[error("Source changed between passes: symbol {symbol} has no code")]
    SourceChanged {
        /// The symbol without a code.
        symbol: Symbol,
    },

    /// Bit width outside the range supported by the bit reader/writer.
    #[error("Invalid bit width: {0} (must be 1-32)")]
    InvalidBitWidth(u8),
}

/// Result type alias for OxiHuff operations.
pub type Result<T> = std::result::Result<T, OxiHuffError>;

/// Broad classification of an [`OxiHuffError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Bad or missing magic number.
    Header,
    /// Tree header ended early or described an impossible tree.
    Structural,
    /// Payload ended before the end-of-data code.
    Stream,
    /// Underlying I/O failed or the source is not stable across passes.
    Io,
    /// The caller passed an invalid argument.
    InvalidArgument,
}

fn describe_magic(found: &Option<u32>) -> String {
    match found {
        Some(value) => format!("{value:#010x}"),
        None => "end of stream".to_string(),
    }
}

impl OxiHuffError {
    /// Create an invalid magic error.
    pub fn invalid_magic(expected: u32, found: Option<u32>) -> Self {
        Self::InvalidMagic { expected, found }
    }

    /// Create a malformed tree error.
    pub fn malformed_tree(bit_position: u64, message: impl Into<String>) -> Self {
        Self::MalformedTree {
            bit_position,
            message: message.into(),
        }
    }

    /// Create a truncated payload error.
    pub fn truncated(bit_position: u64) -> Self {
        Self::TruncatedStream { bit_position }
    }

    /// Create a source changed error.
    pub fn source_changed(symbol: Symbol) -> Self {
        Self::SourceChanged { symbol }
    }

    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidMagic { .. } => ErrorKind::Header,
            Self::MalformedTree { .. } => ErrorKind::Structural,
            Self::TruncatedStream { .. } => ErrorKind::Stream,
            Self::Io(_) | Self::SourceChanged { .. } => ErrorKind::Io,
            Self::InvalidBitWidth(_) => ErrorKind::InvalidArgument,
        }
    }
}
