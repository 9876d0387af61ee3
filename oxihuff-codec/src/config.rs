//! Codec configuration.

use oxihuff_core::HUFF_TREE;

/// How much the codec reports through the `log` facade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Hash)]
pub enum DebugLevel {
    /// Nothing is logged.
    #[default]
    Off = 0,
    /// Bit counts after each pass, at `info` level.
    Low = 1,
    /// Also the frequency table, tree and code table, at `debug` level.
    High = 4,
}

impl DebugLevel {
    /// Map a numeric level to the nearest defined level at or below it.
    pub fn from_level(level: u8) -> Self {
        match level {
            0 => Self::Off,
            1..=3 => Self::Low,
            _ => Self::High,
        }
    }
}

/// Huffman codec configuration parameters.
///
/// Passed by value into [`HuffEncoder`](crate::HuffEncoder) and
/// [`HuffDecoder`](crate::HuffDecoder); nothing is read from global state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HuffConfig {
    /// Magic number written before the tree header and checked on decode.
    pub magic: u32,
    /// Diagnostic output level.
    pub debug: DebugLevel,
}

impl HuffConfig {
    /// Standard tree-header format, no diagnostics.
    pub const DEFAULT: Self = Self {
        magic: HUFF_TREE,
        debug: DebugLevel::Off,
    };

    /// Create a configuration for the standard format with the given debug level.
    pub fn new(debug: DebugLevel) -> Self {
        Self {
            debug,
            ..Self::DEFAULT
        }
    }

    /// Whether pass summaries should be logged.
    pub(crate) fn logs_summary(&self) -> bool {
        self.debug >= DebugLevel::Low
    }

    /// Whether tables and trees should be logged.
    pub(crate) fn logs_detail(&self) -> bool {
        self.debug >= DebugLevel::High
    }
}

impl Default for HuffConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}
