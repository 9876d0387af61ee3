//! Symbol frequency counting.

use oxihuff_core::{ALPH_SIZE, BITS_PER_WORD, BitReader, PSEUDO_EOF, Result, Symbol};
use std::fmt;
use std::io::Read;

/// Occurrence counts for every symbol of the alphabet.
///
/// The pseudo-EOF entry is always exactly 1, whatever the input held.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: Vec<u64>,
}

impl FrequencyTable {
    /// A table for empty input: only pseudo-EOF is present.
    pub fn new() -> Self {
        let mut counts = vec![0u64; ALPH_SIZE + 1];
        counts[PSEUDO_EOF as usize] = 1;
        Self { counts }
    }

    /// Count 8-bit symbols from `reader` until end of stream.
    pub fn count<R: Read>(reader: R) -> Result<Self> {
        let mut table = Self::new();
        let mut reader = BitReader::new(reader);
        while let Some(byte) = reader.read_bits(BITS_PER_WORD)? {
            table.counts[byte as usize] += 1;
        }
        Ok(table)
    }

    /// Count the bytes of an in-memory buffer.
    pub fn from_bytes(data: &[u8]) -> Self {
        let mut table = Self::new();
        for &byte in data {
            table.counts[byte as usize] += 1;
        }
        table
    }

    /// Count for `symbol`, 0 for symbols outside the alphabet.
    pub fn get(&self, symbol: Symbol) -> u64 {
        self.counts.get(symbol as usize).copied().unwrap_or(0)
    }

    /// Symbols with a nonzero count, in ascending symbol order.
    pub fn nonzero(&self) -> impl Iterator<Item = (Symbol, u64)> + '_ {
        self.counts
            .iter()
            .enumerate()
            .filter(|&(_, &count)| count > 0)
            .map(|(symbol, &count)| (symbol as Symbol, count))
    }

    /// Number of distinct symbols present, pseudo-EOF included.
    pub fn distinct(&self) -> usize {
        self.nonzero().count()
    }

    /// Number of input bytes counted.
    pub fn total_bytes(&self) -> u64 {
        self.counts[..ALPH_SIZE].iter().sum()
    }
}

impl Default for FrequencyTable {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for FrequencyTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (symbol, count) in self.nonzero() {
            if !first {
                f.write_str(" ")?;
            }
            first = false;
            write!(f, "{symbol}:{count}")?;
        }
        Ok(())
    }
}
