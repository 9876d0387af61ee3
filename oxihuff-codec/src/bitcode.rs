//! Variable-length codes as explicit bit sequences.

use oxihuff_core::{BitWriter, Result};
use std::fmt;
use std::io::Write;

/// One symbol's code: `false` means "go left", `true` means "go right".
///
/// Kept as a bit sequence rather than a number because leading zeros are
/// significant.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct BitCode {
    bits: Vec<bool>,
}

impl BitCode {
    /// An empty code.
    pub fn new() -> Self {
        Self::default()
    }

    /// A code from explicit bits.
    pub fn from_bits(bits: &[bool]) -> Self {
        Self {
            bits: bits.to_vec(),
        }
    }

    /// Append one bit.
    pub fn push(&mut self, bit: bool) {
        self.bits.push(bit);
    }

    /// Remove the last bit.
    pub fn pop(&mut self) -> Option<bool> {
        self.bits.pop()
    }

    /// Code length in bits.
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    /// Whether the code has no bits.
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// The bits in order.
    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        self.bits.iter().copied()
    }

    /// Whether `self` is a prefix of `other` (a code is a prefix of itself).
    pub fn is_prefix_of(&self, other: &BitCode) -> bool {
        other.bits.starts_with(&self.bits)
    }

    /// Write the code, first bit first.
    pub fn write_to<W: Write>(&self, writer: &mut BitWriter<W>) -> Result<()> {
        for chunk in self.bits.chunks(32) {
            let value = chunk
                .iter()
                .fold(0u32, |acc, &bit| (acc << 1) | bit as u32);
            writer.write_bits(value, chunk.len() as u8)?;
        }
        Ok(())
    }
}

impl fmt::Display for BitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for bit in self.iter() {
            f.write_str(if bit { "1" } else { "0" })?;
        }
        Ok(())
    }
}
