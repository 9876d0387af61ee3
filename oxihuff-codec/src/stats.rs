//! Per-pass counters.

/// Counters reported by a compress or decompress pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CodecStats {
    /// Literal symbols encoded or decoded, pseudo-EOF excluded.
    pub symbols: u64,
    /// Bits consumed from the input.
    pub bits_read: u64,
    /// Bits produced, before final-byte padding.
    pub bits_written: u64,
}

impl CodecStats {
    /// Output bits per input bit, or `None` when nothing was read.
    pub fn ratio(&self) -> Option<f64> {
        if self.bits_read == 0 {
            None
        } else {
            Some(self.bits_written as f64 / self.bits_read as f64)
        }
    }
}
