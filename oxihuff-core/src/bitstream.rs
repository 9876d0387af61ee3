//! Bit-level I/O for Huffman codes and tree headers.
//!
//! This module provides `BitReader` and `BitWriter` for reading and writing
//! groups of 1 to 32 bits over any `Read`/`Write` implementation.
//!
//! # Bit Ordering
//!
//! Bits are packed MSB-first: the first bit written becomes the most
//! significant bit of the first byte, and a multi-bit value is written
//! starting from its most significant bit. A 32-bit magic number therefore
//! appears in the output as its four big-endian bytes.
//!
//! # End of Stream
//!
//! [`BitReader::read_bits`] returns `Ok(None)` when the underlying reader
//! runs out before the requested number of bits is available. Errors are
//! reserved for I/O failures and invalid widths, so codecs can decide for
//! themselves what an early end means.
//!
//! # Example
//!
//! ```
//! use oxihuff_core::bitstream::{BitReader, BitWriter};
//! use std::io::Cursor;
//!
//! let mut output = Vec::new();
//! {
//!     let mut writer = BitWriter::new(&mut output);
//!     writer.write_bits(0b101, 3).unwrap();
//!     writer.write_bits(0b11001, 5).unwrap();
//!     writer.close().unwrap();
//! }
//! assert_eq!(output, vec![0b1011_1001]);
//!
//! let mut reader = BitReader::new(Cursor::new(&output));
//! assert_eq!(reader.read_bits(3).unwrap(), Some(0b101));
//! assert_eq!(reader.read_bits(5).unwrap(), Some(0b11001));
//! assert_eq!(reader.read_bits(1).unwrap(), None);
//! ```

use crate::error::{OxiHuffError, Result};
use std::io::{self, Read, Write};

/// Largest group of bits a single call can read or write.
pub const MAX_BITS: u8 = 32;

#[inline]
fn low_mask(count: u8) -> u64 {
    (1u64 << count) - 1
}

/// A bit-level reader that wraps any `Read` implementation.
///
/// Bytes are pulled from the underlying reader one at a time, so wrap
/// unbuffered sources such as files in a `BufReader`.
#[derive(Debug)]
pub struct BitReader<R: Read> {
    /// Underlying reader.
    reader: R,
    /// Bit buffer (MSB-first, only the low `bits_in_buffer` bits are valid).
    buffer: u64,
    /// Number of valid bits in buffer.
    bits_in_buffer: u8,
    /// Total bits read (for error reporting).
    total_bits_read: u64,
}

impl<R: Read> BitReader<R> {
    /// Create a new `BitReader` wrapping the given reader.
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buffer: 0,
            bits_in_buffer: 0,
            total_bits_read: 0,
        }
    }

    /// Get a reference to the underlying reader.
    pub fn get_ref(&self) -> &R {
        &self.reader
    }

    /// Get a mutable reference to the underlying reader.
    ///
    /// Reading from it directly desynchronizes any bits still buffered.
    pub fn get_mut(&mut self) -> &mut R {
        &mut self.reader
    }

    /// Consume this `BitReader` and return the underlying reader.
    pub fn into_inner(self) -> R {
        self.reader
    }

    /// Get the total number of bits read so far.
    pub fn bits_read(&self) -> u64 {
        self.total_bits_read
    }

    /// Pull one byte from the reader. `Ok(false)` at end of stream.
    fn pull_byte(&mut self) -> io::Result<bool> {
        let mut byte = [0u8; 1];
        loop {
            match self.reader.read(&mut byte) {
                Ok(0) => return Ok(false),
                Ok(_) => {
                    self.buffer = (self.buffer << 8) | byte[0] as u64;
                    self.bits_in_buffer += 8;
                    return Ok(true);
                }
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            }
        }
    }

    /// Ensure at least `count` bits are buffered. `Ok(false)` if the stream
    /// ended first.
    #[inline]
    fn fill_buffer(&mut self, count: u8) -> Result<bool> {
        while self.bits_in_buffer < count {
            if !self.pull_byte()? {
                return Ok(false);
            }
        }
        Ok(true)
    }

    /// Read 1 to 32 bits from the stream.
    ///
    /// # Returns
    ///
    /// The bits as a u32 with the first bit read in the most significant
    /// position of the result, or `None` if fewer than `count` bits remain.
    #[inline]
    pub fn read_bits(&mut self, count: u8) -> Result<Option<u32>> {
        if count == 0 || count > MAX_BITS {
            return Err(OxiHuffError::InvalidBitWidth(count));
        }

        if !self.fill_buffer(count)? {
            return Ok(None);
        }

        let remaining = self.bits_in_buffer - count;
        let value = (self.buffer >> remaining) & low_mask(count);

        self.buffer &= low_mask(remaining);
        self.bits_in_buffer = remaining;
        self.total_bits_read += count as u64;

        Ok(Some(value as u32))
    }

    /// Read a single bit.
    #[inline]
    pub fn read_bit(&mut self) -> Result<Option<bool>> {
        Ok(self.read_bits(1)?.map(|bit| bit != 0))
    }
}

/// A bit-level writer that wraps any `Write` implementation.
///
/// `BitWriter` accumulates bits in an internal buffer and writes complete
/// bytes to the underlying writer. Call [`close`](Self::close) when done to
/// write the final partial byte; it is not written on drop.
#[derive(Debug)]
pub struct BitWriter<W: Write> {
    /// Underlying writer.
    writer: W,
    /// Bit buffer (MSB-first, fewer than 8 bits between calls).
    buffer: u64,
    /// Number of bits in buffer.
    bits_in_buffer: u8,
    /// Total bits written.
    total_bits_written: u64,
}

impl<W: Write> BitWriter<W> {
    /// Create a new `BitWriter` wrapping the given writer.
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            buffer: 0,
            bits_in_buffer: 0,
            total_bits_written: 0,
        }
    }

    /// Get a reference to the underlying writer.
    pub fn get_ref(&self) -> &W {
        &self.writer
    }

    /// Consume this `BitWriter` and return the underlying writer.
    ///
    /// This closes the bit stream first.
    pub fn into_inner(mut self) -> Result<W> {
        self.close()?;
        Ok(self.writer)
    }

    /// Get the total number of bits written so far, excluding padding.
    pub fn bits_written(&self) -> u64 {
        self.total_bits_written
    }

    /// Write complete bytes from the buffer to the writer.
    #[inline]
    fn flush_bytes(&mut self) -> Result<()> {
        let mut bytes = [0u8; 5];
        let mut n = 0;
        while self.bits_in_buffer >= 8 {
            self.bits_in_buffer -= 8;
            bytes[n] = (self.buffer >> self.bits_in_buffer) as u8;
            n += 1;
        }
        self.buffer &= low_mask(self.bits_in_buffer);
        if n > 0 {
            self.writer.write_all(&bytes[..n])?;
        }
        Ok(())
    }

    /// Write up to 32 bits to the stream.
    ///
    /// # Arguments
    ///
    /// * `value` - The bits to write; only the low `count` bits are used,
    ///   most significant first
    /// * `count` - Number of bits to write (0-32)
    #[inline]
    pub fn write_bits(&mut self, value: u32, count: u8) -> Result<()> {
        if count > MAX_BITS {
            return Err(OxiHuffError::InvalidBitWidth(count));
        }

        if count == 0 {
            return Ok(());
        }

        let value = value as u64 & low_mask(count);
        self.buffer = (self.buffer << count) | value;
        self.bits_in_buffer += count;
        self.total_bits_written += count as u64;

        self.flush_bytes()
    }

    /// Write a single bit.
    #[inline]
    pub fn write_bit(&mut self, bit: bool) -> Result<()> {
        self.write_bits(bit as u32, 1)
    }

    /// Pad the final partial byte with zero bits, write it, and flush the
    /// underlying writer.
    ///
    /// Calling `close` more than once is harmless; later calls only flush.
    pub fn close(&mut self) -> Result<()> {
        if self.bits_in_buffer > 0 {
            let padding = 8 - self.bits_in_buffer;
            self.buffer <<= padding;
            self.bits_in_buffer += padding;
            self.flush_bytes()?;
        }
        self.writer.flush()?;
        Ok(())
    }
}
