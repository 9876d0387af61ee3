//! Huffman encoder (compression).

use crate::code_table::CodeTable;
use crate::config::HuffConfig;
use crate::frequency::FrequencyTable;
use crate::stats::CodecStats;
use crate::tree::HuffmanTree;
use oxihuff_core::{
    BITS_PER_INT, BITS_PER_WORD, BitReader, BitWriter, OxiHuffError, PSEUDO_EOF, Result, Symbol,
};
use std::io::{Read, Seek, SeekFrom, Write};

/// Static Huffman encoder.
#[derive(Debug, Clone, Copy, Default)]
pub struct HuffEncoder {
    config: HuffConfig,
}

impl HuffEncoder {
    /// Create a new encoder with the given configuration.
    pub fn new(config: HuffConfig) -> Self {
        Self { config }
    }

    /// The configuration in use.
    pub fn config(&self) -> &HuffConfig {
        &self.config
    }

    /// Compress everything from the current position of `input` to its end.
    ///
    /// # Algorithm
    ///
    /// 1. Count symbol frequencies (first pass over `input`)
    /// 2. Build the Huffman tree and derive the code table
    /// 3. Write the magic number and the tree header
    /// 4. Seek `input` back to where it started
    /// 5. Write each symbol's code (second pass), then the pseudo-EOF code
    /// 6. Pad the last byte and flush `output`
    ///
    /// # Errors
    ///
    /// I/O errors from either stream, and [`OxiHuffError::SourceChanged`]
    /// if the second pass yields a byte the first pass never saw.
    pub fn encode<R: Read + Seek, W: Write>(&self, input: &mut R, output: W) -> Result<CodecStats> {
        let start = input.stream_position()?;

        let freq = FrequencyTable::count(&mut *input)?;
        if self.config.logs_detail() {
            log::debug!("frequency table: {freq}");
        }

        let tree = HuffmanTree::from_frequencies(&freq);
        if self.config.logs_detail() {
            log::debug!("huffman tree:\n{tree}");
        }

        let codes = tree.code_table();
        if self.config.logs_detail() {
            for (symbol, code) in codes.iter() {
                log::debug!("code {symbol:>3}: {code}");
            }
        }

        let mut writer = BitWriter::new(output);
        writer.write_bits(self.config.magic, BITS_PER_INT)?;
        tree.write_header(&mut writer)?;
        let header_bits = writer.bits_written();

        input.seek(SeekFrom::Start(start))?;
        let mut reader = BitReader::new(&mut *input);
        let symbols = Self::write_payload(&codes, &mut reader, &mut writer)?;

        let stats = CodecStats {
            symbols,
            bits_read: reader.bits_read(),
            bits_written: writer.bits_written(),
        };
        writer.close()?;

        if self.config.logs_summary() {
            log::info!(
                "compressed {} bytes: {} header bits, {} bits total",
                stats.symbols,
                header_bits,
                stats.bits_written
            );
        }

        Ok(stats)
    }

    fn write_payload<R: Read, W: Write>(
        codes: &CodeTable,
        reader: &mut BitReader<R>,
        writer: &mut BitWriter<W>,
    ) -> Result<u64> {
        let mut symbols = 0u64;
        while let Some(byte) = reader.read_bits(BITS_PER_WORD)? {
            let symbol = byte as Symbol;
            let code = codes
                .get(symbol)
                .ok_or_else(|| OxiHuffError::source_changed(symbol))?;
            code.write_to(writer)?;
            symbols += 1;
        }

        let eof = codes
            .get(PSEUDO_EOF)
            .ok_or_else(|| OxiHuffError::source_changed(PSEUDO_EOF))?;
        eof.write_to(writer)?;

        Ok(symbols)
    }
}
