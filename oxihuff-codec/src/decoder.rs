//! Huffman decoder (decompression).
//!
//! Decoding walks the tree one payload bit at a time: `0` moves to the left
//! child, `1` to the right. Reaching a leaf emits its byte and restarts at
//! the root; reaching the pseudo-EOF leaf ends the payload. Any padding
//! after the pseudo-EOF code is ignored.

use crate::config::HuffConfig;
use crate::stats::CodecStats;
use crate::tree::{HuffmanTree, Node};
use oxihuff_core::{BITS_PER_INT, BITS_PER_WORD, BitReader, OxiHuffError, PSEUDO_EOF, Result};
use std::io::{Read, Write};

/// Static Huffman decoder.
#[derive(Debug, Clone, Copy, Default)]
pub struct HuffDecoder {
    config: HuffConfig,
}

impl HuffDecoder {
    /// Create a new decoder with the given configuration.
    pub fn new(config: HuffConfig) -> Self {
        Self { config }
    }

    /// The configuration in use.
    pub fn config(&self) -> &HuffConfig {
        &self.config
    }

    /// Decompress a complete stream from `input` into `output`.
    ///
    /// Decoded bytes are buffered and only written to `output` once the
    /// pseudo-EOF code has been reached, so on error nothing is written.
    /// Memory use therefore grows with the decompressed size, up to about
    /// eight times the compressed payload.
    ///
    /// # Errors
    ///
    /// - [`OxiHuffError::InvalidMagic`] if the stream does not start with
    ///   the configured magic number
    /// - [`OxiHuffError::MalformedTree`] if the tree header is truncated or
    ///   describes an impossible tree
    /// - [`OxiHuffError::TruncatedStream`] if the payload ends before the
    ///   pseudo-EOF code
    pub fn decode<R: Read, W: Write>(&self, input: R, mut output: W) -> Result<CodecStats> {
        let mut reader = BitReader::new(input);
        let tree = self.read_tree_from(&mut reader)?;
        let header_bits = reader.bits_read();

        let mut decoded = Vec::new();
        Self::read_payload(&tree, &mut reader, &mut decoded)?;

        output.write_all(&decoded)?;
        output.flush()?;

        let stats = CodecStats {
            symbols: decoded.len() as u64,
            bits_read: reader.bits_read(),
            bits_written: decoded.len() as u64 * BITS_PER_WORD as u64,
        };

        if self.config.logs_summary() {
            log::info!(
                "decompressed {} bytes: {} header bits, {} bits read",
                stats.symbols,
                header_bits,
                stats.bits_read
            );
        }

        Ok(stats)
    }

    /// Validate the magic number and rebuild the tree, without decoding the payload.
    pub fn read_tree<R: Read>(&self, input: R) -> Result<HuffmanTree> {
        self.read_tree_from(&mut BitReader::new(input))
    }

    fn read_tree_from<R: Read>(&self, reader: &mut BitReader<R>) -> Result<HuffmanTree> {
        match reader.read_bits(BITS_PER_INT)? {
            Some(magic) if magic == self.config.magic => {}
            found => return Err(OxiHuffError::invalid_magic(self.config.magic, found)),
        }

        let tree = HuffmanTree::read_header(reader)?;
        if self.config.logs_detail() {
            log::debug!("huffman tree:\n{tree}");
        }
        Ok(tree)
    }

    fn read_payload<R: Read>(
        tree: &HuffmanTree,
        reader: &mut BitReader<R>,
        decoded: &mut Vec<u8>,
    ) -> Result<()> {
        let root = tree.root();
        let mut current = root;

        loop {
            let Some(bit) = reader.read_bit()? else {
                return Err(OxiHuffError::truncated(reader.bits_read()));
            };

            // A leaf root is reached again by every bit.
            if let Node::Internal { left, right, .. } = *tree.node(current) {
                current = if bit { right } else { left };
            }

            if let Node::Leaf { symbol, .. } = *tree.node(current) {
                if symbol == PSEUDO_EOF {
                    return Ok(());
                }
                decoded.push(symbol as u8);
                current = root;
            }
        }
    }
}
