//! Info command implementation.

use oxihuff_codec::{HuffConfig, HuffDecoder, PSEUDO_EOF, Symbol};
use serde::Serialize;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

#[derive(Debug, Serialize)]
struct InfoOutput {
    file: String,
    size: u64,
    magic: String,
    leaves: usize,
    header_bits: usize,
    max_code_length: usize,
    codes: Vec<CodeEntry>,
}

#[derive(Debug, Serialize)]
struct CodeEntry {
    symbol: Symbol,
    label: String,
    length: usize,
    bits: String,
}

/// Human-readable name for a symbol.
fn symbol_label(symbol: Symbol) -> String {
    match symbol {
        PSEUDO_EOF => "EOF".to_string(),
        0x21..=0x7E => format!("'{}'", symbol as u8 as char),
        _ => format!("0x{:02X}", symbol),
    }
}

pub fn cmd_info(
    input: &Path,
    config: HuffConfig,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let file = File::open(input)?;
    let size = file.metadata()?.len();

    let tree = HuffDecoder::new(config).read_tree(BufReader::new(file))?;
    let codes = tree.code_table();
    let leaves = tree.leaf_count();

    let info = InfoOutput {
        file: input.display().to_string(),
        size,
        magic: format!("{:#010x}", config.magic),
        leaves,
        // One tag bit per node plus 9 symbol bits per leaf
        header_bits: tree.node_count() + leaves * 9,
        max_code_length: codes.max_length(),
        codes: codes
            .iter()
            .map(|(symbol, code)| CodeEntry {
                symbol,
                label: symbol_label(symbol),
                length: code.len(),
                bits: code.to_string(),
            })
            .collect(),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&info)?);
        return Ok(());
    }

    println!("Compressed File Information");
    println!("===========================");
    println!("File: {}", info.file);
    println!("Size: {} bytes", info.size);
    println!("Magic: {}", info.magic);
    println!("Leaves: {}", info.leaves);
    println!("Header: {} bits", info.header_bits);
    println!("Longest code: {} bits", info.max_code_length);
    println!();
    println!("{:>6} {:>6} {:>4}  Code", "Symbol", "Label", "Len");
    println!("{}", "-".repeat(40));
    for entry in &info.codes {
        println!(
            "{:>6} {:>6} {:>4}  {}",
            entry.symbol, entry.label, entry.length, entry.bits
        );
    }

    Ok(())
}
