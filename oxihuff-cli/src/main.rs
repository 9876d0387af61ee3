//! OxiHuff CLI - static Huffman compression with a tree header.

mod commands;
mod utils;

use clap::{ArgAction, Parser, Subcommand};
use commands::{cmd_compress, cmd_decompress, cmd_info};
use oxihuff_codec::HuffConfig;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "oxihuff")]
#[command(author, version, about = "Pure Rust static Huffman compressor")]
#[command(long_about = "
OxiHuff compresses single files with a static Huffman code. The code is
stored as a tree at the start of each compressed file.

Examples:
  oxihuff compress notes.txt
  oxihuff compress notes.txt -o notes.huff
  oxihuff decompress notes.txt.hf
  oxihuff info notes.txt.hf --json
  oxihuff -vv compress notes.txt
")]
struct Cli {
    /// Log codec diagnostics to stderr (-v: bit counts, -vv: tables and trees)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compress a file
    #[command(alias = "c")]
    Compress {
        /// File to compress
        input: PathBuf,

        /// Output file (default: <input>.hf)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Show progress bar
        #[arg(short = 'P', long)]
        progress: bool,
    },

    /// Decompress a file
    #[command(alias = "x")]
    Decompress {
        /// File to decompress
        input: PathBuf,

        /// Output file (default: <input> without .hf, or <input>.out)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Show progress bar
        #[arg(short = 'P', long)]
        progress: bool,
    },

    /// Show the code table stored in a compressed file
    #[command(alias = "i")]
    Info {
        /// Compressed file to inspect
        input: PathBuf,

        /// Output as JSON (machine-readable)
        #[arg(short, long)]
        json: bool,
    },
}

fn main() {
    let cli = Cli::parse();
    let config = HuffConfig::new(utils::init_logging(cli.verbose));

    let result = match cli.command {
        Commands::Compress {
            input,
            output,
            progress,
        } => cmd_compress(&input, output.as_deref(), config, progress),
        Commands::Decompress {
            input,
            output,
            progress,
        } => cmd_decompress(&input, output.as_deref(), config, progress),
        Commands::Info { input, json } => cmd_info(&input, config, json),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
