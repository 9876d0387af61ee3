//! Decompress command implementation.

use crate::utils::{
    create_progress_bar, default_decompressed_path, ensure_distinct, remove_partial,
};
use oxihuff_codec::{HuffConfig, decompress_with};
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

pub fn cmd_decompress(
    input: &Path,
    output: Option<&Path>,
    config: HuffConfig,
    progress: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let output = output.map_or_else(|| default_decompressed_path(input), Path::to_path_buf);
    ensure_distinct(input, &output)?;

    let file = File::open(input)?;
    let compressed_size = file.metadata()?.len();

    let pb = create_progress_bar(compressed_size, progress);
    let reader = pb.wrap_read(BufReader::new(file));
    let writer = BufWriter::new(File::create(&output)?);

    let stats = match decompress_with(reader, writer, config) {
        Ok(stats) => stats,
        Err(e) => {
            pb.abandon();
            remove_partial(&output);
            return Err(e.into());
        }
    };
    pb.finish_and_clear();

    println!(
        "{} -> {} ({} -> {} bytes)",
        input.display(),
        output.display(),
        compressed_size,
        stats.symbols
    );

    Ok(())
}
