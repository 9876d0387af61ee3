//! Compress command implementation.

use crate::utils::{
    create_progress_bar, default_compressed_path, ensure_distinct, remove_partial, space_savings,
};
use oxihuff_codec::{HuffConfig, compress_with};
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

pub fn cmd_compress(
    input: &Path,
    output: Option<&Path>,
    config: HuffConfig,
    progress: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let output = output.map_or_else(|| default_compressed_path(input), Path::to_path_buf);
    ensure_distinct(input, &output)?;

    let file = File::open(input)?;
    let original_size = file.metadata()?.len();

    // Both passes report against the same length; the bar restarts on rewind
    let pb = create_progress_bar(original_size, progress);
    let mut reader = pb.wrap_read(BufReader::new(file));
    let writer = BufWriter::new(File::create(&output)?);

    let stats = match compress_with(&mut reader, writer, config) {
        Ok(stats) => stats,
        Err(e) => {
            pb.abandon();
            remove_partial(&output);
            return Err(e.into());
        }
    };
    pb.finish_and_clear();

    let compressed_size = std::fs::metadata(&output)?.len();
    println!(
        "{} -> {} ({} -> {} bytes, {} header+payload bits)",
        input.display(),
        output.display(),
        original_size,
        compressed_size,
        stats.bits_written
    );
    if let Some(savings) = space_savings(original_size, compressed_size) {
        println!("Space savings: {:.1}%", savings);
    }

    Ok(())
}
