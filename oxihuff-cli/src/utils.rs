//! Utility functions for the CLI.

use indicatif::{ProgressBar, ProgressStyle};
use log::{Level, LevelFilter, Log, Metadata, Record};
use oxihuff_codec::DebugLevel;
use std::ffi::OsString;
use std::io;
use std::path::{Path, PathBuf};

/// Extension appended to compressed files.
pub const COMPRESSED_EXTENSION: &str = "hf";

/// Create a byte progress bar with standard styling.
pub fn create_progress_bar(len: u64, enable: bool) -> ProgressBar {
    if !enable {
        return ProgressBar::hidden();
    }

    let pb = ProgressBar::new(len);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] [{bar:40.cyan/blue}] {bytes}/{total_bytes} {msg}")
            .expect("progress bar template is valid")
            .progress_chars("█▓▒░ "),
    );
    pb
}

/// Writes codec diagnostics to stderr.
struct StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            match record.level() {
                Level::Info => eprintln!("{}", record.args()),
                level => eprintln!("[{}] {}", level, record.args()),
            }
        }
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;

/// Install the stderr logger and map `-v` occurrences to a codec debug level.
pub fn init_logging(verbosity: u8) -> DebugLevel {
    let (debug, filter) = match verbosity {
        0 => (DebugLevel::Off, LevelFilter::Warn),
        1 => (DebugLevel::Low, LevelFilter::Info),
        _ => (DebugLevel::High, LevelFilter::Debug),
    };
    // Only fails if a logger is already installed
    let _ = log::set_logger(&LOGGER);
    log::set_max_level(filter);
    debug
}

/// `<input>.hf`
pub fn default_compressed_path(input: &Path) -> PathBuf {
    let mut name = OsString::from(input.as_os_str());
    name.push(".");
    name.push(COMPRESSED_EXTENSION);
    PathBuf::from(name)
}

/// `<input>` without `.hf`, or `<input>.out` if it has another extension.
pub fn default_decompressed_path(input: &Path) -> PathBuf {
    if input.extension().is_some_and(|ext| ext == COMPRESSED_EXTENSION) {
        input.with_extension("")
    } else {
        let mut name = OsString::from(input.as_os_str());
        name.push(".out");
        PathBuf::from(name)
    }
}

/// Resolve `path` to an absolute path without requiring it to exist.
///
/// A missing file is resolved through its parent directory.
fn resolve(path: &Path) -> io::Result<PathBuf> {
    match std::fs::canonicalize(path) {
        Ok(resolved) => Ok(resolved),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            let name = path
                .file_name()
                .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "no file name"))?;
            let parent = match path.parent() {
                Some(parent) if !parent.as_os_str().is_empty() => parent,
                _ => Path::new("."),
            };
            Ok(std::fs::canonicalize(parent)?.join(name))
        }
        Err(e) => Err(e),
    }
}

/// Fail if `output` names the same file as `input`.
///
/// Must run before `output` is created, since creating it truncates.
pub fn ensure_distinct(input: &Path, output: &Path) -> io::Result<()> {
    if resolve(input)? == resolve(output)? {
        return Err(io::Error::new(
            io::ErrorKind::AlreadyExists,
            format!(
                "output {} is the input file; refusing to overwrite it",
                output.display()
            ),
        ));
    }
    Ok(())
}

/// Remove an output file left behind by a failed run.
pub fn remove_partial(path: &Path) {
    if path.exists() {
        let _ = std::fs::remove_file(path);
    }
}

/// Percentage saved, or `None` for empty input.
pub fn space_savings(original: u64, compressed: u64) -> Option<f64> {
    if original == 0 {
        None
    } else {
        Some((1.0 - compressed as f64 / original as f64) * 100.0)
    }
}
