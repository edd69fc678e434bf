//! Diagnostic logging setup
//!
//! stdout carries MCP frames, so every log line goes to stderr or to the file
//! named by `THINKTOOL_LOG_FILE`.

use is_terminal::IsTerminal;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use tracing::level_filters::LevelFilter;
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Environment variable naming an append-mode log file
pub const LOG_FILE_ENV: &str = "THINKTOOL_LOG_FILE";

/// A shared log file writer that flushes after every write.
///
/// A client may kill the server at any moment, so each record is pushed to
/// the OS before the write returns.
pub struct FileWriterGuard {
    file: Arc<Mutex<File>>,
}

impl FileWriterGuard {
    /// Creates a new `FileWriterGuard` wrapping the given file.
    pub fn new(file: Arc<Mutex<File>>) -> Self {
        Self { file }
    }
}

impl Write for FileWriterGuard {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        let mut file = self
            .file
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        let written = file.write(buf)?;
        file.flush()?;
        Ok(written)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        let mut file = self
            .file
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        file.flush()
    }
}

/// Build the filter for `level`, letting `RUST_LOG` override it when set.
pub fn build_filter(level: Level) -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(LevelFilter::from_level(level).into())
        .from_env_lossy()
}

/// The log file requested through [`LOG_FILE_ENV`], if any
pub fn log_file_from_env() -> Option<PathBuf> {
    std::env::var_os(LOG_FILE_ENV)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}

fn open_log_file(path: &Path) -> std::io::Result<File> {
    OpenOptions::new().create(true).append(true).open(path)
}

/// Install the global subscriber.
///
/// Falls back to stderr when the log file cannot be opened.
pub fn init_logging(level: Level, log_file: Option<PathBuf>) {
    let file = match log_file {
        Some(path) => match open_log_file(&path) {
            Ok(file) => Some(file),
            Err(e) => {
                eprintln!(
                    "Failed to open log file {}, using stderr: {e}",
                    path.display()
                );
                None
            }
        },
        None => None,
    };

    match file {
        Some(file) => {
            let shared_file = Arc::new(Mutex::new(file));
            tracing_subscriber::fmt()
                .with_env_filter(build_filter(level))
                .with_writer(move || FileWriterGuard::new(shared_file.clone()))
                .with_ansi(false)
                .init();
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(build_filter(level))
                .with_writer(std::io::stderr)
                .with_ansi(std::io::stderr().is_terminal())
                .init();
        }
    }
}
