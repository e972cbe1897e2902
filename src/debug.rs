//! File-backed `log` implementation.
//!
//! Both binaries route `log::info!()` etc. to an append-only file so that
//! diagnostics never mix with the JSON or ANSI they write to stdout.
//! Each record is written as:
//!
//! ```text
//! [2026-01-31 12:00:00] [INFO ] message
//! ```
//!
//! Failing to open or write the file is silent for callers: logging must
//! never turn a pass-through into an error.

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use log::{LevelFilter, Log, Metadata, Record};
use parking_lot::Mutex;

/// Errors that can occur while installing the file logger.
#[derive(Debug, thiserror::Error)]
pub enum LogInitError {
    /// The log file or its parent directory could not be created.
    #[error("cannot open log file {path:?}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Another logger was already installed.
    #[error("a global logger is already installed")]
    AlreadySet(#[from] log::SetLoggerError),
}

/// Appends formatted records to a single file.
pub struct FileLogger {
    level: LevelFilter,
    file: Mutex<File>,
}

impl FileLogger {
    /// Open `path` for appending, creating parent directories as needed.
    pub fn open(path: &Path, level: LevelFilter) -> Result<Self, LogInitError> {
        let open_err = |source| LogInitError::Open {
            path: path.to_path_buf(),
            source,
        };

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent).map_err(open_err)?;
        }

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(open_err)?;

        Ok(Self {
            level,
            file: Mutex::new(file),
        })
    }

    pub fn level(&self) -> LevelFilter {
        self.level
    }
}

/// Render one record as a log line (without trailing newline).
pub fn format_record(timestamp: &str, level: log::Level, message: &str) -> String {
    format!("[{timestamp}] [{level:<5}] {message}")
}

fn timestamp() -> String {
    chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string()
}

impl Log for FileLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format_record(&timestamp(), record.level(), &record.args().to_string());
        let mut file = self.file.lock();
        let _ = writeln!(file, "{line}");
    }

    fn flush(&self) {
        let _ = self.file.lock().flush();
    }
}

/// Install a [`FileLogger`] writing to `path` as the global logger.
pub fn init_file_logger(path: &Path, level: LevelFilter) -> Result<(), LogInitError> {
    let logger = FileLogger::open(path, level)?;
    log::set_boxed_logger(Box::new(logger))?;
    log::set_max_level(level);
    Ok(())
}
