//! Logger utility for application-wide logging
//!
//! This module provides a custom logger implementation that works alongside
//! the standard log crate, but adds file output capabilities. When no log
//! file is wanted the binary falls back to `env_logger` instead.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;
use std::sync::Mutex;
use log::{Log, Record, Metadata, LevelFilter};

/// Custom logger implementation
pub struct Logger {
    /// File handle for log output, `None` for console only
    file: Mutex<Option<File>>,
    /// Most verbose level that is recorded
    level: LevelFilter,
}

impl Logger {
    /// Creates a new logger writing to a file
    ///
    /// # Arguments
    ///
    /// * `log_file` - Path to the log file
    ///
    /// # Returns
    ///
    /// A new Logger instance or an error if the file cannot be created
    pub fn new<P: AsRef<Path>>(log_file: P) -> io::Result<Self> {
        let file = File::create(log_file.as_ref())?;
        Ok(Logger {
            file: Mutex::new(Some(file)),
            level: LevelFilter::Debug,
        })
    }

    /// Creates a logger without a backing file
    ///
    /// Messages passed to [`Logger::log`] are dropped; records received
    /// through the `log` facade are still echoed to the console.
    pub fn console() -> Self {
        Logger {
            file: Mutex::new(None),
            level: LevelFilter::Info,
        }
    }

    /// Set the most verbose level that is recorded
    pub fn with_level(mut self, level: LevelFilter) -> Self {
        self.level = level;
        self
    }

    /// Whether this logger writes to a file
    #[cfg(test)]
    pub(crate) fn has_file(&self) -> bool {
        self.file.lock().map(|guard| guard.is_some()).unwrap_or(false)
    }

    /// Logs a message to the log file
    ///
    /// # Arguments
    ///
    /// * `message` - The message to log
    pub fn log(&self, message: &str) -> io::Result<()> {
        let mut guard = self.file.lock()
            .map_err(|_| io::Error::new(io::ErrorKind::Other, "log file lock poisoned"))?;
        if let Some(file) = guard.as_mut() {
            writeln!(file, "{}", message)?;
            file.flush()?;
        }
        Ok(())
    }

    /// Static method to initialize the global logger
    ///
    /// The logger is installed for the `log` facade and also returned, so
    /// commands can record summaries into the same file.
    ///
    /// # Arguments
    ///
    /// * `log_file` - Path to the log file
    /// * `level` - Most verbose level to record
    pub fn init_global_logger<P: AsRef<Path>>(log_file: P, level: LevelFilter) -> io::Result<&'static Logger> {
        let global_logger: &'static Logger = Box::leak(Box::new(Logger::new(log_file)?.with_level(level)));

        // Only called once at startup
        if log::set_logger(global_logger).is_err() {
            eprintln!("Warning: Global logger was already initialized");
        }

        log::set_max_level(level);
        Ok(global_logger)
    }
}

// Implement the Log trait to make our Logger work with the log crate
impl Log for Logger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let message = format!("[{}] {}", record.level(), record.args());
            let _ = Logger::log(self, &message);

            // Also print to console
            println!("{}", message);
        }
    }

    fn flush(&self) {
        // Already flushing in the log method
    }
}
