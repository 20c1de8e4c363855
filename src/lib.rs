//! bufbench - buffered I/O benchmark
//!
//! Measures sequential byte-stream throughput under four transfer
//! strategies (byte-wise vs. block-wise granularity, raw vs. buffered
//! streams) across a sweep of block sizes, and records one CSV row per
//! measured configuration.

use std::fmt;

// Public re-exports
pub mod bench;
pub mod io;
pub mod models;
pub mod report;
pub mod util;

// Common error types
#[derive(Debug)]
pub enum BenchError {
    /// I/O operation failed
    IoError(std::io::Error),
    /// Configuration validation error
    ConfigError(String),
    /// Benchmark execution error
    BenchmarkError(String),
    /// Report sink or metadata output error
    ReportError(String),
}

impl fmt::Display for BenchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BenchError::IoError(err) => write!(f, "I/O error: {}", err),
            BenchError::ConfigError(msg) => write!(f, "Configuration error: {}", msg),
            BenchError::BenchmarkError(msg) => write!(f, "Benchmark error: {}", msg),
            BenchError::ReportError(msg) => write!(f, "Report error: {}", msg),
        }
    }
}

impl std::error::Error for BenchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            BenchError::IoError(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for BenchError {
    fn from(err: std::io::Error) -> Self {
        BenchError::IoError(err)
    }
}

/// Result type alias for bufbench operations
pub type Result<T> = std::result::Result<T, BenchError>;

// Common types and constants
pub const APP_NAME: &str = "bufbench";
/// Prefix of the per-configuration data files
pub const DATA_FILE_PREFIX: &str = "test-data";
/// Extension of the per-configuration data files
pub const DATA_FILE_EXT: &str = "bin";
/// Name of the CSV report inside the report directory
pub const METRICS_FILE: &str = "metrics.csv";
/// Name of the size-metadata file inside the report directory
pub const SIZE_FILE: &str = "size.log";
/// Default number of bytes each WRITE configuration produces (100 MiB)
pub const DEFAULT_BYTES_TO_WRITE: u64 = 1024 * 1024 * 100;
