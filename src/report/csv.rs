//! CSV result sink and size metadata
//!
//! Measurements are appended as they arrive and the sink flushes after
//! every row, so an interrupted run still leaves a readable partial
//! report. The report directory holds two artifacts: `metrics.csv` with
//! one row per measurement and `size.log` with the configured WRITE size.

use std::fs;
use std::io::Write;
use std::path::Path;

use crate::models::Measurement;
use crate::{BenchError, Result};

/// Fixed header line of the CSV report
pub const CSV_HEADER: &str = "operation,strategy,blockSize,fileSizeInBytes,durationInMs\n";

/// Receives measurement records as the sweep proceeds
pub trait ResultSink {
    fn log(&mut self, measurement: &Measurement) -> Result<()>;
}

/// CSV sink over any byte sink; writes the header once on construction
pub struct CsvSink<W: Write> {
    out: W,
}

impl<W: Write> CsvSink<W> {
    pub fn new(out: W) -> Result<Self> {
        let mut sink = Self { out };
        sink.write_flushed(CSV_HEADER)?;
        Ok(sink)
    }

    fn write_flushed(&mut self, line: &str) -> Result<()> {
        self.out
            .write_all(line.as_bytes())
            .and_then(|_| self.out.flush())
            .map_err(|e| BenchError::ReportError(format!("Failed to write CSV report: {}", e)))
    }

    /// Consume the sink, returning the underlying writer
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> ResultSink for CsvSink<W> {
    fn log(&mut self, m: &Measurement) -> Result<()> {
        let row = format!(
            "{},{},{},{},{}\n",
            m.operation, m.strategy, m.block_size, m.bytes, m.duration_ms
        );
        self.write_flushed(&row)
    }
}

/// Write the configured total WRITE byte count to the size-metadata file,
/// creating the report directory if needed. Runs once at startup.
pub fn write_size_metadata(path: &Path, bytes_to_write: u64) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            BenchError::ReportError(format!(
                "Failed to create report directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }

    fs::write(path, bytes_to_write.to_string()).map_err(|e| {
        BenchError::ReportError(format!(
            "Failed to write size metadata {}: {}",
            path.display(),
            e
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Measurement, Operation, Strategy};
    use tempfile::tempdir;

    fn sample(operation: Operation, block_size: u64) -> Measurement {
        Measurement::new(operation, Strategy::BLOCK_BUFFERED, block_size, 1000, 7)
    }

    #[test]
    fn header_is_written_exactly_once_before_rows() {
        let mut sink = CsvSink::new(Vec::new()).unwrap();
        sink.log(&sample(Operation::Write, 256)).unwrap();
        sink.log(&sample(Operation::Read, 256)).unwrap();

        let out = String::from_utf8(sink.into_inner()).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(format!("{}\n", lines[0]), CSV_HEADER);
        assert_eq!(
            out.matches("operation,strategy,blockSize").count(),
            1,
            "header must appear exactly once"
        );
    }

    #[test]
    fn rows_have_five_fields_and_a_trailing_newline() {
        let mut sink = CsvSink::new(Vec::new()).unwrap();
        sink.log(&sample(Operation::Write, 0)).unwrap();

        let out = String::from_utf8(sink.into_inner()).unwrap();
        assert!(out.ends_with('\n'));
        let row = out.lines().nth(1).unwrap();
        assert_eq!(row.split(',').count(), 5);
        assert_eq!(row, "WRITE,block-buffered,0,1000,7");
    }

    #[test]
    fn empty_report_is_just_the_header() {
        let sink = CsvSink::new(Vec::new()).unwrap();
        let out = String::from_utf8(sink.into_inner()).unwrap();
        assert_eq!(out, CSV_HEADER);
    }

    #[test]
    fn size_metadata_creates_the_report_directory() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("report").join("size.log");

        write_size_metadata(&path, 104857600).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "104857600");
    }

    #[test]
    fn size_metadata_overwrites_a_previous_run() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("size.log");

        write_size_metadata(&path, 10).unwrap();
        write_size_metadata(&path, 20).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "20");
    }
}
