//! Report output module
//!
//! The CSV measurement sink and the run's size-metadata file.

pub mod csv;

pub use csv::{write_size_metadata, CsvSink, ResultSink, CSV_HEADER};
