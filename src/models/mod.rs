//! Benchmark data models
//!
//! Contains the transfer strategy description and the measurement
//! record emitted for every completed configuration.

pub mod record;

pub use record::{Buffering, Granularity, Measurement, Operation, Strategy};
