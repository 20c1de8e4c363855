//! Benchmark engine module
//!
//! Contains the transfer loops, the block-size sweep construction, and
//! the driver that orchestrates a full run.

pub mod consume;
pub mod driver;
pub mod generate;
pub mod sweep;

// Re-export commonly used types
pub use consume::consume_data;
pub use driver::{ProgressUpdate, SweepConfig, SweepRunner};
pub use generate::produce_data;
pub use sweep::block_size_sweep;
