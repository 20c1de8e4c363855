//! Utility modules
//!
//! Timing and human-readable formatting helpers.

pub mod timer;
pub mod units;

pub use timer::Timer;
