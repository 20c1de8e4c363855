//! I/O stream construction
//!
//! Opens the per-configuration byte sinks and sources and applies the
//! buffering decorator the strategy asks for.

pub mod stream;

pub use stream::{FsStreamFactory, StreamFactory};
