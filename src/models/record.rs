//! Measurement record data models
//!
//! A transfer strategy is the pair of two independent facets: the
//! granularity of each I/O call (single byte or whole block) and whether
//! an in-memory buffer sits between the transfer loop and the OS stream.
//! Every timed configuration produces one immutable [`Measurement`].

use std::fmt;

use crate::{DATA_FILE_EXT, DATA_FILE_PREFIX};

/// Direction of a measured transfer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// Data generation onto a sink
    Write,
    /// Data consumption from a source
    Read,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Write => write!(f, "WRITE"),
            Operation::Read => write!(f, "READ"),
        }
    }
}

/// Granularity of each I/O call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Granularity {
    /// One byte per call
    Byte,
    /// One block of bytes per call
    Block,
}

/// Whether an intermediate memory buffer wraps the OS stream
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Buffering {
    /// The bare OS-backed stream
    Raw,
    /// A coalescing in-memory buffer in front of the stream
    Buffered,
}

impl fmt::Display for Buffering {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Buffering::Raw => write!(f, "raw"),
            Buffering::Buffered => write!(f, "buffered"),
        }
    }
}

/// One of the four fixed transfer strategies, as a facet pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Strategy {
    pub granularity: Granularity,
    pub buffering: Buffering,
}

impl Strategy {
    pub const BYTE_RAW: Strategy = Strategy {
        granularity: Granularity::Byte,
        buffering: Buffering::Raw,
    };
    pub const BYTE_BUFFERED: Strategy = Strategy {
        granularity: Granularity::Byte,
        buffering: Buffering::Buffered,
    };
    pub const BLOCK_RAW: Strategy = Strategy {
        granularity: Granularity::Block,
        buffering: Buffering::Raw,
    };
    pub const BLOCK_BUFFERED: Strategy = Strategy {
        granularity: Granularity::Block,
        buffering: Buffering::Buffered,
    };

    /// All four strategies, in report order
    pub const ALL: [Strategy; 4] = [
        Strategy::BYTE_BUFFERED,
        Strategy::BLOCK_BUFFERED,
        Strategy::BYTE_RAW,
        Strategy::BLOCK_RAW,
    ];

    /// Stable identifier used in the CSV report and in artifact names
    pub const fn label(&self) -> &'static str {
        match (self.granularity, self.buffering) {
            (Granularity::Byte, Buffering::Raw) => "byte-raw",
            (Granularity::Byte, Buffering::Buffered) => "byte-buffered",
            (Granularity::Block, Buffering::Raw) => "block-raw",
            (Granularity::Block, Buffering::Buffered) => "block-buffered",
        }
    }

    /// Name of the data file a WRITE pass produces and the matching READ
    /// pass consumes. The (strategy, block size) pair is the key that
    /// correlates the two passes.
    pub fn artifact_name(&self, block_size: u64) -> String {
        format!(
            "{}-{}-{}.{}",
            DATA_FILE_PREFIX,
            self.label(),
            block_size,
            DATA_FILE_EXT
        )
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One measured configuration, built immediately after its transfer
/// completes and handed to the result sink by value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Measurement {
    /// Transfer direction
    pub operation: Operation,
    /// Strategy the transfer ran under
    pub strategy: Strategy,
    /// Block size in bytes, 0 for byte-wise runs
    pub block_size: u64,
    /// Bytes written (WRITE) or actually read (READ)
    pub bytes: u64,
    /// Wall-clock duration of the timed region in milliseconds
    pub duration_ms: u64,
}

impl Measurement {
    pub fn new(
        operation: Operation,
        strategy: Strategy,
        block_size: u64,
        bytes: u64,
        duration_ms: u64,
    ) -> Self {
        Self {
            operation,
            strategy,
            block_size,
            bytes,
            duration_ms,
        }
    }
}
