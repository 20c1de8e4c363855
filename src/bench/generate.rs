//! Data generation (WRITE path)
//!
//! Produces a fixed number of filler bytes onto a sink, either one byte
//! per call or one block per call. The sink may or may not be buffered;
//! this loop cannot tell and must not care.

use std::io::{self, Write};

use crate::models::Granularity;

/// Filler byte for byte-wise writes
pub const BYTE_FILLER: u8 = b'h';
/// Filler byte for full blocks
pub const BLOCK_FILLER: u8 = b'b';
/// Filler byte for the trailing partial block, so the boundary is
/// observable in the artifact
pub const PARTIAL_FILLER: u8 = b'B';

/// Write exactly `total_bytes` bytes to `sink`.
///
/// Byte-wise: `total_bytes` single-byte writes. Block-wise: whole blocks
/// of `block_size` bytes, then one partial block of `total_bytes %
/// block_size` bytes when the division is not exact. `block_size` must be
/// at least 1 for block-wise granularity.
pub fn produce_data(
    sink: &mut dyn Write,
    granularity: Granularity,
    total_bytes: u64,
    block_size: u64,
) -> io::Result<()> {
    match granularity {
        Granularity::Byte => {
            let byte = [BYTE_FILLER];
            for _ in 0..total_bytes {
                sink.write_all(&byte)?;
            }
        }
        Granularity::Block => {
            debug_assert!(block_size >= 1, "block-wise write needs a block size");
            let full_blocks = total_bytes / block_size;
            let remainder = (total_bytes % block_size) as usize;

            let block = vec![BLOCK_FILLER; block_size as usize];
            for _ in 0..full_blocks {
                sink.write_all(&block)?;
            }

            // The partial block at the end must cover exactly the
            // remainder, never a full block's worth.
            if remainder > 0 {
                let partial = vec![PARTIAL_FILLER; remainder];
                sink.write_all(&partial)?;
            }
        }
    }
    Ok(())
}
