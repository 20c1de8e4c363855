//! Data consumption (READ path)
//!
//! Drains a source to end-of-stream, counting the bytes that actually
//! arrive. Block-wise reads near the end of the stream legitimately come
//! back short, so the loop always trusts the per-call count.

use std::io::{self, ErrorKind, Read};

use crate::models::Granularity;

/// Read `source` to exhaustion and return the total number of bytes seen.
///
/// Byte-wise: one-byte reads until end of stream. Block-wise: reads of up
/// to `block_size` bytes into a reusable buffer, accumulating whatever
/// each call returns. `block_size` must be at least 1 for block-wise
/// granularity.
pub fn consume_data(
    source: &mut dyn Read,
    granularity: Granularity,
    block_size: u64,
) -> io::Result<u64> {
    let mut total_bytes = 0u64;

    match granularity {
        Granularity::Byte => {
            let mut byte = [0u8; 1];
            loop {
                match source.read(&mut byte) {
                    Ok(0) => break,
                    Ok(_) => total_bytes += 1,
                    Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                    Err(e) => return Err(e),
                }
            }
        }
        Granularity::Block => {
            debug_assert!(block_size >= 1, "block-wise read needs a block size");
            let mut block = vec![0u8; block_size as usize];
            loop {
                match source.read(&mut block) {
                    Ok(0) => break,
                    Ok(bytes_read) => total_bytes += bytes_read as u64,
                    Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                    Err(e) => return Err(e),
                }
            }
        }
    }

    Ok(total_bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    /// Source that returns at most `chunk` bytes per call, forcing short
    /// reads well before end of stream
    struct ShortReader {
        remaining: usize,
        chunk: usize,
    }

    impl Read for ShortReader {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            if self.remaining == 0 {
                return Ok(0);
            }
            let n = self.remaining.min(self.chunk).min(buf.len());
            buf[..n].fill(b'x');
            self.remaining -= n;
            Ok(n)
        }
    }

    #[test]
    fn byte_wise_counts_every_byte() {
        let mut source = Cursor::new(vec![b'h'; 300]);
        let total = consume_data(&mut source, Granularity::Byte, 0).unwrap();
        assert_eq!(total, 300);
    }

    #[test]
    fn block_wise_counts_across_blocks() {
        let mut source = Cursor::new(vec![b'b'; 1000]);
        let total = consume_data(&mut source, Granularity::Block, 256).unwrap();
        assert_eq!(total, 1000);
    }

    #[test]
    fn block_wise_honors_short_reads() {
        // 1000 bytes delivered 7 at a time into a 256-byte block buffer
        let mut source = ShortReader {
            remaining: 1000,
            chunk: 7,
        };
        let total = consume_data(&mut source, Granularity::Block, 256).unwrap();
        assert_eq!(total, 1000);
    }

    #[test]
    fn empty_source_counts_zero() {
        let mut source = Cursor::new(Vec::new());
        assert_eq!(consume_data(&mut source, Granularity::Byte, 0).unwrap(), 0);
        let mut source = Cursor::new(Vec::new());
        assert_eq!(
            consume_data(&mut source, Granularity::Block, 64).unwrap(),
            0
        );
    }

    #[test]
    fn interrupted_reads_are_retried() {
        struct Flaky {
            interrupted: bool,
            inner: Cursor<Vec<u8>>,
        }
        impl Read for Flaky {
            fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
                if !self.interrupted {
                    self.interrupted = true;
                    return Err(io::Error::new(ErrorKind::Interrupted, "EINTR"));
                }
                self.inner.read(buf)
            }
        }

        let mut source = Flaky {
            interrupted: false,
            inner: Cursor::new(vec![0u8; 42]),
        };
        let total = consume_data(&mut source, Granularity::Block, 16).unwrap();
        assert_eq!(total, 42);
    }

    #[test]
    fn source_failure_surfaces() {
        struct Broken;
        impl Read for Broken {
            fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
                Err(io::Error::new(ErrorKind::Other, "bad sector"))
            }
        }

        let err = consume_data(&mut Broken, Granularity::Byte, 0).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Other);
    }
}
