//! Stream factory and buffering decorator
//!
//! The transfer loops only ever see the plain [`Write`]/[`Read`] contracts;
//! whether an in-memory buffer coalesces the underlying calls is decided
//! here, once, when the resource is opened. The factory is a trait so tests
//! can inject failing or instrumented streams.

use std::fs::File;
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::Path;

use crate::models::Buffering;

/// Opens byte sinks and sources for one benchmark configuration
pub trait StreamFactory {
    /// Open (create or truncate) a byte sink at `path`, wrapped with an
    /// in-memory buffer when the strategy's buffering facet asks for one.
    fn open_sink(&self, path: &Path, buffering: Buffering) -> io::Result<Box<dyn Write>>;

    /// Open a byte source at `path`, wrapped the same way.
    fn open_source(&self, path: &Path, buffering: Buffering) -> io::Result<Box<dyn Read>>;
}

/// Plain filesystem-backed stream factory
#[derive(Debug, Clone, Default)]
pub struct FsStreamFactory;

impl FsStreamFactory {
    pub fn new() -> Self {
        Self
    }
}

impl StreamFactory for FsStreamFactory {
    fn open_sink(&self, path: &Path, buffering: Buffering) -> io::Result<Box<dyn Write>> {
        let file = File::create(path)?;
        Ok(match buffering {
            Buffering::Buffered => Box::new(BufWriter::new(file)),
            Buffering::Raw => Box::new(file),
        })
    }

    fn open_source(&self, path: &Path, buffering: Buffering) -> io::Result<Box<dyn Read>> {
        let file = File::open(path)?;
        Ok(match buffering {
            Buffering::Buffered => Box::new(BufReader::new(file)),
            Buffering::Raw => Box::new(file),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn raw_sink_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("raw.bin");
        let factory = FsStreamFactory::new();

        let mut sink = factory.open_sink(&path, Buffering::Raw).unwrap();
        sink.write_all(b"hello").unwrap();
        sink.flush().unwrap();
        drop(sink);

        let mut source = factory.open_source(&path, Buffering::Raw).unwrap();
        let mut contents = Vec::new();
        source.read_to_end(&mut contents).unwrap();
        assert_eq!(contents, b"hello");
    }

    #[test]
    fn buffered_sink_flushes_on_explicit_flush() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("buffered.bin");
        let factory = FsStreamFactory::new();

        let mut sink = factory.open_sink(&path, Buffering::Buffered).unwrap();
        sink.write_all(b"abc").unwrap();
        sink.flush().unwrap();
        drop(sink);

        assert_eq!(std::fs::read(&path).unwrap(), b"abc");
    }

    #[test]
    fn sink_truncates_existing_artifact() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("data.bin");
        std::fs::write(&path, b"previous longer contents").unwrap();

        let factory = FsStreamFactory::new();
        let mut sink = factory.open_sink(&path, Buffering::Raw).unwrap();
        sink.write_all(b"xy").unwrap();
        sink.flush().unwrap();
        drop(sink);

        assert_eq!(std::fs::read(&path).unwrap(), b"xy");
    }

    #[test]
    fn missing_source_is_an_error() {
        let dir = tempdir().unwrap();
        let factory = FsStreamFactory::new();
        let result = factory.open_source(&dir.path().join("absent.bin"), Buffering::Buffered);
        assert!(result.is_err());
    }
}
