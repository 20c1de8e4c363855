//! Benchmark driver
//!
//! Orchestrates one full sweep: for every strategy and every block size in
//! the computed sweep, run the WRITE or READ transfer with timing wrapped
//! around it and emit one measurement record to the result sink.
//!
//! Ordering contract: buffered WRITE passes run first, then raw WRITE
//! passes, then the READ passes in the same strategy order. Every READ
//! configuration consumes the artifact the matching WRITE configuration
//! produced, so WRITE-before-READ per (strategy, block size) key must hold
//! under any reordering.

use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::bench::consume::consume_data;
use crate::bench::generate::produce_data;
use crate::bench::sweep::block_size_sweep;
use crate::io::StreamFactory;
use crate::models::{Buffering, Granularity, Measurement, Operation, Strategy};
use crate::report::ResultSink;
use crate::util::units::{calculate_throughput_mbps, format_bytes};
use crate::util::Timer;
use crate::{BenchError, Result, DEFAULT_BYTES_TO_WRITE};

/// Sentinel block size recorded for byte-wise configurations
pub const BYTE_WISE_BLOCK_SIZE: u64 = 0;

/// Parameters of one full sweep
#[derive(Debug, Clone)]
pub struct SweepConfig {
    /// Directory the per-configuration data files are written to
    pub data_dir: PathBuf,
    /// Number of bytes every WRITE configuration produces
    pub bytes_to_write: u64,
    /// Filesystem block size the sweep densifies around
    pub fs_block_size: u64,
}

impl SweepConfig {
    pub fn new(fs_block_size: u64) -> Self {
        Self {
            data_dir: PathBuf::from("."),
            bytes_to_write: DEFAULT_BYTES_TO_WRITE,
            fs_block_size,
        }
    }

    pub fn with_data_dir(mut self, data_dir: PathBuf) -> Self {
        self.data_dir = data_dir;
        self
    }

    pub fn with_bytes_to_write(mut self, bytes_to_write: u64) -> Self {
        self.bytes_to_write = bytes_to_write;
        self
    }

    /// Validate the configuration parameters
    pub fn validate(&self) -> Result<()> {
        if !self.data_dir.is_dir() {
            return Err(BenchError::ConfigError(format!(
                "Data directory does not exist: {}",
                self.data_dir.display()
            )));
        }

        if self.fs_block_size == 0 {
            return Err(BenchError::ConfigError(
                "Filesystem block size must be greater than 0".to_string(),
            ));
        }

        if self.bytes_to_write == 0 {
            return Err(BenchError::ConfigError(
                "Write size must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}

/// Progress notification sent after every finished configuration
#[derive(Debug, Clone)]
pub struct ProgressUpdate {
    /// Configurations finished so far (including failed ones)
    pub completed: usize,
    /// Total configurations in the sweep
    pub total: usize,
    /// Operation of the configuration that just finished
    pub operation: Operation,
    /// Strategy of the configuration that just finished
    pub strategy: Strategy,
    /// Block size of the configuration that just finished
    pub block_size: u64,
}

/// Sweep executor
pub struct SweepRunner<F: StreamFactory> {
    config: SweepConfig,
    factory: F,
}

impl<F: StreamFactory> SweepRunner<F> {
    /// Create a new sweep runner over a validated configuration
    pub fn new(config: SweepConfig, factory: F) -> Result<Self> {
        config.validate()?;
        Ok(Self { config, factory })
    }

    pub fn config(&self) -> &SweepConfig {
        &self.config
    }

    /// Number of configurations one run measures: per strategy, all sweep
    /// sizes for block-wise plus a single byte-wise run, for WRITE and READ.
    pub fn configuration_count(&self) -> usize {
        let sweep_len = block_size_sweep(self.config.fs_block_size).len();
        4 * (sweep_len + 1)
    }

    fn artifact_path(&self, strategy: Strategy, block_size: u64) -> PathBuf {
        self.config.data_dir.join(strategy.artifact_name(block_size))
    }

    /// Generate one test data file and measure the elapsed wall time.
    ///
    /// The timed region covers opening the sink, the transfer loop, the
    /// flush, and the handle release.
    pub fn produce_test_data(
        &self,
        strategy: Strategy,
        total_bytes: u64,
        block_size: u64,
    ) -> Result<Measurement> {
        println!(
            "Generating test data ({}, {} bytes, block size {})",
            strategy, total_bytes, block_size
        );
        let path = self.artifact_path(strategy, block_size);

        let mut timer = Timer::new();
        timer.start();
        // Handle is dropped before the timer is read, also on failure.
        self.write_artifact(&path, strategy, total_bytes, block_size)?;
        let duration_ms = timer.elapsed_and_reset();

        log_done(total_bytes, duration_ms);
        Ok(Measurement::new(
            Operation::Write,
            strategy,
            block_size,
            total_bytes,
            duration_ms,
        ))
    }

    fn write_artifact(
        &self,
        path: &Path,
        strategy: Strategy,
        total_bytes: u64,
        block_size: u64,
    ) -> Result<()> {
        let mut sink = self.factory.open_sink(path, strategy.buffering)?;
        produce_data(sink.as_mut(), strategy.granularity, total_bytes, block_size)?;
        sink.flush()?;
        Ok(())
    }

    /// Consume the artifact the matching WRITE pass produced and measure
    /// the elapsed wall time. Returns the byte count actually read.
    pub fn consume_test_data(&self, strategy: Strategy, block_size: u64) -> Result<Measurement> {
        println!(
            "Consuming test data ({}, block size {})",
            strategy, block_size
        );
        let path = self.artifact_path(strategy, block_size);

        let mut timer = Timer::new();
        timer.start();
        let bytes_read = self.read_artifact(&path, strategy, block_size)?;
        let duration_ms = timer.elapsed_and_reset();

        log_done(bytes_read, duration_ms);
        Ok(Measurement::new(
            Operation::Read,
            strategy,
            block_size,
            bytes_read,
            duration_ms,
        ))
    }

    fn read_artifact(&self, path: &Path, strategy: Strategy, block_size: u64) -> Result<u64> {
        let mut source = self.factory.open_source(path, strategy.buffering)?;
        let bytes_read = consume_data(source.as_mut(), strategy.granularity, block_size)?;
        Ok(bytes_read)
    }

    /// Run the full sweep, emitting one record per successful configuration
    /// to `sink` and one progress update per configuration to `on_progress`.
    ///
    /// A configuration whose transfer fails is logged and skipped without a
    /// record; the sweep continues. Sink failures abort the run.
    pub fn run(
        &self,
        sink: &mut dyn ResultSink,
        mut on_progress: impl FnMut(&ProgressUpdate),
    ) -> Result<()> {
        let sizes = block_size_sweep(self.config.fs_block_size);
        let total = self.configuration_count();
        let mut completed = 0usize;

        // WRITE passes first: every READ depends on the artifact of the
        // matching WRITE. Buffered strategies lead in both phases.
        let passes = [
            (Operation::Write, Buffering::Buffered),
            (Operation::Write, Buffering::Raw),
            (Operation::Read, Buffering::Buffered),
            (Operation::Read, Buffering::Raw),
        ];

        for (operation, buffering) in passes {
            println!();
            println!(
                "*** benchmarking {} operations ({} streams)",
                operation, buffering
            );

            let byte_wise = Strategy {
                granularity: Granularity::Byte,
                buffering,
            };
            self.run_one(sink, operation, byte_wise, BYTE_WISE_BLOCK_SIZE)?;
            completed += 1;
            on_progress(&ProgressUpdate {
                completed,
                total,
                operation,
                strategy: byte_wise,
                block_size: BYTE_WISE_BLOCK_SIZE,
            });

            let block_wise = Strategy {
                granularity: Granularity::Block,
                buffering,
            };
            for &block_size in &sizes {
                self.run_one(sink, operation, block_wise, block_size)?;
                completed += 1;
                on_progress(&ProgressUpdate {
                    completed,
                    total,
                    operation,
                    strategy: block_wise,
                    block_size,
                });
            }
        }

        Ok(())
    }

    /// Run one configuration, isolating its failure from the rest of the
    /// sweep: transfer errors become a log line, sink errors propagate.
    fn run_one(
        &self,
        sink: &mut dyn ResultSink,
        operation: Operation,
        strategy: Strategy,
        block_size: u64,
    ) -> Result<()> {
        let outcome = match operation {
            Operation::Write => {
                self.produce_test_data(strategy, self.config.bytes_to_write, block_size)
            }
            Operation::Read => self.consume_test_data(strategy, block_size),
        };

        match outcome {
            Ok(measurement) => sink.log(&measurement),
            Err(err) => {
                eprintln!(
                    "Configuration failed ({}, {}, block size {}): {}",
                    operation, strategy, block_size, err
                );
                Ok(())
            }
        }
    }
}

fn log_done(bytes: u64, duration_ms: u64) {
    let throughput = calculate_throughput_mbps(bytes, Duration::from_millis(duration_ms));
    println!(
        "  > done in {} ms ({}, {:.2} MiB/s)",
        duration_ms,
        format_bytes(bytes),
        throughput
    );
}
