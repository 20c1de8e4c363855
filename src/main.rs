//! bufbench binary entry point
//!
//! Exit codes: 2 bad arguments (clap usage error), 3 size-metadata write
//! failure, 4 sweep or report failure.

use std::fs::File;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};

use bufbench::bench::{SweepConfig, SweepRunner};
use bufbench::io::FsStreamFactory;
use bufbench::report::{write_size_metadata, CsvSink};
use bufbench::{Result, APP_NAME, DEFAULT_BYTES_TO_WRITE, METRICS_FILE, SIZE_FILE};

const EXIT_METADATA_FAILURE: i32 = 3;
const EXIT_SWEEP_FAILURE: i32 = 4;

#[derive(Parser, Debug)]
#[command(
    name = APP_NAME,
    version,
    about = "Byte-stream I/O throughput benchmark: byte/block granularity x raw/buffered streams"
)]
struct Cli {
    /// Filesystem block size in bytes; the sweep densifies up to twice this value
    #[arg(value_parser = clap::value_parser!(u64).range(1..))]
    fs_block_size: u64,

    /// Directory the test data files are written to
    #[arg(long, default_value = ".")]
    data_dir: PathBuf,

    /// Directory the CSV report and size metadata are written to
    #[arg(long, default_value = "report")]
    report_dir: PathBuf,

    /// Bytes written per WRITE configuration
    #[arg(long, default_value_t = DEFAULT_BYTES_TO_WRITE)]
    bytes: u64,
}

fn main() {
    let cli = Cli::parse();

    println!(
        "{} started at {}",
        APP_NAME,
        chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
    );

    if let Err(err) = write_size_metadata(&cli.report_dir.join(SIZE_FILE), cli.bytes) {
        eprintln!("{}", err);
        std::process::exit(EXIT_METADATA_FAILURE);
    }

    let started = Instant::now();
    if let Err(err) = run_sweep(&cli) {
        eprintln!("Benchmark sweep failed: {}", err);
        std::process::exit(EXIT_SWEEP_FAILURE);
    }

    println!();
    println!(
        "Sweep finished in {}, report written to {}",
        humantime::format_duration(Duration::from_secs(started.elapsed().as_secs())),
        cli.report_dir.join(METRICS_FILE).display()
    );
}

fn run_sweep(cli: &Cli) -> Result<()> {
    let metrics = File::create(cli.report_dir.join(METRICS_FILE))?;
    let mut sink = CsvSink::new(metrics)?;

    let config = SweepConfig::new(cli.fs_block_size)
        .with_data_dir(cli.data_dir.clone())
        .with_bytes_to_write(cli.bytes);
    let runner = SweepRunner::new(config, FsStreamFactory::new())?;

    let pb = ProgressBar::new(runner.configuration_count() as u64);
    pb.set_style(
        ProgressStyle::with_template("{spinner} {pos}/{len} configurations {msg}").unwrap(),
    );

    runner.run(&mut sink, |progress| {
        pb.set_position(progress.completed as u64);
        pb.set_message(format!(
            "{} {} block {}",
            progress.operation, progress.strategy, progress.block_size
        ));
    })?;
    pb.finish();

    Ok(())
}
