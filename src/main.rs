//! SHA-2 Digest CLI
//!
//! # Commands
//!
//! - `hash` - Print the digest of a message, file or stdin
//! - `check` - Run known-answer vectors and report mismatches
//! - `benchmark` - Measure digest throughput

use std::io::Read;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use shadigest::check::check_all;
use shadigest::vectors::{builtin_vectors, load_vectors};
use shadigest::{digest, digest_many, Algorithm};

#[derive(Debug, Parser)]
#[command(name = "shadigest")]
#[command(author = "Cyberia")]
#[command(version = "0.1.0")]
#[command(about = "SHA-256 / SHA-512 message digests")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum AlgorithmArg {
    Sha256,
    Sha512,
}

impl From<AlgorithmArg> for Algorithm {
    fn from(arg: AlgorithmArg) -> Self {
        match arg {
            AlgorithmArg::Sha256 => Algorithm::Sha256,
            AlgorithmArg::Sha512 => Algorithm::Sha512,
        }
    }
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Print the digest of a message
    Hash {
        /// Message text (read from stdin when neither this nor --file is given)
        message: Option<String>,

        /// Digest algorithm
        #[arg(short, long, value_enum, default_value = "sha256")]
        algorithm: AlgorithmArg,

        /// Hash the contents of a file instead
        #[arg(short, long, conflicts_with = "message")]
        file: Option<PathBuf>,

        /// Treat the message as hex and decode it first
        #[arg(long)]
        hex: bool,
    },

    /// Run known-answer vectors
    Check {
        /// JSON vector file (default: built-in vectors)
        #[arg(long)]
        vectors: Option<PathBuf>,
    },

    /// Run performance benchmark
    Benchmark {
        /// Number of messages to hash
        #[arg(short, long, default_value = "1000")]
        count: usize,

        /// Message size in bytes
        #[arg(short, long, default_value = "1024")]
        size: usize,

        /// Digest algorithm
        #[arg(short, long, value_enum, default_value = "sha256")]
        algorithm: AlgorithmArg,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Hash {
            message,
            algorithm,
            file,
            hex,
        } => cmd_hash(message, algorithm.into(), file, hex),
        Commands::Check { vectors } => cmd_check(vectors),
        Commands::Benchmark {
            count,
            size,
            algorithm,
        } => cmd_benchmark(count, size, algorithm.into()),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn cmd_hash(
    message: Option<String>,
    algorithm: Algorithm,
    file: Option<PathBuf>,
    hex_input: bool,
) -> anyhow::Result<ExitCode> {
    let raw = match (file, message) {
        (Some(path), _) => std::fs::read(&path)
            .with_context(|| format!("failed to read {}", path.display()))?,
        (None, Some(text)) => text.into_bytes(),
        (None, None) => {
            let mut buf = Vec::new();
            std::io::stdin()
                .read_to_end(&mut buf)
                .context("failed to read stdin")?;
            buf
        }
    };

    let input = if hex_input {
        let text = std::str::from_utf8(&raw).context("hex input is not UTF-8")?;
        hex::decode(text.trim()).context("message is not valid hex")?
    } else {
        raw
    };

    debug!(%algorithm, bytes = input.len(), "hashing");
    println!("{}", digest(&input, algorithm));

    Ok(ExitCode::SUCCESS)
}

fn cmd_check(vectors_path: Option<PathBuf>) -> anyhow::Result<ExitCode> {
    let vectors = match vectors_path {
        Some(path) => load_vectors(&path)?,
        None => builtin_vectors(),
    };

    if vectors.is_empty() {
        anyhow::bail!("no vectors to check");
    }

    info!(count = vectors.len(), "checking vectors");
    let reports = check_all(&vectors)?;

    for report in &reports {
        println!("\n[{}]", report.algorithm);
        println!("{}", report);
    }

    let failed = reports.iter().filter(|r| !r.passed()).count();
    println!(
        "\n{} passed, {} failed",
        reports.len() - failed,
        failed
    );

    Ok(if failed == 0 {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

fn cmd_benchmark(count: usize, size: usize, algorithm: Algorithm) -> anyhow::Result<ExitCode> {
    if count == 0 {
        anyhow::bail!("count must be at least 1");
    }

    println!(
        "Running {} benchmark with {} messages of {} bytes...",
        algorithm, count, size
    );

    let messages: Vec<Vec<u8>> = (0..count)
        .map(|i| {
            let mut m = vec![0xA5u8; size];
            for (byte, b) in m.iter_mut().zip(i.to_le_bytes()) {
                *byte = b;
            }
            m
        })
        .collect();
    let bytes_hashed = total_bytes(count, size);

    let start = Instant::now();
    let sequential: Vec<String> = messages.iter().map(|m| digest(m, algorithm)).collect();
    let sequential_secs = start.elapsed().as_secs_f64();

    let start = Instant::now();
    let batched = digest_many(&messages, algorithm);
    let batched_secs = start.elapsed().as_secs_f64();

    if sequential != batched {
        anyhow::bail!("batched digests disagree with sequential digests");
    }

    println!("\nResults:");
    println!("  Sequential: {:.3}s", sequential_secs);
    println!(
        "    {:.2} digests/s | {:.2} MB/s",
        count as f64 / sequential_secs,
        bytes_hashed / sequential_secs / 1_000_000.0
    );
    println!("  Batched: {:.3}s", batched_secs);
    println!(
        "    {:.2} digests/s | {:.2} MB/s",
        count as f64 / batched_secs,
        bytes_hashed / batched_secs / 1_000_000.0
    );

    println!("\nAlgorithm parameters:");
    println!("  Block size: {} bytes", algorithm.block_size());
    println!("  Digest size: {} bytes", algorithm.digest_len());

    Ok(ExitCode::SUCCESS)
}

/// Bytes hashed by a benchmark run, without overflowing `usize`
fn total_bytes(count: usize, size: usize) -> f64 {
    count as f64 * size as f64
}
