//! Writes a biased pseudorandom byte stream to stdout until the reader goes away.
//!
//! ```text
//! biasgen [SEED] [--chunks N] | RNG_test stdin
//! ```
//!
//! Diagnostics go to stderr and are filtered with `RUST_LOG`.

use std::io;

use anyhow::Context;
use biasgen::{parse_seed, BiasedStream, Rng, StreamConfig};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Emit pseudorandom bytes with one bit per block cleared
#[derive(Parser)]
#[command(name = "biasgen")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Generator seed; parsed leniently, anything unparsable counts as 0
    #[arg(allow_hyphen_values = true)]
    seed: Option<String>,

    /// Stop after this many chunks instead of running forever
    #[arg(short = 'n', long)]
    chunks: Option<u64>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();
    let seed = cli.seed.as_deref().map_or(0, parse_seed);
    let config = StreamConfig::default();
    info!(seed, ?config, "seeding generator");

    let mut stream =
        BiasedStream::new(Rng::new(seed), config).context("invalid stream configuration")?;
    let mut output = io::stdout().lock();
    let shutdown = stream
        .run(&mut output, cli.chunks)
        .context("failed to emit stream")?;
    info!(?shutdown, chunks = stream.chunks(), "stream finished");
    Ok(())
}
