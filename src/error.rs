use std::io;

use thiserror::Error;

/// Errors reported by the sampler and the stream producer.
#[derive(Debug, Error)]
pub enum Error {
    /// A sample bound outside `[1, RANGE + 1]`.
    #[error("sample bound {n} is outside [1, {max}]")]
    SampleBound { n: u32, max: u64 },

    /// The output buffer has no room for a single byte.
    #[error("buffer size must be at least 1")]
    ZeroBufferSize,

    /// Blocks must span at least one byte.
    #[error("block length must be at least 1")]
    ZeroBlockLength,

    /// The bias denominator cannot be drawn from the generator.
    #[error("bias denominator {zero_chance} exceeds generator range {max}")]
    ZeroChance { zero_chance: u32, max: u64 },

    #[error("failed to write output: {0}")]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
