//! Infinite pseudorandom byte streams with a deterministic bit bias.
//!
//! Bytes are drawn through a rejection sampler so that mapping a generator's native range onto
//! `[0, 256)` carries no modulo bias. On top of that, one bit per fixed-size block is cleared,
//! always or with probability `1 / ZERO_CHANCE`, which gives statistical test suites a known
//! defect to find.
//!
//! ```
//! use biasgen::{BiasedStream, Rng, StreamConfig};
//!
//! let mut stream = BiasedStream::new(Rng::new(0), StreamConfig::default()).unwrap();
//! let chunk = stream.fill();
//! assert!(chunk.iter().step_by(16).all(|&byte| byte & 0x80 == 0));
//! ```

#[cfg(test)]
mod bench;
mod error;
#[cfg(feature = "rand")]
mod rand_support;
mod rng;
mod sampler;
mod seed;
mod stream;
#[cfg(test)]
mod tests;

pub use error::{Error, Result};
#[cfg(feature = "rand")]
pub use rand_support::RandSource;
pub use rng::{AnsiRng, Generator, Rng};
pub use sampler::{check_bound, sample, try_sample};
pub use seed::parse_seed;
pub use stream::{BiasedStream, Shutdown, StreamConfig, BIASBIT, BLOCKLEN, BUFSIZE, ZERO_CHANCE};
