use std::cell::Cell;

/// The increment used to advance the Weyl sequence. It is coprime to 2^64 and
/// `INCREMENT / 2^64` is approximately `phi - 1`, which gives a low discrepancy sequence with a
/// period of 2^64.
pub(crate) const INCREMENT: u64 = 0x9E3779B97F4A7FFF;

// These constants, like the `INCREMENT` constant, are coprime to 2^64.
const ALPHA: u128 = 0x11F9ADBB8F8DA6FFF;
const BETA: u128 = 0x1E3DF208C6781EFFF;

const ANSI_MULTIPLIER: u32 = 1103515245;
const ANSI_INCREMENT: u32 = 12345;

/// A source of uniformly distributed integers in `[0, RANGE]`.
///
/// Draws take `&self`; implementors keep their state in a `Cell` or similar.
pub trait Generator {
    /// The inclusive upper bound of every draw. Must be less than `u32::MAX` so that
    /// `RANGE + 1` is representable.
    const RANGE: u32;

    /// Returns the next raw draw from the sequence.
    fn generate(&self) -> u32;
}

impl<G: Generator> Generator for &G {
    const RANGE: u32 = G::RANGE;

    fn generate(&self) -> u32 {
        (**self).generate()
    }
}

#[derive(Debug, Clone)]
/// A random number generator for single-threaded use that needs no mutable reference.
///
/// The implementation hashes a Weyl sequence with `wyhash`, adapted from
/// https://github.com/lemire/testingRNG/blob/master/source/wyhash.h. As a [`Generator`] it yields
/// the upper 31 bits of each hashed value.
pub struct Rng {
    /// The current state of the RNG.
    pub(crate) state: Cell<u64>,
}

impl Rng {
    /// Returns a generator seeded with `seed`. Equal seeds give equal sequences.
    ///
    /// # Example
    /// ```
    /// # use biasgen::{Generator, Rng};
    /// let a = Rng::new(7);
    /// let b = Rng::new(7);
    /// assert_eq!(a.generate(), b.generate());
    /// ```
    pub fn new(seed: u64) -> Self {
        Self {
            state: Cell::new(seed),
        }
    }

    /// Restarts the sequence from `seed`.
    pub fn reseed(&self, seed: u64) {
        self.state.set(seed);
    }

    /// Fills the slice `data` with random bytes.
    pub fn bytes(&self, data: &mut [u8]) {
        const CHUNK_SIZE: usize = std::mem::size_of::<u64>();
        for chunk in data.chunks_mut(CHUNK_SIZE) {
            let bytes = self.u64().to_ne_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }

    /// Returns the next `u64` value from the pseudorandom sequence.
    pub fn u64(&self) -> u64 {
        let state = self.state.get().wrapping_add(INCREMENT);
        self.state.set(state);
        wyhash(state)
    }
}

impl Generator for Rng {
    const RANGE: u32 = (1 << 31) - 1;

    fn generate(&self) -> u32 {
        (self.u64() >> 33) as u32
    }
}

#[inline]
pub(crate) fn wyhash(value: u64) -> u64 {
    let mut tmp = (value as u128).wrapping_mul(ALPHA);
    tmp ^= tmp >> 64;
    tmp = tmp.wrapping_mul(BETA);
    ((tmp >> 64) ^ tmp) as _
}

#[derive(Debug, Clone)]
/// The portable `rand()` from the C standard, a linear congruential generator with 15-bit
/// output.
///
/// Its quality is poor and its range is the smallest C allows, which makes it a good workout
/// for the rejection sampler.
pub struct AnsiRng {
    next: Cell<u32>,
}

impl AnsiRng {
    /// Returns a generator seeded the way `srand(seed)` would seed it.
    ///
    /// # Example
    /// ```
    /// # use biasgen::{AnsiRng, Generator};
    /// let rng = AnsiRng::new(1);
    /// assert_eq!(rng.generate(), 16838);
    /// ```
    pub fn new(seed: u32) -> Self {
        Self {
            next: Cell::new(seed),
        }
    }

    pub fn reseed(&self, seed: u32) {
        self.next.set(seed);
    }
}

impl Generator for AnsiRng {
    const RANGE: u32 = 32767;

    fn generate(&self) -> u32 {
        let next = self
            .next
            .get()
            .wrapping_mul(ANSI_MULTIPLIER)
            .wrapping_add(ANSI_INCREMENT);
        self.next.set(next);
        (next >> 16) % (Self::RANGE + 1)
    }
}
