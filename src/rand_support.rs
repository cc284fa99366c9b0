use std::cell::{Cell, RefCell};

use rand::{RngCore, SeedableRng};

use crate::{Generator, Rng};

impl RngCore for &Rng {
    fn next_u32(&mut self) -> u32 {
        (self.u64() >> 32) as _
    }

    fn next_u64(&mut self) -> u64 {
        self.u64()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.bytes(dest);
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl SeedableRng for Rng {
    type Seed = [u8; 8];

    fn from_seed(seed: Self::Seed) -> Self {
        let seed = u64::from_ne_bytes(seed);
        let state = Cell::new(seed);
        Rng { state }
    }
}

/// Draws from any `rand` generator, yielding 31-bit values.
///
/// # Example
/// ```
/// # use biasgen::{sample, RandSource};
/// use rand::{rngs::StdRng, SeedableRng};
///
/// let source = RandSource::new(StdRng::seed_from_u64(1));
/// assert!(sample(&source, 6) < 6);
/// ```
#[derive(Debug)]
pub struct RandSource<R> {
    inner: RefCell<R>,
}

impl<R> RandSource<R>
where
    R: RngCore,
{
    pub fn new(rng: R) -> Self {
        Self {
            inner: RefCell::new(rng),
        }
    }

    pub fn into_inner(self) -> R {
        self.inner.into_inner()
    }
}

impl<R> Generator for RandSource<R>
where
    R: RngCore,
{
    const RANGE: u32 = (1 << 31) - 1;

    fn generate(&self) -> u32 {
        self.inner.borrow_mut().next_u32() >> 1
    }
}
