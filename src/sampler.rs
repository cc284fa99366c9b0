use crate::{
    error::{Error, Result},
    rng::Generator,
};

/// Returns a value uniformly distributed in `[0, n)`.
///
/// Draws whose bucket would be cut short by the remainder are rejected and redrawn, so the
/// result carries no modulo bias. When `n - 1` equals the generator's range, a single raw draw
/// is returned as is.
///
/// # Panics
/// Panics if `n` is zero or greater than `G::RANGE + 1`. Every caller in this crate passes a
/// validated bound; use [`try_sample`] for unchecked input.
///
/// # Example
/// ```
/// # use biasgen::{sample, Rng};
/// let rng = Rng::new(0);
/// let byte = sample(&rng, 256);
/// assert!(byte < 256);
/// ```
pub fn sample<G>(generator: &G, n: u32) -> u32
where
    G: Generator + ?Sized,
{
    match try_sample(generator, n) {
        Ok(value) => value,
        Err(err) => panic!("{err}"),
    }
}

/// Like [`sample`], but reports an out-of-range bound instead of panicking.
pub fn try_sample<G>(generator: &G, n: u32) -> Result<u32>
where
    G: Generator + ?Sized,
{
    check_bound::<G>(n)?;
    if n - 1 == G::RANGE {
        return Ok(generator.generate());
    }

    let limit = (G::RANGE / n) * n;
    loop {
        let x = generator.generate();
        if x < limit {
            return Ok(x % n);
        }
    }
}

/// Checks that `n` can be passed to [`sample`] for generators of type `G`.
pub fn check_bound<G>(n: u32) -> Result<()>
where
    G: Generator + ?Sized,
{
    let max = G::RANGE as u64 + 1;
    if n == 0 || n as u64 > max {
        return Err(Error::SampleBound { n, max });
    }
    Ok(())
}
