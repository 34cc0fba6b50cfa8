//! Uniform sampling used by acceptance decisions and move selection.
//!
//! Every consumer in this crate is generic over [`RandomSource`], so a run
//! can be driven by any `rand` generator through [`RngSource`] or by a
//! hand-written deterministic stream in tests.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// A source of uniform random numbers.
pub trait RandomSource {
    /// Draws a real number uniformly from `[0, 1)`.
    fn real(&mut self) -> f64;

    /// Draws an integer uniformly from `[start, end)`.
    ///
    /// Computed as `start + floor(real() * (end - start))`, so the
    /// distribution follows the real draw exactly.
    ///
    /// # Panics
    /// Panics in debug builds if `start >= end`.
    fn index(&mut self, start: usize, end: usize) -> usize {
        debug_assert!(start < end, "empty index range {start}..{end}");
        let span = end - start;
        // A real draw of 1.0 - ulp times a large span can round up to span.
        let offset = (self.real() * span as f64).floor() as usize;
        start + offset.min(span - 1)
    }
}

impl<S: RandomSource + ?Sized> RandomSource for &mut S {
    fn real(&mut self) -> f64 {
        (**self).real()
    }

    fn index(&mut self, start: usize, end: usize) -> usize {
        (**self).index(start, end)
    }
}

/// [`RandomSource`] backed by a `rand` generator.
///
/// # Examples
///
/// ```
/// use u_tsp::random::{RandomSource, RngSource};
///
/// let mut a = RngSource::seeded(7);
/// let mut b = RngSource::seeded(7);
/// assert_eq!(a.index(1, 10), b.index(1, 10));
/// ```
#[derive(Debug, Clone)]
pub struct RngSource<R = StdRng> {
    rng: R,
}

impl RngSource<StdRng> {
    /// Creates a reproducible source from a seed.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    /// Creates a source seeded from the thread-local generator.
    pub fn from_entropy() -> Self {
        Self::seeded(rand::random())
    }

    /// Seeded when `seed` is `Some`, entropy-seeded otherwise.
    pub fn from_seed_option(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::seeded(seed),
            None => Self::from_entropy(),
        }
    }
}

impl<R: Rng> RngSource<R> {
    /// Wraps an existing generator.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Returns the wrapped generator.
    pub fn into_inner(self) -> R {
        self.rng
    }
}

impl<R: Rng> RandomSource for RngSource<R> {
    fn real(&mut self) -> f64 {
        self.rng.random::<f64>()
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::RandomSource;
    use std::collections::VecDeque;

    /// Replays a fixed list of real draws, then repeats the last one.
    #[derive(Debug, Clone)]
    pub(crate) struct Scripted {
        draws: VecDeque<f64>,
        last: f64,
    }

    impl Scripted {
        pub(crate) fn new(draws: &[f64]) -> Self {
            Self {
                draws: draws.iter().copied().collect(),
                last: draws.last().copied().unwrap_or(0.0),
            }
        }
    }

    impl RandomSource for Scripted {
        fn real(&mut self) -> f64 {
            match self.draws.pop_front() {
                Some(x) => {
                    self.last = x;
                    x
                }
                None => self.last,
            }
        }
    }
}
