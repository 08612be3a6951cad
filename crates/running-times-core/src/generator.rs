//! Random input generation.
//!
//! Generators pull every value from a [`RandomSource`], so experiments can run
//! against fresh OS entropy ([`ThreadSource`]), a reproducible seeded stream
//! ([`SeededSource`]), or a scripted test double.

use rand::rngs::ThreadRng;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::matrix::Matrix;

/// Inclusive integer range that generated array values fall into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IntDomain {
    pub min: i32,
    pub max: i32,
}

impl IntDomain {
    pub const fn new(min: i32, max: i32) -> Self {
        Self { min, max }
    }

    /// Returns true if `value` can be produced by this domain.
    pub fn contains(&self, value: i32) -> bool {
        (self.min..=self.max).contains(&value)
    }

    /// Returns true if the range holds no values.
    pub fn is_empty(&self) -> bool {
        self.min > self.max
    }
}

impl Default for IntDomain {
    fn default() -> Self {
        Self::new(1, 100_000)
    }
}

/// Source of randomness for input generation.
pub trait RandomSource {
    /// Returns a uniformly distributed integer inside `domain`.
    fn next_int(&mut self, domain: IntDomain) -> i32;

    /// Returns a uniformly distributed real in `[0, 1)`.
    fn next_unit(&mut self) -> f64;
}

/// Draws from the thread-local generator, which is seeded from the OS.
///
/// No two runs see the same inputs.
#[derive(Debug, Default)]
pub struct ThreadSource {
    rng: Option<ThreadRng>,
}

impl ThreadSource {
    pub fn new() -> Self {
        Self::default()
    }

    fn rng(&mut self) -> &mut ThreadRng {
        self.rng.get_or_insert_with(rand::rng)
    }
}

impl RandomSource for ThreadSource {
    fn next_int(&mut self, domain: IntDomain) -> i32 {
        self.rng().random_range(domain.min..=domain.max)
    }

    fn next_unit(&mut self) -> f64 {
        self.rng().random::<f64>()
    }
}

/// Reproducible source backed by ChaCha8.
///
/// # Example
///
/// ```
/// use running_times_core::{random_array, IntDomain, SeededSource};
///
/// let a = random_array(5, IntDomain::default(), &mut SeededSource::new(7));
/// let b = random_array(5, IntDomain::default(), &mut SeededSource::new(7));
/// assert_eq!(a, b);
/// ```
#[derive(Debug, Clone)]
pub struct SeededSource {
    rng: ChaCha8Rng,
}

impl SeededSource {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for SeededSource {
    fn next_int(&mut self, domain: IntDomain) -> i32 {
        self.rng.random_range(domain.min..=domain.max)
    }

    fn next_unit(&mut self) -> f64 {
        self.rng.random::<f64>()
    }
}

impl<S: RandomSource + ?Sized> RandomSource for &mut S {
    fn next_int(&mut self, domain: IntDomain) -> i32 {
        (**self).next_int(domain)
    }

    fn next_unit(&mut self) -> f64 {
        (**self).next_unit()
    }
}

impl<S: RandomSource + ?Sized> RandomSource for Box<S> {
    fn next_int(&mut self, domain: IntDomain) -> i32 {
        (**self).next_int(domain)
    }

    fn next_unit(&mut self) -> f64 {
        (**self).next_unit()
    }
}

/// Generates `n` integers drawn from `domain`.
pub fn random_array<R: RandomSource + ?Sized>(
    n: usize,
    domain: IntDomain,
    source: &mut R,
) -> Vec<i32> {
    (0..n).map(|_| source.next_int(domain)).collect()
}

/// Generates an `n`×`n` matrix of reals in `[0, 1)`.
pub fn random_matrix<R: RandomSource + ?Sized>(n: usize, source: &mut R) -> Matrix {
    Matrix::from_fn(n, |_, _| source.next_unit())
}
