//! Scripted random source.

use running_times_core::{IntDomain, RandomSource};

/// Replays fixed integers and reals in a cycle.
///
/// Integers are clamped into the requested domain so a script written for
/// the default domain stays valid under narrower ones.
///
/// # Example
///
/// ```
/// use running_times_core::{random_array, IntDomain};
/// use running_times_test::SequenceSource;
///
/// let mut source = SequenceSource::new(vec![5, 1, 3]);
/// let values = random_array(4, IntDomain::default(), &mut source);
/// assert_eq!(values, vec![5, 1, 3, 5]);
/// ```
#[derive(Debug, Clone)]
pub struct SequenceSource {
    ints: Vec<i32>,
    units: Vec<f64>,
    int_pos: usize,
    unit_pos: usize,
}

impl SequenceSource {
    /// Creates a source cycling through `ints`; reals cycle through `0.5`.
    pub fn new(ints: Vec<i32>) -> Self {
        Self::with_units(ints, vec![0.5])
    }

    /// Creates a source with explicit reals.
    ///
    /// # Panics
    ///
    /// Panics if either sequence is empty or a real lies outside `[0, 1)`.
    pub fn with_units(ints: Vec<i32>, units: Vec<f64>) -> Self {
        assert!(!ints.is_empty(), "integer sequence must not be empty");
        assert!(!units.is_empty(), "real sequence must not be empty");
        assert!(
            units.iter().all(|u| (0.0..1.0).contains(u)),
            "reals must lie in [0, 1)"
        );
        Self {
            ints,
            units,
            int_pos: 0,
            unit_pos: 0,
        }
    }

    /// Number of integers handed out so far.
    pub fn ints_drawn(&self) -> usize {
        self.int_pos
    }
}

impl RandomSource for SequenceSource {
    fn next_int(&mut self, domain: IntDomain) -> i32 {
        let value = self.ints[self.int_pos % self.ints.len()];
        self.int_pos += 1;
        value.clamp(domain.min, domain.max)
    }

    fn next_unit(&mut self) -> f64 {
        let value = self.units[self.unit_pos % self.units.len()];
        self.unit_pos += 1;
        value
    }
}
