//! Size schedules.

use std::slice;

/// An ordered, deduplicated list of input sizes to benchmark.
///
/// Construction always sorts ascending and removes duplicates, so a
/// schedule can be built from overlapping ranges.
///
/// # Example
///
/// ```
/// use running_times_core::Schedule;
///
/// let small = Schedule::new([1000, 2000, 10000]);
/// let large = Schedule::new([10000, 20000]);
/// let merged = small.merged(&large);
///
/// assert_eq!(merged.sizes(), &[1000, 2000, 10000, 20000]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Schedule {
    sizes: Vec<usize>,
}

impl Schedule {
    /// Creates a schedule from any list of sizes.
    pub fn new(sizes: impl IntoIterator<Item = usize>) -> Self {
        let mut sizes: Vec<usize> = sizes.into_iter().collect();
        sizes.sort_unstable();
        sizes.dedup();
        Self { sizes }
    }

    /// Returns the union of both schedules.
    pub fn merged(&self, other: &Schedule) -> Schedule {
        Schedule::new(self.sizes.iter().chain(other.sizes.iter()).copied())
    }

    pub fn sizes(&self) -> &[usize] {
        &self.sizes
    }

    pub fn len(&self) -> usize {
        self.sizes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sizes.is_empty()
    }

    pub fn first(&self) -> Option<usize> {
        self.sizes.first().copied()
    }

    pub fn last(&self) -> Option<usize> {
        self.sizes.last().copied()
    }

    pub fn iter(&self) -> std::iter::Copied<slice::Iter<'_, usize>> {
        self.sizes.iter().copied()
    }
}

impl FromIterator<usize> for Schedule {
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        Schedule::new(iter)
    }
}

impl<'a> IntoIterator for &'a Schedule {
    type Item = usize;
    type IntoIter = std::iter::Copied<slice::Iter<'a, usize>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
