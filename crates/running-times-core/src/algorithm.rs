//! Reference algorithms and their asymptotic complexity.

use std::fmt;

/// An algorithm whose running time is measured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Algorithm {
    LinearSearch,
    ComparisonSort,
    BubbleSort,
    MatrixMultiply,
}

impl Algorithm {
    /// Algorithms timed by the search/sort experiment, in column order.
    pub const SEARCH_SORT: [Algorithm; 3] = [
        Algorithm::LinearSearch,
        Algorithm::ComparisonSort,
        Algorithm::BubbleSort,
    ];

    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            Algorithm::LinearSearch => "Linear Search",
            Algorithm::ComparisonSort => "Sort",
            Algorithm::BubbleSort => "Bubble Sort",
            Algorithm::MatrixMultiply => "Matrix Multiplication",
        }
    }

    /// Short column name used in the progress table.
    pub fn column(self) -> &'static str {
        match self {
            Algorithm::LinearSearch => "Linear",
            Algorithm::ComparisonSort => "Sort",
            Algorithm::BubbleSort => "Bubble",
            Algorithm::MatrixMultiply => "Matrix",
        }
    }

    pub fn complexity(self) -> Complexity {
        match self {
            Algorithm::LinearSearch => Complexity::Linear,
            Algorithm::ComparisonSort => Complexity::Linearithmic,
            Algorithm::BubbleSort => Complexity::Quadratic,
            Algorithm::MatrixMultiply => Complexity::Cubic,
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Asymptotic growth class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Complexity {
    Linear,
    Linearithmic,
    Quadratic,
    Cubic,
}

impl Complexity {
    /// Big-O notation, ASCII only so it survives gnuplot titles.
    pub fn notation(self) -> &'static str {
        match self {
            Complexity::Linear => "O(n)",
            Complexity::Linearithmic => "O(n log n)",
            Complexity::Quadratic => "O(n^2)",
            Complexity::Cubic => "O(n^3)",
        }
    }

    /// Evaluates the growth function at `n`.
    pub fn cost(self, n: f64) -> f64 {
        match self {
            Complexity::Linear => n,
            Complexity::Linearithmic => {
                if n > 1.0 {
                    n * n.log2()
                } else {
                    0.0
                }
            }
            Complexity::Quadratic => n * n,
            Complexity::Cubic => n * n * n,
        }
    }

    /// Ratio by which running time should grow when going from `from` to `to`.
    ///
    /// # Example
    ///
    /// ```
    /// use running_times_core::Complexity;
    ///
    /// assert_eq!(Complexity::Quadratic.expected_ratio(1000, 2000), 4.0);
    /// assert_eq!(Complexity::Cubic.expected_ratio(10, 20), 8.0);
    /// ```
    pub fn expected_ratio(self, from: usize, to: usize) -> f64 {
        let base = self.cost(from as f64);
        if base == 0.0 {
            return f64::NAN;
        }
        self.cost(to as f64) / base
    }
}

/// Scans `values` front to back for `target`.
pub fn linear_search(values: &[i32], target: i32) -> bool {
    for &v in values {
        if v == target {
            return true;
        }
    }
    false
}

/// Sorts in place with the standard library's O(n log n) unstable sort.
pub fn comparison_sort(values: &mut [i32]) {
    values.sort_unstable();
}

/// Classic exchange sort: each pass bubbles the largest remaining value to the end.
pub fn bubble_sort(values: &mut [i32]) {
    let n = values.len();
    if n < 2 {
        return;
    }
    for i in 0..n - 1 {
        for j in 0..n - i - 1 {
            if values[j] > values[j + 1] {
                values.swap(j, j + 1);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::{random_array, IntDomain, SeededSource};

    fn is_non_decreasing(values: &[i32]) -> bool {
        values.windows(2).all(|w| w[0] <= w[1])
    }

    #[test]
    fn test_sorts_agree_on_random_input() {
        let input = random_array(300, IntDomain::new(1, 50), &mut SeededSource::new(5));

        let mut fast = input.clone();
        comparison_sort(&mut fast);
        let mut slow = input.clone();
        bubble_sort(&mut slow);

        assert_eq!(fast, slow);
        assert!(is_non_decreasing(&fast));
    }

    #[test]
    fn test_sort_is_permutation() {
        let input = vec![9, 3, 3, 7, 1, 9, 0, -4];
        let mut sorted = input.clone();
        bubble_sort(&mut sorted);

        let mut counted_in = input.clone();
        counted_in.sort();
        assert_eq!(sorted, counted_in);
        assert_eq!(sorted, vec![-4, 0, 1, 3, 3, 7, 9, 9]);
    }

    #[test]
    fn test_bubble_sort_trivial_inputs() {
        let mut empty: Vec<i32> = vec![];
        bubble_sort(&mut empty);
        assert!(empty.is_empty());

        let mut one = vec![42];
        bubble_sort(&mut one);
        assert_eq!(one, vec![42]);

        let mut reversed: Vec<i32> = (0..50).rev().collect();
        bubble_sort(&mut reversed);
        assert_eq!(reversed, (0..50).collect::<Vec<_>>());
    }

    #[test]
    fn test_linear_search_absent_sentinel() {
        let domain = IntDomain::default();
        let values = random_array(2000, domain, &mut SeededSource::new(8));
        assert!(!domain.contains(-1));
        assert!(!linear_search(&values, -1));
    }

    #[test]
    fn test_linear_search_present() {
        assert!(linear_search(&[4, 8, 15, 16, 23, 42], 23));
        assert!(!linear_search(&[], 1));
    }

    #[test]
    fn test_expected_ratios() {
        assert_eq!(Complexity::Linear.expected_ratio(100, 300), 3.0);
        assert_eq!(Complexity::Quadratic.expected_ratio(5000, 7000), 1.96);
        let r = Complexity::Linearithmic.expected_ratio(1024, 2048);
        assert!((r - 2.2).abs() < 1e-9);
        assert!(Complexity::Linearithmic.expected_ratio(1, 2).is_nan());
    }

    #[test]
    fn test_algorithm_metadata() {
        assert_eq!(Algorithm::BubbleSort.complexity(), Complexity::Quadratic);
        assert_eq!(Algorithm::MatrixMultiply.complexity().notation(), "O(n^3)");
        assert_eq!(Algorithm::LinearSearch.to_string(), "Linear Search");
    }
}
