//! Textual growth-rate analysis printed after an experiment.
//!
//! For consecutive sizes the observed size ratio and time ratio are set
//! against the ratio the algorithm's complexity predicts, which makes the gap
//! between measured and expected growth readable without a plot.

use num_format::{Locale, ToFormattedString};
use running_times_core::{Algorithm, TimeUnit};

use crate::fit::TheoreticalFit;
use crate::result::ExperimentResult;

const RULE_WIDTH: usize = 60;

/// Growth between two consecutive measured sizes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GrowthStep {
    pub from_size: usize,
    pub to_size: usize,
    pub from_time: u64,
    pub to_time: u64,
    pub size_ratio: f64,
    pub time_ratio: f64,
    pub expected_ratio: f64,
}

/// Steps between adjacent sizes where both timings are real and non-zero.
///
/// A skipped or sub-unit timing breaks the chain: no step spans across it.
pub fn growth_steps(result: &ExperimentResult, algorithm: Algorithm) -> Vec<GrowthStep> {
    let complexity = algorithm.complexity();
    result
        .series(algorithm)
        .windows(2)
        .filter_map(|pair| {
            let (n1, t1) = pair[0];
            let (n2, t2) = pair[1];
            let c1 = t1.nonzero(result.unit)?;
            let c2 = t2.nonzero(result.unit)?;
            Some(GrowthStep {
                from_size: n1,
                to_size: n2,
                from_time: c1,
                to_time: c2,
                size_ratio: n2 as f64 / n1 as f64,
                time_ratio: c2 as f64 / c1 as f64,
                expected_ratio: complexity.expected_ratio(n1, n2),
            })
        })
        .collect()
}

/// Formats a ratio with at most two decimals, dropping trailing zeros.
pub fn format_ratio(ratio: f64) -> String {
    if !ratio.is_finite() {
        return "n/a".to_string();
    }
    let s = format!("{:.2}", ratio);
    s.trim_end_matches('0').trim_end_matches('.').to_string()
}

fn banner(out: &mut String, title: &str) {
    out.push_str(&format!("\n{}\n", "=".repeat(RULE_WIDTH)));
    out.push_str(&format!("{}\n", title));
    out.push_str(&format!("{}\n", "=".repeat(RULE_WIDTH)));
}

fn section(out: &mut String, heading: &str) {
    out.push_str(&format!("\n{}\n", heading));
    out.push_str(&format!("{}\n", "-".repeat(RULE_WIDTH)));
}

fn steps_section(
    out: &mut String,
    index: usize,
    heading: &str,
    result: &ExperimentResult,
    algorithm: Algorithm,
) {
    let unit = result.unit.suffix();
    let notation = algorithm.complexity().notation();
    let heading = format!(
        "{}. {} ({}) - {}",
        index,
        algorithm.label().to_uppercase(),
        notation,
        heading
    );
    section(out, &heading);

    let steps = growth_steps(result, algorithm);
    if steps.is_empty() {
        out.push_str("Not enough non-zero measurements to compare.\n");
        return;
    }
    for step in steps {
        out.push_str(&format!(
            "n: {} -> {} ({}x)\n",
            step.from_size,
            step.to_size,
            format_ratio(step.size_ratio)
        ));
        out.push_str(&format!(
            "  Time: {}{} -> {}{} ({}x slower)\n",
            step.from_time,
            unit,
            step.to_time,
            unit,
            format_ratio(step.time_ratio)
        ));
        out.push_str(&format!(
            "  Expected {}: {}x\n\n",
            notation,
            format_ratio(step.expected_ratio)
        ));
    }
}

/// Bubble sort figure shown at the largest size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BubbleFigure {
    /// Bubble sort actually ran at the largest size.
    Measured(u64),
    /// Last measured time multiplied by the extrapolation factor.
    Estimated { base_size: usize, value: u64 },
    /// Bubble sort never produced a non-zero time.
    Unavailable,
}

/// Picks the bubble sort figure for the final comparison.
///
/// This is a display heuristic: the last non-zero bubble time is scaled by a
/// fixed `factor`, not by the real size ratio, and is always labeled as an
/// estimate.
pub fn bubble_figure(result: &ExperimentResult, factor: u64) -> BubbleFigure {
    let Some(largest) = result.sizes().last().copied() else {
        return BubbleFigure::Unavailable;
    };
    match result.last_nonzero(Algorithm::BubbleSort) {
        Some((size, time)) if size == largest => BubbleFigure::Measured(time),
        Some((size, time)) => BubbleFigure::Estimated {
            base_size: size,
            value: time.saturating_mul(factor),
        },
        None => BubbleFigure::Unavailable,
    }
}

/// Full analysis for the search/sort experiment.
pub fn compare_analysis(result: &ExperimentResult, extrapolation_factor: u64) -> String {
    let mut out = String::new();
    banner(&mut out, "ANALYSIS: Why Asymptotic Notation Matters");

    steps_section(&mut out, 1, "Gets Slow Fast", result, Algorithm::BubbleSort);
    steps_section(&mut out, 2, "Barely Above Linear", result, Algorithm::ComparisonSort);
    steps_section(&mut out, 3, "Grows With n", result, Algorithm::LinearSearch);

    let Some(last) = result.rows().pop() else {
        return out;
    };
    let unit = result.unit.suffix();
    section(
        &mut out,
        &format!("4. FINAL COMPARISON at n={}:", last.size.to_formatted_string(&Locale::en)),
    );
    let time_at = |alg: Algorithm| result.timing(last.size, alg).count(result.unit);
    out.push_str(&format!(
        "Linear Search O(n):     {} {}\n",
        time_at(Algorithm::LinearSearch),
        unit
    ));
    out.push_str(&format!(
        "Sort O(n log n):        {} {}\n",
        time_at(Algorithm::ComparisonSort),
        unit
    ));
    match bubble_figure(result, extrapolation_factor) {
        BubbleFigure::Measured(time) => {
            out.push_str(&format!("Bubble Sort O(n^2):     {} {}\n", time, unit));
        }
        BubbleFigure::Estimated { base_size, value } => {
            out.push_str(&format!(
                "Bubble Sort O(n^2):     ~{} {} (extrapolated estimate: {}x the n={} time, not measured)\n",
                value.to_formatted_string(&Locale::en),
                unit,
                extrapolation_factor,
                base_size
            ));
        }
        BubbleFigure::Unavailable => {
            out.push_str("Bubble Sort O(n^2):     not measured\n");
        }
    }
    out.push_str(&format!(
        "\nNotice: Even though all start near 0{}, they diverge dramatically!\n",
        unit
    ));
    out
}

/// Full analysis for the matrix experiment.
pub fn matrix_analysis(result: &ExperimentResult, fit: &TheoreticalFit) -> String {
    let mut out = String::new();
    banner(&mut out, "ANALYSIS: Naive Matrix Multiplication");
    steps_section(&mut out, 1, "Cubic Growth", result, Algorithm::MatrixMultiply);

    section(&mut out, "2. THEORETICAL FIT:");
    out.push_str(&fit_line(fit, result.unit));
    out
}

fn fit_line(fit: &TheoreticalFit, unit: TimeUnit) -> String {
    if fit.is_fallback() {
        format!(
            "No non-zero measurements; using default c = {:.6e} {}/n^3\n",
            fit.constant(),
            unit.suffix()
        )
    } else {
        format!(
            "time ~= {:.6e} * n^3 {} (averaged over {} measurements)\n",
            fit.constant(),
            unit.suffix(),
            fit.samples()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use running_times_core::{Measurement, TimeUnit};
    use std::time::Duration;

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    fn compare_result() -> ExperimentResult {
        let mut r = ExperimentResult::new(
            "compare",
            TimeUnit::Milliseconds,
            Algorithm::SEARCH_SORT.to_vec(),
        );
        let rows: [(usize, u64, u64, Option<u64>); 4] = [
            (1000, 1, 0, Some(2)),
            (2000, 2, 0, Some(8)),
            (4000, 4, 1, Some(32)),
            (8000, 8, 2, None),
        ];
        for (n, lin, sort, bubble) in rows {
            r.add(Measurement::measured(n, Algorithm::LinearSearch, ms(lin)));
            r.add(Measurement::measured(n, Algorithm::ComparisonSort, ms(sort)));
            r.add(match bubble {
                Some(b) => Measurement::measured(n, Algorithm::BubbleSort, ms(b)),
                None => Measurement::skipped(n, Algorithm::BubbleSort),
            });
        }
        r
    }

    #[test]
    fn test_growth_steps_skip_zero_and_sentinel() {
        let result = compare_result();

        let bubble = growth_steps(&result, Algorithm::BubbleSort);
        assert_eq!(bubble.len(), 2);
        assert_eq!(bubble[0].size_ratio, 2.0);
        assert_eq!(bubble[0].time_ratio, 4.0);
        assert_eq!(bubble[0].expected_ratio, 4.0);

        let sort = growth_steps(&result, Algorithm::ComparisonSort);
        assert_eq!(sort.len(), 1);
        assert_eq!((sort[0].from_size, sort[0].to_size), (4000, 8000));
    }

    #[test]
    fn test_format_ratio() {
        assert_eq!(format_ratio(2.0), "2");
        assert_eq!(format_ratio(1.5), "1.5");
        assert_eq!(format_ratio(1.428571), "1.43");
        assert_eq!(format_ratio(f64::NAN), "n/a");
    }

    #[test]
    fn test_bubble_estimate_is_labeled() {
        let result = compare_result();
        assert_eq!(
            bubble_figure(&result, 100),
            BubbleFigure::Estimated {
                base_size: 4000,
                value: 3200
            }
        );

        let text = compare_analysis(&result, 100);
        assert!(text.contains("FINAL COMPARISON at n=8,000"));
        assert!(text.contains("~3,200 ms (extrapolated estimate"));
        assert!(text.contains("Expected O(n^2): 4x"));
    }

    #[test]
    fn test_bubble_measured_at_largest_size() {
        let mut result = ExperimentResult::new(
            "compare",
            TimeUnit::Milliseconds,
            Algorithm::SEARCH_SORT.to_vec(),
        );
        result.add(Measurement::measured(10, Algorithm::BubbleSort, ms(5)));
        assert_eq!(bubble_figure(&result, 100), BubbleFigure::Measured(5));
    }

    #[test]
    fn test_bubble_unavailable() {
        let mut result = ExperimentResult::new(
            "compare",
            TimeUnit::Milliseconds,
            Algorithm::SEARCH_SORT.to_vec(),
        );
        result.add(Measurement::skipped(10, Algorithm::BubbleSort));
        assert_eq!(bubble_figure(&result, 100), BubbleFigure::Unavailable);
        assert!(compare_analysis(&result, 100).contains("not measured"));
    }

    #[test]
    fn test_matrix_analysis_mentions_fit() {
        let mut result = ExperimentResult::new(
            "matrix",
            TimeUnit::Milliseconds,
            vec![Algorithm::MatrixMultiply],
        );
        result.add(Measurement::measured(100, Algorithm::MatrixMultiply, ms(1)));
        result.add(Measurement::measured(200, Algorithm::MatrixMultiply, ms(8)));
        let fit = TheoreticalFit::from_result(&result, Algorithm::MatrixMultiply);

        let text = matrix_analysis(&result, &fit);
        assert!(text.contains("Expected O(n^3): 8x"));
        assert!(text.contains("1.000000e-6"));
    }
}
