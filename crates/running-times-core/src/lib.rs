//! running-times core - inputs, reference algorithms and timing
//!
//! This crate provides the pieces every experiment shares:
//! - [`Schedule`] for the ordered list of input sizes to benchmark
//! - [`RandomSource`] and the input generators
//! - The reference algorithms being measured (search, sorts, matrix product)
//! - [`Runner`] which times a single algorithm call
//! - [`Measurement`] and [`Timing`], the recorded results

pub mod algorithm;
pub mod error;
pub mod generator;
pub mod matrix;
pub mod measurement;
pub mod runner;
pub mod schedule;

pub use algorithm::{bubble_sort, comparison_sort, linear_search, Algorithm, Complexity};
pub use error::{BenchError, Result};
pub use generator::{
    random_array, random_matrix, IntDomain, RandomSource, SeededSource, ThreadSource,
};
pub use matrix::Matrix;
pub use measurement::{Measurement, TimeUnit, Timing};
pub use runner::Runner;
pub use schedule::Schedule;
