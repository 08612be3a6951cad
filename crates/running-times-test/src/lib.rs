//! Shared test fixtures for running-times crates.
//!
//! - [`source`] - scripted [`RandomSource`](running_times_core::RandomSource)
//! - [`render`] - renderer that records jobs instead of running a plotter
//! - [`fixtures`] - fixed arrays with known sorted forms
//!
//! # Usage
//!
//! Add as a dev-dependency in your crate's `Cargo.toml`:
//!
//! ```toml
//! [dev-dependencies]
//! running-times-test = { workspace = true }
//! ```
//!
//! Only integration tests (`tests/`) should use it. Unit tests inside
//! `running-times-core` or `running-times-bench` would see a second copy of
//! those crates' types.

pub mod fixtures;
pub mod render;
pub mod source;

pub use fixtures::{FIXED_ARRAY, SORTED_FIXED_ARRAY};
pub use render::RecordingRenderer;
pub use source::SequenceSource;
