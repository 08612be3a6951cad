//! Configuration system for running-times.
//!
//! Every field defaults to the constants the experiments were designed
//! around, so an empty file (or no file) reproduces the standard runs.
//! TOML and YAML files can override any subset.
//!
//! # Examples
//!
//! ```
//! use running_times_config::BenchConfig;
//!
//! let config = BenchConfig::from_toml_str(r#"
//!     random_seed = 42
//!
//!     [compare]
//!     small_sizes = [10, 20]
//!     large_sizes = [20, 40]
//!     bubble_ceiling = 20
//!
//!     [matrix]
//!     sizes = [4, 8]
//! "#).unwrap();
//!
//! assert_eq!(config.compare.schedule().sizes(), &[10, 20, 40]);
//! assert_eq!(config.matrix.theory_step, 5);
//! ```
//!
//! Use default config when file is missing:
//!
//! ```
//! use running_times_config::BenchConfig;
//!
//! let config = BenchConfig::load("running-times.toml").unwrap_or_default();
//! assert_eq!(config.compare.bubble_ceiling, 15_000);
//! ```

use std::path::{Path, PathBuf};

use running_times_core::{IntDomain, Schedule, TimeUnit};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Top-level configuration shared by both experiments.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "snake_case")]
pub struct BenchConfig {
    /// Directory receiving data files, scripts and the rendered image.
    pub output_dir: PathBuf,

    /// Seed for reproducible inputs. Fresh OS entropy when absent.
    pub random_seed: Option<u64>,

    /// Granularity of recorded times.
    pub time_unit: TimeUnit,

    pub plot: PlotConfig,

    pub compare: CompareConfig,

    pub matrix: MatrixConfig,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("."),
            random_seed: None,
            time_unit: TimeUnit::Milliseconds,
            plot: PlotConfig::default(),
            compare: CompareConfig::default(),
            matrix: MatrixConfig::default(),
        }
    }
}

impl BenchConfig {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a file, picking YAML for `.yaml`/`.yml`
    /// extensions and TOML otherwise.
    ///
    /// # Errors
    ///
    /// Returns error if the file doesn't exist, doesn't parse, or fails
    /// [`validate`](Self::validate).
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let config = match path.extension().and_then(|e| e.to_str()) {
            Some("yaml") | Some("yml") => Self::from_yaml_file(path)?,
            _ => Self::from_toml_file(path)?,
        };
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Loads configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(s)?)
    }

    /// Sets the output directory.
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    /// Sets the random seed.
    pub fn with_random_seed(mut self, seed: u64) -> Self {
        self.random_seed = Some(seed);
        self
    }

    /// Sets the time unit.
    pub fn with_time_unit(mut self, unit: TimeUnit) -> Self {
        self.time_unit = unit;
        self
    }

    /// Disables invoking the external plotter.
    pub fn without_plot(mut self) -> Self {
        self.plot.enabled = false;
        self
    }

    /// Checks every section for values the experiments cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.compare.validate()?;
        self.matrix.validate()
    }
}

/// External plotter settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, rename_all = "snake_case")]
pub struct PlotConfig {
    /// Whether to run the plotter after writing the script.
    pub enabled: bool,

    /// Plotter executable, looked up on `PATH`.
    pub program: String,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            program: "gnuplot".to_string(),
        }
    }
}

/// Search/sort experiment settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, rename_all = "snake_case")]
pub struct CompareConfig {
    /// Sizes where bubble sort is still affordable.
    pub small_sizes: Vec<usize>,

    /// Sizes for the fast algorithms.
    pub large_sizes: Vec<usize>,

    /// Largest size bubble sort runs at. Above it the timing is skipped.
    pub bubble_ceiling: usize,

    /// Full scans per linear search timing.
    pub search_repetitions: usize,

    /// Search target; must lie outside `[value_min, value_max]`.
    pub absent_target: i32,

    pub value_min: i32,

    pub value_max: i32,

    /// Multiplier for the bubble sort estimate at the largest size.
    pub extrapolation_factor: u64,
}

impl Default for CompareConfig {
    fn default() -> Self {
        Self {
            small_sizes: vec![1000, 2000, 3000, 5000, 7000, 10000, 15000],
            large_sizes: vec![10000, 20000, 30000, 50000, 70000, 100000, 150000],
            bubble_ceiling: 15_000,
            search_repetitions: 1000,
            absent_target: -1,
            value_min: 1,
            value_max: 100_000,
            extrapolation_factor: 100,
        }
    }
}

impl CompareConfig {
    /// Merged, deduplicated, ascending schedule covering both ranges.
    pub fn schedule(&self) -> Schedule {
        Schedule::new(self.small_sizes.iter().copied()).merged(&Schedule::new(
            self.large_sizes.iter().copied(),
        ))
    }

    /// Integer domain of generated arrays.
    pub fn domain(&self) -> IntDomain {
        IntDomain::new(self.value_min, self.value_max)
    }

    /// Returns true if bubble sort runs at `size`.
    pub fn runs_bubble(&self, size: usize) -> bool {
        size <= self.bubble_ceiling
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let schedule = self.schedule();
        if schedule.is_empty() {
            return Err(ConfigError::Invalid("compare schedule has no sizes".to_string()));
        }
        if schedule.first() == Some(0) {
            return Err(ConfigError::Invalid("compare schedule contains size 0".to_string()));
        }
        let domain = self.domain();
        if domain.is_empty() {
            return Err(ConfigError::Invalid(format!(
                "value_min {} exceeds value_max {}",
                self.value_min, self.value_max
            )));
        }
        if domain.contains(self.absent_target) {
            return Err(ConfigError::Invalid(format!(
                "absent_target {} lies inside [{}, {}]",
                self.absent_target, self.value_min, self.value_max
            )));
        }
        if self.search_repetitions == 0 {
            return Err(ConfigError::Invalid("search_repetitions must be at least 1".to_string()));
        }
        Ok(())
    }
}

/// Matrix experiment settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, rename_all = "snake_case")]
pub struct MatrixConfig {
    pub sizes: Vec<usize>,

    /// Spacing of the sampled theoretical curve.
    pub theory_step: usize,
}

impl Default for MatrixConfig {
    fn default() -> Self {
        Self {
            sizes: vec![10, 20, 50, 100, 150, 200, 250, 300, 350, 400],
            theory_step: 5,
        }
    }
}

impl MatrixConfig {
    pub fn schedule(&self) -> Schedule {
        Schedule::new(self.sizes.iter().copied())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let schedule = self.schedule();
        if schedule.is_empty() {
            return Err(ConfigError::Invalid("matrix schedule has no sizes".to_string()));
        }
        if schedule.first() == Some(0) {
            return Err(ConfigError::Invalid("matrix schedule contains size 0".to_string()));
        }
        if self.theory_step == 0 {
            return Err(ConfigError::Invalid("theory_step must be at least 1".to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests;
