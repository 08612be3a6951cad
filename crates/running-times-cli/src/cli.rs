//! Command-line arguments.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use running_times_config::BenchConfig;
use running_times_core::TimeUnit;

#[derive(Debug, Parser)]
#[command(
    name = "running-times",
    version,
    about = "Measure how algorithm running times grow with input size"
)]
pub struct Cli {
    /// TOML or YAML configuration file (.yaml/.yml selects YAML)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Directory for data files, scripts and images
    #[arg(long, global = true, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Seed for reproducible inputs
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    /// Write the gnuplot script but do not run it
    #[arg(long, global = true)]
    pub no_plot: bool,

    /// Plotting program to invoke
    #[arg(long, global = true, value_name = "PROGRAM")]
    pub gnuplot: Option<String>,

    /// Time unit for recorded measurements
    #[arg(long, global = true, value_enum)]
    pub unit: Option<UnitArg>,

    /// Log each measured size
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Linear search vs comparison sort vs bubble sort
    Compare,
    /// Naive matrix multiplication with a cubic fit
    Matrix,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum UnitArg {
    Ms,
    Us,
    Ns,
}

impl From<UnitArg> for TimeUnit {
    fn from(unit: UnitArg) -> Self {
        match unit {
            UnitArg::Ms => TimeUnit::Milliseconds,
            UnitArg::Us => TimeUnit::Microseconds,
            UnitArg::Ns => TimeUnit::Nanoseconds,
        }
    }
}

impl Cli {
    /// Applies flag overrides on top of a loaded configuration.
    pub fn apply(&self, mut config: BenchConfig) -> BenchConfig {
        if let Some(dir) = &self.output_dir {
            config = config.with_output_dir(dir);
        }
        if let Some(seed) = self.seed {
            config = config.with_random_seed(seed);
        }
        if let Some(unit) = self.unit {
            config = config.with_time_unit(unit.into());
        }
        if let Some(program) = &self.gnuplot {
            config.plot.program = program.clone();
        }
        if self.no_plot {
            config = config.without_plot();
        }
        config
    }
}
