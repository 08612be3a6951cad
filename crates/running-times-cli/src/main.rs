//! `running-times` binary.

mod cli;
mod error;

use std::io;
use std::process::ExitCode;

use clap::Parser;
use owo_colors::OwoColorize;
use running_times_bench::{run_compare, run_matrix, DisabledRenderer, GnuplotRenderer, Renderer};
use running_times_config::BenchConfig;
use running_times_core::{RandomSource, SeededSource, ThreadSource};

use crate::cli::{Cli, Command};
use crate::error::CliError;

fn main() -> ExitCode {
    let cli = Cli::parse();
    running_times_console::init(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", "error:".bright_red().bold(), e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), CliError> {
    let config = match &cli.config {
        Some(path) => BenchConfig::load(path)?,
        None => BenchConfig::new(),
    };
    let config = cli.apply(config);
    config.validate()?;

    let mut source: Box<dyn RandomSource> = match config.random_seed {
        Some(seed) => Box::new(SeededSource::new(seed)),
        None => Box::new(ThreadSource::new()),
    };
    let renderer: Box<dyn Renderer> = if config.plot.enabled {
        Box::new(GnuplotRenderer::new(config.plot.program.clone()))
    } else {
        Box::new(DisabledRenderer)
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match cli.command {
        Command::Compare => run_compare(&config, &mut source, &renderer, &mut out)?,
        Command::Matrix => run_matrix(&config, &mut source, &renderer, &mut out)?,
    };
    Ok(())
}
