//! Tests for benchmark configuration.

use super::*;
use std::io::Write;

#[test]
fn test_defaults_match_standard_runs() {
    let config = BenchConfig::default();
    assert_eq!(config.output_dir, PathBuf::from("."));
    assert_eq!(config.time_unit, TimeUnit::Milliseconds);
    assert!(config.plot.enabled);
    assert_eq!(config.plot.program, "gnuplot");
    assert_eq!(
        config.compare.schedule().sizes(),
        &[1000, 2000, 3000, 5000, 7000, 10000, 15000, 20000, 30000, 50000, 70000, 100000, 150000]
    );
    assert_eq!(config.matrix.schedule().len(), 10);
    assert!(config.validate().is_ok());
}

#[test]
fn test_toml_parsing() {
    let toml = r#"
        output_dir = "out"
        random_seed = 42
        time_unit = "microseconds"

        [plot]
        enabled = false

        [compare]
        small_sizes = [100, 200]
        large_sizes = [200, 400]
        bubble_ceiling = 200
        search_repetitions = 3

        [matrix]
        sizes = [8, 4]
        theory_step = 2
    "#;

    let config = BenchConfig::from_toml_str(toml).unwrap();
    assert_eq!(config.output_dir, PathBuf::from("out"));
    assert_eq!(config.random_seed, Some(42));
    assert_eq!(config.time_unit, TimeUnit::Microseconds);
    assert!(!config.plot.enabled);
    assert_eq!(config.plot.program, "gnuplot");
    assert_eq!(config.compare.schedule().sizes(), &[100, 200, 400]);
    assert_eq!(config.compare.search_repetitions, 3);
    assert_eq!(config.compare.value_max, 100_000);
    assert_eq!(config.matrix.schedule().sizes(), &[4, 8]);
    assert_eq!(config.matrix.theory_step, 2);
}

#[test]
fn test_yaml_parsing() {
    let yaml = r#"
        random_seed: 7
        time_unit: nanoseconds
        matrix:
          sizes: [10, 20]
    "#;

    let config = BenchConfig::from_yaml_str(yaml).unwrap();
    assert_eq!(config.random_seed, Some(7));
    assert_eq!(config.time_unit, TimeUnit::Nanoseconds);
    assert_eq!(config.matrix.sizes, vec![10, 20]);
    assert_eq!(config.compare, CompareConfig::default());
}

#[test]
fn test_builder() {
    let config = BenchConfig::new()
        .with_output_dir("results")
        .with_random_seed(123)
        .with_time_unit(TimeUnit::Microseconds)
        .without_plot();

    assert_eq!(config.output_dir, PathBuf::from("results"));
    assert_eq!(config.random_seed, Some(123));
    assert_eq!(config.time_unit, TimeUnit::Microseconds);
    assert!(!config.plot.enabled);
}

#[test]
fn test_runs_bubble_at_ceiling_only() {
    let compare = CompareConfig::default();
    assert!(compare.runs_bubble(15_000));
    assert!(!compare.runs_bubble(15_001));
}

#[test]
fn test_validate_rejects_absent_target_in_domain() {
    let compare = CompareConfig {
        absent_target: 50,
        ..CompareConfig::default()
    };
    assert!(matches!(compare.validate(), Err(ConfigError::Invalid(_))));
}

#[test]
fn test_validate_rejects_empty_domain() {
    let compare = CompareConfig {
        value_min: 10,
        value_max: 1,
        ..CompareConfig::default()
    };
    assert!(compare.validate().is_err());
}

#[test]
fn test_validate_rejects_empty_schedules() {
    let compare = CompareConfig {
        small_sizes: vec![],
        large_sizes: vec![],
        ..CompareConfig::default()
    };
    assert!(compare.validate().is_err());

    let matrix = MatrixConfig {
        sizes: vec![],
        ..MatrixConfig::default()
    };
    assert!(matrix.validate().is_err());
}

#[test]
fn test_validate_rejects_zero_size_and_step() {
    let matrix = MatrixConfig {
        sizes: vec![0, 10],
        theory_step: 5,
    };
    assert!(matrix.validate().is_err());

    let matrix = MatrixConfig {
        sizes: vec![10],
        theory_step: 0,
    };
    assert!(matrix.validate().is_err());
}

#[test]
fn test_load_picks_format_by_extension() {
    let mut yaml = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
    writeln!(yaml, "random_seed: 99").unwrap();
    assert_eq!(BenchConfig::load(yaml.path()).unwrap().random_seed, Some(99));

    let mut toml = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    writeln!(toml, "random_seed = 98").unwrap();
    assert_eq!(BenchConfig::load(toml.path()).unwrap().random_seed, Some(98));
}

#[test]
fn test_load_runs_validation() {
    let mut toml = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    writeln!(toml, "[matrix]\ntheory_step = 0").unwrap();
    assert!(matches!(
        BenchConfig::load(toml.path()),
        Err(ConfigError::Invalid(_))
    ));
}

#[test]
fn test_missing_file_is_io_error() {
    assert!(matches!(
        BenchConfig::load("/nonexistent/running-times.toml"),
        Err(ConfigError::Io(_))
    ));
}
