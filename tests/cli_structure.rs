use clap::Parser;
use num_bigint::BigUint;
use std::path::PathBuf;

use collatz_tail::cli::{Cli, Commands};
use collatz_tail::domain::models::TailMetric;

#[test]
fn test_cli_help() {
    let result = Cli::try_parse_from(vec!["collatz-tail", "--help"]);
    assert!(result.is_err()); // --help causes early exit with error
}

#[test]
fn test_cli_version() {
    let result = Cli::try_parse_from(vec!["collatz-tail", "--version"]);
    assert!(result.is_err());
}

#[test]
fn test_subcommand_required() {
    assert!(Cli::try_parse_from(vec!["collatz-tail"]).is_err());
}

// ============================================================================
// Global Options Tests
// ============================================================================

#[test]
fn test_global_defaults() {
    let cli = temp_env::with_var_unset("COLLATZ_TAIL_CONFIG", || {
        Cli::try_parse_from(vec!["collatz-tail", "scan"]).unwrap()
    });

    assert_eq!(cli.config, None);
    assert!(!cli.json);
    assert_eq!(cli.verbose, 0);
}

#[test]
fn test_global_options_after_subcommand() {
    let cli = Cli::try_parse_from(vec![
        "collatz-tail",
        "scan",
        "--json",
        "-vv",
        "--config",
        "/custom/collatz-tail.yaml",
    ])
    .unwrap();

    assert!(cli.json);
    assert_eq!(cli.verbose, 2);
    assert_eq!(cli.config, Some(PathBuf::from("/custom/collatz-tail.yaml")));
}

#[test]
fn test_config_from_env() {
    let cli = temp_env::with_var("COLLATZ_TAIL_CONFIG", Some("/env/config.yaml"), || {
        Cli::try_parse_from(vec!["collatz-tail", "scan"]).unwrap()
    });

    assert_eq!(cli.config, Some(PathBuf::from("/env/config.yaml")));
}

// ============================================================================
// Scan Command Tests
// ============================================================================

#[test]
fn test_scan_defaults() {
    let cli = Cli::try_parse_from(vec!["collatz-tail", "scan"]).unwrap();

    match cli.command {
        Commands::Scan(args) => {
            assert_eq!(args.bits, None);
            assert_eq!(args.metric, None);
            assert_eq!(args.max_iterations, None);
            assert!(!args.failures_only);
            assert!(!args.no_progress);
        }
        Commands::Trace(_) => panic!("Expected Scan command"),
    }
}

#[test]
fn test_scan_all_flags() {
    let cli = Cli::try_parse_from(vec![
        "collatz-tail",
        "scan",
        "-k",
        "12",
        "--metric",
        "total-tail",
        "--max-iterations",
        "500",
        "--failures-only",
        "--no-progress",
    ])
    .unwrap();

    match cli.command {
        Commands::Scan(args) => {
            assert_eq!(args.bits, Some(12));
            assert_eq!(args.metric, Some(TailMetric::TotalTail));
            assert_eq!(args.max_iterations, Some(500));
            assert!(args.failures_only);
            assert!(args.no_progress);
        }
        Commands::Trace(_) => panic!("Expected Scan command"),
    }
}

#[test]
fn test_scan_rejects_unknown_metric() {
    let result = Cli::try_parse_from(vec!["collatz-tail", "scan", "--metric", "head"]);
    assert!(result.is_err());
}

#[test]
fn test_scan_rejects_negative_bits() {
    let result = Cli::try_parse_from(vec!["collatz-tail", "scan", "--bits", "-3"]);
    assert!(result.is_err());
}

// ============================================================================
// Trace Command Tests
// ============================================================================

#[test]
fn test_trace_big_start() {
    let digits = "340282366920938463463374607431768211455";
    let cli = Cli::try_parse_from(vec!["collatz-tail", "trace", digits, "--bits", "128"]).unwrap();

    match cli.command {
        Commands::Trace(args) => {
            assert_eq!(args.start, digits.parse::<BigUint>().unwrap());
            assert_eq!(args.bits, Some(128));
            assert_eq!(args.max_iterations, None);
        }
        Commands::Scan(_) => panic!("Expected Trace command"),
    }
}

#[test]
fn test_trace_requires_start() {
    assert!(Cli::try_parse_from(vec!["collatz-tail", "trace"]).is_err());
}

#[test]
fn test_trace_rejects_non_numeric_start() {
    assert!(Cli::try_parse_from(vec!["collatz-tail", "trace", "seven"]).is_err());
}
