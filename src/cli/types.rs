//! CLI type definitions
//!
//! This module contains clap command structures that define the CLI interface.

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};

use super::commands::scan::ScanArgs;
use super::commands::trace::TraceArgs;

#[derive(Parser, Debug)]
#[command(name = "collatz-tail")]
#[command(about = "Analyze Collatz tail collapse vs head growth for odd numbers", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to a YAML config file
    #[arg(short, long, global = true, env = "COLLATZ_TAIL_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output in JSON format
    #[arg(short, long, global = true)]
    pub json: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Scan every odd k-bit number for tail-collapse dominance
    Scan(ScanArgs),

    /// Follow a single start value step by step
    Trace(TraceArgs),
}
