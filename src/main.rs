//! collatz-tail CLI entry point.

use anyhow::{Context, Result};
use clap::Parser;

use collatz_tail::cli::{commands, handle_error, Cli, Commands};
use collatz_tail::infrastructure::config::ConfigLoader;
use collatz_tail::infrastructure::logging::{raise_level, LogConfig, LoggerImpl};

fn main() {
    let cli = Cli::parse();
    let json = cli.json;

    if let Err(err) = run(cli) {
        handle_error(err, json);
    }
}

fn run(cli: Cli) -> Result<()> {
    let mut config = ConfigLoader::load(cli.config.as_deref())?;
    config.logging.level = raise_level(&config.logging.level, cli.verbose);
    ConfigLoader::validate_logging(&config.logging).context("Invalid logging configuration")?;

    let log_config = LogConfig::try_from(&config.logging)?;
    let _logger = LoggerImpl::init(&log_config)?;

    match cli.command {
        Commands::Scan(args) => commands::scan::execute(args, &config, cli.json),
        Commands::Trace(args) => commands::trace::execute(args, &config, cli.json),
    }
}
