//! Currency Lookup - command line binary
//!
//! Resolves currencies against the process-wide registry.
//!
//! # Usage
//!
//! ```bash
//! currency-lookup code CHF
//! MONEY_PROVIDERS=iso currency-lookup --json locale de_CH
//! ```
//!
//! # Environment Variables
//!
//! * `MONEY_PROVIDERS` - Comma-separated built-in providers (default: iso)
//! * `MONEY_CLI_LOG_LEVEL` - Log level: trace, debug, info, warn, error (default: warn)
//! * `MONEY_CLI_JSON` - Print JSON by default (default: false)
//! * `RUST_LOG` - Overrides the log filter

use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use interface_cli::{config::CliConfig, run, Cli};
use domain_currency::currencies;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> anyhow::Result<ExitCode> {
    // Load .env file if present (useful for local development)
    dotenvy::dotenv().ok();

    let config = load_config();
    init_tracing(&config.log_level);

    let cli = Cli::parse();
    let json = cli.json || config.json;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let code = match run(&cli.command, json, currencies::registry(), &mut out) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::debug!(error = ?err, "Command failed");
            eprintln!("error: {}", err);
            ExitCode::from(err.exit_code() as u8)
        }
    };
    out.flush().context("Failed to flush standard output")?;

    Ok(code)
}

/// Loads CLI configuration from the environment, falling back to defaults.
fn load_config() -> CliConfig {
    CliConfig::from_env().unwrap_or_else(|err| {
        eprintln!("warning: ignoring invalid configuration: {}", err);
        CliConfig::default()
    })
}

/// Initializes the tracing subscriber, logging to stderr.
///
/// # Arguments
///
/// * `log_level` - The minimum log level to output (trace, debug, info, warn, error)
fn init_tracing(log_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(log_level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(true)
                .with_writer(io::stderr),
        )
        .init();
}
