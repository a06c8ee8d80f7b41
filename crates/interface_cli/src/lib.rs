//! Command Line Interface
//!
//! This crate provides the `currency-lookup` tool.
//!
//! # Architecture
//!
//! - **Commands**: clap-derived arguments, executed by [`run`]
//! - **DTOs**: serializable views of currencies and provider contexts
//! - **Error Handling**: [`CliError`] with exit codes separating malformed
//!   input from absent data
//!
//! # Example
//!
//! ```bash
//! currency-lookup code CHF EUR
//! currency-lookup --json locale de_CH
//! currency-lookup context --provider ECB --rate-type deferred,historic
//! ```

pub mod config;
pub mod dto;
pub mod error;

use std::io::Write;

use clap::{Parser, Subcommand};
use serde::Serialize;

use core_kernel::Locale;
use domain_convert::{ProviderContextBuilder, RateType};
use domain_currency::CurrencyRegistry;

use crate::dto::{CurrencyView, ProviderContextView};
pub use crate::error::CliError;

#[derive(Debug, Parser)]
#[command(name = "currency-lookup", version, about = "Resolve currencies and assemble provider contexts")]
pub struct Cli {
    /// Print JSON instead of plain text
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Resolve currencies by code
    Code {
        #[arg(required = true)]
        codes: Vec<String>,
    },
    /// List the currencies used in a locale, e.g. `de_CH` or `_TEST1L`
    Locale { locale: String },
    /// List every currency the providers can enumerate
    List,
    /// List registered providers in chain order
    Providers,
    /// Build a provider context from a name and rate types
    Context {
        #[arg(long)]
        provider: Option<String>,
        #[arg(long = "rate-type", value_delimiter = ',')]
        rate_types: Option<Vec<String>>,
    },
}

/// Executes a command against the registry, writing results to `out`
///
/// # Errors
///
/// Returns an error for unknown codes, malformed locales or rate types,
/// incomplete provider contexts, or when writing fails.
pub fn run<W: Write>(
    command: &Command,
    json: bool,
    registry: &CurrencyRegistry,
    out: &mut W,
) -> Result<(), CliError> {
    tracing::debug!(?command, "Running command");

    match command {
        Command::Code { codes } => {
            let views = codes
                .iter()
                .map(|code| registry.resolve_by_code(code).map(|unit| CurrencyView::from(&unit)))
                .collect::<Result<Vec<_>, _>>()?;
            write_currencies(out, json, &views)
        }
        Command::Locale { locale } => {
            let locale: Locale = locale.parse()?;
            let views: Vec<CurrencyView> = registry
                .resolve_by_locale(&locale)
                .iter()
                .map(CurrencyView::from)
                .collect();
            write_currencies(out, json, &views)
        }
        Command::List => {
            let views: Vec<CurrencyView> = registry.currencies().iter().map(CurrencyView::from).collect();
            write_currencies(out, json, &views)
        }
        Command::Providers => {
            let names = registry.provider_names();
            if json {
                write_json(out, &names)
            } else {
                for name in names {
                    writeln!(out, "{}", name)?;
                }
                Ok(())
            }
        }
        Command::Context { provider, rate_types } => {
            let rate_types = rate_types
                .as_ref()
                .map(|values| {
                    values
                        .iter()
                        .map(|value| value.parse::<RateType>())
                        .collect::<Result<Vec<_>, _>>()
                })
                .transpose()?;
            let context = ProviderContextBuilder::try_new(provider.clone(), rate_types)?.build();

            if json {
                write_json(out, &ProviderContextView::from(&context))
            } else {
                writeln!(out, "{}", context)?;
                Ok(())
            }
        }
    }
}

fn write_currencies<W: Write>(out: &mut W, json: bool, views: &[CurrencyView]) -> Result<(), CliError> {
    if json {
        return write_json(out, &views);
    }
    for view in views {
        let numeric = view
            .numeric_code
            .map(|n| format!("{:03}", n))
            .unwrap_or_else(|| "-".to_string());
        writeln!(
            out,
            "{}\t{}\t{}\t{}",
            view.code, numeric, view.default_fraction_digits, view.provider
        )?;
    }
    Ok(())
}

fn write_json<W: Write, T: Serialize + ?Sized>(out: &mut W, value: &T) -> Result<(), CliError> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}
