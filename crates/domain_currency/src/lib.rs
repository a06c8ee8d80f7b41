//! Currency Domain
//!
//! This crate resolves currency units through a chain of providers:
//! - `ports`: the `CurrencyProvider` trait implemented by every data source
//! - `providers`: built-in ISO and in-memory providers
//! - `registry`: `CurrencyRegistry`, the ordered provider chain
//! - `currencies`: the process-wide registry and its query functions
//! - `config`: selection of built-in providers from the environment

pub mod config;
pub mod currencies;
pub mod error;
pub mod ports;
pub mod providers;
pub mod registry;

pub use config::RegistryConfig;
pub use error::CurrencyError;
pub use ports::CurrencyProvider;
pub use providers::{InMemoryCurrencyProvider, IsoCurrencyProvider};
pub use registry::CurrencyRegistry;
