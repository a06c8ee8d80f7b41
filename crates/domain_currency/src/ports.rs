//! Currency Provider Port
//!
//! Every source of currency data implements [`CurrencyProvider`]. The
//! registry treats providers as trait objects and knows nothing about how
//! they obtain their data.
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │              CurrencyRegistry               │
//! │   resolve_by_code / resolve_by_locale       │
//! └─────────────────────────────────────────────┘
//!                       │  registration order
//!         ┌─────────────┼──────────────┐
//!         ▼             ▼              ▼
//!   ┌───────────┐ ┌───────────┐ ┌─────────────┐
//!   │    iso    │ │ in-memory │ │   custom    │
//!   └───────────┘ └───────────┘ └─────────────┘
//! ```
//!
//! # Implementing a provider
//!
//! ```rust,ignore
//! struct CryptoProvider;
//!
//! impl CurrencyProvider for CryptoProvider {
//!     fn name(&self) -> &str {
//!         "crypto"
//!     }
//!
//!     fn currency(&self, code: &str) -> Option<CurrencyUnit> {
//!         (code == "BTC").then(|| bitcoin())
//!     }
//! }
//! ```

use core_kernel::{CurrencyUnit, Locale};

/// A source of currency units
///
/// "Not found" is expressed as `None` or an empty vector, never as an error.
/// Locale lookup and enumeration are optional; the default implementations
/// return nothing.
pub trait CurrencyProvider: Send + Sync + 'static {
    /// Unique name of this provider within a registry
    fn name(&self) -> &str;

    /// Looks up a currency by its code
    fn currency(&self, code: &str) -> Option<CurrencyUnit>;

    /// Returns the currencies used in the given locale
    fn currencies_for_locale(&self, _locale: &Locale) -> Vec<CurrencyUnit> {
        Vec::new()
    }

    /// Returns every currency this provider can enumerate
    fn currencies(&self) -> Vec<CurrencyUnit> {
        Vec::new()
    }
}
