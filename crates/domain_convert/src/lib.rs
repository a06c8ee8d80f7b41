//! Conversion Domain
//!
//! Describes exchange rate providers:
//! - `RateType` classifies the kind of rates a provider supplies
//! - `ProviderContext` bundles a provider name with its supported rate types

pub mod provider_context;
pub mod rate_type;

pub use provider_context::{ProviderContext, ProviderContextBuilder};
pub use rate_type::{RateType, RateTypeParseError};
