//! Locale value object
//!
//! Locales are used as lookup keys for currencies. Only the language and
//! country parts are modelled. Countries are not validated against any
//! region list, so test regions such as `TEST1L` are representable.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;

/// A language/country pair
///
/// The language is stored lower-case and the country upper-case; either may
/// be empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "LocaleRepr")]
pub struct Locale {
    language: String,
    country: String,
}

/// Wire form of a locale; normalised through [`Locale::new`] on the way in
#[derive(Deserialize)]
struct LocaleRepr {
    #[serde(default)]
    language: String,
    #[serde(default)]
    country: String,
}

impl From<LocaleRepr> for Locale {
    fn from(repr: LocaleRepr) -> Self {
        Locale::new(repr.language, repr.country)
    }
}

impl Locale {
    pub fn new(language: impl AsRef<str>, country: impl AsRef<str>) -> Self {
        Self {
            language: language.as_ref().trim().to_lowercase(),
            country: country.as_ref().trim().to_uppercase(),
        }
    }

    /// Creates a locale that only names a country
    pub fn for_country(country: impl AsRef<str>) -> Self {
        Self::new("", country)
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn country(&self) -> &str {
        &self.country
    }

    /// Returns true if neither language nor country is set
    pub fn is_root(&self) -> bool {
        self.language.is_empty() && self.country.is_empty()
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.country.is_empty() {
            write!(f, "{}", self.language)
        } else {
            write!(f, "{}_{}", self.language, self.country)
        }
    }
}

impl FromStr for Locale {
    type Err = CoreError;

    /// Parses `zh_CN`, `zh-CN`, `_CH` or a bare language such as `de`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.trim().splitn(2, ['_', '-']);
        let language = parts.next().unwrap_or_default();
        let country = parts.next().unwrap_or_default();

        if country.contains(['_', '-']) {
            return Err(CoreError::invalid_argument(format!(
                "locale variants are not supported: {}",
                s
            )));
        }

        Ok(Self::new(language, country))
    }
}
