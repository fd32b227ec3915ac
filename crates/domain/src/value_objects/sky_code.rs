//! Sky-condition code value object
//!
//! A weather symbol token as published by MET Norway, e.g. `clearsky_day`,
//! `partlycloudy_night` or `lightrainshowers_day`. Codes are stored trimmed
//! and lowercased.
//!
//! # Examples
//!
//! ```
//! use domain::value_objects::SkyCode;
//!
//! let code = SkyCode::new("PartlyCloudy_Day").expect("valid code");
//! assert_eq!(code.as_str(), "partlycloudy_day");
//! assert!(SkyCode::new("   ").is_err());
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::DomainError;

/// A non-empty, normalized sky-condition token
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SkyCode(String);

impl SkyCode {
    /// Create a sky code from a raw token
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidSkyCode` if the token is blank.
    pub fn new(raw: impl AsRef<str>) -> Result<Self, DomainError> {
        let raw = raw.as_ref();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(DomainError::InvalidSkyCode(raw.to_string()));
        }
        Ok(Self(trimmed.to_lowercase()))
    }

    /// Get the code as a string slice
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the code starts with any of the given tokens
    #[must_use]
    pub fn starts_with_any<S: AsRef<str>>(&self, tokens: &[S]) -> bool {
        tokens.iter().any(|t| self.0.starts_with(t.as_ref()))
    }

    /// Whether the code contains any of the given tokens
    #[must_use]
    pub fn contains_any<S: AsRef<str>>(&self, tokens: &[S]) -> bool {
        tokens.iter().any(|t| self.0.contains(t.as_ref()))
    }
}

impl fmt::Display for SkyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for SkyCode {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for SkyCode {
    type Error = DomainError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<SkyCode> for String {
    fn from(code: SkyCode) -> Self {
        code.0
    }
}
