//! Core domain types for buscacep.
//!
//! This crate contains pure domain types with no IO, no async, and minimal
//! dependencies: the postal code newtype, the provider enumeration, the
//! per-provider address records, and the outcome of a lookup race.

mod address;
mod outcome;
mod provider;

pub use address::{Address, BrazilApiAddress, ViaCepAddress};
pub use outcome::RaceOutcome;
pub use provider::Provider;

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A postal code (CEP) as supplied by the caller.
///
/// The inner string is opaque: construction only rejects empty or
/// whitespace-only input. Format validation beyond that is the concern of
/// the provider receiving the code, not of this type.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Cep(String);

#[derive(Debug, Error)]
#[error("postal code must not be empty")]
pub struct EmptyCepError;

impl Cep {
    pub fn new(value: impl Into<String>) -> Result<Self, EmptyCepError> {
        let value = value.into();
        if value.trim().is_empty() {
            Err(EmptyCepError)
        } else {
            Ok(Self(value))
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl TryFrom<String> for Cep {
    type Error = EmptyCepError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for Cep {
    type Error = EmptyCepError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Cep> for String {
    fn from(value: Cep) -> Self {
        value.0
    }
}

impl AsRef<str> for Cep {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for Cep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::Cep;

    #[test]
    fn cep_rejects_empty_input() {
        assert!(Cep::new("").is_err());
    }

    #[test]
    fn cep_rejects_whitespace_only_input() {
        assert!(Cep::new("   ").is_err());
    }

    #[test]
    fn cep_preserves_input_verbatim() {
        let cep = Cep::new("70200-001").unwrap();
        assert_eq!(cep.as_str(), "70200-001");
    }

    #[test]
    fn cep_round_trips_through_serde() {
        let cep = Cep::new("70200001").unwrap();
        let json = serde_json::to_string(&cep).unwrap();
        assert_eq!(json, "\"70200001\"");
        let back: Cep = serde_json::from_str(&json).unwrap();
        assert_eq!(back, cep);
    }

    #[test]
    fn cep_serde_rejects_empty_string() {
        assert!(serde_json::from_str::<Cep>("\"\"").is_err());
    }
}
