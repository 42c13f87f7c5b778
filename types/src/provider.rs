//! Enumeration of the external lookup services.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One external address-lookup service with its own endpoint and schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Provider {
    BrazilApi,
    ViaCep,
}

impl Provider {
    /// Every provider that takes part in a lookup race.
    pub const ALL: [Provider; 2] = [Provider::BrazilApi, Provider::ViaCep];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Provider::BrazilApi => "brazilapi",
            Provider::ViaCep => "viacep",
        }
    }

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Provider::BrazilApi => "BrazilApi",
            Provider::ViaCep => "ViaCep",
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::Provider;

    #[test]
    fn stable_names() {
        assert_eq!(Provider::BrazilApi.as_str(), "brazilapi");
        assert_eq!(Provider::ViaCep.as_str(), "viacep");
    }

    #[test]
    fn display_uses_stable_name() {
        assert_eq!(Provider::BrazilApi.to_string(), "brazilapi");
    }

    #[test]
    fn all_lists_every_provider_once() {
        assert_eq!(Provider::ALL.len(), 2);
        assert_ne!(Provider::ALL[0], Provider::ALL[1]);
    }

    #[test]
    fn serde_round_trips_variant_names() {
        let json = serde_json::to_string(&Provider::BrazilApi).unwrap();
        assert_eq!(json, "\"BrazilApi\"");
        let back: Provider = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Provider::BrazilApi);
    }
}
