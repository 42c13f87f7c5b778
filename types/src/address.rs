//! Per-provider address records and the polymorphic wrapper over them.
//!
//! Each provider answers with its own field set and the two shapes are
//! never unified into one schema. [`Address`] wraps both and exposes the
//! handful of fields callers actually display.
//!
//! Every record field decodes with a default: ViaCEP answers an unknown
//! postcode with a bare `{"erro": true}` that carries no address fields at
//! all, and such a body must still decode into an (empty) record.

use serde::{Deserialize, Serialize};

use crate::Provider;

/// Response shape of `GET brasilapi.com.br/api/cep/v1/{cep}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BrazilApiAddress {
    pub cep: String,
    pub state: String,
    pub city: String,
    pub neighborhood: String,
    pub street: String,
    /// Name of the upstream source BrasilAPI itself consulted.
    pub service: String,
}

/// Response shape of `GET viacep.com.br/ws/{cep}/json/`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViaCepAddress {
    pub cep: String,
    pub logradouro: String,
    pub complemento: String,
    pub bairro: String,
    pub localidade: String,
    pub uf: String,
    pub ibge: String,
    pub gia: String,
    pub ddd: String,
    pub siafi: String,
}

/// A decoded address from whichever provider produced it.
///
/// The accessors map each capability onto the variant's own field naming
/// (`street` is `logradouro` on ViaCEP, `city` is `localidade`, and so on).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Address {
    BrazilApi(BrazilApiAddress),
    ViaCep(ViaCepAddress),
}

impl Address {
    #[must_use]
    pub const fn provider(&self) -> Provider {
        match self {
            Address::BrazilApi(_) => Provider::BrazilApi,
            Address::ViaCep(_) => Provider::ViaCep,
        }
    }

    #[must_use]
    pub fn cep(&self) -> &str {
        match self {
            Address::BrazilApi(record) => &record.cep,
            Address::ViaCep(record) => &record.cep,
        }
    }

    #[must_use]
    pub fn street(&self) -> &str {
        match self {
            Address::BrazilApi(record) => &record.street,
            Address::ViaCep(record) => &record.logradouro,
        }
    }

    #[must_use]
    pub fn neighborhood(&self) -> &str {
        match self {
            Address::BrazilApi(record) => &record.neighborhood,
            Address::ViaCep(record) => &record.bairro,
        }
    }

    #[must_use]
    pub fn city(&self) -> &str {
        match self {
            Address::BrazilApi(record) => &record.city,
            Address::ViaCep(record) => &record.localidade,
        }
    }

    #[must_use]
    pub fn state(&self) -> &str {
        match self {
            Address::BrazilApi(record) => &record.state,
            Address::ViaCep(record) => &record.uf,
        }
    }
}

impl From<BrazilApiAddress> for Address {
    fn from(record: BrazilApiAddress) -> Self {
        Address::BrazilApi(record)
    }
}

impl From<ViaCepAddress> for Address {
    fn from(record: ViaCepAddress) -> Self {
        Address::ViaCep(record)
    }
}
