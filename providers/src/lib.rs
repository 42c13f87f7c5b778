//! HTTP clients for the external CEP lookup services.
//!
//! # Architecture
//!
//! The crate is organized around a provider dispatch pattern:
//!
//! - [`fetch_address`] - unified entry point that dispatches to a
//!   provider-specific client
//! - [`brazil_api`] - BrasilAPI client (`GET /api/cep/v1/{cep}`)
//! - [`via_cep`] - ViaCEP client (`GET /ws/{cep}/json/`)
//!
//! Both clients share the same control flow (build the URL, issue one GET
//! with a per-request deadline, decode the flat JSON body) and differ only
//! in endpoint and response shape. Neither retries, and neither inspects
//! the response status: an upstream error page simply fails JSON decode.
//!
//! # Transport
//!
//! The HTTP transport is an explicitly constructed [`reqwest::Client`],
//! injected when a provider client is built. Nothing in this crate reaches
//! for process-global state; tests point the same clients at a local mock
//! server via `with_base_url`.

pub mod brazil_api;
pub mod via_cep;

use std::time::Duration;

pub use brazil_api::BrazilApiClient;
pub use via_cep::ViaCepClient;

use buscacep_types::{Address, Cep, Provider};
use thiserror::Error;

/// Canonical BrasilAPI base URL.
pub const BRAZIL_API_BASE_URL: &str = "https://brasilapi.com.br";
/// Canonical ViaCEP base URL. The service is served over plain HTTP.
pub const VIA_CEP_BASE_URL: &str = "http://viacep.com.br";

const CONNECT_TIMEOUT_SECS: u64 = 30;

/// Default per-request deadline.
///
/// Deliberately much longer than any sane race deadline: in normal
/// operation the race resolves first, and this bound only matters when a
/// provider client is used outside a race.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// Why a provider dropped out of a lookup.
#[derive(Debug, Error)]
pub enum LookupError {
    #[error("{provider} request failed: {source}")]
    Network {
        provider: Provider,
        #[source]
        source: reqwest::Error,
    },

    #[error("{provider} did not answer within {timeout:?}")]
    Timeout {
        provider: Provider,
        timeout: Duration,
    },

    #[error("{provider} returned an undecodable body: {source}")]
    Decode {
        provider: Provider,
        #[source]
        source: reqwest::Error,
    },
}

impl LookupError {
    /// The provider that failed.
    #[must_use]
    pub const fn provider(&self) -> Provider {
        match self {
            LookupError::Network { provider, .. }
            | LookupError::Timeout { provider, .. }
            | LookupError::Decode { provider, .. } => *provider,
        }
    }

    pub(crate) fn classify(provider: Provider, timeout: Duration, source: reqwest::Error) -> Self {
        if source.is_timeout() {
            LookupError::Timeout { provider, timeout }
        } else if source.is_decode() {
            LookupError::Decode { provider, source }
        } else {
            LookupError::Network { provider, source }
        }
    }
}

/// Build the HTTP transport shared by the provider clients.
///
/// Construction is explicit so the caller owns the client; the same
/// `reqwest::Client` can be handed to every provider (cloning it is cheap,
/// the connection pool is shared).
pub fn http_client() -> Result<reqwest::Client, reqwest::Error> {
    reqwest::Client::builder()
        .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
        .redirect(reqwest::redirect::Policy::none())
        .build()
}

/// One client per provider, bundled for dispatch.
#[derive(Debug, Clone)]
pub struct AddressClients {
    pub brazil_api: BrazilApiClient,
    pub via_cep: ViaCepClient,
}

impl AddressClients {
    #[must_use]
    pub fn new(http: reqwest::Client) -> Self {
        Self {
            brazil_api: BrazilApiClient::new(http.clone()),
            via_cep: ViaCepClient::new(http),
        }
    }
}

/// Fetch an address from one provider, wrapped into the polymorphic
/// [`Address`].
pub async fn fetch_address(
    clients: &AddressClients,
    provider: Provider,
    cep: &Cep,
) -> Result<Address, LookupError> {
    match provider {
        Provider::BrazilApi => clients.brazil_api.fetch(cep).await.map(Address::from),
        Provider::ViaCep => clients.via_cep.fetch(cep).await.map(Address::from),
    }
}
