//! BrasilAPI CEP client.

use std::time::Duration;

use buscacep_types::{BrazilApiAddress, Cep, Provider};
use url::Url;

use crate::{BRAZIL_API_BASE_URL, DEFAULT_REQUEST_TIMEOUT, LookupError};

const PROVIDER: Provider = Provider::BrazilApi;

/// Performs one `GET /api/cep/v1/{cep}` against BrasilAPI.
#[derive(Debug, Clone)]
pub struct BrazilApiClient {
    http: reqwest::Client,
    base_url: Url,
    request_timeout: Duration,
}

impl BrazilApiClient {
    #[must_use]
    pub fn new(http: reqwest::Client) -> Self {
        Self {
            http,
            base_url: Url::parse(BRAZIL_API_BASE_URL).expect("canonical base URL parses"),
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }

    /// Point the client at a different host. Tests use a local mock server.
    #[must_use]
    pub fn with_base_url(mut self, base_url: Url) -> Self {
        self.base_url = base_url;
        self
    }

    #[must_use]
    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    fn endpoint(&self, cep: &Cep) -> Url {
        let mut url = self.base_url.clone();
        url.set_path(&format!("/api/cep/v1/{cep}"));
        url
    }

    /// One bounded GET, decoded as [`BrazilApiAddress`].
    ///
    /// The response status is not checked; an upstream error page fails
    /// JSON decode instead.
    pub async fn fetch(&self, cep: &Cep) -> Result<BrazilApiAddress, LookupError> {
        let url = self.endpoint(cep);
        tracing::debug!(%url, provider = %PROVIDER, "looking up postcode");

        let response = self
            .http
            .get(url)
            .timeout(self.request_timeout)
            .send()
            .await
            .map_err(|e| LookupError::classify(PROVIDER, self.request_timeout, e))?;

        response
            .json::<BrazilApiAddress>()
            .await
            .map_err(|e| LookupError::classify(PROVIDER, self.request_timeout, e))
    }
}

#[cfg(test)]
mod tests {
    use super::{BrazilApiClient, Cep, Url};
    use crate::http_client;

    #[test]
    fn endpoint_interpolates_the_postcode() {
        let client = BrazilApiClient::new(http_client().unwrap());
        let url = client.endpoint(&Cep::new("70200001").unwrap());
        assert_eq!(url.as_str(), "https://brasilapi.com.br/api/cep/v1/70200001");
    }

    #[test]
    fn endpoint_respects_base_url_override() {
        let client = BrazilApiClient::new(http_client().unwrap())
            .with_base_url(Url::parse("http://127.0.0.1:9999").unwrap());
        let url = client.endpoint(&Cep::new("01001000").unwrap());
        assert_eq!(url.as_str(), "http://127.0.0.1:9999/api/cep/v1/01001000");
    }
}
