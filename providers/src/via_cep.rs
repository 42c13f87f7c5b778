//! ViaCEP client.
//!
//! Same control flow as [`crate::brazil_api`]; only the endpoint template
//! and the response shape differ. ViaCEP answers unknown postcodes with
//! `{"erro": true}`, which decodes into an empty record rather than
//! failing, so callers see empty address fields instead of an error.

use std::time::Duration;

use buscacep_types::{Cep, Provider, ViaCepAddress};
use url::Url;

use crate::{DEFAULT_REQUEST_TIMEOUT, LookupError, VIA_CEP_BASE_URL};

const PROVIDER: Provider = Provider::ViaCep;

/// Performs one `GET /ws/{cep}/json/` against ViaCEP.
#[derive(Debug, Clone)]
pub struct ViaCepClient {
    http: reqwest::Client,
    base_url: Url,
    request_timeout: Duration,
}

impl ViaCepClient {
    #[must_use]
    pub fn new(http: reqwest::Client) -> Self {
        Self {
            http,
            base_url: Url::parse(VIA_CEP_BASE_URL).expect("canonical base URL parses"),
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
        url.set_path(&format!("/ws/{cep}/json/"));
        url
    }

    /// One bounded GET, decoded as [`ViaCepAddress`].
    ///
    /// The response status is not checked; an upstream error page fails
    /// JSON decode instead.
    pub async fn fetch(&self, cep: &Cep) -> Result<ViaCepAddress, LookupError> {
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
            .json::<ViaCepAddress>()
            .await
            .map_err(|e| LookupError::classify(PROVIDER, self.request_timeout, e))
    }
}

#[cfg(test)]
mod tests {
    use super::{Cep, Url, ViaCepClient};
    use crate::http_client;

    #[test]
    fn endpoint_interpolates_the_postcode() {
        let client = ViaCepClient::new(http_client().unwrap());
        let url = client.endpoint(&Cep::new("70200001").unwrap());
        assert_eq!(url.as_str(), "http://viacep.com.br/ws/70200001/json/");
    }

    #[test]
    fn endpoint_respects_base_url_override() {
        let client = ViaCepClient::new(http_client().unwrap())
            .with_base_url(Url::parse("http://127.0.0.1:9999").unwrap());
        let url = client.endpoint(&Cep::new("01001000").unwrap());
        assert_eq!(url.as_str(), "http://127.0.0.1:9999/ws/01001000/json/");
    }
}
