use serde::Deserialize;
use stratus_core::{Endpoint, EndpointInfo, EndpointProbe, RemoteError};

use crate::http::{decode_json, join_url, transport_error, HttpSettings};

#[derive(Debug, Deserialize)]
struct InfoDocument {
    #[serde(default)]
    api_version: String,
    #[serde(default)]
    authorization_endpoint: String,
    #[serde(default)]
    token_endpoint: String,
    #[serde(default)]
    doppler_logging_endpoint: String,
}

/// Reads `GET <api>/v2/info`.
#[derive(Debug, Clone, Default)]
pub struct InfoClient {
    settings: HttpSettings,
}

impl InfoClient {
    pub fn new(settings: HttpSettings) -> Self {
        Self { settings }
    }
}

/// The log-cache host sits next to the API host: `api.` becomes `log-cache.`.
fn log_cache_endpoint_for(api_endpoint: &str) -> String {
    api_endpoint.replacen("api", "log-cache", 1)
}

impl EndpointProbe for InfoClient {
    fn probe(&self, endpoint: &Endpoint) -> Result<EndpointInfo, RemoteError> {
        let url = join_url(&endpoint.url, "/v2/info");
        tracing::debug!(%url, "probing api endpoint");
        let client = self.settings.client(endpoint.skip_ssl_validation)?;
        let response = client
            .get(&url)
            .header("Accept", "application/json")
            .send()
            .map_err(|error| transport_error(&url, error))?;
        let document = decode_json::<InfoDocument>(response)?;
        if document.authorization_endpoint.trim().is_empty() {
            return Err(RemoteError::InvalidResponse(
                "info document is missing authorization_endpoint".to_string(),
            ));
        }
        let uaa_endpoint = if document.token_endpoint.trim().is_empty() {
            document.authorization_endpoint.clone()
        } else {
            document.token_endpoint
        };
        Ok(EndpointInfo {
            api_version: document.api_version,
            auth_endpoint: document.authorization_endpoint,
            uaa_endpoint,
            doppler_endpoint: document.doppler_logging_endpoint,
            log_cache_endpoint: log_cache_endpoint_for(&endpoint.url),
        })
    }
}
