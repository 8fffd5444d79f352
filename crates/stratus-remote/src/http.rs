use std::time::Duration;

use reqwest::blocking::{Client, Response};
use serde::de::DeserializeOwned;
use stratus_core::RemoteError;

pub const DEFAULT_HTTP_TIMEOUT_MS: u64 = 30_000;
const ERROR_BODY_PREVIEW_CHARS: usize = 240;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Transport settings shared by every platform client.
pub struct HttpSettings {
    pub timeout_ms: u64,
}

impl Default for HttpSettings {
    fn default() -> Self {
        Self {
            timeout_ms: DEFAULT_HTTP_TIMEOUT_MS,
        }
    }
}

impl HttpSettings {
    pub(crate) fn client(&self, skip_ssl_validation: bool) -> Result<Client, RemoteError> {
        Client::builder()
            .timeout(Duration::from_millis(self.timeout_ms.max(1)))
            .danger_accept_invalid_certs(skip_ssl_validation)
            .build()
            .map_err(|error| RemoteError::Transport(format!("failed to build http client: {error}")))
    }
}

pub(crate) fn transport_error(url: &str, error: reqwest::Error) -> RemoteError {
    RemoteError::Transport(format!("{url}: {error}"))
}

pub(crate) fn status_error(response: Response) -> RemoteError {
    let status = response.status().as_u16();
    let body = response.text().unwrap_or_default();
    RemoteError::Status {
        status,
        body: body.chars().take(ERROR_BODY_PREVIEW_CHARS).collect(),
    }
}

/// Decodes a successful JSON body or turns a non-2xx response into `RemoteError::Status`.
pub(crate) fn decode_json<T: DeserializeOwned>(response: Response) -> Result<T, RemoteError> {
    if !response.status().is_success() {
        return Err(status_error(response));
    }
    response
        .json::<T>()
        .map_err(|error| RemoteError::InvalidResponse(error.to_string()))
}

pub(crate) fn join_url(base: &str, path: &str) -> String {
    format!("{}{}", base.trim_end_matches('/'), path)
}
