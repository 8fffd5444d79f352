use std::collections::BTreeMap;

use serde::Deserialize;
use stratus_core::{
    ApiConnection, Authenticator, Credentials, PromptCatalog, PromptKind, PromptSpec, RemoteError,
    TokenGrant,
};

use crate::http::{decode_json, join_url, status_error, transport_error, HttpSettings};

pub const CREDENTIALS_REJECTED_MESSAGE: &str = "Credentials were rejected, please try again.";
const CLI_CLIENT_ID: &str = "cf";

#[derive(Debug, Deserialize)]
struct LoginInfoDocument {
    #[serde(default)]
    prompts: BTreeMap<String, (String, String)>,
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    #[serde(default)]
    refresh_token: String,
}

#[derive(Debug, Deserialize)]
struct TokenErrorResponse {
    #[serde(default)]
    error: String,
    #[serde(default)]
    error_description: String,
}

/// Login-server prompt discovery plus password-grant token requests.
#[derive(Debug, Clone, Default)]
pub struct UaaAuthenticator {
    settings: HttpSettings,
}

impl UaaAuthenticator {
    pub fn new(settings: HttpSettings) -> Self {
        Self { settings }
    }
}

fn token_error_message(status: u16, body: &str) -> Option<String> {
    let parsed = serde_json::from_str::<TokenErrorResponse>(body).ok()?;
    let message = if parsed.error_description.trim().is_empty() {
        parsed.error
    } else {
        parsed.error_description
    };
    (!message.trim().is_empty()).then(|| format!("{message} (status {status})"))
}

impl Authenticator for UaaAuthenticator {
    fn fetch_prompts(&self, connection: &ApiConnection<'_>) -> Result<PromptCatalog, RemoteError> {
        let url = join_url(connection.auth_endpoint, "/login");
        let client = self.settings.client(connection.skip_ssl_validation)?;
        let response = client
            .get(&url)
            .header("Accept", "application/json")
            .send()
            .map_err(|error| transport_error(&url, error))?;
        let document = decode_json::<LoginInfoDocument>(response)?;
        let catalog = document
            .prompts
            .into_iter()
            .map(|(name, (kind, label))| PromptSpec::new(name, PromptKind::from_wire(&kind), label))
            .collect::<PromptCatalog>();
        tracing::debug!(prompts = catalog.len(), "fetched login prompts");
        Ok(catalog)
    }

    fn authenticate(
        &self,
        connection: &ApiConnection<'_>,
        credentials: &Credentials,
    ) -> Result<TokenGrant, RemoteError> {
        let url = join_url(connection.uaa_endpoint, "/oauth/token");
        let client = self.settings.client(connection.skip_ssl_validation)?;
        let mut form = vec![("grant_type", "password")];
        form.extend(credentials.iter());
        let response = client
            .post(&url)
            .basic_auth(CLI_CLIENT_ID, Some(""))
            .header("Accept", "application/json")
            .form(&form)
            .send()
            .map_err(|error| transport_error(&url, error))?;

        let status = response.status();
        if status == reqwest::StatusCode::UNAUTHORIZED {
            tracing::debug!("token request rejected");
            return Err(RemoteError::Rejected(CREDENTIALS_REJECTED_MESSAGE.to_string()));
        }
        if !status.is_success() {
            return Err(match status_error(response) {
                RemoteError::Status { status, body } => match token_error_message(status, &body) {
                    Some(message) => RemoteError::Rejected(message),
                    None => RemoteError::Status { status, body },
                },
                other => other,
            });
        }
        let token = decode_json::<TokenResponse>(response)?;
        Ok(TokenGrant {
            access_token: token.access_token,
            refresh_token: token.refresh_token,
        })
    }
}
