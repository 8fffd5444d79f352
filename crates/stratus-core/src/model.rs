use serde::{Deserialize, Serialize};

/// Grant type recorded after an interactive (password or passcode) login.
pub const PASSWORD_GRANT_TYPE: &str = "password";
/// Grant type recorded when a service account logged in non-interactively.
pub const CLIENT_CREDENTIALS_GRANT_TYPE: &str = "client_credentials";

#[derive(Debug, Clone, PartialEq, Eq)]
/// API endpoint selected for a login; identity is the URL string.
pub struct Endpoint {
    pub url: String,
    pub skip_ssl_validation: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
/// Public struct `Organization` used across Stratus components.
pub struct Organization {
    pub guid: String,
    pub name: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
/// Public struct `Space` used across Stratus components.
pub struct Space {
    pub guid: String,
    pub name: String,
}

/// One remembered login: tokens plus the org/space targeted against a
/// single API endpoint.
///
/// `auth_endpoint` is the identity key inside a session history.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Session {
    pub endpoint_url: String,
    pub skip_ssl_validation: bool,
    pub access_token: String,
    pub refresh_token: String,
    pub api_version: String,
    pub auth_endpoint: String,
    pub uaa_endpoint: String,
    pub doppler_endpoint: String,
    pub log_cache_endpoint: String,
    pub organization: Option<Organization>,
    pub space: Option<Space>,
}

impl Session {
    pub fn identity_key(&self) -> &str {
        &self.auth_endpoint
    }
}

/// Endpoint metadata published by the platform's info document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EndpointInfo {
    pub api_version: String,
    pub auth_endpoint: String,
    pub uaa_endpoint: String,
    pub doppler_endpoint: String,
    pub log_cache_endpoint: String,
}

/// Tokens issued by a successful `authenticate` call.
#[derive(Clone, PartialEq, Eq)]
pub struct TokenGrant {
    pub access_token: String,
    pub refresh_token: String,
}

impl std::fmt::Debug for TokenGrant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenGrant")
            .field("access_token", &"[REDACTED]")
            .field("refresh_token", &"[REDACTED]")
            .finish()
    }
}
