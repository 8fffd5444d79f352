use serde::{Deserialize, Serialize};
use stratus_core::{
    ApiConnection, EndpointInfo, Organization, Session, Space, TokenGrant,
    CLIENT_CREDENTIALS_GRANT_TYPE,
};

pub const SESSION_CONFIG_SCHEMA_VERSION: u32 = 1;

fn default_schema_version() -> u32 {
    SESSION_CONFIG_SCHEMA_VERSION
}

/// Process-level login context: the current endpoint, its tokens and target,
/// plus the remembered sessions for other endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SessionConfig {
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,
    #[serde(default)]
    pub api_endpoint: String,
    #[serde(default)]
    pub api_version: String,
    #[serde(default)]
    pub skip_ssl_validation: bool,
    #[serde(default)]
    pub auth_endpoint: String,
    #[serde(default)]
    pub uaa_endpoint: String,
    #[serde(default)]
    pub doppler_endpoint: String,
    #[serde(default)]
    pub log_cache_endpoint: String,
    #[serde(default)]
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: String,
    #[serde(default)]
    pub uaa_grant_type: String,
    #[serde(default)]
    pub organization: Option<Organization>,
    #[serde(default)]
    pub space: Option<Space>,
    #[serde(default)]
    pub instances: Vec<Session>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            schema_version: SESSION_CONFIG_SCHEMA_VERSION,
            api_endpoint: String::new(),
            api_version: String::new(),
            skip_ssl_validation: false,
            auth_endpoint: String::new(),
            uaa_endpoint: String::new(),
            doppler_endpoint: String::new(),
            log_cache_endpoint: String::new(),
            access_token: String::new(),
            refresh_token: String::new(),
            uaa_grant_type: String::new(),
            organization: None,
            space: None,
            instances: Vec::new(),
        }
    }
}

impl SessionConfig {
    /// Drops tokens and target. Endpoint data, grant type and history survive.
    pub fn clear_session(&mut self) {
        self.access_token.clear();
        self.refresh_token.clear();
        self.organization = None;
        self.space = None;
    }

    pub fn is_logged_in(&self) -> bool {
        !self.access_token.is_empty()
    }

    pub fn is_service_account_active(&self) -> bool {
        self.uaa_grant_type == CLIENT_CREDENTIALS_GRANT_TYPE
    }

    pub fn set_api_endpoint(&mut self, endpoint: &str, skip_ssl_validation: bool, info: EndpointInfo) {
        self.api_endpoint = endpoint.to_string();
        self.skip_ssl_validation = skip_ssl_validation;
        self.api_version = info.api_version;
        self.auth_endpoint = info.auth_endpoint;
        self.uaa_endpoint = info.uaa_endpoint;
        self.doppler_endpoint = info.doppler_endpoint;
        self.log_cache_endpoint = info.log_cache_endpoint;
    }

    pub fn record_grant(&mut self, grant: TokenGrant, grant_type: &str) {
        self.access_token = grant.access_token;
        self.refresh_token = grant.refresh_token;
        self.uaa_grant_type = grant_type.to_string();
    }

    /// Targets an org; any previously targeted space belonged to another org.
    pub fn set_organization(&mut self, organization: Organization) {
        self.organization = Some(organization);
        self.space = None;
    }

    pub fn set_space(&mut self, space: Space) {
        self.space = Some(space);
    }

    pub fn connection(&self) -> ApiConnection<'_> {
        ApiConnection {
            api_endpoint: &self.api_endpoint,
            auth_endpoint: &self.auth_endpoint,
            uaa_endpoint: &self.uaa_endpoint,
            access_token: &self.access_token,
            skip_ssl_validation: self.skip_ssl_validation,
        }
    }

    /// Snapshot of the current endpoint's state as a history record.
    pub fn current_session(&self) -> Session {
        Session {
            endpoint_url: self.api_endpoint.clone(),
            skip_ssl_validation: self.skip_ssl_validation,
            access_token: self.access_token.clone(),
            refresh_token: self.refresh_token.clone(),
            api_version: self.api_version.clone(),
            auth_endpoint: self.auth_endpoint.clone(),
            uaa_endpoint: self.uaa_endpoint.clone(),
            doppler_endpoint: self.doppler_endpoint.clone(),
            log_cache_endpoint: self.log_cache_endpoint.clone(),
            organization: self.organization.clone(),
            space: self.space.clone(),
        }
    }

    /// Makes a remembered session the current one without re-authenticating.
    /// The grant type is kept: every remembered session comes from a
    /// password or passcode login.
    pub fn restore_session(&mut self, session: &Session) {
        self.api_endpoint = session.endpoint_url.clone();
        self.skip_ssl_validation = session.skip_ssl_validation;
        self.access_token = session.access_token.clone();
        self.refresh_token = session.refresh_token.clone();
        self.api_version = session.api_version.clone();
        self.auth_endpoint = session.auth_endpoint.clone();
        self.uaa_endpoint = session.uaa_endpoint.clone();
        self.doppler_endpoint = session.doppler_endpoint.clone();
        self.log_cache_endpoint = session.log_cache_endpoint.clone();
        self.organization = session.organization.clone();
        self.space = session.space.clone();
    }
}
