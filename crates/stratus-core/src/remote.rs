//! Collaborator contracts consumed by the login pipeline.
//!
//! HTTP clients in `stratus-remote` implement these against a live platform;
//! tests implement them with scripted doubles.

use crate::error::RemoteError;
use crate::model::{Endpoint, EndpointInfo, Organization, Space, TokenGrant};
use crate::prompt::{Credentials, PromptCatalog};

/// Borrowed view of the connection state a remote call needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ApiConnection<'a> {
    pub api_endpoint: &'a str,
    pub auth_endpoint: &'a str,
    pub uaa_endpoint: &'a str,
    pub access_token: &'a str,
    pub skip_ssl_validation: bool,
}

/// Reads the platform info document for an endpoint.
pub trait EndpointProbe {
    fn probe(&self, endpoint: &Endpoint) -> Result<EndpointInfo, RemoteError>;
}

/// Public trait `Authenticator` in `stratus-core`.
pub trait Authenticator {
    fn fetch_prompts(&self, connection: &ApiConnection<'_>) -> Result<PromptCatalog, RemoteError>;

    fn authenticate(
        &self,
        connection: &ApiConnection<'_>,
        credentials: &Credentials,
    ) -> Result<TokenGrant, RemoteError>;
}

/// Organization and space lookups against the platform API.
///
/// `find_*_by_name` return `RemoteError::NotFound` when nothing matches.
pub trait Directory {
    fn list_organizations(
        &self,
        connection: &ApiConnection<'_>,
        page_size: usize,
    ) -> Result<Vec<Organization>, RemoteError>;

    fn list_spaces(
        &self,
        connection: &ApiConnection<'_>,
        organization: &Organization,
        page_size: usize,
    ) -> Result<Vec<Space>, RemoteError>;

    fn find_organization_by_name(
        &self,
        connection: &ApiConnection<'_>,
        name: &str,
    ) -> Result<Organization, RemoteError>;

    fn find_space_by_name(
        &self,
        connection: &ApiConnection<'_>,
        organization: &Organization,
        name: &str,
    ) -> Result<Space, RemoteError>;
}
