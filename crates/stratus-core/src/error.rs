use thiserror::Error;

/// Failure reported by a remote collaborator (authenticator, directory, probe).
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RemoteError {
    #[error("request failed: {0}")]
    Transport(String),
    #[error("server returned non-success status {status}: {body}")]
    Status { status: u16, body: String },
    /// The server understood the request and refused the supplied credentials.
    /// The message is the server's own text and is shown to the user as-is.
    #[error("{0}")]
    Rejected(String),
    #[error("{0} not found")]
    NotFound(String),
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}

/// Terminal failures of the login pipeline.
///
/// Every variant is user-facing text; callers branch on the variant to pick
/// exit codes.
#[derive(Debug, Error)]
pub enum LoginError {
    #[error("Incorrect usage: --sso-passcode flag cannot be used with --sso")]
    ConflictingAuthMode,
    #[error("Service account currently logged in. Log out the service account and try again.")]
    ServiceAccountActive,
    #[error("Error reaching API endpoint {endpoint}\n{source}")]
    EndpointUnreachable {
        endpoint: String,
        #[source]
        source: RemoteError,
    },
    #[error("Error fetching login prompts\n{0}")]
    RemoteUnavailable(#[source] RemoteError),
    // Per-attempt server errors are shown before this is returned.
    #[error("Unable to authenticate.")]
    AuthenticationFailed,
    #[error("Error finding available orgs\n{0}")]
    OrganizationListing(#[source] RemoteError),
    #[error("Error finding available spaces\n{0}")]
    SpaceListing(#[source] RemoteError),
    #[error("Error finding org {name}\n{source}")]
    OrganizationNotFound {
        name: String,
        #[source]
        source: RemoteError,
    },
    #[error("Error finding space {name}\n{source}")]
    SpaceNotFound {
        name: String,
        #[source]
        source: RemoteError,
    },
    #[error("terminal interaction failed: {0}")]
    Terminal(#[from] std::io::Error),
}
