//! Blocking HTTP implementations of the Stratus collaborator traits.
//!
//! `InfoClient` reads `/v2/info`, `UaaAuthenticator` talks to the login and
//! token servers, and `CloudControllerDirectory` lists and finds orgs and
//! spaces. All three honour the endpoint's skip-ssl flag.

mod cc_client;
mod http;
mod info_client;
mod uaa_client;

pub use cc_client::CloudControllerDirectory;
pub use http::{HttpSettings, DEFAULT_HTTP_TIMEOUT_MS};
pub use info_client::InfoClient;
pub use uaa_client::{UaaAuthenticator, CREDENTIALS_REJECTED_MESSAGE};
