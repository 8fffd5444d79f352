//! Interactive login pipeline: endpoint resolution, credential negotiation,
//! bounded-retry authentication, org/space targeting and history merge.
//!
//! Every stage reads and writes an explicit `SessionConfig` context; nothing
//! here touches the filesystem.

mod api_endpoint;
mod authentication_loop;
mod credential_negotiator;
mod endpoint_resolver;
mod login_flow;
mod target_selector;
mod target_summary;

#[cfg(test)]
mod test_support;

pub use api_endpoint::*;
pub use authentication_loop::*;
pub use credential_negotiator::*;
pub use endpoint_resolver::*;
pub use login_flow::*;
pub use target_selector::*;
pub use target_summary::*;
