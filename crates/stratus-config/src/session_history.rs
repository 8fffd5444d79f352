//! Multi-endpoint session history.
//!
//! Invariant: at most one entry per `Session::identity_key`, current session first.

use stratus_core::Session;

use crate::session_config::SessionConfig;

/// Places `new_session` at the head and keeps every entry with a different
/// identity key in its original relative order.
pub fn merge_current_session(new_session: Session, history: &[Session]) -> Vec<Session> {
    let mut merged = Vec::with_capacity(history.len() + 1);
    let key = new_session.identity_key().to_string();
    merged.push(new_session);
    merged.extend(
        history
            .iter()
            .filter(|entry| entry.identity_key() != key)
            .cloned(),
    );
    merged
}

/// Merges the context's current session into its own history.
pub fn refresh_session_history(config: &mut SessionConfig) {
    let merged = merge_current_session(config.current_session(), &config.instances);
    tracing::debug!(entries = merged.len(), "session history refreshed");
    config.instances = merged;
}

/// First remembered session whose authorization endpoint contains `pattern`.
pub fn find_session_by_endpoint_pattern<'a>(
    history: &'a [Session],
    pattern: &str,
) -> Option<&'a Session> {
    history
        .iter()
        .find(|entry| entry.auth_endpoint.contains(pattern))
}
