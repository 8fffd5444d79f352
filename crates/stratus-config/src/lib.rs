//! Persisted login context and multi-endpoint session history for Stratus.
//!
//! `SessionConfig` is the explicit context object threaded through a login;
//! `config_store` persists it and `session_history` maintains the
//! one-entry-per-endpoint history.

mod config_store;
mod session_config;
mod session_history;

pub use config_store::*;
pub use session_config::*;
pub use session_history::*;
