//! Shared domain types for the Stratus login and targeting pipeline.
//!
//! Holds the organization/space/session model, the server-declared prompt
//! catalog, the collaborator traits implemented by HTTP clients and test
//! doubles, and the error taxonomy surfaced to callers.

pub mod atomic_io;
pub mod error;
pub mod model;
pub mod prompt;
pub mod remote;
pub mod terminal;

pub use atomic_io::write_text_atomic;
pub use error::{LoginError, RemoteError};
pub use model::*;
pub use prompt::*;
pub use remote::*;
pub use terminal::Terminal;
