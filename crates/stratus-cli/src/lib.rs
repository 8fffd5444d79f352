//! Command-line front end for the Stratus login pipeline.

mod bootstrap;
mod cli_args;
mod commands;
mod console_terminal;

pub use bootstrap::init_tracing;
pub use cli_args::{Cli, CliCommand, EndpointArgs, LoginArgs};
pub use commands::{execute_endpoint_command, execute_login_command, run_cli};
pub use console_terminal::{is_interactive_terminal, ConsoleTerminal};
