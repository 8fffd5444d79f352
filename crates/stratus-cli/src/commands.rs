use std::path::Path;

use anyhow::{bail, Result};
use stratus_config::{
    default_config_path, find_session_by_endpoint_pattern, load_session_config,
    refresh_session_history, save_session_config,
};
use stratus_core::Terminal;
use stratus_login::{
    perform_interactive_login, render_target_summary, summary_applies_after, LoginCollaborators,
    LoginOptions, NOT_LOGGED_IN_HINT,
};
use stratus_remote::{CloudControllerDirectory, HttpSettings, InfoClient, UaaAuthenticator};

use crate::cli_args::{Cli, CliCommand};

/// Runs a parsed command against the console.
pub fn run_cli(cli: Cli, terminal: &mut dyn Terminal) -> Result<()> {
    let config_path = default_config_path(cli.home.as_deref())?;
    let settings = HttpSettings {
        timeout_ms: cli.http_timeout_ms,
    };
    match cli.command {
        CliCommand::Login(args) => {
            execute_login_command(&config_path, &args.to_login_options(), settings, terminal)
        }
        CliCommand::Endpoint(args) => {
            execute_endpoint_command(&config_path, &args.pattern, terminal)
        }
    }
}

/// Logs in and persists the context. Nothing is written when the login fails.
pub fn execute_login_command(
    config_path: &Path,
    options: &LoginOptions,
    settings: HttpSettings,
    terminal: &mut dyn Terminal,
) -> Result<()> {
    let mut config = load_session_config(config_path)?;
    let probe = InfoClient::new(settings);
    let authenticator = UaaAuthenticator::new(settings);
    let directory = CloudControllerDirectory::new(settings);
    let collaborators = LoginCollaborators {
        probe: &probe,
        authenticator: &authenticator,
        directory: &directory,
    };

    match perform_interactive_login(options, &collaborators, &mut config, terminal) {
        Ok(_) => {
            terminal.say(&render_target_summary(&config));
            save_session_config(config_path, &config)?;
            tracing::info!(path = %config_path.display(), "session config saved");
            Ok(())
        }
        Err(error) => {
            if summary_applies_after(&error) {
                terminal.say(&render_target_summary(&config));
            }
            Err(error.into())
        }
    }
}

/// Restores the remembered session whose authorization endpoint contains
/// `pattern`.
pub fn execute_endpoint_command(
    config_path: &Path,
    pattern: &str,
    terminal: &mut dyn Terminal,
) -> Result<()> {
    let mut config = load_session_config(config_path)?;
    let Some(session) = find_session_by_endpoint_pattern(&config.instances, pattern).cloned()
    else {
        terminal.say(&render_target_summary(&config));
        if !config.is_logged_in() {
            bail!(NOT_LOGGED_IN_HINT);
        }
        return Ok(());
    };

    terminal.say(&format!("Found existed endpoint {}", session.auth_endpoint));
    config.restore_session(&session);
    refresh_session_history(&mut config);
    save_session_config(config_path, &config)?;
    terminal.say(&render_target_summary(&config));
    Ok(())
}
