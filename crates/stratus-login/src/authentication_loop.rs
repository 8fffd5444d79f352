//! Bounded-retry authentication for the password and SSO-passcode flows.
//!
//! Both flows run the same state machine:
//! `CollectStatic -> AttemptLoop(remaining, source) -> {Success, ExhaustedFailure}`.

use stratus_config::SessionConfig;
use stratus_core::{
    Authenticator, Credentials, LoginError, RemoteError, Terminal, TokenGrant,
    PASSWORD_GRANT_TYPE,
};

use crate::credential_negotiator::{
    fetch_prompt_catalog, passcode_prompt, CredentialSource, PasscodeCredentials,
    PasswordCredentials,
};

pub const MAX_LOGIN_ATTEMPTS: usize = 3;
pub const AUTHENTICATING_MESSAGE: &str = "Authenticating...";

/// Which credential flow a login runs. The two are mutually exclusive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthMode {
    Password {
        username: Option<String>,
        password: Option<String>,
    },
    SsoPasscode {
        passcode: Option<String>,
    },
}

impl AuthMode {
    /// Rejects `--sso` combined with `--sso-passcode`; either alone selects
    /// the passcode flow and neither selects the password flow.
    pub fn select(
        sso: bool,
        sso_passcode: Option<&str>,
        username: Option<&str>,
        password: Option<&str>,
    ) -> Result<Self, LoginError> {
        match (sso, sso_passcode) {
            (true, Some(_)) => Err(LoginError::ConflictingAuthMode),
            (true, None) => Ok(Self::SsoPasscode { passcode: None }),
            (false, Some(passcode)) => Ok(Self::SsoPasscode {
                passcode: Some(passcode.to_string()),
            }),
            (false, None) => Ok(Self::Password {
                username: username.map(str::to_string),
                password: password.map(str::to_string),
            }),
        }
    }
}

enum AttemptState<C, S> {
    CollectStatic(C),
    AttemptLoop { remaining: usize, source: S },
    Success(TokenGrant),
    ExhaustedFailure,
}

fn run_attempt_state_machine<C, S, A>(
    collect_static: C,
    mut authenticate: A,
    terminal: &mut dyn Terminal,
) -> Result<TokenGrant, LoginError>
where
    C: FnOnce(&mut dyn Terminal) -> Result<S, LoginError>,
    S: CredentialSource,
    A: FnMut(&Credentials) -> Result<TokenGrant, RemoteError>,
{
    let mut state = AttemptState::CollectStatic(collect_static);
    loop {
        state = match state {
            AttemptState::CollectStatic(collect) => AttemptState::AttemptLoop {
                remaining: MAX_LOGIN_ATTEMPTS,
                source: collect(terminal)?,
            },
            AttemptState::AttemptLoop { remaining: 0, .. } => AttemptState::ExhaustedFailure,
            AttemptState::AttemptLoop {
                remaining,
                mut source,
            } => {
                let credentials = source.next_attempt(terminal)?;
                terminal.say(AUTHENTICATING_MESSAGE);
                match authenticate(&credentials) {
                    Ok(grant) => AttemptState::Success(grant),
                    Err(error) => {
                        tracing::debug!(remaining = remaining - 1, "authentication attempt failed");
                        terminal.say(&error.to_string());
                        AttemptState::AttemptLoop {
                            remaining: remaining - 1,
                            source,
                        }
                    }
                }
            }
            AttemptState::Success(grant) => {
                terminal.ok();
                terminal.say("");
                return Ok(grant);
            }
            AttemptState::ExhaustedFailure => {
                tracing::warn!(attempts = MAX_LOGIN_ATTEMPTS, "authentication attempts exhausted");
                return Err(LoginError::AuthenticationFailed);
            }
        };
    }
}

/// Runs the selected flow and records the granted tokens in the context.
pub fn authenticate(
    mode: &AuthMode,
    authenticator: &dyn Authenticator,
    config: &mut SessionConfig,
    terminal: &mut dyn Terminal,
) -> Result<(), LoginError> {
    let grant = match mode {
        AuthMode::Password { username, password } => {
            if config.is_service_account_active() {
                return Err(LoginError::ServiceAccountActive);
            }
            let context: &SessionConfig = &*config;
            run_attempt_state_machine(
                |terminal: &mut dyn Terminal| {
                    let catalog = fetch_prompt_catalog(authenticator, context)?;
                    PasswordCredentials::collect_static(
                        &catalog,
                        username.as_deref(),
                        password.as_deref(),
                        terminal,
                    )
                },
                |credentials| authenticator.authenticate(&context.connection(), credentials),
                terminal,
            )?
        }
        AuthMode::SsoPasscode { passcode } => {
            let context: &SessionConfig = &*config;
            run_attempt_state_machine(
                |_terminal: &mut dyn Terminal| {
                    let catalog = fetch_prompt_catalog(authenticator, context)?;
                    Ok(PasscodeCredentials::new(
                        passcode_prompt(&catalog, &context.auth_endpoint),
                        passcode.as_deref(),
                    ))
                },
                |credentials| authenticator.authenticate(&context.connection(), credentials),
                terminal,
            )?
        }
    };
    config.record_grant(grant, PASSWORD_GRANT_TYPE);
    tracing::info!(endpoint = %config.api_endpoint, "authenticated");
    Ok(())
}
