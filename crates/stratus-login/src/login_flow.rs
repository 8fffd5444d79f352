//! The interactive login pipeline.

use stratus_config::{refresh_session_history, SessionConfig};
use stratus_core::{Authenticator, Directory, EndpointProbe, LoginError, Session, Terminal};

use crate::{
    api_endpoint::apply_api_endpoint,
    authentication_loop::{authenticate, AuthMode},
    endpoint_resolver::resolve_endpoint,
    target_selector::{select_organization, select_space},
};

/// Command-line inputs of one login. Empty strings count as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginOptions {
    pub endpoint: Option<String>,
    pub skip_ssl_validation: bool,
    pub username: Option<String>,
    pub password: Option<String>,
    pub organization: Option<String>,
    pub space: Option<String>,
    pub sso: bool,
    pub sso_passcode: Option<String>,
}

/// Remote collaborators used by the pipeline.
#[derive(Clone, Copy)]
pub struct LoginCollaborators<'a> {
    pub probe: &'a dyn EndpointProbe,
    pub authenticator: &'a dyn Authenticator,
    pub directory: &'a dyn Directory,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginOutcome {
    pub session: Session,
    pub organization_targeted: bool,
    pub space_targeted: bool,
}

/// True when the target summary is still meaningful after `error`: the
/// endpoint stage completed before the failure.
pub fn summary_applies_after(error: &LoginError) -> bool {
    !matches!(
        error,
        LoginError::ConflictingAuthMode | LoginError::EndpointUnreachable { .. }
    )
}

/// Runs endpoint resolution, authentication, targeting and the history
/// merge against `config`. On error the context may be partially updated
/// and should not be persisted.
pub fn perform_interactive_login(
    options: &LoginOptions,
    collaborators: &LoginCollaborators<'_>,
    config: &mut SessionConfig,
    terminal: &mut dyn Terminal,
) -> Result<LoginOutcome, LoginError> {
    let mode = AuthMode::select(
        options.sso,
        options.sso_passcode.as_deref(),
        options.username.as_deref(),
        options.password.as_deref(),
    )?;
    config.clear_session();

    let endpoint = resolve_endpoint(
        options.endpoint.as_deref(),
        options.skip_ssl_validation,
        config,
        terminal,
    )?;
    apply_api_endpoint(&endpoint, collaborators.probe, config, terminal)?;
    authenticate(&mode, collaborators.authenticator, config, terminal)?;

    let organization_targeted = select_organization(
        options.organization.as_deref(),
        collaborators.directory,
        config,
        terminal,
    )?;
    let space_targeted = if organization_targeted {
        select_space(
            options.space.as_deref(),
            collaborators.directory,
            config,
            terminal,
        )?
    } else {
        false
    };

    refresh_session_history(config);
    tracing::info!(
        endpoint = %config.api_endpoint,
        organization_targeted,
        space_targeted,
        "login complete"
    );
    Ok(LoginOutcome {
        session: config.current_session(),
        organization_targeted,
        space_targeted,
    })
}
