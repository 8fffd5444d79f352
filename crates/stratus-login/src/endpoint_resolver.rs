use stratus_config::SessionConfig;
use stratus_core::{Endpoint, LoginError, Terminal};

pub const API_ENDPOINT_PROMPT: &str = "API endpoint";

/// Picks the endpoint for this login: explicit flag, then the persisted
/// endpoint, then an interactive prompt.
///
/// The effective skip-ssl flag is the persisted setting OR the explicit one.
/// No network validation happens here.
pub fn resolve_endpoint(
    explicit_endpoint: Option<&str>,
    explicit_skip_ssl: bool,
    config: &SessionConfig,
    terminal: &mut dyn Terminal,
) -> Result<Endpoint, LoginError> {
    let skip_ssl_validation = config.skip_ssl_validation || explicit_skip_ssl;
    let known = explicit_endpoint
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .or_else(|| Some(config.api_endpoint.trim()).filter(|value| !value.is_empty()));

    let url = match known {
        Some(url) => {
            terminal.say(&format!("{API_ENDPOINT_PROMPT}: {url}"));
            url.to_string()
        }
        None => loop {
            let answer = terminal.ask(API_ENDPOINT_PROMPT)?;
            let answer = answer.trim();
            if !answer.is_empty() {
                break answer.to_string();
            }
        },
    };
    tracing::debug!(endpoint = %url, skip_ssl_validation, "api endpoint resolved");
    Ok(Endpoint {
        url,
        skip_ssl_validation,
    })
}
