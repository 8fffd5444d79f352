use stratus_config::SessionConfig;

pub const NOT_LOGGED_IN_HINT: &str = "Not logged in. Use 'stratus login' to log in.";
pub const NO_ORG_HINT: &str = "No org targeted, use 'stratus login -o ORG'";
pub const NO_SPACE_HINT: &str = "No space targeted, use 'stratus login -s SPACE'";

/// Renders the post-login target summary.
pub fn render_target_summary(config: &SessionConfig) -> String {
    let mut lines = Vec::new();
    if config.api_endpoint.is_empty() {
        lines.push("API endpoint:   (not set)".to_string());
    } else if config.api_version.is_empty() {
        lines.push(format!("API endpoint:   {}", config.api_endpoint));
    } else {
        lines.push(format!(
            "API endpoint:   {} (API version: {})",
            config.api_endpoint, config.api_version
        ));
    }

    if !config.is_logged_in() {
        lines.push(NOT_LOGGED_IN_HINT.to_string());
        return lines.join("\n");
    }

    let org = config
        .organization
        .as_ref()
        .map(|organization| organization.name.as_str())
        .unwrap_or(NO_ORG_HINT);
    lines.push(format!("Org:            {org}"));

    let space = config
        .space
        .as_ref()
        .map(|space| space.name.as_str())
        .unwrap_or(NO_SPACE_HINT);
    lines.push(format!("Space:          {space}"));
    lines.join("\n")
}
