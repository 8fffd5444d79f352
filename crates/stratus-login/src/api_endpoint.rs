use semver::Version;
use stratus_config::SessionConfig;
use stratus_core::{Endpoint, EndpointProbe, LoginError, Terminal};

pub const MIN_SUPPORTED_API_VERSION: &str = "2.128.0";
pub const UNSUPPORTED_API_VERSION_WARNING: &str =
    "Your API version is no longer supported. Upgrade to a newer version of the API.";

/// Adds `https://` when no scheme was given and drops trailing slashes.
pub fn normalize_endpoint_url(raw: &str) -> String {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.contains("://") {
        trimmed.to_string()
    } else {
        format!("https://{trimmed}")
    }
}

/// True when `api_version` parses and is below the supported minimum.
pub fn is_api_version_unsupported(api_version: &str) -> bool {
    let (Ok(current), Ok(minimum)) = (
        Version::parse(api_version.trim()),
        Version::parse(MIN_SUPPORTED_API_VERSION),
    ) else {
        tracing::debug!(api_version, "skipping api version check for unparsable version");
        return false;
    };
    current < minimum
}

/// Probes the endpoint and records its metadata in the context.
pub fn apply_api_endpoint(
    endpoint: &Endpoint,
    probe: &dyn EndpointProbe,
    config: &mut SessionConfig,
    terminal: &mut dyn Terminal,
) -> Result<(), LoginError> {
    let normalized = Endpoint {
        url: normalize_endpoint_url(&endpoint.url),
        skip_ssl_validation: endpoint.skip_ssl_validation,
    };
    let info = probe
        .probe(&normalized)
        .map_err(|source| LoginError::EndpointUnreachable {
            endpoint: normalized.url.clone(),
            source,
        })?;
    if is_api_version_unsupported(&info.api_version) {
        tracing::warn!(api_version = %info.api_version, "api version below supported minimum");
        terminal.warn(UNSUPPORTED_API_VERSION_WARNING);
    }
    config.set_api_endpoint(&normalized.url, normalized.skip_ssl_validation, info);
    Ok(())
}
