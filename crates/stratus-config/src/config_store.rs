use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use stratus_core::write_text_atomic;

use crate::session_config::{SessionConfig, SESSION_CONFIG_SCHEMA_VERSION};

pub const STRATUS_HOME_DIR_NAME: &str = ".stratus";
pub const SESSION_CONFIG_FILE_NAME: &str = "config.json";

/// `<home>/config.json`, where home defaults to `$HOME/.stratus`.
pub fn default_config_path(home_override: Option<&Path>) -> Result<PathBuf> {
    if let Some(home) = home_override {
        return Ok(home.join(SESSION_CONFIG_FILE_NAME));
    }
    let user_home = std::env::var_os("HOME")
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
        .context("HOME is not set; pass --home or set STRATUS_HOME")?;
    Ok(user_home
        .join(STRATUS_HOME_DIR_NAME)
        .join(SESSION_CONFIG_FILE_NAME))
}

/// Loads the persisted context; a missing file yields defaults.
pub fn load_session_config(path: &Path) -> Result<SessionConfig> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "session config missing; using defaults");
        return Ok(SessionConfig::default());
    }
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read session config {}", path.display()))?;
    let parsed = serde_json::from_str::<SessionConfig>(&raw)
        .with_context(|| format!("failed to parse session config {}", path.display()))?;
    if parsed.schema_version != SESSION_CONFIG_SCHEMA_VERSION {
        bail!(
            "unsupported session config schema_version {} in {} (expected {})",
            parsed.schema_version,
            path.display(),
            SESSION_CONFIG_SCHEMA_VERSION
        );
    }
    Ok(parsed)
}

pub fn save_session_config(path: &Path, config: &SessionConfig) -> Result<()> {
    let mut payload = config.clone();
    payload.schema_version = SESSION_CONFIG_SCHEMA_VERSION;
    let mut encoded =
        serde_json::to_string_pretty(&payload).context("failed to encode session config")?;
    encoded.push('\n');
    write_text_atomic(path, &encoded)?;
    tracing::debug!(
        path = %path.display(),
        instances = payload.instances.len(),
        "session config saved"
    );
    Ok(())
}
