use std::path::Path;

use anyhow::{bail, Context, Result};

/// Writes `content` to a sibling temp file and renames it over `path`, so a
/// concurrent reader sees either the old config or the new one.
pub fn write_text_atomic(path: &Path, content: &str) -> Result<()> {
    if path.as_os_str().is_empty() {
        bail!("destination path cannot be empty");
    }
    if path.is_dir() {
        bail!("destination path '{}' is a directory", path.display());
    }

    let parent = path
        .parent()
        .filter(|dir| !dir.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    std::fs::create_dir_all(parent)
        .with_context(|| format!("failed to create {}", parent.display()))?;

    let file_name = path
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or("stratus-state");
    let temp_path = parent.join(format!(".{file_name}.tmp-{}", std::process::id()));
    std::fs::write(&temp_path, content)
        .with_context(|| format!("failed to write temporary file {}", temp_path.display()))?;
    std::fs::rename(&temp_path, path).with_context(|| {
        format!(
            "failed to move temporary file {} into place at {}",
            temp_path.display(),
            path.display()
        )
    })?;
    Ok(())
}
