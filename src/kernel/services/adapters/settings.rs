use std::io;
use std::path::Path;

use crate::kernel::services::ports::WorkspaceSettings;

/// Writes the default settings when `path` does not exist yet.
pub fn ensure_settings_file(path: &Path) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent)?;
        }
    }
    if !path.exists() {
        let content = serde_json::to_string_pretty(&WorkspaceSettings::default())
            .unwrap_or_else(|_| "{}".to_string());
        std::fs::write(path, content)?;
    }
    Ok(())
}

/// A missing file is not an error; unreadable or malformed files fall back to
/// the defaults.
pub fn load_settings(path: &Path) -> WorkspaceSettings {
    match std::fs::read_to_string(path) {
        Ok(data) => WorkspaceSettings::from_json_str(&data),
        Err(e) if e.kind() == io::ErrorKind::NotFound => WorkspaceSettings::default(),
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "failed to read settings");
            WorkspaceSettings::default()
        }
    }
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/adapters/settings.rs"]
mod tests;
