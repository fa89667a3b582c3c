use serde::{Deserialize, Serialize};

use crate::kernel::import_map::CdnMirror;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkspaceSettings {
    pub template: String,
    pub file_prefix: String,
    pub cdn_base: String,
    pub cdn_mirror: CdnMirror,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub framework_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
}

impl Default for WorkspaceSettings {
    fn default() -> Self {
        Self {
            template: "vue".to_string(),
            file_prefix: "src/".to_string(),
            cdn_base: "https://cdn.jsdelivr.net/npm".to_string(),
            cdn_mirror: CdnMirror::default(),
            framework_version: None,
            locale: None,
        }
    }
}

impl WorkspaceSettings {
    /// Missing keys take their defaults; malformed input yields the defaults.
    pub fn from_json_str(text: &str) -> Self {
        match serde_json::from_str(text) {
            Ok(settings) => settings,
            Err(e) => {
                tracing::warn!(error = %e, "invalid workspace settings, using defaults");
                Self::default()
            }
        }
    }
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/ports/settings.rs"]
mod tests;
