use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::{DispatchResult, Store};
use crate::kernel::codec;
use crate::kernel::effect::Effect;
use crate::kernel::error::StoreError;
use crate::kernel::file::{is_reserved, VirtualFile, IMPORT_MAP_FILE};
use crate::kernel::import_map;

pub const VERSION_KEY: &str = "_version";
pub const MAIN_KEY: &str = "_main";

#[derive(Debug, Clone, Serialize, Deserialize)]
struct ExportedFile {
    code: String,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    hidden: bool,
}

impl Store {
    /// Encodes the file set into a `#`-prefixed URL fragment. Import-map
    /// entries equal to the built-in layer are left out.
    pub fn serialize(&mut self) -> Result<String, StoreError> {
        let exported = self.export_files();
        let json = Value::Object(exported).to_string();
        Ok(codec::encode_fragment(&json)?)
    }

    fn export_files(&mut self) -> Map<String, Value> {
        let user_map = import_map::effective(&self.state.files, &mut self.state.errors);
        let overrides = user_map.overrides_of_mirrored(
            &self.state.builtin_import_map,
            &self.state.settings.cdn_mirror,
        );

        let mut out = Map::new();
        for file in self.state.files.iter() {
            let code = if file.filename == IMPORT_MAP_FILE {
                if overrides.is_empty() {
                    continue;
                }
                overrides.to_pretty_json()
            } else {
                file.code.clone()
            };
            let entry = ExportedFile {
                code,
                hidden: file.hidden,
            };
            let key = self.state.strip_prefix(&file.filename).to_string();
            if let Ok(value) = serde_json::to_value(entry) {
                out.insert(key, value);
            }
        }

        if let Some(version) = &self.state.versions.framework {
            out.insert(VERSION_KEY.to_string(), Value::String(version.clone()));
        }
        let default_main = self
            .template()
            .map(|t| self.state.prefixed(&t.main_file));
        if default_main.as_deref() != Some(self.state.main_file.as_str()) {
            out.insert(
                MAIN_KEY.to_string(),
                Value::String(self.state.strip_prefix(&self.state.main_file).to_string()),
            );
        }
        out
    }

    /// Restores a serialized file set. Corrupt input alerts and falls back to
    /// the preset's default files.
    pub(super) fn deserialize(&mut self, encoded: &str) -> DispatchResult {
        let parsed = codec::decode_fragment(encoded)
            .map_err(|e| e.to_string())
            .and_then(|json| {
                serde_json::from_str::<Map<String, Value>>(&json).map_err(|e| e.to_string())
            });

        let exported = match parsed {
            Ok(exported) => exported,
            Err(e) => {
                tracing::error!(error = %e, "failed to restore serialized state");
                self.reset_files();
                return DispatchResult {
                    effects: vec![Effect::Alert(format!(
                        "Failed to load code from URL: {e}"
                    ))],
                    state_changed: true,
                };
            }
        };

        self.restore(exported);
        DispatchResult {
            effects: Vec::new(),
            state_changed: true,
        }
    }

    fn restore(&mut self, exported: Map<String, Value>) {
        let mut main = None;
        self.state.files.clear();

        for (key, value) in exported {
            match key.as_str() {
                VERSION_KEY => {
                    self.set_framework_version(value.as_str().map(str::to_string));
                    continue;
                }
                MAIN_KEY => {
                    main = value.as_str().map(|name| self.state.prefixed(name));
                    continue;
                }
                _ => {}
            }

            let entry = match value {
                Value::String(code) => ExportedFile {
                    code,
                    hidden: false,
                },
                other => match serde_json::from_value::<ExportedFile>(other) {
                    Ok(entry) => entry,
                    Err(e) => {
                        tracing::warn!(file = %key, error = %e, "skipping malformed entry");
                        continue;
                    }
                },
            };
            let filename = if is_reserved(&key) {
                key
            } else {
                self.state.prefixed(&key)
            };
            self.state
                .files
                .insert(VirtualFile::new(filename, entry.code).hidden(entry.hidden));
        }

        // Entries equal to the built-in layer were dropped on export.
        let merged = self.state.merged_import_map();
        import_map::apply(
            &mut self.state.files,
            &merged,
            &self.state.settings.cdn_mirror,
        );

        let main = main.or_else(|| self.template().map(|t| self.state.prefixed(&t.main_file)));
        self.state.main_file = match main {
            Some(main) if self.state.files.contains(&main) => main,
            _ => self.first_regular_file(),
        };
        self.state.active_filename = self.state.main_file.clone();
        let config_missing = self
            .state
            .active_config_filename
            .as_deref()
            .is_some_and(|name| !self.state.files.contains(name));
        if config_missing {
            self.state.active_config_filename = None;
        }
        tracing::info!(
            files = self.state.files.len(),
            main = %self.state.main_file,
            "state restored"
        );
    }

    /// Keeps the main-file pointer valid when the saved set lacks it.
    fn first_regular_file(&mut self) -> String {
        if let Some(name) = self.state.files.names().find(|n| !is_reserved(n)) {
            return name.to_string();
        }
        let main = self
            .template()
            .map(|t| self.state.prefixed(&t.main_file))
            .unwrap_or_else(|| self.state.prefixed("App.vue"));
        self.state.files.insert(VirtualFile::new(main.clone(), ""));
        main
    }
}
