use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::file::{FileMap, VirtualFile, IMPORT_MAP_FILE};
use super::problems::{Diagnostic, ErrorList};

pub type SpecifierMap = BTreeMap<String, String>;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportMap {
    #[serde(default)]
    pub imports: SpecifierMap,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub scopes: BTreeMap<String, SpecifierMap>,
}

/// Fixed host substitution applied to every URL before the map is written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CdnMirror {
    pub from: String,
    pub to: String,
}

impl Default for CdnMirror {
    fn default() -> Self {
        Self {
            from: "cdn.jsdelivr.net".to_string(),
            to: "fastly.jsdelivr.net".to_string(),
        }
    }
}

impl ImportMap {
    pub fn parse(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    pub fn is_empty(&self) -> bool {
        self.imports.is_empty() && self.scopes.is_empty()
    }

    pub fn with_import(mut self, specifier: impl Into<String>, url: impl Into<String>) -> Self {
        self.imports.insert(specifier.into(), url.into());
        self
    }

    pub fn to_pretty_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }

    pub fn rewrite_hosts(&mut self, mirror: &CdnMirror) {
        if mirror.from.is_empty() {
            return;
        }
        let rewrite = |url: &mut String| {
            if url.contains(mirror.from.as_str()) {
                *url = url.replace(mirror.from.as_str(), &mirror.to);
            }
        };
        self.imports.values_mut().for_each(rewrite);
        for scope in self.scopes.values_mut() {
            scope.values_mut().for_each(rewrite);
        }
    }

    /// Entries of `self` that are absent from `builtin` or point elsewhere.
    pub fn overrides_of(&self, builtin: &ImportMap) -> ImportMap {
        let imports = self
            .imports
            .iter()
            .filter(|(key, url)| builtin.imports.get(*key) != Some(*url))
            .map(|(key, url)| (key.clone(), url.clone()))
            .collect();

        let scopes = self
            .scopes
            .iter()
            .filter(|(prefix, scope)| builtin.scopes.get(*prefix) != Some(*scope))
            .filter(|(_, scope)| !scope.is_empty())
            .map(|(prefix, scope)| (prefix.clone(), scope.clone()))
            .collect();

        ImportMap { imports, scopes }
    }

    /// `overrides_of`, also counting mirror-rewritten built-in URLs as built-in.
    pub fn overrides_of_mirrored(&self, builtin: &ImportMap, mirror: &CdnMirror) -> ImportMap {
        let mut mirrored = builtin.clone();
        mirrored.rewrite_hosts(mirror);
        self.overrides_of(builtin).overrides_of(&mirrored)
    }
}

/// User entries override built-in ones key for key. Scope maps are replaced
/// whole, not merged.
pub fn merge(builtin: &ImportMap, user: &ImportMap) -> ImportMap {
    let mut merged = builtin.clone();
    merged
        .imports
        .extend(user.imports.iter().map(|(k, v)| (k.clone(), v.clone())));
    merged
        .scopes
        .extend(user.scopes.iter().map(|(k, v)| (k.clone(), v.clone())));
    merged
}

/// Writes `map` (after mirror rewriting) into the reserved import-map file,
/// creating it when absent. Returns whether the file content changed.
pub fn apply(files: &mut FileMap, map: &ImportMap, mirror: &CdnMirror) -> bool {
    let mut map = map.clone();
    map.rewrite_hosts(mirror);
    let code = map.to_pretty_json();

    match files.get_mut(IMPORT_MAP_FILE) {
        Some(file) if file.code == code => false,
        Some(file) => {
            file.code = code;
            true
        }
        None => {
            files.insert(VirtualFile::new(IMPORT_MAP_FILE, code));
            true
        }
    }
}

/// Parses the user layer. A malformed file yields one diagnostic and an empty map.
pub fn effective(files: &FileMap, errors: &mut ErrorList) -> ImportMap {
    let Some(code) = files.code(IMPORT_MAP_FILE) else {
        return ImportMap::default();
    };
    if code.trim().is_empty() {
        return ImportMap::default();
    }
    match ImportMap::parse(code) {
        Ok(map) => map,
        Err(e) => {
            tracing::warn!(error = %e, "import map parse failed");
            errors.replace(vec![Diagnostic::error_in(
                IMPORT_MAP_FILE,
                format!("Invalid {IMPORT_MAP_FILE}: {e}"),
            )]);
            ImportMap::default()
        }
    }
}

/// Built-in layer for a framework version. Dependency pins stay out of it;
/// they only reach the language tools.
pub fn builtin_import_map(framework_version: Option<&str>, cdn_base: &str) -> ImportMap {
    let base = cdn_base.trim_end_matches('/');
    let pin = |pkg: &str| match framework_version {
        Some(v) if !v.is_empty() => format!("{pkg}@{v}"),
        _ => pkg.to_string(),
    };

    ImportMap::default()
        .with_import(
            "vue",
            format!(
                "{base}/{}/dist/runtime-dom.esm-browser.js",
                pin("@vue/runtime-dom")
            ),
        )
        .with_import(
            "vue/server-renderer",
            format!(
                "{base}/{}/dist/server-renderer.esm-browser.js",
                pin("@vue/server-renderer")
            ),
        )
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/import_map.rs"]
mod tests;
