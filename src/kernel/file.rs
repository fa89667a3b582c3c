use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::language::FileLanguage;

pub const IMPORT_MAP_FILE: &str = "import-map.json";
pub const TSCONFIG_FILE: &str = "tsconfig.json";
pub const BUILD_CONFIG_FILE: &str = "vite.config.ts";
pub const MACROS_CONFIG_FILE: &str = "macros.config.ts";

pub const RESERVED_FILES: [&str; 4] = [
    IMPORT_MAP_FILE,
    TSCONFIG_FILE,
    BUILD_CONFIG_FILE,
    MACROS_CONFIG_FILE,
];

pub fn is_reserved(filename: &str) -> bool {
    RESERVED_FILES.contains(&filename)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum OutputKind {
    Script,
    Style,
    ServerScript,
}

/// Artifacts the compiler produced for one file. Empty until the first compile.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompiledArtifacts {
    pub script: String,
    pub style: String,
    pub server_script: String,
}

impl CompiledArtifacts {
    pub fn get(&self, kind: OutputKind) -> &str {
        match kind {
            OutputKind::Script => &self.script,
            OutputKind::Style => &self.style,
            OutputKind::ServerScript => &self.server_script,
        }
    }

    pub fn set(&mut self, kind: OutputKind, text: impl Into<String>) {
        let slot = match kind {
            OutputKind::Script => &mut self.script,
            OutputKind::Style => &mut self.style,
            OutputKind::ServerScript => &mut self.server_script,
        };
        *slot = text.into();
    }

    pub fn is_empty(&self) -> bool {
        self.script.is_empty() && self.style.is_empty() && self.server_script.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct VirtualFile {
    pub filename: String,
    pub code: String,
    pub compiled: CompiledArtifacts,
    pub hidden: bool,
    /// Owned by the editor; the kernel stores it and never looks inside.
    pub editor_view_state: Option<serde_json::Value>,
}

impl VirtualFile {
    pub fn new(filename: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
            code: code.into(),
            compiled: CompiledArtifacts::default(),
            hidden: false,
            editor_view_state: None,
        }
    }

    pub fn hidden(mut self, hidden: bool) -> Self {
        self.hidden = hidden;
        self
    }

    pub fn language(&self) -> FileLanguage {
        FileLanguage::from_filename(&self.filename)
    }
}

/// Filename-keyed file set that remembers insertion order (tab order).
#[derive(Debug, Clone, Default)]
pub struct FileMap {
    order: Vec<String>,
    by_name: FxHashMap<String, VirtualFile>,
}

impl FileMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn contains(&self, filename: &str) -> bool {
        self.by_name.contains_key(filename)
    }

    pub fn get(&self, filename: &str) -> Option<&VirtualFile> {
        self.by_name.get(filename)
    }

    pub fn get_mut(&mut self, filename: &str) -> Option<&mut VirtualFile> {
        self.by_name.get_mut(filename)
    }

    pub fn code(&self, filename: &str) -> Option<&str> {
        self.by_name.get(filename).map(|f| f.code.as_str())
    }

    /// Inserts at the end, or replaces in place when the name is already present.
    pub fn insert(&mut self, file: VirtualFile) -> Option<VirtualFile> {
        let name = file.filename.clone();
        let prev = self.by_name.insert(name.clone(), file);
        if prev.is_none() {
            self.order.push(name);
        }
        prev
    }

    pub fn remove(&mut self, filename: &str) -> Option<VirtualFile> {
        let removed = self.by_name.remove(filename)?;
        self.order.retain(|name| name != filename);
        Some(removed)
    }

    /// Renames `old` to `new` keeping its position. Returns false if `old`
    /// is missing or `new` is taken.
    pub fn rename(&mut self, old: &str, new: &str) -> bool {
        if self.by_name.contains_key(new) {
            return false;
        }
        let Some(mut file) = self.by_name.remove(old) else {
            return false;
        };
        file.filename = new.to_string();
        self.by_name.insert(new.to_string(), file);
        if let Some(slot) = self.order.iter_mut().find(|name| name.as_str() == old) {
            *slot = new.to_string();
        }
        true
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &VirtualFile> {
        self.order.iter().filter_map(|name| self.by_name.get(name))
    }

    pub fn clear(&mut self) {
        self.order.clear();
        self.by_name.clear();
    }
}

impl FromIterator<VirtualFile> for FileMap {
    fn from_iter<I: IntoIterator<Item = VirtualFile>>(iter: I) -> Self {
        let mut map = FileMap::new();
        for file in iter {
            map.insert(file);
        }
        map
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/file.rs"]
mod tests;
