use std::collections::BTreeMap;
use std::sync::Arc;

use super::file::{is_reserved, FileMap, VirtualFile, BUILD_CONFIG_FILE, IMPORT_MAP_FILE};
use super::file::{MACROS_CONFIG_FILE, TSCONFIG_FILE};
use super::config_eval;
use super::import_map::{self, ImportMap};
use super::problems::ErrorList;
use super::services::ports::{
    BuildConfig, CompileContext, LanguageToolsInputs, Template, WorkspaceSettings,
};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VersionSelection {
    pub framework: Option<String>,
    pub typescript: Option<String>,
    pub dependencies: BTreeMap<String, String>,
}

#[derive(Debug, Clone)]
pub struct WorkspaceState {
    pub files: FileMap,
    pub main_file: String,
    pub active_filename: String,
    /// Slot for the reserved files; they never become the regular active file.
    pub active_config_filename: Option<String>,
    pub template: String,
    pub builtin_import_map: ImportMap,
    pub versions: VersionSelection,
    pub locale: Option<String>,
    pub build_config: Arc<BuildConfig>,
    pub macros_config_url: Option<String>,
    pub errors: ErrorList,
    pub settings: WorkspaceSettings,
}

impl WorkspaceState {
    pub fn new(settings: WorkspaceSettings, template: &Template) -> Self {
        let mut state = Self {
            files: FileMap::new(),
            main_file: String::new(),
            active_filename: String::new(),
            active_config_filename: None,
            template: settings.template.clone(),
            builtin_import_map: ImportMap::default(),
            versions: VersionSelection {
                framework: settings.framework_version.clone(),
                ..VersionSelection::default()
            },
            locale: settings.locale.clone(),
            build_config: Arc::new(BuildConfig::default()),
            macros_config_url: None,
            errors: ErrorList::default(),
            settings,
        };
        state.builtin_import_map = state.framework_import_map();
        state.install_template(template);
        state
    }

    /// Built-in layer for the selected framework version.
    pub fn framework_import_map(&self) -> ImportMap {
        import_map::builtin_import_map(
            self.versions.framework.as_deref(),
            &self.settings.cdn_base,
        )
    }

    pub fn prefixed(&self, name: &str) -> String {
        if is_reserved(name) || name.starts_with(self.settings.file_prefix.as_str()) {
            name.to_string()
        } else {
            format!("{}{name}", self.settings.file_prefix)
        }
    }

    pub fn strip_prefix<'a>(&self, filename: &'a str) -> &'a str {
        filename
            .strip_prefix(self.settings.file_prefix.as_str())
            .unwrap_or(filename)
    }

    /// Replaces every file except the import map with the preset's set and
    /// points the main and active file at the preset's main file.
    pub fn install_template(&mut self, template: &Template) {
        let import_map = self.files.remove(IMPORT_MAP_FILE);
        self.files.clear();

        let main_file = self.prefixed(&template.main_file);
        let markup_file = self.prefixed("index.html");
        // Main first so it leads the tab row.
        self.files
            .insert(VirtualFile::new(main_file.clone(), template.main_source.clone()));
        self.files
            .insert(VirtualFile::new(markup_file, template.markup_entry.clone()));
        self.files.insert(VirtualFile::new(
            BUILD_CONFIG_FILE,
            template.build_config_source.clone(),
        ));
        self.files.insert(VirtualFile::new(
            MACROS_CONFIG_FILE,
            template.macros_config_source.clone(),
        ));
        self.files.insert(VirtualFile::new(
            TSCONFIG_FILE,
            template.tsconfig_source.clone(),
        ));
        if let Some(file) = import_map {
            self.files.insert(file);
        }

        self.main_file = main_file.clone();
        self.active_filename = main_file;
    }

    /// The file being edited: the active name if it names an existing regular
    /// file, otherwise the main file.
    pub fn resolved_active_filename(&self) -> &str {
        let active = self.active_filename.as_str();
        if !is_reserved(active) && self.files.contains(active) {
            active
        } else {
            self.main_file.as_str()
        }
    }

    pub fn active_file(&self) -> Option<&VirtualFile> {
        self.files.get(self.resolved_active_filename())
    }

    pub fn active_config_file(&self) -> Option<&VirtualFile> {
        self.active_config_filename
            .as_deref()
            .and_then(|name| self.files.get(name))
    }

    /// Files shown as tabs, in display order.
    pub fn visible_files(&self) -> impl Iterator<Item = &VirtualFile> {
        self.files.iter().filter(|file| !file.hidden)
    }

    /// User layer of the import map parsed without reporting errors.
    pub fn user_import_map(&self) -> ImportMap {
        self.files
            .code(IMPORT_MAP_FILE)
            .and_then(|code| ImportMap::parse(code).ok())
            .unwrap_or_default()
    }

    pub fn merged_import_map(&self) -> ImportMap {
        import_map::merge(&self.builtin_import_map, &self.user_import_map())
    }

    pub fn compile_context(&self) -> CompileContext {
        CompileContext {
            build_config: Arc::clone(&self.build_config),
            import_map: self.merged_import_map(),
            framework_version: self.versions.framework.clone(),
            macros_config_url: self.macros_config_url.clone(),
        }
    }

    /// The macro config is handed on as a module URL; it is never evaluated here.
    pub fn refresh_macros_config_url(&mut self) {
        self.macros_config_url = self
            .files
            .code(MACROS_CONFIG_FILE)
            .map(|code| config_eval::to_module_url(code, &self.builtin_import_map));
    }

    pub fn language_tools_inputs(&self) -> LanguageToolsInputs {
        LanguageToolsInputs {
            macros_config_code: self.files.code(MACROS_CONFIG_FILE).map(str::to_string),
            tsconfig_code: self.files.code(TSCONFIG_FILE).map(str::to_string),
            typescript_version: self.versions.typescript.clone(),
            locale: self.locale.clone(),
            dependency_versions: self.versions.dependencies.clone(),
            framework_version: self.versions.framework.clone(),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/state.rs"]
mod tests;
