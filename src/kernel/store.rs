use std::sync::Arc;

use super::action::{Action, ErrorMerge};
use super::effect::Effect;
use super::error::StoreError;
use super::file::{VirtualFile, BUILD_CONFIG_FILE, IMPORT_MAP_FILE, TSCONFIG_FILE};
use super::import_map;
use super::problems::Diagnostic;
use super::services::ports::{CompileOutput, Template, TemplateCatalog, WorkspaceSettings};
use super::state::WorkspaceState;
use super::template::{default_tsconfig, BuiltinTemplates};

mod files;
mod serialize;
mod watch;

use watch::Watchers;

pub struct DispatchResult {
    pub effects: Vec<Effect>,
    pub state_changed: bool,
}

impl DispatchResult {
    fn unchanged() -> Self {
        Self {
            effects: Vec::new(),
            state_changed: false,
        }
    }

    fn changed(state_changed: bool) -> Self {
        Self {
            effects: Vec::new(),
            state_changed,
        }
    }
}

pub struct Store {
    state: WorkspaceState,
    catalog: Arc<dyn TemplateCatalog>,
    watchers: Option<Watchers>,
}

impl Store {
    pub fn new(settings: WorkspaceSettings) -> Self {
        Self::with_catalog(settings, Arc::new(BuiltinTemplates))
    }

    pub fn with_catalog(mut settings: WorkspaceSettings, catalog: Arc<dyn TemplateCatalog>) -> Self {
        let template = match catalog.template(&settings.template) {
            Some(template) => template,
            None => {
                let fallback = catalog
                    .names()
                    .into_iter()
                    .find_map(|name| catalog.template(&name).map(|t| (name, t)));
                match fallback {
                    Some((name, template)) => {
                        tracing::warn!(
                            requested = %settings.template,
                            using = %name,
                            "unknown template"
                        );
                        settings.template = name;
                        template
                    }
                    None => empty_template(),
                }
            }
        };
        Self {
            state: WorkspaceState::new(settings, &template),
            catalog,
            watchers: None,
        }
    }

    pub fn state(&self) -> &WorkspaceState {
        &self.state
    }

    pub fn is_initialized(&self) -> bool {
        self.watchers.is_some()
    }

    /// Installs the watchers and queues the first compiles. Only valid once.
    pub fn init(&mut self) -> Result<DispatchResult, StoreError> {
        if self.watchers.is_some() {
            tracing::warn!("init called twice");
            return Err(StoreError::AlreadyInitialized);
        }

        if !self.state.files.contains(TSCONFIG_FILE) {
            self.state
                .files
                .insert(VirtualFile::new(TSCONFIG_FILE, default_tsconfig()));
        }
        if !self.state.files.contains(IMPORT_MAP_FILE) {
            let merged = self.state.merged_import_map();
            import_map::apply(
                &mut self.state.files,
                &merged,
                &self.state.settings.cdn_mirror,
            );
        }
        self.state.refresh_macros_config_url();

        let mut watchers = Watchers::baseline(&self.state);
        let mut effects = Vec::new();

        if let Some(source) = self.state.files.code(BUILD_CONFIG_FILE) {
            effects.push(Effect::EvaluateBuildConfig {
                source: source.to_string(),
                import_map: self.state.builtin_import_map.clone(),
                recompile_all: false,
            });
        }

        // The active-file watcher runs immediately and covers the main file.
        watchers.run(&mut self.state, self.catalog.as_ref(), &mut effects);

        let ctx = self.state.compile_context();
        for file in self.state.files.iter() {
            if file.filename == self.state.main_file {
                continue;
            }
            effects.push(Effect::Compile {
                files: vec![file.clone()],
                ctx: ctx.clone(),
                merge: ErrorMerge::Append,
            });
        }

        self.watchers = Some(watchers);
        tracing::info!(
            files = self.state.files.len(),
            main = %self.state.main_file,
            "workspace initialized"
        );
        Ok(DispatchResult {
            effects,
            state_changed: true,
        })
    }

    pub fn dispatch(&mut self, action: Action) -> DispatchResult {
        let mut result = self.reduce(action);
        if let Some(watchers) = self.watchers.as_mut() {
            result.state_changed |=
                watchers.run(&mut self.state, self.catalog.as_ref(), &mut result.effects);
        }
        result
    }

    fn reduce(&mut self, action: Action) -> DispatchResult {
        match action {
            Action::SetActive(filename) => DispatchResult::changed(self.set_active(filename)),
            Action::AddFile(file) => DispatchResult::changed(self.add_file(file)),
            Action::RequestDeleteFile(filename) => self.request_delete(filename),
            Action::DeleteFile(filename) => DispatchResult::changed(self.delete_file(&filename)),
            Action::RenameFile { from, to } => self.rename_file(&from, &to),
            Action::UpdateCode { filename, code } => {
                DispatchResult::changed(self.update_code(&filename, code))
            }
            Action::SetEditorViewState {
                filename,
                view_state,
            } => match self.state.files.get_mut(&filename) {
                Some(file) => {
                    file.editor_view_state = view_state;
                    DispatchResult::changed(true)
                }
                None => DispatchResult::unchanged(),
            },
            Action::SetTemplate(name) => {
                let changed = self.state.template != name;
                self.state.template = name;
                DispatchResult::changed(changed)
            }
            Action::SetBuiltinImportMap(map) => {
                let changed = self.state.builtin_import_map != map;
                self.state.builtin_import_map = map;
                DispatchResult::changed(changed)
            }
            Action::SetFrameworkVersion(version) => {
                DispatchResult::changed(self.set_framework_version(version))
            }
            Action::SetTypescriptVersion(version) => {
                let changed = self.state.versions.typescript != version;
                self.state.versions.typescript = version;
                DispatchResult::changed(changed)
            }
            Action::SetDependencyVersion { name, version } => {
                let deps = &mut self.state.versions.dependencies;
                let changed = match version {
                    Some(version) => deps.insert(name, version.clone()) != Some(version),
                    None => deps.remove(&name).is_some(),
                };
                DispatchResult::changed(changed)
            }
            Action::SetLocale(locale) => {
                let changed = self.state.locale != locale;
                self.state.locale = locale;
                DispatchResult::changed(changed)
            }
            Action::LoadState(encoded) => self.deserialize(&encoded),
            Action::ResetFiles => {
                self.reset_files();
                DispatchResult::changed(true)
            }
            Action::CompileFinished { results, merge } => {
                DispatchResult::changed(self.apply_compile_results(results, merge))
            }
            Action::BuildConfigEvaluated {
                config,
                recompile_all,
            } => {
                self.state.build_config = Arc::new(config);
                let mut effects = Vec::new();
                if recompile_all {
                    let ctx = self.state.compile_context();
                    effects.extend(self.state.files.iter().map(|file| Effect::Compile {
                        files: vec![file.clone()],
                        ctx: ctx.clone(),
                        merge: ErrorMerge::Append,
                    }));
                }
                DispatchResult {
                    effects,
                    state_changed: true,
                }
            }
        }
    }

    fn apply_compile_results(
        &mut self,
        results: Vec<(String, CompileOutput)>,
        merge: ErrorMerge,
    ) -> bool {
        let mut diagnostics = Vec::new();
        for (filename, output) in results {
            match self.state.files.get_mut(&filename) {
                Some(file) => file.compiled = output.compiled,
                None => tracing::debug!(%filename, "compile result for removed file"),
            }
            diagnostics.extend(output.diagnostics);
        }
        match merge {
            ErrorMerge::Replace => {
                self.state.errors.replace(diagnostics);
            }
            ErrorMerge::Append => {
                self.state.errors.extend(diagnostics);
            }
        }
        true
    }

    /// Selecting a version re-derives the built-in import map for it.
    fn set_framework_version(&mut self, version: Option<String>) -> bool {
        if self.state.versions.framework == version {
            return false;
        }
        self.state.versions.framework = version;
        self.state.builtin_import_map = self.state.framework_import_map();
        true
    }

    fn template(&self) -> Option<Template> {
        self.catalog.template(&self.state.template)
    }

    /// Regenerates the current preset's default file set.
    pub(crate) fn reset_files(&mut self) {
        match self.template() {
            Some(template) => self.state.install_template(&template),
            None => {
                tracing::warn!(template = %self.state.template, "unknown template");
                self.state.errors.set_single(Diagnostic::message(format!(
                    "Unknown template \"{}\".",
                    self.state.template
                )));
            }
        }
    }
}

fn empty_template() -> Template {
    Template {
        main_file: "App.vue".to_string(),
        markup_entry: String::new(),
        main_source: String::new(),
        build_config_source: String::new(),
        macros_config_source: String::new(),
        tsconfig_source: default_tsconfig().to_string(),
        new_file_boilerplate: String::new(),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/store.rs"]
mod tests;
