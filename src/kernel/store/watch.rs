//! Change detection run after every dispatch.
//!
//! Each watcher keeps the last value of the fields it tracks. Watchers that
//! mutate state (preset switch, import map) run before the ones that only
//! emit effects, so the latter observe the mutated files in the same pass.

use crate::kernel::action::ErrorMerge;
use crate::kernel::effect::Effect;
use crate::kernel::file::BUILD_CONFIG_FILE;
use crate::kernel::import_map::{self, ImportMap};
use crate::kernel::problems::Diagnostic;
use crate::kernel::services::ports::{LanguageToolsInputs, TemplateCatalog};
use crate::kernel::state::WorkspaceState;

#[derive(Debug, Clone, PartialEq, Eq)]
struct ActiveSnapshot {
    filename: String,
    code: Option<String>,
    config: Option<(String, String)>,
}

impl ActiveSnapshot {
    fn of(state: &WorkspaceState) -> Self {
        Self {
            filename: state.resolved_active_filename().to_string(),
            code: state.active_file().map(|f| f.code.clone()),
            config: state
                .active_config_file()
                .map(|f| (f.filename.clone(), f.code.clone())),
        }
    }
}

pub(super) struct Watchers {
    template: String,
    builtin_import_map: ImportMap,
    build_config_code: Option<String>,
    /// `None` until the first run; this watcher fires immediately.
    active: Option<ActiveSnapshot>,
    language_tools: LanguageToolsInputs,
}

impl Watchers {
    pub(super) fn baseline(state: &WorkspaceState) -> Self {
        Self {
            template: state.template.clone(),
            builtin_import_map: state.builtin_import_map.clone(),
            build_config_code: state.files.code(BUILD_CONFIG_FILE).map(str::to_string),
            active: None,
            language_tools: state.language_tools_inputs(),
        }
    }

    pub(super) fn follow_rename(&mut self, from: &str, to: &str) {
        if let Some(active) = self.active.as_mut() {
            if active.filename == from {
                active.filename = to.to_string();
            }
        }
    }

    pub(super) fn run(
        &mut self,
        state: &mut WorkspaceState,
        catalog: &dyn TemplateCatalog,
        effects: &mut Vec<Effect>,
    ) -> bool {
        let mut changed = self.run_template(state, catalog);
        let builtin_changed = self.run_builtin_import_map(state);
        changed |= builtin_changed;
        self.run_build_config(state, builtin_changed, effects);
        self.run_active(state, effects);
        changed |= self.run_language_tools(state, effects);
        changed
    }

    fn run_template(&mut self, state: &mut WorkspaceState, catalog: &dyn TemplateCatalog) -> bool {
        if state.template == self.template {
            return false;
        }
        self.template = state.template.clone();

        match catalog.template(&state.template) {
            Some(template) => {
                tracing::debug!(template = %state.template, "preset switched");
                state.install_template(&template);
            }
            None => {
                tracing::warn!(template = %state.template, "unknown template");
                state.errors.set_single(Diagnostic::message(format!(
                    "Unknown template \"{}\".",
                    state.template
                )));
            }
        }
        true
    }

    fn run_builtin_import_map(&mut self, state: &mut WorkspaceState) -> bool {
        if state.builtin_import_map == self.builtin_import_map {
            return false;
        }
        let previous =
            std::mem::replace(&mut self.builtin_import_map, state.builtin_import_map.clone());

        // The file still holds the previous built-in entries; only real
        // overrides carry over.
        let user = import_map::effective(&state.files, &mut state.errors)
            .overrides_of_mirrored(&previous, &state.settings.cdn_mirror);
        let merged = import_map::merge(&state.builtin_import_map, &user);
        import_map::apply(&mut state.files, &merged, &state.settings.cdn_mirror);
        state.refresh_macros_config_url();
        tracing::debug!(entries = merged.imports.len(), "built-in import map applied");
        true
    }

    /// Specifiers are substituted from the built-in map, so a change to it
    /// re-evaluates just like a source edit. One evaluation per pass.
    fn run_build_config(
        &mut self,
        state: &WorkspaceState,
        builtin_changed: bool,
        effects: &mut Vec<Effect>,
    ) {
        let code = state.files.code(BUILD_CONFIG_FILE).map(str::to_string);
        let code_changed = code != self.build_config_code;
        if !code_changed && !builtin_changed {
            return;
        }
        self.build_config_code = code.clone();

        if let Some(source) = code {
            tracing::debug!(code_changed, builtin_changed, "build config needs evaluation");
            effects.push(Effect::EvaluateBuildConfig {
                source,
                import_map: state.builtin_import_map.clone(),
                recompile_all: true,
            });
        }
    }

    fn run_active(&mut self, state: &WorkspaceState, effects: &mut Vec<Effect>) {
        let snapshot = ActiveSnapshot::of(state);
        if self.active.as_ref() == Some(&snapshot) {
            return;
        }
        self.active = Some(snapshot);

        let files: Vec<_> = state
            .active_file()
            .into_iter()
            .chain(state.active_config_file())
            .cloned()
            .collect();
        if files.is_empty() {
            return;
        }
        effects.push(Effect::Compile {
            files,
            ctx: state.compile_context(),
            merge: ErrorMerge::Replace,
        });
    }

    fn run_language_tools(&mut self, state: &mut WorkspaceState, effects: &mut Vec<Effect>) -> bool {
        let inputs = state.language_tools_inputs();
        if inputs == self.language_tools {
            return false;
        }

        let macros_changed = inputs.macros_config_code != self.language_tools.macros_config_code;
        if macros_changed {
            state.refresh_macros_config_url();
        }
        self.language_tools = inputs.clone();
        tracing::debug!(macros_changed, "language tools inputs changed");
        effects.push(Effect::ReloadLanguageTools(inputs));
        macros_changed
    }
}
