use std::future::Future;
use std::sync::Arc;

use crate::kernel::action::NewFile;
use crate::kernel::config_eval::ConfigEvaluator;
use crate::kernel::error::StoreError;
use crate::kernel::file::BUILD_CONFIG_FILE;
use crate::kernel::import_map::ImportMap;
use crate::kernel::state::WorkspaceState;
use crate::kernel::{Action, Effect, Store};

use super::bus::{kernel_bus, KernelBusReceiver, KernelBusSender, KernelMessage};
use super::ports::{AsyncExecutor, Compiler, Dialogs, LanguageToolsReloader, ModuleEvaluator};

pub struct Collaborators {
    pub compiler: Arc<dyn Compiler>,
    pub evaluator: Arc<dyn ModuleEvaluator>,
    pub dialogs: Arc<dyn Dialogs>,
    pub language_tools: Option<Arc<dyn LanguageToolsReloader>>,
}

/// Runs the store's effects against the collaborators and feeds their
/// completions back in arrival order.
pub struct WorkspaceHost {
    store: Store,
    collaborators: Collaborators,
    config_evaluator: ConfigEvaluator,
    executor: Arc<dyn AsyncExecutor>,
    bus: KernelBusSender,
    rx: KernelBusReceiver,
    in_flight: usize,
}

impl WorkspaceHost {
    pub fn new(store: Store, collaborators: Collaborators, executor: Arc<dyn AsyncExecutor>) -> Self {
        let (bus, rx) = kernel_bus();
        let config_evaluator = ConfigEvaluator::new(Arc::clone(&collaborators.evaluator));
        Self {
            store,
            collaborators,
            config_evaluator,
            executor,
            bus,
            rx,
            in_flight: 0,
        }
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    pub fn state(&self) -> &WorkspaceState {
        self.store.state()
    }

    pub fn in_flight(&self) -> usize {
        self.in_flight
    }

    pub fn init(&mut self) -> Result<(), StoreError> {
        let result = self.store.init()?;
        self.run_effects(result.effects);
        Ok(())
    }

    pub fn dispatch(&mut self, action: Action) -> bool {
        let result = self.store.dispatch(action);
        self.run_effects(result.effects);
        result.state_changed
    }

    pub fn set_active(&mut self, filename: impl Into<String>) -> bool {
        self.dispatch(Action::SetActive(filename.into()))
    }

    pub fn add_file(&mut self, file: impl Into<NewFile>) -> bool {
        self.dispatch(Action::AddFile(file.into()))
    }

    /// Deletes after the dialogs collaborator confirms.
    pub fn delete_file(&mut self, filename: impl Into<String>) -> bool {
        self.dispatch(Action::RequestDeleteFile(filename.into()))
    }

    pub fn rename_file(&mut self, from: impl Into<String>, to: impl Into<String>) -> bool {
        self.dispatch(Action::RenameFile {
            from: from.into(),
            to: to.into(),
        })
    }

    pub fn update_code(&mut self, filename: impl Into<String>, code: impl Into<String>) -> bool {
        self.dispatch(Action::UpdateCode {
            filename: filename.into(),
            code: code.into(),
        })
    }

    pub fn set_template(&mut self, name: impl Into<String>) -> bool {
        self.dispatch(Action::SetTemplate(name.into()))
    }

    pub fn set_builtin_import_map(&mut self, map: ImportMap) -> bool {
        self.dispatch(Action::SetBuiltinImportMap(map))
    }

    /// The store re-derives the built-in import map for the new version.
    pub fn select_framework_version(&mut self, version: Option<String>) -> bool {
        self.dispatch(Action::SetFrameworkVersion(version))
    }

    /// Reaches the language tools only; the import map is left alone.
    pub fn set_dependency_version(&mut self, name: impl Into<String>, version: Option<String>) -> bool {
        self.dispatch(Action::SetDependencyVersion {
            name: name.into(),
            version,
        })
    }

    pub fn load_state(&mut self, encoded: impl Into<String>) -> bool {
        self.dispatch(Action::LoadState(encoded.into()))
    }

    pub fn serialize(&mut self) -> Result<String, StoreError> {
        self.store.serialize()
    }

    /// Applies every completion already delivered without waiting.
    pub fn pump(&mut self) -> Result<bool, StoreError> {
        let mut changed = false;
        while let Ok(msg) = self.rx.try_recv() {
            self.in_flight = self.in_flight.saturating_sub(1);
            changed |= self.handle_message(msg)?;
        }
        Ok(changed)
    }

    /// Waits until no task is in flight, including tasks spawned by the
    /// completions themselves.
    pub async fn settle(&mut self) -> Result<(), StoreError> {
        while self.in_flight > 0 {
            let Some(msg) = self.rx.recv().await else {
                break;
            };
            self.in_flight -= 1;
            self.handle_message(msg)?;
        }
        Ok(())
    }

    /// Receives and applies exactly one completion.
    pub async fn step(&mut self) -> Result<bool, StoreError> {
        if self.in_flight == 0 {
            return Ok(false);
        }
        match self.rx.recv().await {
            Some(msg) => {
                self.in_flight -= 1;
                self.handle_message(msg)
            }
            None => Ok(false),
        }
    }

    fn handle_message(&mut self, msg: KernelMessage) -> Result<bool, StoreError> {
        match msg {
            KernelMessage::Action(action) => Ok(self.dispatch(action)),
            KernelMessage::Failed(err) => {
                tracing::error!(error = %err, "task failed");
                Err(err)
            }
        }
    }

    fn run_effects(&mut self, effects: Vec<Effect>) {
        for effect in effects {
            self.run_effect(effect);
        }
    }

    fn run_effect(&mut self, effect: Effect) {
        match effect {
            Effect::Compile { files, ctx, merge } => {
                tracing::debug!(files = files.len(), ?merge, "compile");
                let compiler = Arc::clone(&self.collaborators.compiler);
                self.spawn(async move {
                    let mut results = Vec::with_capacity(files.len());
                    for file in files {
                        let filename = file.filename.clone();
                        let output = compiler.compile(ctx.clone(), file).await;
                        results.push((filename, output));
                    }
                    KernelMessage::Action(Action::CompileFinished { results, merge })
                });
            }
            Effect::EvaluateBuildConfig {
                source,
                import_map,
                recompile_all,
            } => {
                tracing::debug!(recompile_all, "evaluate build config");
                let evaluation = self.config_evaluator.evaluate(&source, &import_map);
                self.spawn(async move {
                    match evaluation.await {
                        Ok(config) => KernelMessage::Action(Action::BuildConfigEvaluated {
                            config,
                            recompile_all,
                        }),
                        Err(e) => KernelMessage::Failed(StoreError::BuildConfig {
                            file: BUILD_CONFIG_FILE.to_string(),
                            message: e.to_string(),
                        }),
                    }
                });
            }
            Effect::ReloadLanguageTools(inputs) => {
                if let Some(reloader) = &self.collaborators.language_tools {
                    tracing::debug!("reload language tools");
                    reloader.reload(&inputs);
                }
            }
            Effect::ConfirmDelete { filename, message } => {
                if self.collaborators.dialogs.confirm(&message) {
                    self.dispatch(Action::DeleteFile(filename));
                } else {
                    tracing::debug!(%filename, "delete cancelled");
                }
            }
            Effect::Alert(message) => self.collaborators.dialogs.alert(&message),
        }
    }

    fn spawn<F>(&mut self, task: F)
    where
        F: Future<Output = KernelMessage> + Send + 'static,
    {
        self.in_flight += 1;
        let bus = self.bus.clone();
        self.executor.spawn(Box::pin(async move {
            let msg = task.await;
            let _ = bus.send(msg);
        }));
    }
}
