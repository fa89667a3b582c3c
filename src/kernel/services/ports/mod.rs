//! Service ports: traits + data contracts.

pub mod compiler;
pub mod dialogs;
pub mod evaluator;
pub mod language_tools;
pub mod runtime;
pub mod settings;
pub mod templates;

pub use compiler::{CompileContext, CompileOutput, Compiler};
pub use dialogs::{Dialogs, HeadlessDialogs};
pub use evaluator::{BuildConfig, EvalError, ModuleEvaluator, Plugin};
pub use language_tools::{LanguageToolsInputs, LanguageToolsReloader};
pub use runtime::{AsyncExecutor, BoxFuture};
pub use settings::WorkspaceSettings;
pub use templates::{Template, TemplateCatalog};
