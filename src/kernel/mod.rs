//! Headless workspace core (state/action/effect).

pub mod action;
pub mod codec;
pub mod config_eval;
pub mod effect;
pub mod error;
pub mod file;
pub mod import_map;
pub mod language;
pub mod problems;
pub mod services;
pub mod state;
pub mod store;
pub mod template;

pub use action::{Action, ErrorMerge, NewFile};
pub use effect::Effect;
pub use error::{CodecError, StoreError};
pub use file::{CompiledArtifacts, FileMap, OutputKind, VirtualFile};
pub use import_map::{CdnMirror, ImportMap};
pub use language::FileLanguage;
pub use problems::{Diagnostic, ErrorList, ProblemPosition, ProblemSeverity};
pub use state::{VersionSelection, WorkspaceState};
pub use store::{DispatchResult, Store};
pub use template::BuiltinTemplates;
