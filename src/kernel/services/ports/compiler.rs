use std::sync::Arc;

use crate::kernel::file::{CompiledArtifacts, VirtualFile};
use crate::kernel::import_map::ImportMap;
use crate::kernel::problems::Diagnostic;

use super::evaluator::BuildConfig;
use super::runtime::BoxFuture;

/// Read-only view of the workspace a compile runs against.
#[derive(Debug, Clone, Default)]
pub struct CompileContext {
    pub build_config: Arc<BuildConfig>,
    pub import_map: ImportMap,
    pub framework_version: Option<String>,
    pub macros_config_url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CompileOutput {
    pub compiled: CompiledArtifacts,
    pub diagnostics: Vec<Diagnostic>,
}

impl CompileOutput {
    pub fn with_diagnostics(diagnostics: Vec<Diagnostic>) -> Self {
        Self {
            compiled: CompiledArtifacts::default(),
            diagnostics,
        }
    }
}

pub trait Compiler: Send + Sync {
    fn compile(&self, ctx: CompileContext, file: VirtualFile) -> BoxFuture<CompileOutput>;
}
