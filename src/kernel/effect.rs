use super::action::ErrorMerge;
use super::file::VirtualFile;
use super::import_map::ImportMap;
use super::services::ports::{CompileContext, LanguageToolsInputs};

#[derive(Debug, Clone)]
pub enum Effect {
    /// Compiles `files` in order; the batch settles as one `CompileFinished`.
    Compile {
        files: Vec<VirtualFile>,
        ctx: CompileContext,
        merge: ErrorMerge,
    },
    EvaluateBuildConfig {
        source: String,
        import_map: ImportMap,
        recompile_all: bool,
    },
    ReloadLanguageTools(LanguageToolsInputs),
    ConfirmDelete {
        filename: String,
        message: String,
    },
    Alert(String),
}
