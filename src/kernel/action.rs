use super::file::VirtualFile;
use super::import_map::ImportMap;
use super::services::ports::{BuildConfig, CompileOutput};

#[derive(Debug, Clone)]
pub enum NewFile {
    Name(String),
    File(VirtualFile),
}

impl From<&str> for NewFile {
    fn from(name: &str) -> Self {
        Self::Name(name.to_string())
    }
}

impl From<String> for NewFile {
    fn from(name: String) -> Self {
        Self::Name(name)
    }
}

impl From<VirtualFile> for NewFile {
    fn from(file: VirtualFile) -> Self {
        Self::File(file)
    }
}

/// How a compile batch's diagnostics land in the error list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorMerge {
    Replace,
    Append,
}

#[derive(Debug, Clone)]
pub enum Action {
    SetActive(String),
    AddFile(NewFile),
    /// Asks for confirmation; the deletion itself is `DeleteFile`.
    RequestDeleteFile(String),
    DeleteFile(String),
    RenameFile {
        from: String,
        to: String,
    },
    UpdateCode {
        filename: String,
        code: String,
    },
    SetEditorViewState {
        filename: String,
        view_state: Option<serde_json::Value>,
    },
    SetTemplate(String),
    SetBuiltinImportMap(ImportMap),
    SetFrameworkVersion(Option<String>),
    SetTypescriptVersion(Option<String>),
    SetDependencyVersion {
        name: String,
        version: Option<String>,
    },
    SetLocale(Option<String>),
    LoadState(String),
    ResetFiles,
    CompileFinished {
        results: Vec<(String, CompileOutput)>,
        merge: ErrorMerge,
    },
    BuildConfigEvaluated {
        config: BuildConfig,
        recompile_all: bool,
    },
}
