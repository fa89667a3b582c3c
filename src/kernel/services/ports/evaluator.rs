use std::fmt;
use std::sync::Arc;

use super::runtime::BoxFuture;

/// Hooks a build plugin may expose. Only the compiler calls them.
pub trait Plugin: Send + Sync {
    fn name(&self) -> &str;

    fn resolve_id(&self, _id: &str, _importer: Option<&str>) -> Option<String> {
        None
    }

    fn load(&self, _id: &str) -> Option<String> {
        None
    }

    fn transform(&self, _code: &str, _id: &str) -> Option<String> {
        None
    }
}

/// Default export of the evaluated build-config module.
#[derive(Clone, Default)]
pub struct BuildConfig {
    pub plugins: Vec<Arc<dyn Plugin>>,
}

impl BuildConfig {
    pub fn plugin_names(&self) -> Vec<&str> {
        self.plugins.iter().map(|p| p.name()).collect()
    }
}

impl fmt::Debug for BuildConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BuildConfig")
            .field("plugins", &self.plugin_names())
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvalError(pub String);

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for EvalError {}

/// Evaluates a self-contained ES module given as a `data:` URL and returns
/// its default export.
pub trait ModuleEvaluator: Send + Sync {
    fn evaluate(&self, module_url: String) -> BoxFuture<Result<BuildConfig, EvalError>>;
}
