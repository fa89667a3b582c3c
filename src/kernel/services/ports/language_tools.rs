use std::collections::BTreeMap;

/// Everything the language service depends on. Compared by value, so a change
/// anywhere inside (including nested maps) counts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LanguageToolsInputs {
    pub macros_config_code: Option<String>,
    pub tsconfig_code: Option<String>,
    pub typescript_version: Option<String>,
    pub locale: Option<String>,
    pub dependency_versions: BTreeMap<String, String>,
    pub framework_version: Option<String>,
}

pub trait LanguageToolsReloader: Send + Sync {
    fn reload(&self, inputs: &LanguageToolsInputs);
}
