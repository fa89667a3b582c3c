/// Source set a preset generates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    pub main_file: String,
    pub markup_entry: String,
    pub main_source: String,
    pub build_config_source: String,
    pub macros_config_source: String,
    pub tsconfig_source: String,
    pub new_file_boilerplate: String,
}

pub trait TemplateCatalog: Send + Sync {
    fn template(&self, name: &str) -> Option<Template>;

    fn names(&self) -> Vec<String>;
}
