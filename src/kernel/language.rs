#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum FileLanguage {
    Vue,
    Html,
    Css,
    TypeScript,
    JavaScript,
}

impl FileLanguage {
    pub fn from_filename(filename: &str) -> Self {
        let ext = filename
            .rsplit_once('.')
            .map(|(_, ext)| ext)
            .unwrap_or_default();
        match ext {
            "vue" => Self::Vue,
            "html" => Self::Html,
            "css" => Self::Css,
            "ts" => Self::TypeScript,
            _ => Self::JavaScript,
        }
    }

    /// Identifier handed to the editor for highlighting.
    pub fn language_id(self) -> &'static str {
        match self {
            Self::Vue => "vue",
            Self::Html => "html",
            Self::Css => "css",
            Self::TypeScript => "typescript",
            Self::JavaScript => "javascript",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Self::Vue => "Vue",
            Self::Html => "HTML",
            Self::Css => "CSS",
            Self::TypeScript => "TypeScript",
            Self::JavaScript => "JavaScript",
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/language.rs"]
mod tests;
