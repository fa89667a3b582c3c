use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProblemSeverity {
    Error,
    Warning,
}

impl ProblemSeverity {
    pub fn label(self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warning => "warning",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProblemPosition {
    pub line: u32,
    pub column: u32,
}

/// One entry in the workspace error panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    Message(String),
    Structured {
        filename: Option<String>,
        message: String,
        severity: ProblemSeverity,
        position: Option<ProblemPosition>,
    },
}

impl Diagnostic {
    pub fn message(text: impl Into<String>) -> Self {
        Self::Message(text.into())
    }

    pub fn error_in(filename: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Structured {
            filename: Some(filename.into()),
            message: message.into(),
            severity: ProblemSeverity::Error,
            position: None,
        }
    }

    pub fn text(&self) -> &str {
        match self {
            Self::Message(text) => text,
            Self::Structured { message, .. } => message,
        }
    }

    pub fn filename(&self) -> Option<&str> {
        match self {
            Self::Message(_) => None,
            Self::Structured { filename, .. } => filename.as_deref(),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Message(text) => f.write_str(text),
            Self::Structured {
                filename,
                message,
                severity,
                position,
            } => {
                write!(f, "[{}] ", severity.label())?;
                if let Some(filename) = filename {
                    write!(f, "{filename}")?;
                    if let Some(pos) = position {
                        write!(f, ":{}:{}", pos.line, pos.column)?;
                    }
                    write!(f, ": ")?;
                }
                f.write_str(message)
            }
        }
    }
}

/// Ordered diagnostics shown in the error panel. Writers are last-write-wins.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ErrorList {
    items: Vec<Diagnostic>,
}

impl ErrorList {
    pub fn items(&self) -> &[Diagnostic] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn replace(&mut self, items: Vec<Diagnostic>) -> bool {
        if self.items == items {
            return false;
        }
        self.items = items;
        true
    }

    pub fn set_single(&mut self, item: Diagnostic) -> bool {
        self.replace(vec![item])
    }

    pub fn extend(&mut self, items: impl IntoIterator<Item = Diagnostic>) -> bool {
        let before = self.items.len();
        self.items.extend(items);
        self.items.len() != before
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/problems.rs"]
mod tests;
