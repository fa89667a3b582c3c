/// Blocking user prompts.
pub trait Dialogs: Send + Sync {
    fn confirm(&self, message: &str) -> bool;
    fn alert(&self, message: &str);
}

/// Confirms everything and logs alerts. Used when no UI is attached.
#[derive(Debug, Default, Clone, Copy)]
pub struct HeadlessDialogs;

impl Dialogs for HeadlessDialogs {
    fn confirm(&self, message: &str) -> bool {
        tracing::debug!(message, "auto-confirming prompt");
        true
    }

    fn alert(&self, message: &str) {
        tracing::warn!(message, "alert");
    }
}
