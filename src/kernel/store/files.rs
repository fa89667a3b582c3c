use super::{DispatchResult, Store};
use crate::kernel::action::{ErrorMerge, NewFile};
use crate::kernel::effect::Effect;
use crate::kernel::file::{is_reserved, VirtualFile};
use crate::kernel::problems::Diagnostic;
use crate::kernel::template::BOILERPLATE_EXTENSION;

impl Store {
    /// Reserved names go to the config slot. Existence is not checked.
    pub(super) fn set_active(&mut self, filename: String) -> bool {
        if is_reserved(&filename) {
            let next = Some(filename);
            let changed = self.state.active_config_filename != next;
            self.state.active_config_filename = next;
            changed
        } else {
            let changed = self.state.active_filename != filename;
            self.state.active_filename = filename;
            changed
        }
    }

    pub(super) fn add_file(&mut self, file: NewFile) -> bool {
        let file = match file {
            NewFile::File(file) => file,
            NewFile::Name(filename) => {
                let code = if filename.ends_with(BOILERPLATE_EXTENSION) {
                    self.template()
                        .map(|t| t.new_file_boilerplate)
                        .unwrap_or_default()
                } else {
                    String::new()
                };
                VirtualFile::new(filename, code)
            }
        };

        let filename = file.filename.clone();
        let hidden = file.hidden;
        self.state.files.insert(file);
        if !hidden {
            self.set_active(filename);
        }
        true
    }

    pub(super) fn request_delete(&mut self, filename: String) -> DispatchResult {
        if !self.state.files.contains(&filename) {
            tracing::warn!(%filename, "delete of unknown file");
            self.state.errors.set_single(Diagnostic::message(format!(
                "Could not delete \"{filename}\", file not found."
            )));
            return DispatchResult::changed(true);
        }
        if filename == self.state.main_file {
            tracing::warn!(%filename, "delete of main file refused");
            self.state.errors.set_single(Diagnostic::message(format!(
                "Cannot delete \"{filename}\", it is the main file."
            )));
            return DispatchResult::changed(true);
        }

        DispatchResult {
            effects: vec![Effect::ConfirmDelete {
                message: format!("Are you sure you want to delete {filename}?"),
                filename,
            }],
            state_changed: false,
        }
    }

    pub(super) fn delete_file(&mut self, filename: &str) -> bool {
        if filename == self.state.main_file || self.state.files.remove(filename).is_none() {
            return false;
        }
        if self.state.active_filename == filename {
            self.state.active_filename = self.state.main_file.clone();
        }
        if self.state.active_config_filename.as_deref() == Some(filename) {
            self.state.active_config_filename = None;
        }
        tracing::debug!(%filename, "file deleted");
        true
    }

    pub(super) fn rename_file(&mut self, from: &str, to: &str) -> DispatchResult {
        if let Some(message) = self.rename_error(from, to) {
            tracing::warn!(%from, %to, %message, "rename refused");
            self.state.errors.set_single(Diagnostic::message(message));
            return DispatchResult::changed(true);
        }

        self.state.files.rename(from, to);
        if self.state.main_file == from {
            self.state.main_file = to.to_string();
        }

        if self.state.active_filename == from {
            self.state.active_filename = to.to_string();
            if let Some(watchers) = self.watchers.as_mut() {
                watchers.follow_rename(from, to);
            }
            return DispatchResult::changed(true);
        }

        // Content is unchanged; this only refreshes diagnostics under the new name.
        let effects = self
            .state
            .files
            .get(to)
            .map(|file| Effect::Compile {
                files: vec![file.clone()],
                ctx: self.state.compile_context(),
                merge: ErrorMerge::Replace,
            })
            .into_iter()
            .collect();
        DispatchResult {
            effects,
            state_changed: true,
        }
    }

    fn rename_error(&self, from: &str, to: &str) -> Option<String> {
        if !self.state.files.contains(from) {
            return Some(format!("Could not rename \"{from}\", file not found."));
        }
        if to.is_empty() {
            return Some(format!("Cannot rename \"{from}\" to an empty filename."));
        }
        if from == to {
            return Some(format!("Cannot rename \"{from}\" to the same filename."));
        }
        if is_reserved(from) || is_reserved(to) {
            return Some(format!("Cannot rename \"{from}\" to \"{to}\", reserved filename."));
        }
        if self.state.files.contains(to) {
            return Some(format!("Cannot rename \"{from}\" to \"{to}\", file already exists."));
        }
        None
    }

    pub(super) fn update_code(&mut self, filename: &str, code: String) -> bool {
        match self.state.files.get_mut(filename) {
            Some(file) if file.code == code => false,
            Some(file) => {
                file.code = code;
                true
            }
            None => {
                tracing::warn!(%filename, "edit of unknown file");
                false
            }
        }
    }
}
