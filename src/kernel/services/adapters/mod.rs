//! Service adapters: runtime and filesystem implementations of the ports.

pub mod runtime;
pub mod settings;

pub use runtime::TokioExecutor;
pub use settings::{ensure_settings_file, load_settings};
