//! repl-store - headless state store for an in-browser component playground.
//!
//! Module layout:
//! - kernel: files, import maps, presets, the store and its watchers
//! - kernel::services: collaborator ports, adapters and the effect host

pub mod kernel;
