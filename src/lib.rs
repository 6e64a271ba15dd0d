//! keyport - IntelliJ keymap importer for VS Code
//!
//! This crate translates an IntelliJ keymap (platform defaults plus a user's
//! overrides) into VS Code keybindings for a chosen destination platform.

pub mod cli;
pub mod config;
pub mod config_paths;
pub mod error;
pub mod import;
pub mod keymap;
pub mod parse;
pub mod resources;
pub mod tracing;

// Re-export commonly used types
pub use config::ImporterConfig;
pub use error::{ImportError, Result};
pub use import::{generate, run, ImportEvent, ImportRequest, Translation};
pub use keymap::{DestinationKeybinding, KeymapEntry, Os, OsPair};
