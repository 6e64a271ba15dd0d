//! Keymap data model shared by both schemas
//!
//! This module provides the records the import engine works on:
//! - Platform-aware key chords with order-independent modifier sets
//! - IntelliJ keymap entries and VS Code keybinding records
//! - The data-driven action and keystroke lookup tables
//!
//! # Loading Tables
//!
//! ```ignore
//! // Bundled tables
//! let actions = resources::action_table()?;
//!
//! // Or a user-supplied YAML file
//! let actions = ActionCommandTable::from_yaml(&std::fs::read_to_string("actions.yaml")?)?;
//! ```

mod binding;
mod tables;
mod types;

pub use binding::{DestinationKeybinding, KeymapEntry};
pub use tables::{
    is_destination_key, ActionCommandMapping, ActionCommandTable, CommandTarget,
    KeystrokeTokenTable, Untranslatable,
};
pub use types::{KeyChord, Modifier, Modifiers, Os, OsPair, Shortcut};
