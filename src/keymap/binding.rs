//! Binding records on both sides of the import
//!
//! [`KeymapEntry`] is one IntelliJ `<action>`; [`DestinationKeybinding`] is one
//! object of VS Code's `keybindings.json`.

use super::types::Shortcut;

/// One source-schema binding: an action and its shortcuts
///
/// An empty `keystrokes` list means the action is explicitly unbound.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeymapEntry {
    pub action_id: String,
    pub keystrokes: Vec<Shortcut>,
}

impl KeymapEntry {
    pub fn new(action_id: impl Into<String>, keystrokes: Vec<Shortcut>) -> Self {
        Self {
            action_id: action_id.into(),
            keystrokes,
        }
    }

    /// An entry that removes every shortcut of `action_id`
    pub fn unbound(action_id: impl Into<String>) -> Self {
        Self::new(action_id, Vec::new())
    }

    pub fn is_unbound(&self) -> bool {
        self.keystrokes.is_empty()
    }
}

/// A single destination keybinding
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DestinationKeybinding {
    pub key: Shortcut,
    pub command: String,
    /// Context clause; only set when the source carried one
    pub when: Option<String>,
}

impl DestinationKeybinding {
    pub fn new(key: Shortcut, command: impl Into<String>) -> Self {
        Self {
            key,
            command: command.into(),
            when: None,
        }
    }

    /// Add a context clause to this binding (builder pattern)
    pub fn when(mut self, clause: impl Into<String>) -> Self {
        self.when = Some(clause.into());
        self
    }

    /// VS Code's `-command` form that removes an earlier binding
    pub fn is_removal(&self) -> bool {
        self.command.starts_with('-')
    }

    /// The removal record cancelling this binding
    pub fn removal(&self) -> Self {
        Self {
            key: self.key.clone(),
            command: format!("-{}", self.command),
            when: self.when.clone(),
        }
    }
}
