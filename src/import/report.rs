//! Reporting events for anything the import leaves out
//!
//! Events are advisory: the generated document always holds the subset that
//! translated cleanly, and every dropped entry produces one event.

use std::fmt;

use crate::keymap::{Modifier, Shortcut};

/// Something the import skipped, and why
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImportEvent {
    /// The action id is not in the action table (not yet catalogued)
    UnknownAction { action_id: String },
    /// The action table lists the id with no destination command
    NoEquivalent { action_id: String },
    /// A shortcut uses a modifier the token table has no mapping for
    UntranslatableModifier {
        action_id: String,
        shortcut: Shortcut,
        modifier: Modifier,
    },
    /// A shortcut uses a base key VS Code has no name for
    UntranslatableKey {
        action_id: String,
        shortcut: Shortcut,
        key: String,
    },
    /// The existing configuration binds the key to a different command
    Conflict {
        key: Shortcut,
        command: String,
        existing_command: String,
    },
}

impl ImportEvent {
    /// Emit this event through `tracing`
    pub fn log(&self) {
        match self {
            ImportEvent::NoEquivalent { .. } => tracing::debug!("{}", self),
            ImportEvent::UnknownAction { .. } => tracing::info!("{}", self),
            ImportEvent::UntranslatableModifier { .. }
            | ImportEvent::UntranslatableKey { .. }
            | ImportEvent::Conflict { .. } => tracing::warn!("{}", self),
        }
    }

    /// Short machine-friendly label
    pub fn kind(&self) -> &'static str {
        match self {
            ImportEvent::UnknownAction { .. } => "unknown-action",
            ImportEvent::NoEquivalent { .. } => "no-equivalent",
            ImportEvent::UntranslatableModifier { .. } => "untranslatable-modifier",
            ImportEvent::UntranslatableKey { .. } => "untranslatable-key",
            ImportEvent::Conflict { .. } => "conflict",
        }
    }
}

impl fmt::Display for ImportEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImportEvent::UnknownAction { action_id } => {
                write!(f, "Skipped action {}: no known VS Code command", action_id)
            }
            ImportEvent::NoEquivalent { action_id } => {
                write!(f, "Skipped action {}: VS Code has no equivalent", action_id)
            }
            ImportEvent::UntranslatableModifier {
                action_id,
                shortcut,
                modifier,
            } => write!(
                f,
                "Skipped shortcut {} of {}: no mapping for modifier '{}'",
                shortcut, action_id, modifier
            ),
            ImportEvent::UntranslatableKey {
                action_id,
                shortcut,
                key,
            } => write!(
                f,
                "Skipped shortcut {} of {}: VS Code has no key '{}'",
                shortcut, action_id, key
            ),
            ImportEvent::Conflict {
                key,
                command,
                existing_command,
            } => write!(
                f,
                "Skipped {} → {}: key already bound to {}",
                key, command, existing_command
            ),
        }
    }
}
