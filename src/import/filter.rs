//! Conflict filter against the user's existing keybindings

use std::collections::HashMap;

use super::report::ImportEvent;
use crate::keymap::{DestinationKeybinding, Shortcut};

/// Existing keybindings indexed by key
///
/// Removal records (`-command`) unbind rather than bind, so they are not
/// indexed. `when` clauses are ignored.
#[derive(Debug, Default)]
pub struct KeyIndex<'a> {
    commands: HashMap<&'a Shortcut, Vec<&'a str>>,
}

impl<'a> KeyIndex<'a> {
    pub fn new(existing: &'a [DestinationKeybinding]) -> Self {
        let mut commands: HashMap<&'a Shortcut, Vec<&'a str>> = HashMap::new();
        for binding in existing.iter().filter(|b| !b.is_removal()) {
            commands
                .entry(&binding.key)
                .or_default()
                .push(binding.command.as_str());
        }
        Self { commands }
    }

    /// First existing command on `key` other than `command`
    pub fn conflicting(&self, key: &Shortcut, command: &str) -> Option<&'a str> {
        self.commands
            .get(key)?
            .iter()
            .copied()
            .find(|existing| *existing != command)
    }
}

/// Drop candidates whose key is already bound to a different command
///
/// Re-binding a key to the command it already runs is kept. The policy never
/// overrides an existing distinct binding, at the cost of sometimes
/// under-importing.
pub fn filter(
    candidates: Vec<DestinationKeybinding>,
    existing: &[DestinationKeybinding],
) -> (Vec<DestinationKeybinding>, Vec<ImportEvent>) {
    let index = KeyIndex::new(existing);
    let mut kept = Vec::with_capacity(candidates.len());
    let mut events = Vec::new();

    for candidate in candidates {
        match index.conflicting(&candidate.key, &candidate.command) {
            Some(existing_command) => events.push(ImportEvent::Conflict {
                key: candidate.key,
                command: candidate.command,
                existing_command: existing_command.to_string(),
            }),
            None => kept.push(candidate),
        }
    }

    (kept, events)
}
