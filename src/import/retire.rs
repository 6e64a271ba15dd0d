//! Removal records for destination defaults the override layer supersedes
//!
//! When a user rebinds or unbinds an IntelliJ action, VS Code's own default
//! shortcut for the mapped command would otherwise stay active next to the
//! imported one.

use std::collections::HashSet;

use crate::keymap::{ActionCommandTable, DestinationKeybinding, KeymapEntry};

/// Build `-command` records for every destination default of a command
/// whose source action appears in the custom layer
///
/// Order follows the custom layer, then the destination defaults. Each
/// removal appears once.
pub fn retire(
    custom: &[KeymapEntry],
    actions: &ActionCommandTable,
    destination_defaults: &[DestinationKeybinding],
) -> Vec<DestinationKeybinding> {
    let mut seen: HashSet<DestinationKeybinding> = HashSet::new();
    let mut removals = Vec::new();

    for entry in custom {
        let Some(mapping) = actions.get(&entry.action_id) else {
            continue;
        };
        for default in destination_defaults
            .iter()
            .filter(|d| !d.is_removal() && mapping.maps_to(&d.command))
        {
            let removal = default.removal();
            if seen.insert(removal.clone()) {
                removals.push(removal);
            }
        }
    }

    removals
}
