//! Keymap merger: default keymap + user override layer

use std::collections::HashMap;

use crate::keymap::KeymapEntry;

/// Merge a custom keymap into a default keymap
///
/// Custom entries override or extend the defaults:
/// - If the action already exists → its keystrokes are replaced wholesale
///   (an empty list unbinds the action)
/// - Otherwise → the custom entry is appended
///
/// Pre-existing actions keep their default position; custom-only actions
/// follow in custom order.
pub fn merge(defaults: Vec<KeymapEntry>, custom: Vec<KeymapEntry>) -> Vec<KeymapEntry> {
    let mut result: Vec<KeymapEntry> = Vec::with_capacity(defaults.len() + custom.len());
    let mut index: HashMap<String, usize> = HashMap::with_capacity(defaults.len());

    for entry in defaults.into_iter().chain(custom) {
        if let Some(&idx) = index.get(&entry.action_id) {
            result[idx].keystrokes = entry.keystrokes;
        } else {
            index.insert(entry.action_id.clone(), result.len());
            result.push(entry);
        }
    }

    result
}
