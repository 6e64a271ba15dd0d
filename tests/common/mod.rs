//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use std::io::Write;

use keyport::import::{run, ImportRequest, Translation};
use keyport::keymap::{
    ActionCommandMapping, ActionCommandTable, CommandTarget, DestinationKeybinding, KeyChord,
    KeymapEntry, KeystrokeTokenTable, Modifier, Modifiers, Os, OsPair, Shortcut,
};

pub const LINUX: OsPair = OsPair::new(Os::Linux, Os::Linux);

/// Single-chord shortcut
pub fn key(mods: Modifiers, key: &str) -> Shortcut {
    Shortcut::new(KeyChord::new(key, mods))
}

pub fn entry(action_id: &str, keystrokes: &[Shortcut]) -> KeymapEntry {
    KeymapEntry::new(action_id, keystrokes.to_vec())
}

pub fn binding(key: Shortcut, command: &str) -> DestinationKeybinding {
    DestinationKeybinding::new(key, command)
}

/// Action table from `(action, [commands])` pairs
pub fn actions(mappings: &[(&str, &[&str])]) -> ActionCommandTable {
    ActionCommandTable::new(
        mappings
            .iter()
            .map(|(action, commands)| {
                ActionCommandMapping::new(
                    *action,
                    commands.iter().map(|c| CommandTarget::new(*c)).collect(),
                )
            })
            .collect(),
    )
    .unwrap()
}

/// Token table mapping ctrl/shift/alt to themselves for `os`
pub fn identity_tokens(os: OsPair) -> KeystrokeTokenTable {
    [Modifier::Ctrl, Modifier::Shift, Modifier::Alt]
        .into_iter()
        .fold(KeystrokeTokenTable::new(), |table, m| {
            table.with_modifier(os, m, m)
        })
}

/// Run the pipeline on Linux → Linux with no destination defaults
pub fn import(
    defaults: Vec<KeymapEntry>,
    custom: Vec<KeymapEntry>,
    actions: &ActionCommandTable,
    existing: &[DestinationKeybinding],
) -> Translation {
    let tokens = identity_tokens(LINUX);
    run(ImportRequest {
        os: LINUX,
        defaults,
        custom,
        actions,
        tokens: &tokens,
        existing,
        destination_defaults: None,
    })
    .unwrap()
}

/// Commands of a translation, in output order
pub fn commands(translation: &Translation) -> Vec<&str> {
    translation
        .bindings
        .iter()
        .map(|b| b.command.as_str())
        .collect()
}

/// Write `contents` to a fresh temp file
pub fn temp_file(suffix: &str, contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}
