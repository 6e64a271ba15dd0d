//! keybindings.json generator

use serde::Serialize;
use serde_json::ser::PrettyFormatter;

use crate::error::Result;
use crate::keymap::DestinationKeybinding;

/// VS Code indents keybindings.json with four spaces
const INDENT: &[u8] = b"    ";

/// One object of keybindings.json, fields in VS Code's order
#[derive(Serialize)]
struct KeybindingRecord<'a> {
    key: String,
    command: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    when: Option<&'a str>,
}

impl<'a> From<&'a DestinationKeybinding> for KeybindingRecord<'a> {
    fn from(binding: &'a DestinationKeybinding) -> Self {
        Self {
            key: binding.key.to_string(),
            command: &binding.command,
            when: binding.when.as_deref(),
        }
    }
}

/// Serialize bindings as a keybindings.json document
///
/// One object per binding in input order, modifiers in canonical order.
/// Identical input always yields byte-identical output; an empty list yields
/// an empty array.
pub fn generate(bindings: &[DestinationKeybinding]) -> Result<String> {
    let records: Vec<KeybindingRecord<'_>> = bindings.iter().map(KeybindingRecord::from).collect();

    let mut buf = Vec::new();
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(INDENT));
    records.serialize(&mut serializer)?;

    let mut document = String::from_utf8(buf)?;
    document.push('\n');
    Ok(document)
}
