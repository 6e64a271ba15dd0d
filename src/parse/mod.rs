//! Parsers turning on-disk formats into keymap records
//!
//! - IntelliJ keymap XML → [`KeymapEntry`](crate::keymap::KeymapEntry)
//! - VS Code keybindings.json → [`DestinationKeybinding`](crate::keymap::DestinationKeybinding)
//!
//! Malformed input is rejected here, before the import engine sees it.

mod intellij;
mod vscode;

pub use intellij::{parse_keymap_xml, parse_keystroke, IntelliJKeymap};
pub use vscode::{parse_key, parse_keybindings_json};
