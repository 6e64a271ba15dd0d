//! Tables and keymaps that ship with keyport
//!
//! Everything here is embedded at compile time. Each `load_*` function takes
//! an optional path that replaces the bundled copy for that run.

use std::path::Path;

use crate::error::Result;
use crate::keymap::{ActionCommandTable, DestinationKeybinding, KeystrokeTokenTable, Os};
use crate::parse::{parse_keybindings_json, parse_keymap_xml, IntelliJKeymap};

/// IntelliJ action id → VS Code command table
const ACTIONS_YAML: &str = include_str!("../resources/actions.yaml");

/// Modifier and key token table
const KEYSTROKES_YAML: &str = include_str!("../resources/keystrokes.yaml");

/// IntelliJ `$default` keymap (Windows and Linux)
const INTELLIJ_DEFAULT_XML: &str = include_str!("../resources/intellij/default.xml");

/// IntelliJ `Mac OS X 10.5+` keymap
const INTELLIJ_MACOS_XML: &str = include_str!("../resources/intellij/macos.xml");

/// VS Code's shipped keybindings for the commands in the action table
const VSCODE_WINDOWS_JSON: &str = include_str!("../resources/vscode/windows.json");
const VSCODE_MACOS_JSON: &str = include_str!("../resources/vscode/macos.json");
const VSCODE_LINUX_JSON: &str = include_str!("../resources/vscode/linux.json");

/// Raw XML of the IntelliJ keymap a fresh install uses on `os`
pub fn default_keymap_xml(os: Os) -> &'static str {
    match os {
        Os::MacOs => INTELLIJ_MACOS_XML,
        Os::Windows | Os::Linux => INTELLIJ_DEFAULT_XML,
    }
}

/// The bundled default IntelliJ keymap for `os`
pub fn default_keymap(os: Os) -> Result<IntelliJKeymap> {
    parse_keymap_xml(default_keymap_xml(os))
}

/// Raw keybindings.json of VS Code's defaults on `os`
pub fn destination_defaults_json(os: Os) -> &'static str {
    match os {
        Os::Windows => VSCODE_WINDOWS_JSON,
        Os::MacOs => VSCODE_MACOS_JSON,
        Os::Linux => VSCODE_LINUX_JSON,
    }
}

/// The bundled VS Code default keybindings for `os`
pub fn destination_defaults(os: Os) -> Result<Vec<DestinationKeybinding>> {
    parse_keybindings_json(destination_defaults_json(os), os)
}

/// The bundled action table
pub fn action_table() -> Result<ActionCommandTable> {
    ActionCommandTable::from_yaml(ACTIONS_YAML)
}

/// The bundled keystroke token table
pub fn token_table() -> Result<KeystrokeTokenTable> {
    KeystrokeTokenTable::from_yaml(KEYSTROKES_YAML)
}

/// Load the default keymap for `os` from `path`, or the bundled one
pub fn load_default_keymap(os: Os, path: Option<&Path>) -> Result<IntelliJKeymap> {
    let keymap = match path {
        Some(path) => load_keymap_file(path)?,
        None => default_keymap(os)?,
    };
    tracing::info!(
        "Loaded default keymap {:?} for {} ({} actions)",
        keymap.name.as_deref().unwrap_or("unnamed"),
        os,
        keymap.entries.len()
    );
    Ok(keymap)
}

/// Load an action table from `path`, or the bundled one
pub fn load_action_table(path: Option<&Path>) -> Result<ActionCommandTable> {
    let table = match path {
        Some(path) => ActionCommandTable::from_yaml(&std::fs::read_to_string(path)?)?,
        None => action_table()?,
    };
    tracing::info!("Loaded action table ({} actions)", table.len());
    Ok(table)
}

/// Load a keystroke table from `path`, or the bundled one
pub fn load_token_table(path: Option<&Path>) -> Result<KeystrokeTokenTable> {
    match path {
        Some(path) => {
            tracing::info!("Loading keystroke table from {}", path.display());
            KeystrokeTokenTable::from_yaml(&std::fs::read_to_string(path)?)
        }
        None => token_table(),
    }
}

/// Load VS Code's defaults for `os` from `path`, or the bundled ones
pub fn load_destination_defaults(
    os: Os,
    path: Option<&Path>,
) -> Result<Vec<DestinationKeybinding>> {
    let bindings = match path {
        Some(path) => load_keybindings_file(path, os)?,
        None => destination_defaults(os)?,
    };
    tracing::info!("Loaded {} VS Code default bindings for {}", bindings.len(), os);
    Ok(bindings)
}

/// Read and parse an IntelliJ keymap XML file
pub fn load_keymap_file(path: &Path) -> Result<IntelliJKeymap> {
    let xml = std::fs::read_to_string(path)?;
    parse_keymap_xml(&xml)
}

/// Read and parse a keybindings.json written for `os`
pub fn load_keybindings_file(path: &Path, os: Os) -> Result<Vec<DestinationKeybinding>> {
    let json = std::fs::read_to_string(path)?;
    let bindings = parse_keybindings_json(&json, os)?;
    tracing::debug!("Read {} bindings from {}", bindings.len(), path.display());
    Ok(bindings)
}
