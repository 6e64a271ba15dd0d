//! Static lookup tables driving the translation
//!
//! Both tables are plain data loaded from YAML (see `resources/`), so new
//! actions, commands or platform pairs are added by editing data.

use std::collections::{BTreeMap, HashMap};

use serde::Deserialize;

use super::types::{KeyChord, Modifier, Modifiers, Os, OsPair, Shortcut};
use crate::error::{ImportError, Result};

// ========================================================================
// Action table
// ========================================================================

/// A destination command an action maps to, with an optional context clause
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandTarget {
    pub command: String,
    pub when: Option<String>,
}

impl CommandTarget {
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            when: None,
        }
    }

    pub fn when(mut self, clause: impl Into<String>) -> Self {
        self.when = Some(clause.into());
        self
    }
}

/// All destination commands for one source action
///
/// An empty `commands` list records that the action is known to have no
/// destination equivalent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionCommandMapping {
    pub action_id: String,
    pub commands: Vec<CommandTarget>,
}

impl ActionCommandMapping {
    pub fn new(action_id: impl Into<String>, commands: Vec<CommandTarget>) -> Self {
        Self {
            action_id: action_id.into(),
            commands,
        }
    }

    pub fn maps_to(&self, command: &str) -> bool {
        self.commands.iter().any(|c| c.command == command)
    }
}

/// Lookup from IntelliJ action id to VS Code commands
#[derive(Debug, Clone, Default)]
pub struct ActionCommandTable {
    mappings: Vec<ActionCommandMapping>,
    /// Fast lookup by action id (indices into mappings)
    index: HashMap<String, usize>,
}

/// Root structure of an action table YAML file
#[derive(Debug, Deserialize)]
struct ActionTableConfig {
    actions: Vec<ActionConfig>,
}

#[derive(Debug, Deserialize)]
struct ActionConfig {
    action: String,
    #[serde(default)]
    commands: Vec<CommandConfig>,
}

/// A command is either a bare id or `{ command, when }`
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum CommandConfig {
    Bare(String),
    Detailed {
        command: String,
        #[serde(default)]
        when: Option<String>,
    },
}

impl From<CommandConfig> for CommandTarget {
    fn from(config: CommandConfig) -> Self {
        match config {
            CommandConfig::Bare(command) => CommandTarget::new(command),
            CommandConfig::Detailed { command, when } => CommandTarget { command, when },
        }
    }
}

impl ActionCommandTable {
    /// Build a table, rejecting duplicate action ids
    pub fn new(mappings: Vec<ActionCommandMapping>) -> Result<Self> {
        let mut index = HashMap::with_capacity(mappings.len());
        for (idx, mapping) in mappings.iter().enumerate() {
            if mapping.action_id.trim().is_empty() {
                return Err(ImportError::MalformedRecord(format!(
                    "action table entry #{} has an empty action id",
                    idx + 1
                )));
            }
            if let Some(command) = mapping.commands.iter().find(|c| c.command.trim().is_empty()) {
                return Err(ImportError::MalformedRecord(format!(
                    "action '{}' maps to an empty command (when: {:?})",
                    mapping.action_id, command.when
                )));
            }
            if index.insert(mapping.action_id.clone(), idx).is_some() {
                return Err(ImportError::MalformedRecord(format!(
                    "duplicate action id in action table: {}",
                    mapping.action_id
                )));
            }
        }
        Ok(Self { mappings, index })
    }

    /// Parse an action table from YAML
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: ActionTableConfig = serde_yaml::from_str(yaml)?;
        let mappings = config
            .actions
            .into_iter()
            .map(|entry| {
                ActionCommandMapping::new(
                    entry.action,
                    entry.commands.into_iter().map(CommandTarget::from).collect(),
                )
            })
            .collect();
        Self::new(mappings)
    }

    pub fn get(&self, action_id: &str) -> Option<&ActionCommandMapping> {
        self.index.get(action_id).map(|&idx| &self.mappings[idx])
    }

    pub fn len(&self) -> usize {
        self.mappings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mappings.is_empty()
    }
}

// ========================================================================
// Keystroke token table
// ========================================================================

/// Why a source chord cannot be expressed on the destination
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Untranslatable {
    /// No mapping for this modifier on the platform pair
    Modifier(Modifier),
    /// The base key has no VS Code name
    Key(String),
}

/// Lookup from source key tokens to destination key tokens
///
/// Modifiers are keyed by platform pair. Base keys are platform independent
/// and pass through unchanged unless remapped; either way the result must be
/// a key VS Code accepts. A key remapped to nothing is known to have no
/// destination name.
#[derive(Debug, Clone, Default)]
pub struct KeystrokeTokenTable {
    modifiers: HashMap<(Os, Os, Modifier), Modifier>,
    keys: HashMap<String, Option<String>>,
}

/// Root structure of a keystroke table YAML file
#[derive(Debug, Deserialize)]
struct TokenTableConfig {
    #[serde(default)]
    modifiers: Vec<ModifierPairConfig>,
    #[serde(default)]
    keys: BTreeMap<String, Option<String>>,
}

#[derive(Debug, Deserialize)]
struct ModifierPairConfig {
    from: Os,
    to: Os,
    map: BTreeMap<Modifier, Modifier>,
}

impl KeystrokeTokenTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a keystroke table from YAML
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: TokenTableConfig = serde_yaml::from_str(yaml)?;
        let mut table = Self::new();

        for pair in config.modifiers {
            let os = OsPair::new(pair.from, pair.to);
            if table.covers(os) {
                return Err(ImportError::MalformedRecord(format!(
                    "platform pair listed twice in keystroke table: {}",
                    os
                )));
            }
            for (from, to) in pair.map {
                table = table.with_modifier(os, from, to);
            }
        }
        for (from, to) in config.keys {
            table = match to {
                Some(to) => table.with_key(from, to),
                None => table.without_key(from),
            };
        }

        Ok(table)
    }

    /// Add a modifier mapping for a platform pair (builder pattern)
    pub fn with_modifier(mut self, os: OsPair, from: Modifier, to: Modifier) -> Self {
        self.modifiers
            .insert((os.source, os.destination, from), to);
        self
    }

    /// Add a base-key remapping (builder pattern)
    pub fn with_key(mut self, from: impl Into<String>, to: impl Into<String>) -> Self {
        self.keys
            .insert(from.into().to_lowercase(), Some(to.into().to_lowercase()));
        self
    }

    /// Mark a base key as having no destination name (builder pattern)
    pub fn without_key(mut self, from: impl Into<String>) -> Self {
        self.keys.insert(from.into().to_lowercase(), None);
        self
    }

    pub fn modifier(&self, os: OsPair, modifier: Modifier) -> Option<Modifier> {
        self.modifiers
            .get(&(os.source, os.destination, modifier))
            .copied()
    }

    /// Destination name of a base key, if VS Code has one
    pub fn key<'a>(&'a self, key: &'a str) -> Option<&'a str> {
        let mapped = match self.keys.get(key) {
            Some(mapped) => mapped.as_deref()?,
            None => key,
        };
        is_destination_key(mapped).then_some(mapped)
    }

    /// Whether any modifier mapping exists for the pair
    pub fn covers(&self, os: OsPair) -> bool {
        self.modifiers
            .keys()
            .any(|(src, dst, _)| *src == os.source && *dst == os.destination)
    }

    /// Translate one chord, or say what stands in the way
    pub fn translate_chord(
        &self,
        os: OsPair,
        chord: &KeyChord,
    ) -> std::result::Result<KeyChord, Untranslatable> {
        let mut mods = Modifiers::NONE;
        for modifier in chord.mods.iter() {
            let mapped = self
                .modifier(os, modifier)
                .ok_or(Untranslatable::Modifier(modifier))?;
            mods.insert(mapped);
        }
        let key = self
            .key(&chord.key)
            .ok_or_else(|| Untranslatable::Key(chord.key.clone()))?;
        Ok(KeyChord::new(key, mods))
    }

    /// Translate every chord of a shortcut; all or nothing
    pub fn translate_shortcut(
        &self,
        os: OsPair,
        shortcut: &Shortcut,
    ) -> std::result::Result<Shortcut, Untranslatable> {
        let chords = shortcut
            .chords
            .iter()
            .map(|chord| self.translate_chord(os, chord))
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(Shortcut { chords })
    }
}

/// Named keys VS Code accepts in keybindings.json besides letters, digits
/// and function keys
const NAMED_DESTINATION_KEYS: &[&str] = &[
    "`", "-", "=", "[", "]", "\\", ";", "'", ",", ".", "/",
    "left", "up", "right", "down", "pageup", "pagedown", "end", "home",
    "tab", "enter", "escape", "space", "backspace", "delete", "insert",
    "pausebreak", "capslock", "numlock", "scrolllock", "printscreen", "contextmenu",
    "numpad_multiply", "numpad_add", "numpad_separator", "numpad_subtract",
    "numpad_decimal", "numpad_divide",
];

/// Whether `key` is a base key name VS Code understands
pub fn is_destination_key(key: &str) -> bool {
    let numbered = |prefix: &str, max: u32| {
        key.strip_prefix(prefix)
            .filter(|rest| rest.bytes().all(|b| b.is_ascii_digit()) && !rest.starts_with('0'))
            .and_then(|rest| rest.parse::<u32>().ok())
            .is_some_and(|n| (1..=max).contains(&n))
    };

    match key.as_bytes() {
        [b'a'..=b'z' | b'0'..=b'9'] => true,
        [b'n', b'u', b'm', b'p', b'a', b'd', b'0'..=b'9'] => true,
        _ => numbered("f", 24) || NAMED_DESTINATION_KEYS.contains(&key),
    }
}
