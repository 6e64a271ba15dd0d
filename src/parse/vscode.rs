//! VS Code keybindings.json parsing
//!
//! VS Code writes keybindings.json as JSON with comments and tolerates
//! trailing commas, so the document is read with `serde_json_lenient`.

use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::error::{ImportError, Result};
use crate::keymap::{DestinationKeybinding, KeyChord, Modifier, Modifiers, Os, Shortcut};

/// A single entry of keybindings.json
#[derive(Debug, Deserialize)]
struct KeybindingConfig {
    key: String,
    command: String,
    #[serde(default)]
    when: Option<String>,
}

/// Parse a keybindings.json document written for `os`
pub fn parse_keybindings_json(text: &str, os: Os) -> Result<Vec<DestinationKeybinding>> {
    // A fresh keybindings.json holds nothing but a comment
    if text
        .lines()
        .map(str::trim)
        .all(|line| line.is_empty() || line.starts_with("//"))
    {
        return Ok(Vec::new());
    }

    let config: Vec<KeybindingConfig> = parse_json_with_comments(text)?;
    config
        .into_iter()
        .map(|entry| {
            Ok(DestinationKeybinding {
                key: parse_key(&entry.key, os)?,
                command: entry.command,
                when: entry.when.filter(|w| !w.trim().is_empty()),
            })
        })
        .collect()
}

/// Deserialize JSON that may contain comments and trailing commas
pub fn parse_json_with_comments<T: DeserializeOwned>(content: &str) -> Result<T> {
    let mut deserializer = serde_json_lenient::Deserializer::from_str(content);
    deserializer.set_allow_comments(true);
    deserializer.set_ignore_trailing_commas(true);
    let value = T::deserialize(&mut deserializer)?;
    deserializer.end()?;
    Ok(value)
}

/// Parse a VS Code key like `"ctrl+k ctrl+shift+c"`
///
/// `meta`, `cmd` and `win` all name the platform's super key and are
/// normalized to the token `os` uses for it.
pub fn parse_key(text: &str, os: Os) -> Result<Shortcut> {
    let chords = text
        .split_whitespace()
        .map(|chord| parse_chord(chord, os).map_err(|reason| ImportError::keystroke(text, reason)))
        .collect::<Result<Vec<_>>>()?;

    if chords.is_empty() {
        return Err(ImportError::keystroke(text, "empty key"));
    }
    if chords.len() > Shortcut::MAX_CHORDS {
        return Err(ImportError::keystroke(text, "too many chords"));
    }
    Ok(Shortcut { chords })
}

fn parse_chord(text: &str, os: Os) -> std::result::Result<KeyChord, String> {
    let lower = text.to_lowercase();

    // The plus key itself: "+" or "ctrl++"
    let (mods_part, key) = if lower == "+" {
        ("", "+")
    } else if let Some(rest) = lower.strip_suffix("++") {
        (rest, "+")
    } else {
        lower.rsplit_once('+').unwrap_or(("", lower.as_str()))
    };

    if key.is_empty() {
        return Err(format!("no key in '{}'", text));
    }

    let mut mods = Modifiers::NONE;
    for token in mods_part.split('+').filter(|t| !t.is_empty()) {
        let modifier = match token {
            "ctrl" => Modifier::Ctrl,
            "shift" => Modifier::Shift,
            "alt" => Modifier::Alt,
            "meta" | "cmd" | "win" => os.meta_modifier(),
            other => return Err(format!("unknown modifier '{}'", other)),
        };
        mods.insert(modifier);
    }

    Ok(KeyChord::new(key, mods))
}
