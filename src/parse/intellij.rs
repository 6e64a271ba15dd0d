//! IntelliJ keymap XML parsing
//!
//! ```xml
//! <keymap version="1" name="My Keymap" parent="$default">
//!   <action id="EditorDuplicate">
//!     <keyboard-shortcut first-keystroke="ctrl D" />
//!     <keyboard-shortcut first-keystroke="ctrl K" second-keystroke="D" />
//!   </action>
//!   <action id="SaveAll" />
//! </keymap>
//! ```
//!
//! An `<action>` without keyboard shortcuts unbinds the action. Mouse
//! shortcuts and abbreviations are ignored.

use crate::error::{ImportError, Result};
use crate::keymap::{KeyChord, KeymapEntry, Modifier, Modifiers, Shortcut};

/// A parsed `<keymap>` document
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IntelliJKeymap {
    pub name: Option<String>,
    /// Keymap this one derives from (`$default`, `Mac OS X 10.5+`, ...)
    pub parent: Option<String>,
    pub entries: Vec<KeymapEntry>,
}

/// Parse an IntelliJ keymap XML document
pub fn parse_keymap_xml(xml: &str) -> Result<IntelliJKeymap> {
    let doc = roxmltree::Document::parse(xml)?;

    let root = doc.root_element();
    if root.tag_name().name() != "keymap" {
        return Err(ImportError::MalformedRecord(format!(
            "expected <keymap> root element, found <{}>",
            root.tag_name().name()
        )));
    }

    let mut entries = Vec::new();
    for action in root
        .children()
        .filter(|n| n.is_element() && n.tag_name().name() == "action")
    {
        let action_id = action
            .attribute("id")
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .ok_or_else(|| {
                ImportError::MalformedRecord(format!(
                    "<action> without id at byte {}",
                    action.range().start
                ))
            })?;

        let mut keystrokes = Vec::new();
        for node in action
            .children()
            .filter(|n| n.is_element() && n.tag_name().name() == "keyboard-shortcut")
        {
            let first = node.attribute("first-keystroke").ok_or_else(|| {
                ImportError::MalformedRecord(format!(
                    "keyboard-shortcut of {} has no first-keystroke",
                    action_id
                ))
            })?;
            let first = parse_keystroke(first)?;
            let shortcut = match node.attribute("second-keystroke") {
                Some(second) => Shortcut::sequence(first, parse_keystroke(second)?),
                None => Shortcut::new(first),
            };
            keystrokes.push(shortcut);
        }

        entries.push(KeymapEntry::new(action_id, keystrokes));
    }

    tracing::debug!(
        "Parsed IntelliJ keymap {:?} ({} actions)",
        root.attribute("name"),
        entries.len()
    );

    Ok(IntelliJKeymap {
        name: root.attribute("name").map(str::to_string),
        parent: root.attribute("parent").map(str::to_string),
        entries,
    })
}

/// Parse an IntelliJ keystroke like `"shift ctrl pressed A"` into a chord
///
/// The last word is the key; every word before it must be a modifier.
pub fn parse_keystroke(text: &str) -> Result<KeyChord> {
    let mut words: Vec<&str> = text
        .split_whitespace()
        .filter(|w| !w.eq_ignore_ascii_case("pressed"))
        .collect();

    let key = words
        .pop()
        .ok_or_else(|| ImportError::keystroke(text, "no key"))?;

    let mut mods = Modifiers::NONE;
    for word in words {
        let modifier = parse_modifier(word)
            .ok_or_else(|| ImportError::keystroke(text, format!("unknown modifier '{}'", word)))?;
        mods.insert(modifier);
    }

    if parse_modifier(key).is_some() {
        return Err(ImportError::keystroke(text, "modifier without a key"));
    }
    if key.eq_ignore_ascii_case("released") || key.eq_ignore_ascii_case("typed") {
        return Err(ImportError::keystroke(text, "only pressed keystrokes are supported"));
    }

    Ok(KeyChord::new(key, mods))
}

fn parse_modifier(word: &str) -> Option<Modifier> {
    match word.to_lowercase().as_str() {
        "ctrl" | "control" => Some(Modifier::Ctrl),
        "shift" => Some(Modifier::Shift),
        "alt" => Some(Modifier::Alt),
        "altgraph" | "alt_graph" => Some(Modifier::AltGraph),
        "meta" => Some(Modifier::Meta),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_keystroke() {
        let chord = parse_keystroke("ctrl S").unwrap();
        assert_eq!(chord, KeyChord::new("s", Modifiers::CTRL));
    }

    #[test]
    fn test_parse_keystroke_modifier_order_irrelevant() {
        assert_eq!(
            parse_keystroke("shift ctrl alt N").unwrap(),
            parse_keystroke("ctrl alt shift N").unwrap()
        );
    }

    #[test]
    fn test_parse_keystroke_named_key() {
        let chord = parse_keystroke("meta BACK_SPACE").unwrap();
        assert_eq!(chord.key, "back_space");
        assert!(chord.mods.has(Modifier::Meta));
    }

    #[test]
    fn test_parse_keystroke_ignores_pressed() {
        let chord = parse_keystroke("control pressed F4").unwrap();
        assert_eq!(chord, KeyChord::new("f4", Modifiers::CTRL));
    }

    #[test]
    fn test_parse_keystroke_alt_graph() {
        let chord = parse_keystroke("altGraph Q").unwrap();
        assert!(chord.mods.has(Modifier::AltGraph));
    }

    #[test]
    fn test_parse_keystroke_errors() {
        assert!(parse_keystroke("").is_err());
        assert!(parse_keystroke("ctrl").is_err());
        assert!(parse_keystroke("hyper A").is_err());
        assert!(parse_keystroke("ctrl released A").is_err());
    }

    #[test]
    fn test_parse_keymap_xml() {
        let xml = r#"<?xml version="1.0" encoding="UTF-8"?>
<keymap version="1" name="Custom" parent="$default">
  <action id="EditorDuplicate">
    <keyboard-shortcut first-keystroke="ctrl D" />
    <keyboard-shortcut first-keystroke="ctrl K" second-keystroke="D" />
  </action>
  <action id="GotoDeclaration">
    <keyboard-shortcut first-keystroke="ctrl B" />
    <mouse-shortcut keystroke="ctrl button1" />
  </action>
  <action id="SaveAll" />
</keymap>"#;

        let keymap = parse_keymap_xml(xml).unwrap();
        assert_eq!(keymap.name.as_deref(), Some("Custom"));
        assert_eq!(keymap.parent.as_deref(), Some("$default"));
        assert_eq!(keymap.entries.len(), 3);

        let duplicate = &keymap.entries[0];
        assert_eq!(duplicate.action_id, "EditorDuplicate");
        assert_eq!(duplicate.keystrokes.len(), 2);
        assert!(duplicate.keystrokes[1].is_sequence());
        assert_eq!(duplicate.keystrokes[1].to_string(), "ctrl+k d");

        assert_eq!(keymap.entries[1].keystrokes.len(), 1);
        assert!(keymap.entries[2].is_unbound());
    }

    #[test]
    fn test_parse_keymap_wrong_root() {
        let err = parse_keymap_xml("<component/>").unwrap_err();
        assert!(matches!(err, ImportError::MalformedRecord(_)));
    }

    #[test]
    fn test_parse_keymap_action_without_id() {
        let xml = r#"<keymap><action><keyboard-shortcut first-keystroke="ctrl A"/></action></keymap>"#;
        assert!(matches!(
            parse_keymap_xml(xml),
            Err(ImportError::MalformedRecord(_))
        ));
    }

    #[test]
    fn test_parse_keymap_invalid_xml() {
        assert!(matches!(
            parse_keymap_xml("<keymap>"),
            Err(ImportError::Xml(_))
        ));
    }
}
