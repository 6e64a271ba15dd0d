//! Binding synthesizer: merged source entries → destination keybindings

use super::report::ImportEvent;
use crate::keymap::{
    ActionCommandTable, DestinationKeybinding, KeymapEntry, KeystrokeTokenTable, OsPair,
    Shortcut, Untranslatable,
};

/// Produce destination keybindings for every bound entry
///
/// Output order: entries in input order, then commands in action-table
/// order, then shortcuts in source order. Entries that cannot be imported are
/// skipped and reported; nothing here aborts the run.
pub fn synthesize(
    entries: &[KeymapEntry],
    actions: &ActionCommandTable,
    tokens: &KeystrokeTokenTable,
    os: OsPair,
) -> (Vec<DestinationKeybinding>, Vec<ImportEvent>) {
    let mut bindings = Vec::new();
    let mut events = Vec::new();

    for entry in entries.iter().filter(|e| !e.is_unbound()) {
        let Some(mapping) = actions.get(&entry.action_id) else {
            events.push(ImportEvent::UnknownAction {
                action_id: entry.action_id.clone(),
            });
            continue;
        };

        if mapping.commands.is_empty() {
            events.push(ImportEvent::NoEquivalent {
                action_id: entry.action_id.clone(),
            });
            continue;
        }

        // Translate once per shortcut so a bad chord is reported once, not per command
        let translated: Vec<Shortcut> = entry
            .keystrokes
            .iter()
            .filter_map(|shortcut| match tokens.translate_shortcut(os, shortcut) {
                Ok(key) => Some(key),
                Err(Untranslatable::Modifier(modifier)) => {
                    events.push(ImportEvent::UntranslatableModifier {
                        action_id: entry.action_id.clone(),
                        shortcut: shortcut.clone(),
                        modifier,
                    });
                    None
                }
                Err(Untranslatable::Key(key)) => {
                    events.push(ImportEvent::UntranslatableKey {
                        action_id: entry.action_id.clone(),
                        shortcut: shortcut.clone(),
                        key,
                    });
                    None
                }
            })
            .collect();

        for target in &mapping.commands {
            for key in &translated {
                bindings.push(DestinationKeybinding {
                    key: key.clone(),
                    command: target.command.clone(),
                    when: target.when.clone(),
                });
            }
        }
    }

    (bindings, events)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keymap::{
        ActionCommandMapping, CommandTarget, KeyChord, Modifier, Modifiers, Os,
    };

    const WIN: OsPair = OsPair::new(Os::Windows, Os::Windows);
    const MAC_TO_LINUX: OsPair = OsPair::new(Os::MacOs, Os::Linux);

    fn chord(key: &str, mods: Modifiers) -> Shortcut {
        Shortcut::new(KeyChord::new(key, mods))
    }

    fn identity_tokens(os: OsPair) -> KeystrokeTokenTable {
        [Modifier::Ctrl, Modifier::Shift, Modifier::Alt]
            .into_iter()
            .fold(KeystrokeTokenTable::new(), |table, m| {
                table.with_modifier(os, m, m)
            })
    }

    fn actions(mappings: Vec<ActionCommandMapping>) -> ActionCommandTable {
        ActionCommandTable::new(mappings).unwrap()
    }

    #[test]
    fn test_single_command_single_shortcut() {
        let entries = vec![KeymapEntry::new("SaveAll", vec![chord("s", Modifiers::CTRL)])];
        let table = actions(vec![ActionCommandMapping::new(
            "SaveAll",
            vec![CommandTarget::new("workbench.action.files.saveAll")],
        )]);

        let (bindings, events) = synthesize(&entries, &table, &identity_tokens(WIN), WIN);
        assert!(events.is_empty());
        assert_eq!(
            bindings,
            vec![DestinationKeybinding::new(
                chord("s", Modifiers::CTRL),
                "workbench.action.files.saveAll"
            )]
        );
    }

    #[test]
    fn test_fan_out_is_command_major() {
        let entries = vec![KeymapEntry::new(
            "ReformatCode",
            vec![
                chord("l", Modifiers::CTRL | Modifiers::ALT),
                chord("f", Modifiers::SHIFT | Modifiers::ALT),
            ],
        )];
        let table = actions(vec![ActionCommandMapping::new(
            "ReformatCode",
            vec![
                CommandTarget::new("editor.action.formatDocument"),
                CommandTarget::new("editor.action.formatSelection").when("editorHasSelection"),
            ],
        )]);

        let (bindings, _) = synthesize(&entries, &table, &identity_tokens(WIN), WIN);
        let pairs: Vec<(String, &str)> = bindings
            .iter()
            .map(|b| (b.key.to_string(), b.command.as_str()))
            .collect();
        assert_eq!(
            pairs,
            vec![
                ("ctrl+alt+l".to_string(), "editor.action.formatDocument"),
                ("shift+alt+f".to_string(), "editor.action.formatDocument"),
                ("ctrl+alt+l".to_string(), "editor.action.formatSelection"),
                ("shift+alt+f".to_string(), "editor.action.formatSelection"),
            ]
        );
        assert_eq!(bindings[0].when, None);
        assert_eq!(bindings[2].when.as_deref(), Some("editorHasSelection"));
    }

    #[test]
    fn test_unknown_action_is_reported_and_isolated() {
        let entries = vec![
            KeymapEntry::new("Mystery", vec![chord("m", Modifiers::CTRL)]),
            KeymapEntry::new("SaveAll", vec![chord("s", Modifiers::CTRL)]),
        ];
        let table = actions(vec![ActionCommandMapping::new(
            "SaveAll",
            vec![CommandTarget::new("workbench.action.files.saveAll")],
        )]);

        let (bindings, events) = synthesize(&entries, &table, &identity_tokens(WIN), WIN);
        assert_eq!(bindings.len(), 1);
        assert_eq!(
            events,
            vec![ImportEvent::UnknownAction {
                action_id: "Mystery".to_string()
            }]
        );
    }

    #[test]
    fn test_no_equivalent_is_reported_separately() {
        let entries = vec![KeymapEntry::new("ToggleBookmark", vec![chord("f11", Modifiers::NONE)])];
        let table = actions(vec![ActionCommandMapping::new("ToggleBookmark", vec![])]);

        let (bindings, events) = synthesize(&entries, &table, &identity_tokens(WIN), WIN);
        assert!(bindings.is_empty());
        assert_eq!(
            events,
            vec![ImportEvent::NoEquivalent {
                action_id: "ToggleBookmark".to_string()
            }]
        );
    }

    #[test]
    fn test_unbound_entry_produces_nothing() {
        let entries = vec![KeymapEntry::unbound("Mystery")];
        let (bindings, events) =
            synthesize(&entries, &ActionCommandTable::default(), &KeystrokeTokenTable::new(), WIN);
        assert!(bindings.is_empty());
        assert!(events.is_empty());
    }

    #[test]
    fn test_untranslatable_shortcut_dropped_once() {
        let tokens = KeystrokeTokenTable::new()
            .with_modifier(MAC_TO_LINUX, Modifier::Meta, Modifier::Ctrl);
        let entries = vec![KeymapEntry::new(
            "$Copy",
            vec![
                chord("c", Modifiers::META),
                chord("c", Modifiers::ALT_GRAPH),
            ],
        )];
        let table = actions(vec![ActionCommandMapping::new(
            "$Copy",
            vec![
                CommandTarget::new("editor.action.clipboardCopyAction"),
                CommandTarget::new("execCopy"),
            ],
        )]);

        let (bindings, events) = synthesize(&entries, &table, &tokens, MAC_TO_LINUX);
        assert_eq!(bindings.len(), 2);
        assert!(bindings.iter().all(|b| b.key.to_string() == "ctrl+c"));
        assert_eq!(events.len(), 1);
        assert!(matches!(
            events[0],
            ImportEvent::UntranslatableModifier {
                modifier: Modifier::AltGraph,
                ..
            }
        ));
    }

    #[test]
    fn test_unknown_base_key_is_reported() {
        let entries = vec![KeymapEntry::new(
            "EditorIncreaseFontSize",
            vec![chord("plus", Modifiers::CTRL), chord("equals", Modifiers::CTRL)],
        )];
        let table = actions(vec![ActionCommandMapping::new(
            "EditorIncreaseFontSize",
            vec![CommandTarget::new("editor.action.fontZoomIn")],
        )]);
        let tokens = identity_tokens(WIN).with_key("equals", "=");

        let (bindings, events) = synthesize(&entries, &table, &tokens, WIN);
        assert_eq!(bindings.len(), 1);
        assert_eq!(bindings[0].key.to_string(), "ctrl+=");
        assert_eq!(
            events,
            vec![ImportEvent::UntranslatableKey {
                action_id: "EditorIncreaseFontSize".to_string(),
                shortcut: chord("plus", Modifiers::CTRL),
                key: "plus".to_string(),
            }]
        );
    }
}
