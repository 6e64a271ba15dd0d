//! The import pipeline: validate → merge → synthesize → filter → retire

use super::filter::filter;
use super::merge::merge;
use super::report::ImportEvent;
use super::retire::retire;
use super::synthesize::synthesize;
use crate::error::{ImportError, Result};
use crate::keymap::{
    ActionCommandTable, DestinationKeybinding, KeymapEntry, KeystrokeTokenTable, OsPair,
    Shortcut,
};

/// Everything one import run consumes
#[derive(Debug, Clone)]
pub struct ImportRequest<'a> {
    pub os: OsPair,
    /// Base IntelliJ keymap for the source platform
    pub defaults: Vec<KeymapEntry>,
    /// User override layer; empty when importing the defaults alone
    pub custom: Vec<KeymapEntry>,
    pub actions: &'a ActionCommandTable,
    pub tokens: &'a KeystrokeTokenTable,
    /// The user's current keybindings.json
    pub existing: &'a [DestinationKeybinding],
    /// VS Code's default keybindings; enables retirement of superseded defaults
    pub destination_defaults: Option<&'a [DestinationKeybinding]>,
}

/// Result of one import run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Translation {
    /// Removal records first, then imported bindings
    pub bindings: Vec<DestinationKeybinding>,
    /// Everything skipped along the way
    pub events: Vec<ImportEvent>,
}

impl Translation {
    pub fn additions(&self) -> impl Iterator<Item = &DestinationKeybinding> {
        self.bindings.iter().filter(|b| !b.is_removal())
    }

    pub fn removals(&self) -> impl Iterator<Item = &DestinationKeybinding> {
        self.bindings.iter().filter(|b| b.is_removal())
    }
}

/// Run the whole pipeline
///
/// Only a malformed input record fails the run; every per-entry problem is
/// reported through [`Translation::events`] and logged.
pub fn run(request: ImportRequest<'_>) -> Result<Translation> {
    let _span = tracing::info_span!("import", os = %request.os).entered();

    validate_entries("default keymap", &request.defaults)?;
    validate_entries("custom keymap", &request.custom)?;
    validate_bindings("existing keybindings", request.existing)?;
    if let Some(defaults) = request.destination_defaults {
        validate_bindings("destination defaults", defaults)?;
    }

    if !request.tokens.covers(request.os) {
        tracing::warn!(
            "Keystroke table has no modifier mappings for {}; only unmodified keys will import",
            request.os
        );
    }

    let removals = request
        .destination_defaults
        .map(|defaults| retire(&request.custom, request.actions, defaults))
        .unwrap_or_default();

    let merged = merge(request.defaults, request.custom);
    tracing::debug!("Merged keymap has {} actions", merged.len());

    let (candidates, mut events) = synthesize(&merged, request.actions, request.tokens, request.os);
    let candidate_count = candidates.len();
    let (kept, conflicts) = filter(candidates, request.existing);
    events.extend(conflicts);

    for event in &events {
        event.log();
    }
    tracing::info!(
        "Imported {} of {} bindings ({} removals, {} skipped)",
        kept.len(),
        candidate_count,
        removals.len(),
        events.len()
    );

    let mut bindings = removals;
    bindings.extend(kept);
    Ok(Translation { bindings, events })
}

fn validate_entries(source: &str, entries: &[KeymapEntry]) -> Result<()> {
    for entry in entries {
        if entry.action_id.trim().is_empty() {
            return Err(ImportError::MalformedRecord(format!(
                "{}: action with an empty id",
                source
            )));
        }
        for shortcut in &entry.keystrokes {
            validate_shortcut(source, &entry.action_id, shortcut)?;
        }
    }
    Ok(())
}

fn validate_bindings(source: &str, bindings: &[DestinationKeybinding]) -> Result<()> {
    for binding in bindings {
        if binding.command.trim_start_matches('-').trim().is_empty() {
            return Err(ImportError::MalformedRecord(format!(
                "{}: binding for '{}' has an empty command",
                source, binding.key
            )));
        }
        validate_shortcut(source, &binding.command, &binding.key)?;
    }
    Ok(())
}

fn validate_shortcut(source: &str, owner: &str, shortcut: &Shortcut) -> Result<()> {
    if shortcut.chords.is_empty() || shortcut.chords.len() > Shortcut::MAX_CHORDS {
        return Err(ImportError::MalformedRecord(format!(
            "{}: shortcut of '{}' has {} keystrokes (expected 1 to {})",
            source,
            owner,
            shortcut.chords.len(),
            Shortcut::MAX_CHORDS
        )));
    }
    if shortcut.chords.iter().any(|chord| chord.key.trim().is_empty()) {
        return Err(ImportError::MalformedRecord(format!(
            "{}: shortcut of '{}' has a keystroke without a key",
            source, owner
        )));
    }
    Ok(())
}
