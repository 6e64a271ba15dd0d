//! Benchmarks for the import pipeline
//!
//! Run with: cargo bench pipeline

use keyport::import::{filter, generate, run, ImportRequest};
use keyport::keymap::{DestinationKeybinding, KeyChord, Modifiers, Os, OsPair, Shortcut};
use keyport::parse::{parse_keybindings_json, parse_keymap_xml};
use keyport::resources;

#[global_allocator]
static ALLOC: divan::AllocProfiler = divan::AllocProfiler::system();

fn main() {
    divan::main();
}

/// Existing configuration with `count` bindings on distinct keys
fn existing_bindings(count: usize) -> Vec<DestinationKeybinding> {
    (0..count)
        .map(|i| {
            DestinationKeybinding::new(
                Shortcut::sequence(
                    KeyChord::new("k", Modifiers::CTRL),
                    KeyChord::new(format!("f{}", i), Modifiers::ALT),
                ),
                format!("extension.command{}", i),
            )
        })
        .collect()
}

// ============================================================================
// Parsing
// ============================================================================

#[divan::bench(args = [Os::Windows, Os::MacOs])]
fn parse_default_keymap(os: Os) {
    let keymap = parse_keymap_xml(divan::black_box(resources::default_keymap_xml(os)));
    divan::black_box(keymap).ok();
}

#[divan::bench(args = [100, 1_000, 10_000])]
fn parse_keybindings(count: usize) {
    let document = generate(&existing_bindings(count)).unwrap_or_default();
    divan::black_box(parse_keybindings_json(divan::black_box(&document), Os::Linux)).ok();
}

// ============================================================================
// Pipeline
// ============================================================================

#[divan::bench(args = [0, 1_000, 10_000])]
fn conflict_filter(existing: usize) {
    let existing = existing_bindings(existing);
    let candidates = existing_bindings(500);
    divan::black_box(filter(candidates, divan::black_box(&existing)));
}

#[divan::bench(args = [0, 1_000, 10_000])]
fn full_import_mac_to_windows(existing: usize) {
    let os = OsPair::new(Os::MacOs, Os::Windows);
    let (Ok(actions), Ok(tokens), Ok(defaults)) = (
        resources::action_table(),
        resources::token_table(),
        resources::default_keymap(os.source),
    ) else {
        return;
    };
    let existing = existing_bindings(existing);

    let translation = run(ImportRequest {
        os,
        defaults: defaults.entries,
        custom: Vec::new(),
        actions: &actions,
        tokens: &tokens,
        existing: &existing,
        destination_defaults: None,
    });
    divan::black_box(translation.and_then(|t| generate(&t.bindings))).ok();
}
