use anyhow::{Context, Result};
use clap::Parser;
use std::collections::BTreeMap;

use keyport::cli::{CliArgs, ImportOptions};
use keyport::config::ImporterConfig;
use keyport::import::{generate, run, ImportRequest, Translation};
use keyport::resources;

fn main() -> Result<()> {
    let args = CliArgs::parse();
    keyport::tracing::init(args.verbose);

    let options = args
        .into_options(ImporterConfig::load())
        .map_err(anyhow::Error::msg)?;

    if options.save_config {
        options.to_config().save().map_err(anyhow::Error::msg)?;
    }

    let translation = import(&options)?;
    let document = generate(&translation.bindings).context("Failed to serialize keybindings")?;

    match &options.output {
        Some(path) => {
            std::fs::write(path, &document)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            tracing::info!("Wrote {}", path.display());
        }
        None => print!("{}", document),
    }

    eprintln!("{}", summary(&options, &translation));

    if options.open {
        if let Some(path) = &options.output {
            open::that(path).with_context(|| format!("Failed to open {}", path.display()))?;
        }
    }

    Ok(())
}

/// Load every input named by `options` and run the pipeline
fn import(options: &ImportOptions) -> Result<Translation> {
    let os = options.os;

    let actions = resources::load_action_table(options.actions.as_deref())
        .context("Failed to load action table")?;
    let tokens = resources::load_token_table(options.keystrokes.as_deref())
        .context("Failed to load keystroke table")?;
    let defaults = resources::load_default_keymap(os.source, options.default_keymap.as_deref())
        .with_context(|| format!("Failed to load default keymap for {}", os.source))?;

    let custom = match &options.custom {
        Some(path) => {
            let keymap = resources::load_keymap_file(path)
                .with_context(|| format!("Failed to read keymap {}", path.display()))?;
            if let (Some(parent), Some(base)) = (&keymap.parent, &defaults.name) {
                if parent != base {
                    tracing::warn!(
                        "{} derives from {:?} but is layered over {:?}; check --from",
                        path.display(),
                        parent,
                        base
                    );
                }
            }
            keymap.entries
        }
        None => Vec::new(),
    };

    let existing = match &options.keybindings {
        Some(path) => resources::load_keybindings_file(path, os.destination)
            .with_context(|| format!("Failed to read keybindings {}", path.display()))?,
        None => Vec::new(),
    };

    let destination_defaults = if options.retire {
        Some(
            resources::load_destination_defaults(
                os.destination,
                options.destination_defaults.as_deref(),
            )
            .context("Failed to load VS Code default keybindings")?,
        )
    } else {
        None
    };

    let translation = run(ImportRequest {
        os,
        defaults: defaults.entries,
        custom,
        actions: &actions,
        tokens: &tokens,
        existing: &existing,
        destination_defaults: destination_defaults.as_deref(),
    })?;
    Ok(translation)
}

/// One line for stderr, e.g.
/// `macos -> windows: 84 bindings, 3 removals (skipped: 2 conflict, 5 no-equivalent)`
fn summary(options: &ImportOptions, translation: &Translation) -> String {
    let mut line = format!(
        "{}: {} bindings, {} removals",
        options.os,
        translation.additions().count(),
        translation.removals().count()
    );

    let mut skipped: BTreeMap<&str, usize> = BTreeMap::new();
    for event in &translation.events {
        *skipped.entry(event.kind()).or_default() += 1;
    }
    if !skipped.is_empty() {
        let parts: Vec<String> = skipped
            .iter()
            .map(|(kind, count)| format!("{} {}", count, kind))
            .collect();
        line.push_str(&format!(" (skipped: {})", parts.join(", ")));
    }

    if let Some(path) = &options.output {
        line.push_str(&format!(" -> {}", path.display()));
    }
    line
}
