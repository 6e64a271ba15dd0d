//! Command-line argument parsing
//!
//! Supports:
//! - Importing a custom IntelliJ keymap, or the bundled default keymap alone
//! - Retargeting between Windows, macOS and Linux
//! - Replacing any bundled table or keymap with a file
//! - Retiring VS Code defaults the import supersedes
//! - Writing to stdout or a file, optionally opening the result
//! - Saving the resolved settings as defaults for later runs

use clap::Parser;
use std::path::PathBuf;

use crate::config::ImporterConfig;
use crate::keymap::{Os, OsPair};

/// Import IntelliJ keymaps into VS Code
#[derive(Parser, Debug)]
#[command(
    name = "keyport",
    version,
    about = "Import IntelliJ keymaps into VS Code keybindings.json"
)]
pub struct CliArgs {
    /// Custom IntelliJ keymap XML; omit to import the default keymap alone
    #[arg(value_name = "CUSTOM_XML")]
    pub custom: Option<PathBuf>,

    /// Platform the IntelliJ keymap was authored on
    #[arg(long, value_enum, value_name = "OS")]
    pub from: Option<Os>,

    /// Platform VS Code runs on
    #[arg(long, value_enum, value_name = "OS")]
    pub to: Option<Os>,

    /// Existing keybindings.json to check for conflicts
    #[arg(long, value_name = "FILE", conflicts_with = "no_existing")]
    pub keybindings: Option<PathBuf>,

    /// Ignore existing keybindings entirely
    #[arg(long)]
    pub no_existing: bool,

    /// IntelliJ keymap XML used instead of the bundled default
    #[arg(long, value_name = "FILE")]
    pub default_keymap: Option<PathBuf>,

    /// Action table YAML used instead of the bundled one
    #[arg(long, value_name = "FILE")]
    pub actions: Option<PathBuf>,

    /// Keystroke table YAML used instead of the bundled one
    #[arg(long, value_name = "FILE")]
    pub keystrokes: Option<PathBuf>,

    /// VS Code default keybindings used instead of the bundled ones
    #[arg(long, value_name = "FILE", conflicts_with = "no_destination_defaults")]
    pub destination_defaults: Option<PathBuf>,

    /// Emit no removal records for superseded VS Code defaults
    #[arg(long)]
    pub no_destination_defaults: bool,

    /// Write the document to FILE instead of stdout
    #[arg(short = 'o', long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Open the written document with the system handler
    #[arg(long)]
    pub open: bool,

    /// Log each skipped action to stderr
    #[arg(short = 'v', long)]
    pub verbose: bool,

    /// Remember platforms and table paths in the config file
    #[arg(long)]
    pub save_config: bool,
}

/// Everything one run needs, after merging flags with the config file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportOptions {
    pub os: OsPair,
    pub custom: Option<PathBuf>,
    pub default_keymap: Option<PathBuf>,
    pub keybindings: Option<PathBuf>,
    pub actions: Option<PathBuf>,
    pub keystrokes: Option<PathBuf>,
    /// `None` uses the bundled defaults for the destination
    pub destination_defaults: Option<PathBuf>,
    /// Whether superseded destination defaults get removal records
    pub retire: bool,
    /// `None` writes to stdout
    pub output: Option<PathBuf>,
    pub open: bool,
    pub save_config: bool,
}

impl ImportOptions {
    /// Settings worth persisting for the next run
    ///
    /// The keymap, the output and VS Code's own keybindings.json are left
    /// out; they are found again on every run.
    pub fn to_config(&self) -> ImporterConfig {
        let vscode_file = crate::config_paths::vscode_keybindings_file();
        ImporterConfig {
            source_os: Some(self.os.source),
            destination_os: Some(self.os.destination),
            keybindings: self
                .keybindings
                .clone()
                .filter(|path| vscode_file.as_ref() != Some(path)),
            actions: self.actions.clone(),
            keystrokes: self.keystrokes.clone(),
            destination_defaults: self.destination_defaults.clone(),
        }
    }
}

impl CliArgs {
    /// Resolve parsed arguments against the persisted config
    ///
    /// Flags win over config values. An unset platform falls back to the
    /// current one. Unless `--no-existing` is given, VS Code's user
    /// keybindings.json is used for conflict checks when it exists.
    pub fn into_options(self, config: ImporterConfig) -> Result<ImportOptions, String> {
        let source = self.from.or(config.source_os).unwrap_or_else(Os::current);
        let destination = self
            .to
            .or(config.destination_os)
            .unwrap_or_else(Os::current);

        let keybindings = if self.no_existing {
            None
        } else {
            self.keybindings.or(config.keybindings).or_else(|| {
                crate::config_paths::vscode_keybindings_file().filter(|path| path.exists())
            })
        };

        let output = match (self.output, self.open) {
            (Some(path), _) => Some(path),
            (None, true) => Some(
                crate::config_paths::ensure_generated_file()
                    .map_err(|e| format!("--open needs --output: {}", e))?,
            ),
            (None, false) => None,
        };

        Ok(ImportOptions {
            os: OsPair::new(source, destination),
            custom: self.custom,
            default_keymap: self.default_keymap,
            keybindings,
            actions: self.actions.or(config.actions),
            keystrokes: self.keystrokes.or(config.keystrokes),
            destination_defaults: self.destination_defaults.or(config.destination_defaults),
            retire: !self.no_destination_defaults,
            output,
            open: self.open,
            save_config: self.save_config,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> CliArgs {
        CliArgs::try_parse_from(std::iter::once("keyport").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_platforms_from_flags() {
        let options = parse(&["--from", "mac", "--to", "windows", "--no-existing"])
            .into_options(ImporterConfig::default())
            .unwrap();
        assert_eq!(options.os, OsPair::new(Os::MacOs, Os::Windows));
        assert!(options.custom.is_none());
        assert!(options.keybindings.is_none());
    }

    #[test]
    fn test_platforms_default_to_config_then_current() {
        let config = ImporterConfig {
            source_os: Some(Os::Linux),
            ..Default::default()
        };
        let options = parse(&["--no-existing"]).into_options(config).unwrap();
        assert_eq!(options.os.source, Os::Linux);
        assert_eq!(options.os.destination, Os::current());
    }

    #[test]
    fn test_flags_override_config_paths() {
        let config = ImporterConfig {
            keybindings: Some(PathBuf::from("/config/keybindings.json")),
            actions: Some(PathBuf::from("/config/actions.yaml")),
            ..Default::default()
        };
        let options = parse(&["--keybindings", "mine.json", "custom.xml"])
            .into_options(config)
            .unwrap();
        assert_eq!(options.keybindings, Some(PathBuf::from("mine.json")));
        assert_eq!(options.actions, Some(PathBuf::from("/config/actions.yaml")));
        assert_eq!(options.custom, Some(PathBuf::from("custom.xml")));
    }

    #[test]
    fn test_no_existing_ignores_configured_keybindings() {
        let config = ImporterConfig {
            keybindings: Some(PathBuf::from("/config/keybindings.json")),
            ..Default::default()
        };
        let options = parse(&["--no-existing"]).into_options(config).unwrap();
        assert!(options.keybindings.is_none());
    }

    #[test]
    fn test_keybindings_conflicts_with_no_existing() {
        let result = CliArgs::try_parse_from([
            "keyport",
            "--keybindings",
            "a.json",
            "--no-existing",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_output_defaults_to_stdout() {
        let options = parse(&["--no-existing"])
            .into_options(ImporterConfig::default())
            .unwrap();
        assert!(options.output.is_none());
        assert!(!options.open);
        assert!(!options.save_config);
    }

    #[test]
    fn test_open_without_output_writes_generated_file() {
        let args = parse(&["--no-existing", "--open"]);
        let Ok(options) = args.into_options(ImporterConfig::default()) else {
            return;
        };
        let output = options.output.unwrap();
        assert_eq!(Some(output.clone()), crate::config_paths::generated_file());
        assert!(output.parent().is_some_and(|dir| dir.is_dir()));
    }

    #[test]
    fn test_destination_defaults_bundled_unless_disabled() {
        let options = parse(&["--no-existing"])
            .into_options(ImporterConfig::default())
            .unwrap();
        assert!(options.retire);
        assert!(options.destination_defaults.is_none());

        let options = parse(&["--no-existing", "--no-destination-defaults"])
            .into_options(ImporterConfig::default())
            .unwrap();
        assert!(!options.retire);

        assert!(CliArgs::try_parse_from([
            "keyport",
            "--destination-defaults",
            "defaults.json",
            "--no-destination-defaults",
        ])
        .is_err());
    }

    #[test]
    fn test_resolved_options_become_config() {
        let options = parse(&[
            "--from",
            "mac",
            "--to",
            "linux",
            "--keybindings",
            "mine.json",
            "--actions",
            "actions.yaml",
            "-o",
            "out.json",
            "--save-config",
            "custom.xml",
        ])
        .into_options(ImporterConfig::default())
        .unwrap();
        assert!(options.save_config);

        let config = options.to_config();
        assert_eq!(config.source_os, Some(Os::MacOs));
        assert_eq!(config.destination_os, Some(Os::Linux));
        assert_eq!(config.keybindings, Some(PathBuf::from("mine.json")));
        assert_eq!(config.actions, Some(PathBuf::from("actions.yaml")));
        assert!(config.keystrokes.is_none());
    }

    #[test]
    fn test_open_with_output() {
        let options = parse(&["--no-existing", "-o", "out.json", "--open"])
            .into_options(ImporterConfig::default())
            .unwrap();
        assert_eq!(options.output, Some(PathBuf::from("out.json")));
        assert!(options.open);
    }

    #[test]
    fn test_unknown_os_rejected() {
        assert!(CliArgs::try_parse_from(["keyport", "--from", "beos"]).is_err());
    }
}
