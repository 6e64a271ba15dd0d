//! Importer configuration persistence
//!
//! Stores defaults for the command line in `~/.config/keyport/config.yaml`:
//!
//! ```yaml
//! source_os: macos
//! destination_os: windows
//! keybindings: /home/me/.config/Code/User/keybindings.json
//! actions: /home/me/keyport/actions.yaml
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::keymap::Os;

/// Importer defaults that persist across runs
///
/// Every field is optional; command-line flags take precedence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImporterConfig {
    /// Platform the IntelliJ keymap was authored on
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_os: Option<Os>,
    /// Platform VS Code runs on
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination_os: Option<Os>,
    /// Existing keybindings.json to check for conflicts
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keybindings: Option<PathBuf>,
    /// Action table replacing the bundled one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actions: Option<PathBuf>,
    /// Keystroke table replacing the bundled one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keystrokes: Option<PathBuf>,
    /// VS Code's default keybindings, enabling removal records
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination_defaults: Option<PathBuf>,
}

impl ImporterConfig {
    /// Load config from disk, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };
        Self::load_from(&path)
    }

    /// Load config from `path`, or return defaults if missing or invalid
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(content) if content.trim().is_empty() => {
                tracing::debug!("Config file {} is empty, using defaults", path.display());
                Self::default()
            }
            Ok(content) => match serde_yaml::from_str::<Option<Self>>(&content) {
                Ok(config) => {
                    tracing::info!("Loaded config from {}", path.display());
                    config.unwrap_or_default()
                }
                Err(e) => {
                    tracing::warn!("Failed to parse config at {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!("Failed to read config at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Save config to disk
    ///
    /// Creates the config directory if it doesn't exist.
    pub fn save(&self) -> Result<(), String> {
        let path = crate::config_paths::config_file()
            .ok_or_else(|| "No config directory available".to_string())?;
        self.save_to(&path)
    }

    /// Save config to `path`, creating parent directories
    pub fn save_to(&self, path: &Path) -> Result<(), String> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create config directory: {}", e))?;
        }

        let content = serde_yaml::to_string(self)
            .map_err(|e| format!("Failed to serialize config: {}", e))?;

        std::fs::write(path, content)
            .map_err(|e| format!("Failed to write config to {}: {}", path.display(), e))?;

        tracing::info!("Saved config to {}", path.display());
        Ok(())
    }
}
