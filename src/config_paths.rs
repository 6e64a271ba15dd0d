//! Centralized configuration paths for keyport
//!
//! All keyport files live under:
//! - Unix/macOS: `~/.config/keyport/`
//! - Windows: `%APPDATA%\keyport\`
//!
//! VS Code's own user directory is located separately, see
//! [`vscode_keybindings_file`].

use std::{
    env, fs,
    path::{Path, PathBuf},
};

const APP_DIR: &str = "keyport";

/// Base config directory for keyport
///
/// Unix/macOS:
///   - If XDG_CONFIG_HOME is set: `$XDG_CONFIG_HOME/keyport`
///   - Else: `~/.config/keyport`
///
/// Windows:
///   - `%APPDATA%\keyport`
pub fn config_dir() -> Option<PathBuf> {
    #[cfg(target_os = "windows")]
    {
        env::var("APPDATA")
            .ok()
            .map(|appdata| PathBuf::from(appdata).join(APP_DIR))
    }

    #[cfg(not(target_os = "windows"))]
    {
        env::var_os("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .or_else(|| dirs::home_dir().map(|h| h.join(".config")))
            .map(|config| config.join(APP_DIR))
    }
}

/// `~/.config/keyport/config.yaml`
pub fn config_file() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("config.yaml"))
}

/// `~/.config/keyport/logs/`
pub fn logs_dir() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("logs"))
}

/// `~/.config/keyport/keybindings.json`, where `--open` writes when no
/// output file was given
pub fn generated_file() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("keybindings.json"))
}

/// VS Code's user keybindings.json
///
/// - Linux: `~/.config/Code/User/keybindings.json`
/// - macOS: `~/Library/Application Support/Code/User/keybindings.json`
/// - Windows: `%APPDATA%\Code\User\keybindings.json`
pub fn vscode_keybindings_file() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("Code").join("User").join("keybindings.json"))
}

fn ensure_dir(path: &Path) -> Result<(), String> {
    fs::create_dir_all(path)
        .map_err(|e| format!("Failed to create directory {}: {}", path.display(), e))
}

/// Ensure the base config dir exists, returning it
pub fn ensure_config_dir() -> Result<PathBuf, String> {
    let dir = config_dir().ok_or_else(|| "No config directory available".to_string())?;
    ensure_dir(&dir)?;
    Ok(dir)
}

/// Ensure the config dir exists, returning the generated keybindings path
pub fn ensure_generated_file() -> Result<PathBuf, String> {
    Ok(ensure_config_dir()?.join("keybindings.json"))
}

/// Ensure logs dir exists, returning it
pub fn ensure_logs_dir() -> Result<PathBuf, String> {
    let config = ensure_config_dir()?;
    let logs = config.join("logs");
    ensure_dir(&logs)?;
    Ok(logs)
}
