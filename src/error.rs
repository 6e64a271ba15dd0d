//! Error types for keyport

use thiserror::Error;

/// Errors that can occur while loading or translating keymaps
///
/// Per-entry problems (unknown actions, untranslatable modifiers, conflicts)
/// are not errors; they surface as [`crate::import::ImportEvent`]s.
#[derive(Error, Debug)]
pub enum ImportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("XML error: {0}")]
    Xml(#[from] roxmltree::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("JSON error: {0}")]
    Jsonc(#[from] serde_json_lenient::Error),

    #[error("UTF-8 error: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid keystroke '{text}': {reason}")]
    InvalidKeystroke { text: String, reason: String },

    #[error("Malformed record: {0}")]
    MalformedRecord(String),
}

impl ImportError {
    pub(crate) fn keystroke(text: &str, reason: impl Into<String>) -> Self {
        ImportError::InvalidKeystroke {
            text: text.to_string(),
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ImportError>;
