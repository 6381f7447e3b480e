use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PresetError {
    #[error("Malformed preset document: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid preset {preset}: {message}")]
    Schema { preset: String, message: String },

    #[error("Preset not found: {0}")]
    NotFound(String),

    #[error("Failed to read preset document {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("No plot topology for dimension {0}")]
    UnsupportedDimension(usize),
}

impl PresetError {
    pub(crate) fn schema(preset: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Schema {
            preset: preset.into(),
            message: message.into(),
        }
    }

    /// Whether the error leaves no usable document, as opposed to a failed lookup.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            PresetError::Parse(_) | PresetError::Schema { .. } | PresetError::Io { .. }
        )
    }
}
