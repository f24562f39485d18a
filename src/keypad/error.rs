//! Keypad error types.

use thiserror::Error;

/// Errors raised when a key label does not map to an action
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum KeyError {
    #[error("Unknown key '{key}'")]
    UnknownKey { key: String },

    #[error("Unknown key '{key}' at position {position}")]
    UnknownKeyAt { key: String, position: usize },
}

impl KeyError {
    pub fn unknown(key: impl Into<String>) -> Self {
        Self::UnknownKey { key: key.into() }
    }

    /// The offending label.
    pub fn key(&self) -> &str {
        match self {
            Self::UnknownKey { key } | Self::UnknownKeyAt { key, .. } => key,
        }
    }

    pub(crate) fn at_position(self, position: usize) -> Self {
        match self {
            Self::UnknownKey { key } | Self::UnknownKeyAt { key, .. } => {
                Self::UnknownKeyAt { key, position }
            }
        }
    }
}
