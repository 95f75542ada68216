//! Error types for squeeze-switch.

use squeeze_core::ColorParseError;
use thiserror::Error;

/// Errors raised while loading or validating a [`SwitchConfig`](crate::SwitchConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    /// TOML parse error.
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// JSON parse error.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// A color field is not a valid hex string.
    #[error("invalid color in `{field}`: {source}")]
    Color {
        /// Offending field
        field: &'static str,
        /// Parse failure
        #[source]
        source: ColorParseError,
    },

    /// A field is outside its accepted range.
    #[error("invalid `{field}`: {reason}")]
    Invalid {
        /// Offending field
        field: &'static str,
        /// What is wrong with it
        reason: String,
    },
}

impl ConfigError {
    /// Field the error refers to, when it refers to one.
    #[must_use]
    pub const fn field(&self) -> Option<&'static str> {
        match self {
            Self::Color { field, .. } | Self::Invalid { field, .. } => Some(*field),
            Self::Toml(_) | Self::Json(_) => None,
        }
    }
}
