//! Error types for the command-line front end.

use tiptime_core::TipError;

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),

    #[error("Invalid value for {key}: {reason}")]
    InvalidValue { key: String, reason: String },

    #[error("Unsupported locale: {0} (expected one of en-IN, en-US, en-GB)")]
    UnknownLocale(String),

    #[error("Template must contain a %s placeholder: {0:?}")]
    MissingPlaceholder(String),
}

/// Errors surfaced by the tip screen.
#[derive(Debug, thiserror::Error)]
pub enum ScreenError {
    #[error(transparent)]
    Tip(#[from] TipError),

    #[error("Tip {0} cannot be shown as a currency amount")]
    Unrepresentable(f64),

    #[error("Too many values on one line (expected: <cost> [tier] [round-up])")]
    TooManyFields,
}
