//! Chart error types

use thiserror::Error;

/// Errors raised while computing a chart layout
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ChartError {
    /// No entries were supplied for the render pass
    #[error("cannot compute a domain from an empty entry list")]
    EmptyEntries,

    /// An entry total is NaN or infinite
    #[error("entry '{category}' has a non-finite sum: {sum}")]
    NonFiniteSum { category: String, sum: f64 },

    /// A configuration value is negative or not finite
    #[error("invalid chart setting '{name}': {value}")]
    InvalidSetting { name: &'static str, value: f64 },

    /// Settings JSON could not be parsed
    #[error("failed to parse chart settings: {0}")]
    Settings(String),
}

impl From<serde_json::Error> for ChartError {
    fn from(err: serde_json::Error) -> Self {
        Self::Settings(err.to_string())
    }
}

/// Result type for chart operations
pub type Result<T> = std::result::Result<T, ChartError>;
