/// Convenience result type used across Cobble.
pub type CobbleResult<T> = Result<T, CobbleError>;

/// Top-level error taxonomy used by engine APIs.
///
/// Layout computation itself is total and never errors; these variants
/// surface only at configuration and serialization boundaries.
#[derive(thiserror::Error, Debug)]
pub enum CobbleError {
    /// Invalid user-provided configuration or manifest data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CobbleError {
    /// Build a [`CobbleError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`CobbleError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
