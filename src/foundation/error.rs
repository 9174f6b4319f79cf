/// Convenience result type used across the crate.
pub type LoaderResult<T> = Result<T, LoaderError>;

/// Error taxonomy for the fallible edges of the crate.
///
/// Frame generation itself never fails: variant names, grid dimensions and timing values are
/// normalized instead of rejected. Errors only surface from strict parsing, configuration
/// loading, and the debug CLI.
#[derive(thiserror::Error, Debug)]
pub enum LoaderError {
    /// Invalid user-provided configuration data.
    #[error("validation error: {0}")]
    Validation(String),

    /// A variant name that does not match any known variant (strict parsing only).
    #[error("unknown variant: {0}")]
    UnknownVariant(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl LoaderError {
    /// Build a [`LoaderError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`LoaderError::UnknownVariant`] value.
    pub fn unknown_variant(name: impl Into<String>) -> Self {
        Self::UnknownVariant(name.into())
    }

    /// Build a [`LoaderError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_json::Error> for LoaderError {
    fn from(err: serde_json::Error) -> Self {
        Self::serde(err.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
