/// Convenience result type used across sunfade.
pub type SunfadeResult<T> = Result<T, SunfadeError>;

/// Top-level error taxonomy.
///
/// Effects never surface errors to the page; these values only reach callers at
/// start-up (configuration, missing window/document) and in the CLI.
#[derive(thiserror::Error, Debug)]
pub enum SunfadeError {
    /// Invalid user-provided configuration values.
    #[error("validation error: {0}")]
    Validation(String),

    /// Configuration could not be located or read.
    #[error("config error: {0}")]
    Config(String),

    /// A browser DOM call failed.
    #[error("dom error: {0}")]
    Dom(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl SunfadeError {
    /// Build a [`SunfadeError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`SunfadeError::Config`] value.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Build a [`SunfadeError::Dom`] value.
    pub fn dom(msg: impl Into<String>) -> Self {
        Self::Dom(msg.into())
    }

    /// Build a [`SunfadeError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_json::Error> for SunfadeError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serde(err.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
