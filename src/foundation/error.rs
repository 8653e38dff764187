/// Convenience result type used across glimmer.
pub type GlimmerResult<T> = Result<T, GlimmerError>;

/// Top-level error taxonomy used by engine APIs.
#[derive(thiserror::Error, Debug)]
pub enum GlimmerError {
    /// Invalid user-provided settings, detected before any frame is processed.
    #[error("validation error: {0}")]
    Validation(String),

    /// Failures of the decode/encode collaborator (ffmpeg, ffprobe, pipes).
    #[error("media error: {0}")]
    Media(String),

    /// Errors when serializing or deserializing settings.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl GlimmerError {
    /// Build a [`GlimmerError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`GlimmerError::Media`] value.
    pub fn media(msg: impl Into<String>) -> Self {
        Self::Media(msg.into())
    }

    /// Build a [`GlimmerError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
