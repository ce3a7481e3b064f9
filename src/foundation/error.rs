/// Convenience alias for results carrying a [`SlidegridError`].
pub type SlidegridResult<T> = Result<T, SlidegridError>;

#[derive(thiserror::Error, Debug)]
/// Error type for the slide record boundary.
///
/// The layout/sync core itself is total and never fails; errors only arise
/// when validating slide records or crossing the serde boundary.
pub enum SlidegridError {
    /// A slide record violates a structural invariant.
    #[error("validation error: {0}")]
    Validation(String),

    /// Serialization or deserialization of a boundary type failed.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Escape hatch for wrapped external errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl SlidegridError {
    /// New validation error with the given message.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// New serialization error with the given message.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
