use thiserror::Error;

pub type Result<T> = std::result::Result<T, PresignError>;

/// Reasons a presigned URL could not be issued
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PresignError {
    /// Target, key or expiration rejected before any client was built
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Client or presigning configuration could not be assembled
    #[error("configuration error: {0}")]
    Configuration(String),

    /// No usable credentials to sign with
    #[error("authorization error: {0}")]
    Authorization(String),

    /// The SDK failed to produce a signed request
    #[error("signing failed: {0}")]
    Signing(String),
}

impl PresignError {
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    pub fn configuration(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }

    pub fn authorization(msg: impl Into<String>) -> Self {
        Self::Authorization(msg.into())
    }

    pub fn signing(msg: impl Into<String>) -> Self {
        Self::Signing(msg.into())
    }
}
