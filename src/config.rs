use std::time::Duration;

use crate::error::{PresignError, Result};

/// Validity window used when the caller does not supply one
pub const DEFAULT_EXPIRES_IN: Duration = Duration::from_secs(60 * 60); // 1 hour

/// Issuance defaults
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// How long issued URLs stay valid (default: 1 hour)
    pub expires_in: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            expires_in: DEFAULT_EXPIRES_IN,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_expires_in(mut self, expires_in: Duration) -> Result<Self> {
        validate_expires_in(expires_in)?;
        self.expires_in = expires_in;
        Ok(self)
    }

    pub fn with_expires_in_secs(self, secs: u64) -> Result<Self> {
        self.with_expires_in(Duration::from_secs(secs))
    }
}

/// Reject windows the URL could never be used in.
/// The upper bound is left to the SDK.
pub(crate) fn validate_expires_in(expires_in: Duration) -> Result<()> {
    if expires_in.is_zero() {
        return Err(PresignError::invalid_input(
            "expiration must be a positive number of seconds",
        ));
    }
    Ok(())
}
