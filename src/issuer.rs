use std::io::Write;
use std::time::Duration;
use tracing::{instrument, warn};

use crate::config::{validate_expires_in, Config};
use crate::error::{PresignError, Result};
use crate::presign::{Presign, S3Presigner};
use crate::target::Target;
use crate::types::PresignedUrl;

/// Issues presigned download URLs through a [`Presign`] backend
pub struct Issuer<P> {
    presigner: P,
    config: Config,
}

impl<P: Presign> Issuer<P> {
    pub fn new(presigner: P, config: Config) -> Self {
        Self { presigner, config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Issue a URL authorizing a read of `key` behind `target`.
    ///
    /// `expires_in` falls back to the configured default (1 hour unless
    /// overridden). Invalid input is rejected before the presigner is called.
    #[instrument(skip(self))]
    pub async fn issue(
        &self,
        target: &str,
        key: &str,
        expires_in: Option<Duration>,
    ) -> Result<PresignedUrl> {
        let expires_in = expires_in.unwrap_or(self.config.expires_in);
        validate_expires_in(expires_in)?;

        if key.is_empty() {
            return Err(PresignError::invalid_input("object key must not be empty"));
        }
        let target = Target::parse(target)?;

        self.presigner.presign_get(&target, key, expires_in).await
    }

    /// Issue a URL, reporting any failure as one line on `out`.
    ///
    /// Nothing propagates: callers only see `None` on failure.
    pub async fn issue_or_report<W: Write>(
        &self,
        target: &str,
        key: &str,
        expires_in: Option<Duration>,
        out: &mut W,
    ) -> Option<String> {
        match self.issue(target, key, expires_in).await {
            Ok(url) => Some(url.into_url()),
            Err(e) => {
                warn!("Presigned URL issuance failed: {}", e);
                // Best effort; a broken output stream must not turn into a panic
                let _ = writeln!(out, "Error generating presigned URL: {}", e);
                None
            }
        }
    }
}

impl Issuer<S3Presigner> {
    /// Issuer signing with credentials and region from the AWS environment
    pub async fn from_env(config: Config) -> Self {
        Self::new(S3Presigner::from_env().await, config)
    }
}

/// Generate a presigned GET URL for an object behind a bucket or access point.
///
/// Builds a SigV4 client from the AWS environment on every call. On failure a
/// diagnostic line is printed to stdout and `None` is returned.
pub async fn issue_presigned_url(
    target: &str,
    key: &str,
    expiration_secs: Option<u64>,
) -> Option<String> {
    let issuer = Issuer::from_env(Config::new()).await;
    let expires_in = expiration_secs.map(Duration::from_secs);
    issuer
        .issue_or_report(target, key, expires_in, &mut std::io::stdout())
        .await
}
