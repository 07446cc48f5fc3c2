use async_trait::async_trait;
use aws_config::SdkConfig;
use aws_credential_types::provider::ProvideCredentials;
use aws_sdk_s3::config::Region;
use aws_sdk_s3::error::DisplayErrorContext;
use aws_sdk_s3::presigning::PresigningConfig;
use chrono::{DateTime, Utc};
use std::time::{Duration, SystemTime};
use tracing::{debug, info, instrument};

use crate::error::{PresignError, Result};
use crate::target::Target;
use crate::types::PresignedUrl;

/// Computes signed GET URLs
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Presign: Send + Sync {
    async fn presign_get(
        &self,
        target: &Target,
        key: &str,
        expires_in: Duration,
    ) -> Result<PresignedUrl>;
}

/// Region signed for when neither the target nor the AWS environment names one.
/// Buckets are reachable through the global endpoint from here.
pub const DEFAULT_REGION: &str = "us-east-1";

/// Presigner backed by the AWS SDK, signing with SigV4.
///
/// A fresh S3 client is built for every request so that ARN targets are
/// signed for the region embedded in the ARN.
pub struct S3Presigner {
    sdk_config: SdkConfig,
    fallback_region: Region,
}

impl S3Presigner {
    pub fn new(sdk_config: SdkConfig) -> Self {
        Self {
            sdk_config,
            fallback_region: Region::from_static(DEFAULT_REGION),
        }
    }

    /// Load credentials and region from the standard AWS environment
    pub async fn from_env() -> Self {
        let sdk_config = aws_config::load_from_env().await;
        Self::new(sdk_config)
    }

    /// Override the last-resort region (default: us-east-1)
    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.fallback_region = Region::new(region.into());
        self
    }

    /// Region to sign for: the target's own, then the environment's, then ours
    fn resolve_region(&self, target: &Target) -> Region {
        if let Some(region) = target.region() {
            return Region::new(region.to_string());
        }
        self.sdk_config
            .region()
            .cloned()
            .unwrap_or_else(|| self.fallback_region.clone())
    }

    /// Presigning is local, so a bad credential chain only shows up if we ask
    async fn check_credentials(&self) -> Result<()> {
        let provider = self
            .sdk_config
            .credentials_provider()
            .ok_or_else(|| PresignError::authorization("no credentials provider configured"))?;

        provider.provide_credentials().await.map_err(|e| {
            PresignError::authorization(format!(
                "failed to load credentials: {}",
                DisplayErrorContext(&e)
            ))
        })?;

        Ok(())
    }

    fn client_for(&self, region: Region) -> aws_sdk_s3::Client {
        let conf = aws_sdk_s3::config::Builder::from(&self.sdk_config)
            .region(region)
            .build();
        aws_sdk_s3::Client::from_conf(conf)
    }
}

#[async_trait]
impl Presign for S3Presigner {
    #[instrument(skip(self))]
    async fn presign_get(
        &self,
        target: &Target,
        key: &str,
        expires_in: Duration,
    ) -> Result<PresignedUrl> {
        info!(
            "Generating presigned URL for {}/{} with duration {:?}",
            target, key, expires_in
        );

        self.check_credentials().await?;
        let region = self.resolve_region(target);
        debug!("Signing for region {}", region);

        let now = SystemTime::now();
        let presigning_config = PresigningConfig::builder()
            .start_time(now)
            .expires_in(expires_in)
            .build()
            .map_err(|e| {
                PresignError::configuration(format!(
                    "invalid presigning config: {}",
                    DisplayErrorContext(&e)
                ))
            })?;

        let presigned_request = self
            .client_for(region)
            .get_object()
            .bucket(target.as_bucket_param())
            .key(key)
            .presigned(presigning_config)
            .await
            .map_err(|e| PresignError::signing(DisplayErrorContext(&e).to_string()))?;

        let url = presigned_request.uri().to_string();
        debug!("Generated presigned URL for {}/{}", target, key);

        Ok(PresignedUrl::new(url, DateTime::<Utc>::from(now), expires_in))
    }
}
