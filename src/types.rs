use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;
use url::Url;

/// A signed, expiring GET URL
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PresignedUrl {
    /// The URL itself, signature and expiry embedded in the query string
    pub url: String,
    /// Signing time; the validity window starts here
    pub issued_at: DateTime<Utc>,
    /// Validity window in seconds
    pub expires_in_secs: u64,
}

impl PresignedUrl {
    pub fn new(url: String, issued_at: DateTime<Utc>, expires_in: Duration) -> Self {
        Self {
            url,
            issued_at,
            expires_in_secs: expires_in.as_secs(),
        }
    }

    pub fn expires_in(&self) -> Duration {
        Duration::from_secs(self.expires_in_secs)
    }

    /// When the URL stops authorizing the read
    pub fn expires_at(&self) -> DateTime<Utc> {
        let window = i64::try_from(self.expires_in_secs)
            .ok()
            .and_then(TimeDelta::try_seconds)
            .unwrap_or(TimeDelta::MAX);
        self.issued_at
            .checked_add_signed(window)
            .unwrap_or(DateTime::<Utc>::MAX_UTC)
    }

    /// Validity window as embedded in the URL's `X-Amz-Expires` parameter
    pub fn expires_in_from_query(&self) -> Option<Duration> {
        query_param(&self.url, "X-Amz-Expires")
            .and_then(|v| v.parse::<u64>().ok())
            .map(Duration::from_secs)
    }

    pub fn into_url(self) -> String {
        self.url
    }
}

impl fmt::Display for PresignedUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.url)
    }
}

/// Look up a decoded query parameter
pub fn query_param(url: &str, name: &str) -> Option<String> {
    let url = Url::parse(url).ok()?;
    url.query_pairs()
        .find(|(k, _)| k == name)
        .map(|(_, v)| v.into_owned())
}
