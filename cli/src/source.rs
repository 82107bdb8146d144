use std::convert::Infallible;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use counterdex_data::{ResourceError, ResourceKind};
use tracing::{debug, warn};

/// Where a resource is read from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResourceSource {
    Path(PathBuf),
    Url(String),
}

impl ResourceSource {
    /// `http://` and `https://` locations are URLs, anything else a path
    pub fn parse(location: &str) -> Self {
        if location.starts_with("http://") || location.starts_with("https://") {
            ResourceSource::Url(location.to_string())
        } else {
            ResourceSource::Path(PathBuf::from(location))
        }
    }

    /// Read the resource body, retrying URLs according to `policy`
    pub async fn fetch(
        &self,
        resource: ResourceKind,
        client: &reqwest::Client,
        policy: &FetchPolicy,
    ) -> Result<String, ResourceError> {
        debug!(%resource, source = %self, "fetching");
        match self {
            ResourceSource::Path(path) => tokio::fs::read_to_string(path)
                .await
                .map_err(|e| ResourceError::unavailable(resource, format!("{}: {}", path.display(), e))),
            ResourceSource::Url(url) => fetch_url(url, resource, client, policy).await,
        }
    }
}

impl FromStr for ResourceSource {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl fmt::Display for ResourceSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResourceSource::Path(path) => write!(f, "{}", path.display()),
            ResourceSource::Url(url) => write!(f, "{}", url),
        }
    }
}

/// Retry and timeout settings for URL resources
#[derive(Debug, Clone)]
pub struct FetchPolicy {
    pub max_attempts: usize,
    pub initial_delay: Duration,
    pub max_delay: Duration,
    pub backoff_multiplier: f64,
    pub timeout: Duration,
}

impl Default for FetchPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            initial_delay: Duration::from_millis(500),
            max_delay: Duration::from_secs(5),
            backoff_multiplier: 2.0,
            timeout: Duration::from_secs(30),
        }
    }
}

async fn fetch_url(
    url: &str,
    resource: ResourceKind,
    client: &reqwest::Client,
    policy: &FetchPolicy,
) -> Result<String, ResourceError> {
    let max_attempts = policy.max_attempts.max(1);
    let mut delay = policy.initial_delay;
    let mut attempt = 1;

    loop {
        match get_text(client, url, policy.timeout).await {
            Ok(body) => return Ok(body),
            Err(e) if attempt >= max_attempts => {
                return Err(ResourceError::unavailable(
                    resource,
                    format!("{} after {} attempts: {}", url, attempt, e),
                ));
            }
            Err(e) => {
                warn!(
                    %resource,
                    attempt = attempt,
                    max_attempts = max_attempts,
                    error = %e,
                    "Fetch attempt failed"
                );
                tokio::time::sleep(delay).await;
                attempt += 1;
                delay = Duration::from_secs_f64(delay.as_secs_f64() * policy.backoff_multiplier)
                    .min(policy.max_delay);
            }
        }
    }
}

async fn get_text(client: &reqwest::Client, url: &str, timeout: Duration) -> reqwest::Result<String> {
    client
        .get(url)
        .timeout(timeout)
        .send()
        .await?
        .error_for_status()?
        .text()
        .await
}
