use std::sync::Arc;
use std::time::Duration;

use bytes::Bytes;
use governor::{
    Quota, RateLimiter,
    clock::DefaultClock,
    state::{InMemoryState, NotKeyed},
};
use nonzero_ext::nonzero;
use reqwest::StatusCode;
use reqwest::header::{HeaderMap, RETRY_AFTER};
use serde::de::DeserializeOwned;
use tracing::warn;

use crate::config::Config;
use crate::error::{ApiError, ApiResult};
use crate::riot::metrics::RequestMetrics;
use crate::riot::region::{Platform, Region};

/// Rate-limited HTTP client for the Riot API.
///
/// Two layers of throttling: a client-side governor quota keeps us under the
/// published request budget, and a reactive retry loop honours `Retry-After`
/// when the API answers 429 anyway. Everything else fails fast: non-200/429
/// statuses and transport errors are never retried.
pub struct RiotClient {
    client: reqwest::Client,
    limiter: RateLimiter<NotKeyed, InMemoryState, DefaultClock>,
    /// Riot API Key
    key: String,
    pub metrics: Arc<RequestMetrics>,
    platform: Platform,
    region: Region,
    max_attempts: u32,
    default_retry_after: Duration,
    /// Routes every request to one host instead of the Riot clusters.
    /// Used by HTTP-level tests.
    base_override: Option<String>,
}

impl RiotClient {
    pub fn new(config: &Config) -> ApiResult<Self> {
        let q = Quota::per_minute(nonzero!(100_u32)).allow_burst(nonzero!(20_u32));

        let client = reqwest::Client::builder()
            .pool_max_idle_per_host(config.max_connections_per_host)
            .build()?;

        Ok(Self {
            client,
            limiter: RateLimiter::direct(q),
            key: config.riot_api_key.clone(),
            metrics: RequestMetrics::new(),
            platform: config.platform,
            region: config.region,
            max_attempts: config.fetch_max_attempts.max(1),
            default_retry_after: config.default_retry_after,
            base_override: None,
        })
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_override = Some(base_url.into());
        self
    }

    /// Spawn a task logging periodic metrics about requests.
    pub fn start_metrics_logging(&self) {
        let metrics = self.metrics.clone();
        tokio::spawn(async move { metrics.log_loop().await });
    }

    /// Base URL for platform-routed endpoints (Summoner-v4, League-v4,
    /// Champion-Mastery-v4).
    pub(crate) fn platform_base(&self) -> String {
        self.base_override
            .clone()
            .unwrap_or_else(|| self.platform.base_url())
    }

    /// Base URL for regionally-routed endpoints (Account-v1, Match-v5).
    pub(crate) fn regional_base(&self) -> String {
        self.base_override
            .clone()
            .unwrap_or_else(|| self.region.base_url())
    }

    /// Issue one GET and return the raw body bytes.
    ///
    /// 200 returns the body; 429 backs off for the `Retry-After` duration and
    /// retries within the attempt budget; any other status fails immediately.
    pub async fn fetch_bytes(&self, url: &str) -> ApiResult<Bytes> {
        let mut attempt = 0;
        loop {
            attempt += 1;

            // Make sure we stay under the client-side quota before sending.
            self.limiter.until_ready().await;
            self.metrics.inc();

            let res = self
                .client
                .get(url)
                .header("X-Riot-Token", &self.key)
                .send()
                .await
                .map_err(ApiError::Network)?;

            match res.status() {
                StatusCode::OK => return res.bytes().await.map_err(ApiError::Network),
                StatusCode::TOO_MANY_REQUESTS => {
                    if attempt >= self.max_attempts {
                        return Err(ApiError::RateLimitExceeded {
                            attempts: self.max_attempts,
                        });
                    }
                    let wait = retry_after(res.headers()).unwrap_or(self.default_retry_after);
                    warn!(
                        attempt,
                        wait_secs = wait.as_secs(),
                        "throttled by the Riot API, backing off"
                    );
                    tokio::time::sleep(wait).await;
                }
                status => return Err(ApiError::Status(status)),
            }
        }
    }

    /// Fetch and decode one endpoint response.
    pub(crate) async fn get<T: DeserializeOwned>(&self, url: &str) -> ApiResult<T> {
        let bytes = self.fetch_bytes(url).await?;
        serde_json::from_slice(&bytes).map_err(ApiError::Decode)
    }
}

/// `Retry-After` carries integer seconds; anything unparseable means the
/// caller falls back to the configured default.
fn retry_after(headers: &HeaderMap) -> Option<Duration> {
    headers
        .get(RETRY_AFTER)?
        .to_str()
        .ok()?
        .trim()
        .parse::<u64>()
        .ok()
        .map(Duration::from_secs)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_client() -> RiotClient {
        RiotClient::new(&Config::for_key("RGAPI-TEST".into())).unwrap()
    }

    #[test]
    fn retry_after_parses_integer_seconds() {
        let mut headers = HeaderMap::new();
        headers.insert(RETRY_AFTER, "2".parse().unwrap());
        assert_eq!(retry_after(&headers), Some(Duration::from_secs(2)));
    }

    #[test]
    fn retry_after_ignores_garbage() {
        let mut headers = HeaderMap::new();
        headers.insert(RETRY_AFTER, "soon".parse().unwrap());
        assert_eq!(retry_after(&headers), None);
        assert_eq!(retry_after(&HeaderMap::new()), None);
    }

    #[test]
    fn base_override_replaces_both_routings() {
        let client = test_client().with_base_url("http://127.0.0.1:9999");

        assert_eq!(client.platform_base(), "http://127.0.0.1:9999");
        assert_eq!(client.regional_base(), "http://127.0.0.1:9999");
    }

    #[tokio::test]
    async fn fetch_propagates_network_error() {
        let client = test_client();

        let res = client.fetch_bytes("ht!tp://invalid-url").await;

        assert!(matches!(res, Err(ApiError::Network(_))));
    }
}
