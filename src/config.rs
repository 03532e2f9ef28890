use std::env;
use std::time::Duration;

use crate::error::ApiError;
use crate::riot::region::{Platform, Region};

/// Runtime configuration, loaded once from the environment.
#[derive(Debug, Clone)]
pub struct Config {
    /// Riot API key. Secret, never logged.
    pub riot_api_key: String,
    /// Platform routing for Summoner-v4 / League-v4 / Mastery-v4.
    pub platform: Platform,
    /// Regional routing for Account-v1 / Match-v5.
    pub region: Region,
    /// Connection pool size towards one API host.
    pub max_connections_per_host: usize,
    /// How many recent match ids a profile load requests.
    pub match_history_count: u32,
    /// Total attempts for one request when the API answers 429.
    pub fetch_max_attempts: u32,
    /// Backoff applied when a 429 carries no usable `Retry-After` header.
    pub default_retry_after: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self, ApiError> {
        dotenvy::dotenv().ok();

        const DEFAULT_MAX_CONNECTIONS_PER_HOST: usize = 20;
        const DEFAULT_MATCH_HISTORY_COUNT: u32 = 40;
        const DEFAULT_FETCH_MAX_ATTEMPTS: u32 = 3;
        const DEFAULT_RETRY_AFTER_SECS: u64 = 1;

        let riot_api_key = env::var("RIOT_API_KEY")
            .map_err(|_| ApiError::Config("RIOT_API_KEY must be set".into()))?;

        let platform = env::var("RIOT_PLATFORM")
            .ok()
            .map(|v| v.parse::<Platform>())
            .transpose()?
            .unwrap_or(Platform::NA1);

        let max_connections_per_host = env::var("MAX_CONNECTIONS_PER_HOST")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_MAX_CONNECTIONS_PER_HOST);

        let match_history_count = env::var("MATCH_HISTORY_COUNT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_MATCH_HISTORY_COUNT);

        Ok(Self {
            riot_api_key,
            platform,
            region: platform.to_region(),
            max_connections_per_host,
            match_history_count,
            fetch_max_attempts: DEFAULT_FETCH_MAX_ATTEMPTS,
            default_retry_after: Duration::from_secs(DEFAULT_RETRY_AFTER_SECS),
        })
    }

    /// Configuration used by tests: same defaults, fixed key and platform.
    pub fn for_key(riot_api_key: String) -> Self {
        Self {
            riot_api_key,
            platform: Platform::NA1,
            region: Region::Americas,
            max_connections_per_host: 20,
            match_history_count: 40,
            fetch_max_attempts: 3,
            default_retry_after: Duration::from_secs(1),
        }
    }
}
