//! Environment-driven configuration.
//!
//! Everything the scan needs is collected into an explicit [`ScreenerConfig`]
//! at startup and passed down; nothing reads the environment afterwards.

use std::env;
use std::time::Duration;

use secrecy::SecretString;
use url::Url;

use crate::error::ConfigError;
use crate::universe;

pub const DEFAULT_BENCHMARK: &str = "QQQ";
pub const DEFAULT_CONCURRENCY: usize = 4;
pub const DEFAULT_TIMEOUT_SECS: u64 = 15;
pub const DEFAULT_MAX_RETRIES: usize = 2;
pub const DEFAULT_REPORT_TITLE: &str = "Algo Screener";

pub const DEFAULT_PRICE_HISTORY_URL: &str = "https://query1.finance.yahoo.com";
pub const DEFAULT_OPTIONS_CHAIN_URL: &str = "https://api.tdameritrade.com";
pub const DEFAULT_PUSHBULLET_URL: &str = "https://api.pushbullet.com";

/// Timeout and retry budget for external calls. Notifications get the
/// timeout only.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CallPolicy {
    pub timeout: Duration,
    pub max_retries: usize,
}

impl Default for CallPolicy {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            max_retries: DEFAULT_MAX_RETRIES,
        }
    }
}

/// Parameters of a single scan.
#[derive(Debug, Clone)]
pub struct ScanSettings {
    pub benchmark: String,
    pub universe: Vec<String>,
    pub concurrency: usize,
    pub call_policy: CallPolicy,
    pub report_title: String,
}

impl Default for ScanSettings {
    fn default() -> Self {
        Self {
            benchmark: DEFAULT_BENCHMARK.to_string(),
            universe: universe::default_universe(),
            concurrency: DEFAULT_CONCURRENCY,
            call_policy: CallPolicy::default(),
            report_title: DEFAULT_REPORT_TITLE.to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Endpoints {
    pub price_history: Url,
    pub options_chain: Url,
    pub pushbullet: Url,
}

/// API credentials. Missing keys are allowed: the chain lookup then fails per
/// candidate and the notifier becomes a no-op.
#[derive(Debug, Default)]
pub struct Credentials {
    pub tda_api_key: Option<SecretString>,
    pub pushbullet_api_key: Option<SecretString>,
}

#[derive(Debug)]
pub struct ScreenerConfig {
    pub environment: String,
    pub scan: ScanSettings,
    pub endpoints: Endpoints,
    pub credentials: Credentials,
    /// Cron expression; `None` runs a single scan.
    pub schedule: Option<String>,
}

impl ScreenerConfig {
    /// Load from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load from an arbitrary key lookup. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let environment = get("APP_ENV")
            .or_else(|| get("ENVIRONMENT"))
            .unwrap_or_else(|| "sandbox".to_string());

        let benchmark = get("BENCHMARK_TICKER")
            .map(|t| t.to_uppercase())
            .unwrap_or_else(|| DEFAULT_BENCHMARK.to_string());

        let universe = match get("SCAN_UNIVERSE") {
            Some(list) => universe::parse_list(&list),
            None => universe::default_universe(),
        };

        let concurrency = parse_or("SCAN_CONCURRENCY", get("SCAN_CONCURRENCY"), DEFAULT_CONCURRENCY)?;
        if concurrency == 0 {
            return Err(ConfigError::Invalid {
                key: "SCAN_CONCURRENCY",
                value: "0".to_string(),
                reason: "must be at least 1".to_string(),
            });
        }

        let timeout_secs = parse_or("HTTP_TIMEOUT_SECS", get("HTTP_TIMEOUT_SECS"), DEFAULT_TIMEOUT_SECS)?;
        let max_retries = parse_or("HTTP_MAX_RETRIES", get("HTTP_MAX_RETRIES"), DEFAULT_MAX_RETRIES)?;

        let endpoints = Endpoints {
            price_history: parse_url(
                "PRICE_HISTORY_BASE_URL",
                get("PRICE_HISTORY_BASE_URL"),
                DEFAULT_PRICE_HISTORY_URL,
            )?,
            options_chain: parse_url(
                "OPTIONS_CHAIN_BASE_URL",
                get("OPTIONS_CHAIN_BASE_URL"),
                DEFAULT_OPTIONS_CHAIN_URL,
            )?,
            pushbullet: parse_url(
                "PUSHBULLET_BASE_URL",
                get("PUSHBULLET_BASE_URL"),
                DEFAULT_PUSHBULLET_URL,
            )?,
        };

        let credentials = Credentials {
            tda_api_key: get("TDA_API_KEY").map(SecretString::from),
            pushbullet_api_key: get("PUSHBULLET_API_KEY").map(SecretString::from),
        };

        Ok(Self {
            environment,
            scan: ScanSettings {
                benchmark,
                universe,
                concurrency,
                call_policy: CallPolicy {
                    timeout: Duration::from_secs(timeout_secs),
                    max_retries,
                },
                report_title: get("REPORT_TITLE").unwrap_or_else(|| DEFAULT_REPORT_TITLE.to_string()),
            },
            endpoints,
            credentials,
            schedule: get("SCAN_SCHEDULE"),
        })
    }
}

fn parse_or<T>(key: &'static str, raw: Option<String>, default: T) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match raw {
        Some(value) => value.parse().map_err(|e: T::Err| ConfigError::Invalid {
            key,
            reason: e.to_string(),
            value,
        }),
        None => Ok(default),
    }
}

fn parse_url(key: &'static str, raw: Option<String>, default: &str) -> Result<Url, ConfigError> {
    let value = raw.unwrap_or_else(|| default.to_string());
    Url::parse(&value).map_err(|e| ConfigError::Invalid {
        key,
        reason: e.to_string(),
        value,
    })
}
