//! Server configuration from the environment.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

/// Default listen address.
const DEFAULT_ADDR: ([u8; 4], u16) = ([127, 0, 0, 1], 3000);

/// Default idle timeout for sessions (30 minutes).
const DEFAULT_SESSION_IDLE_SECS: u64 = 30 * 60;

/// Longest accepted session idle timeout (one year).
const MAX_SESSION_IDLE_SECS: u64 = 365 * 24 * 60 * 60;

/// Errors from reading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A variable is set but cannot be parsed
    #[error("invalid value for {name}: {value:?} ({reason})")]
    Invalid {
        name: &'static str,
        value: String,
        reason: String,
    },
}

/// Where routes come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoutingSource {
    /// Live directions API
    Api {
        api_key: String,
        base_url: Option<String>,
        timeout_secs: Option<u64>,
        max_concurrent: Option<usize>,
    },
    /// Fixed distances from a JSON file
    Mock { path: PathBuf },
}

/// Server configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Address to listen on.
    pub addr: SocketAddr,

    /// Directory served under `/static`.
    pub static_dir: PathBuf,

    /// Routing backend.
    pub routing: RoutingSource,

    /// Custom traveler catalog; the built-in one is used when unset.
    pub travelers_file: Option<PathBuf>,

    /// How long an untouched session is kept.
    pub session_idle: Duration,
}

impl AppConfig {
    /// Read configuration from process environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read configuration through `lookup`, which maps a variable name to its value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let var = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let addr = parse_var("TRAVEL_TIME_ADDR", var("TRAVEL_TIME_ADDR"))?
            .unwrap_or_else(|| SocketAddr::from(DEFAULT_ADDR));

        let static_dir = var("TRAVEL_TIME_STATIC_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("static"));

        let routing = match var("ROUTING_MOCK_FILE") {
            Some(path) => RoutingSource::Mock {
                path: PathBuf::from(path),
            },
            None => RoutingSource::Api {
                api_key: var("ROUTING_API_KEY").unwrap_or_default(),
                base_url: var("ROUTING_BASE_URL"),
                timeout_secs: parse_var("ROUTING_TIMEOUT_SECS", var("ROUTING_TIMEOUT_SECS"))?,
                max_concurrent: parse_var(
                    "ROUTING_MAX_CONCURRENT",
                    var("ROUTING_MAX_CONCURRENT"),
                )?,
            },
        };

        let session_idle_secs = parse_var("SESSION_IDLE_SECS", var("SESSION_IDLE_SECS"))?
            .unwrap_or(DEFAULT_SESSION_IDLE_SECS);
        if !(1..=MAX_SESSION_IDLE_SECS).contains(&session_idle_secs) {
            return Err(ConfigError::Invalid {
                name: "SESSION_IDLE_SECS",
                value: session_idle_secs.to_string(),
                reason: format!("must be between 1 and {MAX_SESSION_IDLE_SECS}"),
            });
        }

        Ok(Self {
            addr,
            static_dir,
            routing,
            travelers_file: var("TRAVELERS_FILE").map(PathBuf::from),
            session_idle: Duration::from_secs(session_idle_secs),
        })
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from(DEFAULT_ADDR),
            static_dir: PathBuf::from("static"),
            routing: RoutingSource::Api {
                api_key: String::new(),
                base_url: None,
                timeout_secs: None,
                max_concurrent: None,
            },
            travelers_file: None,
            session_idle: Duration::from_secs(DEFAULT_SESSION_IDLE_SECS),
        }
    }
}

fn parse_var<T>(name: &'static str, value: Option<String>) -> Result<Option<T>, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    value
        .map(|v| {
            v.trim().parse::<T>().map_err(|e| ConfigError::Invalid {
                name,
                reason: e.to_string(),
                value: v,
            })
        })
        .transpose()
}
