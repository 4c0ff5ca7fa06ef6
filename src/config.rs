//! Environment-driven configuration.
//!
//! | Variable | Default |
//! |---|---|
//! | `HAVEN_API_URL` | `http://localhost:8005` |
//! | `HAVEN_API_KEY` | unset |
//! | `HAVEN_HTTP_TIMEOUT_SECS` | 30 |
//! | `HAVEN_SEARCH_DEBOUNCE_MS` | 300 |
//! | `HAVEN_SEARCH_LIMIT` | 20 |
//! | `HAVEN_ROLE` | `public` |
//! | `HAVEN_USER`, `HAVEN_DISCORD_TAG` | unset |

use crate::error::ConfigError;
use crate::search::SearchSettings;
use crate::session::Session;
use haven_client::HttpClientConfig;
use haven_nav::Role;
use std::str::FromStr;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct HavenConfig {
    pub api: HttpClientConfig,
    pub search: SearchSettings,
    pub session: Session,
}

impl HavenConfig {
    /// Load `.env` if present, then read the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let defaults = HttpClientConfig::default();
        let api = HttpClientConfig {
            base_url: get("HAVEN_API_URL").unwrap_or(defaults.base_url),
            api_key: get("HAVEN_API_KEY"),
            timeout: match get("HAVEN_HTTP_TIMEOUT_SECS") {
                Some(v) => Duration::from_secs(parse_num("HAVEN_HTTP_TIMEOUT_SECS", &v)?),
                None => defaults.timeout,
            },
        };

        let search_defaults = SearchSettings::default();
        let search = SearchSettings {
            debounce: match get("HAVEN_SEARCH_DEBOUNCE_MS") {
                Some(v) => Duration::from_millis(parse_num("HAVEN_SEARCH_DEBOUNCE_MS", &v)?),
                None => search_defaults.debounce,
            },
            limit: match get("HAVEN_SEARCH_LIMIT") {
                Some(v) => parse_num("HAVEN_SEARCH_LIMIT", &v)?,
                None => search_defaults.limit,
            },
        };

        let role = match get("HAVEN_ROLE") {
            Some(v) => Role::from_str(&v)?,
            None => Role::default(),
        };
        let session = Session {
            role,
            user: get("HAVEN_USER"),
            discord_tag: get("HAVEN_DISCORD_TAG"),
        };

        Ok(Self {
            api,
            search,
            session,
        })
    }
}

fn parse_num<T: FromStr>(key: &str, value: &str) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::Invalid {
        key: key.to_string(),
        value: value.to_string(),
    })
}
