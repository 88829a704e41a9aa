//! Client configuration.
//!
//! Defaults target the public upstream. Each field can be overridden from the
//! environment with [`ClientConfig::from_env`]:
//!
//! ```bash
//! export MLB_STATS_BASE_URL=https://statsapi.mlb.com/api
//! export MLB_STATS_API_VERSION=v1
//! export MLB_STATS_DEFAULT_SEASON=2024
//! ```

use crate::error::Result;
use crate::types::Season;

pub const DEFAULT_BASE_URL: &str = "https://statsapi.mlb.com/api";
pub const DEFAULT_API_VERSION: &str = "v1";
pub const DEFAULT_USER_AGENT: &str = concat!("mlb-stats/", env!("CARGO_PKG_VERSION"));

pub const BASE_URL_ENV_VAR: &str = "MLB_STATS_BASE_URL";
pub const API_VERSION_ENV_VAR: &str = "MLB_STATS_API_VERSION";
pub const DEFAULT_SEASON_ENV_VAR: &str = "MLB_STATS_DEFAULT_SEASON";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
    pub version: String,
    /// Season used by operations called without an explicit season.
    pub default_season: Season,
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            version: DEFAULT_API_VERSION.to_string(),
            default_season: Season::current(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl ClientConfig {
    /// Defaults overridden by any of the `MLB_STATS_*` variables that are set.
    ///
    /// Fails with `InvalidArgumentValue` if `MLB_STATS_DEFAULT_SEASON` is not
    /// a four-digit year.
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();
        if let Some(base_url) = non_empty_var(BASE_URL_ENV_VAR) {
            config.base_url = base_url;
        }
        if let Some(version) = non_empty_var(API_VERSION_ENV_VAR) {
            config.version = version;
        }
        if let Some(season) = non_empty_var(DEFAULT_SEASON_ENV_VAR) {
            config.default_season = season.parse()?;
        }
        Ok(config)
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    pub fn with_default_season(mut self, season: Season) -> Self {
        self.default_season = season;
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}
