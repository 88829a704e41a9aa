//! MLB Stats API Client Library
//!
//! A typed wrapper around the public MLB Stats API
//! (`https://statsapi.mlb.com/api/v1`): player search, biographical lookup,
//! season, career and game statistics, free-agent listings and change feeds.
//!
//! Each operation validates its arguments, issues a single GET and returns
//! the relevant part of the JSON body unchanged. Failures are reported as a
//! [`StatsError`] with a kind, a message naming the offending parameter and a
//! stable [`StatsError::code`]. Transport errors are never exposed directly.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use mlb_stats::{ClientConfig, PlayerManager, StatGroup};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let players = PlayerManager::new(&ClientConfig::from_env()?)?;
//!
//! let trout = players.get(545361u64).await?;
//! let fielding = players.season_stats(545361u64, StatGroup::Fielding, "2018").await?;
//! let career = players.career_stats(545361u64, "hitting").await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! ```bash
//! export MLB_STATS_BASE_URL=https://statsapi.mlb.com/api
//! export MLB_STATS_API_VERSION=v1
//! export MLB_STATS_DEFAULT_SEASON=2024
//! ```
//!
//! ## Logging
//!
//! Requests and failure translations are emitted as `tracing` events at
//! `debug` level. Install any subscriber to see them.

pub mod api;
pub mod config;
pub mod error;
pub mod filters;
pub mod players;
pub mod records;
pub mod types;

// Re-export commonly used types
pub use api::{HttpTransport, Transport, TransportHandle};
pub use config::ClientConfig;
pub use error::{ErrorKind, Resource, Result, StatsError, TransportError};
pub use players::PlayerManager;
pub use types::{Argument, GamePk, Keyword, Param, PlayerId, Season, StatGroup, UpdatedSince};
