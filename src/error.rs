//! Error types for the MLB Stats client

use std::fmt;
use thiserror::Error;


pub type Result<T> = std::result::Result<T, StatsError>;

/// The upstream resource an operation error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resource {
    Player,
    Players,
    Stats,
    GameStats,
    FreeAgents,
    Changes,
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Resource::Player => "player",
            Resource::Players => "players",
            Resource::Stats => "stats",
            Resource::GameStats => "game stats",
            Resource::FreeAgents => "free agents",
            Resource::Changes => "changes",
        };
        f.write_str(s)
    }
}

/// Coarse classification of a [`StatsError`].
///
/// The first three kinds are raised before any request is sent and are
/// fixed by correcting the input. `NotFound` and `NoDataAvailable` follow a
/// failed or empty upstream response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    MissingArgument,
    InvalidArgumentType,
    InvalidArgumentValue,
    NotFound,
    NoDataAvailable,
    Decode,
}

#[derive(Error, Debug)]
pub enum StatsError {
    #[error("No {param} given")]
    MissingArgument { param: &'static str },

    #[error("The {param} must be a {expected}")]
    InvalidArgumentType {
        param: &'static str,
        expected: &'static str,
    },

    #[error("The {param} {constraint}")]
    InvalidArgumentValue {
        param: &'static str,
        constraint: String,
    },

    #[error("{message}")]
    NotFound { resource: Resource, message: String },

    #[error("{message}")]
    NoDataAvailable { resource: Resource, message: String },

    #[error("Failed to decode record: {0}")]
    Decode(#[from] serde_json::Error),
}

impl StatsError {
    pub fn missing(param: &'static str) -> Self {
        StatsError::MissingArgument { param }
    }

    pub fn invalid_type(param: &'static str, expected: &'static str) -> Self {
        StatsError::InvalidArgumentType { param, expected }
    }

    pub fn invalid_value(param: &'static str, constraint: impl Into<String>) -> Self {
        StatsError::InvalidArgumentValue {
            param,
            constraint: constraint.into(),
        }
    }

    pub fn not_found(resource: Resource, message: impl Into<String>) -> Self {
        StatsError::NotFound {
            resource,
            message: message.into(),
        }
    }

    pub fn no_data(resource: Resource, message: impl Into<String>) -> Self {
        StatsError::NoDataAvailable {
            resource,
            message: message.into(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            StatsError::MissingArgument { .. } => ErrorKind::MissingArgument,
            StatsError::InvalidArgumentType { .. } => ErrorKind::InvalidArgumentType,
            StatsError::InvalidArgumentValue { .. } => ErrorKind::InvalidArgumentValue,
            StatsError::NotFound { .. } => ErrorKind::NotFound,
            StatsError::NoDataAvailable { .. } => ErrorKind::NoDataAvailable,
            StatsError::Decode(_) => ErrorKind::Decode,
        }
    }

    /// The offending parameter for argument errors.
    pub fn param(&self) -> Option<&'static str> {
        match self {
            StatsError::MissingArgument { param }
            | StatsError::InvalidArgumentType { param, .. }
            | StatsError::InvalidArgumentValue { param, .. } => Some(*param),
            _ => None,
        }
    }

    /// Stable machine-readable code, e.g. `ID_NOT_NUMBER` or `PLAYER_NOT_FOUND`.
    pub fn code(&self) -> String {
        match self {
            StatsError::MissingArgument { param } => format!("NO_{}_GIVEN", code_name(param)),
            StatsError::InvalidArgumentType { param, expected } => {
                format!("{}_NOT_{}", code_name(param), screaming(expected))
            }
            StatsError::InvalidArgumentValue { param, .. } => match *param {
                "updatedSince" => "DATE_IN_FUTURE".to_string(),
                p => format!("INVALID_{}", code_name(p)),
            },
            StatsError::NotFound { resource, .. } | StatsError::NoDataAvailable { resource, .. } => {
                match resource {
                    Resource::GameStats => "STATS_NOT_FOUND".to_string(),
                    r => format!("{}_NOT_FOUND", screaming(&r.to_string())),
                }
            }
            StatsError::Decode(_) => "DECODE_FAILED".to_string(),
        }
    }
}

fn code_name(param: &str) -> String {
    match param {
        "updatedSince" => "DATE".to_string(),
        p => screaming(p),
    }
}

/// `gamePk` -> `GAME_PK`, `free agents` -> `FREE_AGENTS`.
fn screaming(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 4);
    for c in s.chars() {
        if c == ' ' || c == '-' {
            out.push('_');
        } else if c.is_ascii_uppercase() && !out.is_empty() {
            out.push('_');
            out.push(c);
        } else {
            out.push(c.to_ascii_uppercase());
        }
    }
    out
}

/// Failure of the underlying request function.
///
/// Never surfaced by [`crate::PlayerManager`]; each operation translates it
/// into an operation-specific [`StatsError`].
#[derive(Error, Debug)]
pub enum TransportError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("{url} returned status {status}")]
    Status { status: u16, url: String },
}
