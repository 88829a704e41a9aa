//! Numeric identifiers for players and games.

use super::argument::{owned_value_argument, value_is_present, Argument, Param};
use crate::error::{Result, StatsError};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Validate a JSON number as a non-negative integer id.
fn id_from_value(param: &'static str, value: &Value) -> Result<u64> {
    match value {
        Value::Number(n) => n
            .as_u64()
            .ok_or_else(|| StatsError::invalid_value(param, "must be a non-negative integer")),
        _ => Err(StatsError::invalid_type(param, "number")),
    }
}

fn id_from_i64(param: &'static str, id: i64) -> Result<u64> {
    u64::try_from(id).map_err(|_| StatsError::invalid_value(param, "must be a non-negative integer"))
}

/// Implements the shared numeric conversions for an id newtype.
macro_rules! id_arguments {
    ($ty:ident) => {
        impl Argument<$ty> for $ty {
            fn into_arg(self) -> Result<$ty> {
                Ok(self)
            }
        }

        impl Argument<$ty> for u64 {
            fn into_arg(self) -> Result<$ty> {
                Ok($ty(self))
            }
        }

        impl Argument<$ty> for u32 {
            fn into_arg(self) -> Result<$ty> {
                Ok($ty(u64::from(self)))
            }
        }

        impl Argument<$ty> for i64 {
            fn into_arg(self) -> Result<$ty> {
                id_from_i64($ty::NAME, self).map($ty)
            }
        }

        impl Argument<$ty> for i32 {
            fn into_arg(self) -> Result<$ty> {
                id_from_i64($ty::NAME, i64::from(self)).map($ty)
            }
        }

        impl Argument<$ty> for &Value {
            fn is_present(&self) -> bool {
                value_is_present(self)
            }

            fn into_arg(self) -> Result<$ty> {
                id_from_value($ty::NAME, self).map($ty)
            }
        }

        owned_value_argument!($ty);

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

/// MLB person id, e.g. `660271`.
///
/// # Examples
///
/// ```rust
/// use mlb_stats::{Argument, PlayerId};
///
/// let id: PlayerId = 660271u64.into_arg().unwrap();
/// assert_eq!(id.to_string(), "660271");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u64);

impl PlayerId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl Param for PlayerId {
    const NAME: &'static str = "id";
    const EXPECTED: &'static str = "number";
}

id_arguments!(PlayerId);

/// Primary key of a single game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GamePk(pub u64);

impl GamePk {
    pub fn new(pk: u64) -> Self {
        Self(pk)
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl Param for GamePk {
    const NAME: &'static str = "gamePk";
    const EXPECTED: &'static str = "number";
}

id_arguments!(GamePk);
