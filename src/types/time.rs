//! Season years and change-feed timestamps.

use super::argument::{owned_value_argument, string_argument, value_is_present, Argument, Param};
use crate::error::{Result, StatsError};
use chrono::{DateTime, Datelike, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

/// A season year, exactly four ASCII digits (`"2018"`, `"1999"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Season(String);

impl Season {
    /// The season of the current UTC calendar year.
    pub fn current() -> Self {
        Self::from_year(Utc::now().year())
    }

    fn from_year(year: i32) -> Self {
        Self(format!("{:04}", year.clamp(0, 9999)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Season {
    fn default() -> Self {
        Self::current()
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Season {
    type Err = StatsError;

    fn from_str(s: &str) -> Result<Self> {
        if s.len() == 4 && s.bytes().all(|b| b.is_ascii_digit()) {
            Ok(Self(s.to_string()))
        } else {
            Err(StatsError::invalid_value(Self::NAME, "must be a valid year"))
        }
    }
}

impl TryFrom<String> for Season {
    type Error = StatsError;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

impl From<Season> for String {
    fn from(season: Season) -> Self {
        season.0
    }
}

impl Param for Season {
    const NAME: &'static str = "season";
    const EXPECTED: &'static str = "string";
}

impl Argument<Season> for Season {
    fn into_arg(self) -> Result<Season> {
        Ok(self)
    }
}

impl Argument<Season> for &Season {
    fn into_arg(self) -> Result<Season> {
        Ok(self.clone())
    }
}

impl Argument<Season> for &str {
    fn is_present(&self) -> bool {
        !self.is_empty()
    }

    fn into_arg(self) -> Result<Season> {
        self.parse()
    }
}

string_argument!(Season);

impl Argument<Season> for &Value {
    fn is_present(&self) -> bool {
        value_is_present(self)
    }

    fn into_arg(self) -> Result<Season> {
        match self {
            Value::String(s) => s.parse(),
            _ => Err(StatsError::invalid_type(Season::NAME, Season::EXPECTED)),
        }
    }
}

owned_value_argument!(Season);

/// Lower bound for the player change feed. Never later than "now".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UpdatedSince(DateTime<Utc>);

impl UpdatedSince {
    /// Accept `at` if it is not later than `now`.
    pub fn at(at: DateTime<Utc>, now: DateTime<Utc>) -> Result<Self> {
        if at > now {
            return Err(StatsError::invalid_value(Self::NAME, "must be in the past"));
        }
        Ok(Self(at))
    }

    pub fn as_datetime(&self) -> DateTime<Utc> {
        self.0
    }

    /// ISO-8601 with millisecond precision and a `Z` suffix, as the API expects.
    pub fn to_query(&self) -> String {
        self.0.to_rfc3339_opts(SecondsFormat::Millis, true)
    }
}

impl fmt::Display for UpdatedSince {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_query())
    }
}

impl Param for UpdatedSince {
    const NAME: &'static str = "updatedSince";
    const EXPECTED: &'static str = "date";

    fn absent() -> StatsError {
        StatsError::missing(Self::NAME)
    }
}

impl Argument<UpdatedSince> for UpdatedSince {
    fn into_arg(self) -> Result<UpdatedSince> {
        UpdatedSince::at(self.0, Utc::now())
    }
}

impl Argument<UpdatedSince> for DateTime<Utc> {
    fn into_arg(self) -> Result<UpdatedSince> {
        UpdatedSince::at(self, Utc::now())
    }
}

impl Argument<UpdatedSince> for &DateTime<Utc> {
    fn into_arg(self) -> Result<UpdatedSince> {
        UpdatedSince::at(*self, Utc::now())
    }
}

impl Argument<UpdatedSince> for &Value {
    fn is_present(&self) -> bool {
        value_is_present(self)
    }

    fn into_arg(self) -> Result<UpdatedSince> {
        let parsed = match self {
            Value::String(s) => DateTime::parse_from_rfc3339(s).ok(),
            _ => None,
        };
        match parsed {
            Some(at) => UpdatedSince::at(at.with_timezone(&Utc), Utc::now()),
            None => Err(StatsError::invalid_type(UpdatedSince::NAME, UpdatedSince::EXPECTED)),
        }
    }
}

owned_value_argument!(UpdatedSince);
