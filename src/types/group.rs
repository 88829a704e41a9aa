//! Statistic groups.

use super::argument::{owned_value_argument, string_argument, value_is_present, Argument, Param};
use crate::error::{Result, StatsError};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

/// The `group` selector of a stats hydration. Passed as the `type` parameter.
///
/// # Examples
///
/// ```rust
/// use mlb_stats::StatGroup;
///
/// let group: StatGroup = "pitching".parse().unwrap();
/// assert_eq!(group, StatGroup::Pitching);
/// assert!("batting".parse::<StatGroup>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatGroup {
    Hitting,
    Pitching,
    Fielding,
}

impl StatGroup {
    pub const ALL: [StatGroup; 3] = [StatGroup::Hitting, StatGroup::Pitching, StatGroup::Fielding];

    pub fn as_str(&self) -> &'static str {
        match self {
            StatGroup::Hitting => "hitting",
            StatGroup::Pitching => "pitching",
            StatGroup::Fielding => "fielding",
        }
    }
}

impl fmt::Display for StatGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StatGroup {
    type Err = StatsError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "hitting" => Ok(StatGroup::Hitting),
            "pitching" => Ok(StatGroup::Pitching),
            "fielding" => Ok(StatGroup::Fielding),
            _ => Err(StatsError::invalid_value(
                Self::NAME,
                "must be either hitting, pitching or fielding",
            )),
        }
    }
}

impl Param for StatGroup {
    const NAME: &'static str = "type";
    const EXPECTED: &'static str = "string";

    fn absent() -> StatsError {
        StatsError::missing(Self::NAME)
    }
}

impl Argument<StatGroup> for StatGroup {
    fn into_arg(self) -> Result<StatGroup> {
        Ok(self)
    }
}

impl Argument<StatGroup> for &str {
    fn is_present(&self) -> bool {
        !self.is_empty()
    }

    fn into_arg(self) -> Result<StatGroup> {
        if self.is_empty() {
            return Err(StatsError::missing(StatGroup::NAME));
        }
        self.parse()
    }
}

string_argument!(StatGroup);

impl Argument<StatGroup> for &Value {
    fn is_present(&self) -> bool {
        value_is_present(self)
    }

    fn into_arg(self) -> Result<StatGroup> {
        match self {
            Value::String(s) => <&str as Argument<StatGroup>>::into_arg(s.as_str()),
            _ => Err(StatsError::invalid_type(StatGroup::NAME, StatGroup::EXPECTED)),
        }
    }
}

owned_value_argument!(StatGroup);
