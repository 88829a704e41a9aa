//! Typed views over MLB Stats API payloads.
//!
//! Operations on [`crate::PlayerManager`] return the raw `serde_json::Value`
//! found at their key path. These shapes are an opt-in way to read those
//! values: every documented field is optional, and anything not listed is
//! kept in `extra`, so decoding never drops or invents data.

use crate::error::Result;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::{Map, Value};

/// Decode a value returned by a manager operation into one of the record shapes.
///
/// ```rust
/// use mlb_stats::records::{decode, PlayerInfo};
/// use serde_json::json;
///
/// let info: PlayerInfo = decode(json!({ "id": 660271, "fullName": "Shohei Ohtani" })).unwrap();
/// assert_eq!(info.full_name.as_deref(), Some("Shohei Ohtani"));
/// ```
pub fn decode<T: DeserializeOwned>(value: Value) -> Result<T> {
    Ok(serde_json::from_value(value)?)
}

/// `{ id, name, link }` reference used for teams, leagues and sports.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ShortInfo {
    pub id: Option<u64>,
    pub name: Option<String>,
    pub link: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortPlayerInfo {
    pub id: Option<u64>,
    pub full_name: Option<String>,
    pub link: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct PositionInfo {
    /// `"1"`..`"9"` or `"X"`.
    pub code: Option<String>,
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub position_type: Option<String>,
    pub abbreviation: Option<String>,
}

/// Bat side or pitch hand: code `L`, `R` or `S`.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct HandInfo {
    pub code: Option<String>,
    pub description: Option<String>,
}

/// Biographical record from `people/{id}` and `sports/1/players`.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerInfo {
    pub id: Option<u64>,
    pub full_name: Option<String>,
    pub link: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub primary_number: Option<String>,
    pub birth_date: Option<String>,
    pub current_age: Option<u32>,
    pub birth_city: Option<String>,
    pub birth_state_province: Option<String>,
    pub birth_country: Option<String>,
    pub height: Option<String>,
    pub weight: Option<u32>,
    pub active: Option<bool>,
    pub current_team: Option<ShortInfo>,
    pub primary_position: Option<PositionInfo>,
    pub use_name: Option<String>,
    pub draft_year: Option<u32>,
    pub mlb_debut_date: Option<String>,
    pub bat_side: Option<HandInfo>,
    pub pitch_hand: Option<HandInfo>,
    pub name_slug: Option<String>,
    pub strike_zone_top: Option<f64>,
    pub strike_zone_bottom: Option<f64>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayName {
    pub display_name: Option<String>,
}

/// One entry of a `stats` list: a type/group pair and its splits.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct StatsEntry {
    #[serde(rename = "type")]
    pub stats_type: Option<DisplayName>,
    pub group: Option<DisplayName>,
    #[serde(default)]
    pub splits: Vec<StatSplit>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A single split. `stat` holds the group-specific counters as-is.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatSplit {
    pub season: Option<String>,
    #[serde(default)]
    pub stat: Map<String, Value>,
    pub team: Option<ShortInfo>,
    pub player: Option<ShortPlayerInfo>,
    pub league: Option<ShortInfo>,
    pub sport: Option<ShortInfo>,
    /// `R`, `S`, `E`, `A`, `D`, `F`, `L` or `W`.
    pub game_type: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Entry of the `freeAgents` list.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FreeAgent {
    pub player: Option<ShortPlayerInfo>,
    pub original_team: Option<ShortInfo>,
    pub new_team: Option<ShortInfo>,
    pub notes: Option<String>,
    pub date_signed: Option<String>,
    pub date_declared: Option<String>,
    pub position: Option<PositionInfo>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
