//! Validated argument types for MLB Stats API operations.
//!
//! Every operation on [`crate::PlayerManager`] accepts `impl Argument<T>` so
//! callers can pass either the typed value or loosely typed input (strings,
//! `serde_json::Value`, `Option`). Conversion runs the type and domain checks
//! before any request is built.

pub mod argument;
pub mod group;
pub mod ids;
pub mod time;

pub use argument::{Argument, Keyword, Param};
pub use group::StatGroup;
pub use ids::{GamePk, PlayerId};
pub use time::{Season, UpdatedSince};

#[cfg(test)]
mod tests;
