//! Player operations against the MLB Stats API.
//!
//! Every operation follows the same contract:
//!
//! 1. validate arguments, in order, before anything touches the network
//! 2. format the path against the shared [`TransportHandle`]
//! 3. issue exactly one GET (`game_stats` first confirms the player exists)
//! 4. translate a transport failure into an operation-specific error
//! 5. reject a response missing the expected top-level field
//! 6. return the value at the key path unchanged

use crate::api::TransportHandle;
use crate::config::ClientConfig;
use crate::error::{Resource, Result, StatsError, TransportError};
use crate::filters::filter_by_keyword;
use crate::types::{Argument, GamePk, Keyword, Param, PlayerId, Season, StatGroup, UpdatedSince};
use serde_json::Value;


/// Manager for the `people` resource.
///
/// Holds the transport handle by composition. Cloning is cheap and clones
/// share the same transport.
///
/// ```rust,no_run
/// use mlb_stats::{ClientConfig, PlayerManager, StatGroup};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let players = PlayerManager::new(&ClientConfig::from_env()?)?;
/// let ohtani = players.search("ohtani").await?;
/// let stats = players.season_stats(660271u64, StatGroup::Pitching, "2023").await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct PlayerManager {
    handle: TransportHandle,
    default_season: Season,
}

impl PlayerManager {
    /// Manager over an HTTP transport built from `config`.
    pub fn new(config: &ClientConfig) -> std::result::Result<Self, TransportError> {
        Ok(Self::with_handle(
            TransportHandle::from_config(config)?,
            config.default_season.clone(),
        ))
    }

    pub fn with_handle(handle: TransportHandle, default_season: Season) -> Self {
        Self {
            handle,
            default_season,
        }
    }

    pub fn handle(&self) -> &TransportHandle {
        &self.handle
    }

    /// Season used by [`Self::default_season_stats`] and [`Self::default_free_agents`].
    pub fn default_season(&self) -> &Season {
        &self.default_season
    }

    /// Players whose top-level fields contain `keyword`, case-insensitively.
    ///
    /// Filters the full `sports/1/players` list client-side. Any field can
    /// match, including ids and links.
    pub async fn search<K: Argument<Keyword>>(&self, keyword: K) -> Result<Vec<Value>> {
        let keyword = keyword.into_arg()?;

        let body = self
            .fetch("sports/1/players", "search", || {
                StatsError::not_found(Resource::Players, "Cannot fetch the list of players")
            })
            .await?;

        let people = body
            .get("people")
            .and_then(Value::as_array)
            .ok_or_else(|| StatsError::no_data(Resource::Players, "The list of players is empty"))?;

        let found: Vec<Value> = filter_by_keyword(people, keyword.as_str())
            .into_iter()
            .cloned()
            .collect();
        tracing::trace!(%keyword, matches = found.len(), "search complete");
        Ok(found)
    }

    /// Biographical record of the player with `id` (`people[0]`).
    pub async fn get<I: Argument<PlayerId>>(&self, id: I) -> Result<Value> {
        let id = id.into_arg()?;

        let body = self
            .fetch(&format!("people/{id}"), "get", || player_not_found(id))
            .await?;
        first_person(body, id)
    }

    /// Stats of one group for one season (`people[0].stats`).
    ///
    /// An omitted season (`None`) falls back to the configured default.
    pub async fn season_stats<I, G, S>(&self, id: I, group: G, season: S) -> Result<Value>
    where
        I: Argument<PlayerId>,
        G: Argument<StatGroup>,
        S: Argument<Season>,
    {
        if !group.is_present() {
            return Err(StatsError::missing(StatGroup::NAME));
        }
        let id = id.into_arg()?;
        let group = group.into_arg()?;
        let season = self.season_or_default(season)?;

        let hydrate = format!("stats(group=[{group}],type=[season],season={season})");
        self.hydrated_stats(id, &hydrate, "season_stats", || {
            format!("The player has no {group} stats in the season {season}")
        })
        .await
    }

    /// [`Self::season_stats`] for the configured default season.
    pub async fn default_season_stats<I, G>(&self, id: I, group: G) -> Result<Value>
    where
        I: Argument<PlayerId>,
        G: Argument<StatGroup>,
    {
        self.season_stats(id, group, &self.default_season).await
    }

    /// Career stats of one group (`people[0].stats`).
    pub async fn career_stats<I, G>(&self, id: I, group: G) -> Result<Value>
    where
        I: Argument<PlayerId>,
        G: Argument<StatGroup>,
    {
        if !group.is_present() {
            return Err(StatsError::missing(StatGroup::NAME));
        }
        let id = id.into_arg()?;
        let group = group.into_arg()?;

        let hydrate = format!("stats(group=[{group}],type=[career])");
        self.hydrated_stats(id, &hydrate, "career_stats", || {
            format!("The player has no {group} career stats")
        })
        .await
    }

    /// Stats of the player in a single game (`stats`).
    ///
    /// The player is looked up first, so an unknown id fails with
    /// `PLAYER_NOT_FOUND` rather than an empty game result. Fails with
    /// `NoDataAvailable` unless at least one entry has a non-empty `splits`.
    pub async fn game_stats<I, P>(&self, id: I, game_pk: P) -> Result<Value>
    where
        I: Argument<PlayerId>,
        P: Argument<GamePk>,
    {
        let id = id.into_arg()?;
        let game_pk = game_pk.into_arg()?;

        self.get(id).await?;

        let body = self
            .fetch(&format!("people/{id}/stats/game/{game_pk}"), "game_stats", || {
                StatsError::not_found(
                    Resource::GameStats,
                    format!("Cannot find the game stats of the player with the id {id} in the game with the gamePk {game_pk}"),
                )
            })
            .await?;

        let stats = match take_field(body, "stats") {
            Some(Value::Array(stats)) if !stats.is_empty() => stats,
            _ => {
                return Err(StatsError::no_data(
                    Resource::GameStats,
                    format!("The player has no game stats in the game with the gamePk {game_pk}"),
                ))
            }
        };

        if !stats.iter().any(has_splits) {
            return Err(StatsError::no_data(
                Resource::GameStats,
                format!("The player with the id {id} has no game stats in the game with the gamePk {game_pk}"),
            ));
        }
        Ok(Value::Array(stats))
    }

    /// Free agents of a season (`freeAgents`).
    ///
    /// An omitted season (`None`) falls back to the configured default.
    pub async fn free_agents<S: Argument<Season>>(&self, season: S) -> Result<Value> {
        let season = self.season_or_default(season)?;

        let body = self
            .fetch(&format!("people/freeAgents?season={season}"), "free_agents", || {
                StatsError::not_found(
                    Resource::FreeAgents,
                    format!("Cannot find the free agents in the season {season}"),
                )
            })
            .await?;

        take_field(body, "freeAgents").ok_or_else(|| {
            StatsError::no_data(
                Resource::FreeAgents,
                format!("No free agents listed for the season {season}"),
            )
        })
    }

    /// [`Self::free_agents`] for the configured default season.
    pub async fn default_free_agents(&self) -> Result<Value> {
        self.free_agents(&self.default_season).await
    }

    /// Players whose records changed since `updated_since` (`people`).
    ///
    /// `updated_since` must not be later than the current time.
    pub async fn changes<D: Argument<UpdatedSince>>(&self, updated_since: D) -> Result<Value> {
        if !updated_since.is_present() {
            return Err(StatsError::missing(UpdatedSince::NAME));
        }
        let since = updated_since.into_arg()?;

        let body = self
            .fetch(
                &format!("people/changes?updatedSince={}", since.to_query()),
                "changes",
                || {
                    StatsError::not_found(
                        Resource::Changes,
                        format!("Cannot find the changed players updated since {since}"),
                    )
                },
            )
            .await?;

        take_field(body, "people").ok_or_else(|| {
            StatsError::no_data(
                Resource::Changes,
                format!("No changed players listed since {since}"),
            )
        })
    }

    fn season_or_default<S: Argument<Season>>(&self, season: S) -> Result<Season> {
        if season.is_omitted() {
            return Ok(self.default_season.clone());
        }
        season.into_arg()
    }

    /// Dispatch `path` once, replacing any transport failure with `on_failure()`.
    async fn fetch<F>(&self, path: &str, operation: &'static str, on_failure: F) -> Result<Value>
    where
        F: FnOnce() -> StatsError,
    {
        self.handle.get(path).await.map_err(|err| {
            let translated = on_failure();
            tracing::debug!(operation, error = %err, code = %translated.code(), "request failed");
            translated
        })
    }

    async fn hydrated_stats<F>(
        &self,
        id: PlayerId,
        hydrate: &str,
        operation: &'static str,
        no_stats: F,
    ) -> Result<Value>
    where
        F: FnOnce() -> String,
    {
        let body = self
            .fetch(&format!("people/{id}?hydrate={hydrate}"), operation, || {
                player_not_found(id)
            })
            .await?;

        let person = first_person(body, id)?;
        take_field(person, "stats").ok_or_else(|| StatsError::no_data(Resource::Stats, no_stats()))
    }
}

fn player_not_found(id: PlayerId) -> StatsError {
    StatsError::not_found(
        Resource::Player,
        format!("Cannot find the player with the id {id}"),
    )
}

/// `people[0]` of a response body.
fn first_person(body: Value, id: PlayerId) -> Result<Value> {
    match take_field(body, "people") {
        Some(Value::Array(mut people)) if !people.is_empty() => Ok(people.swap_remove(0)),
        _ => Err(player_not_found(id)),
    }
}

/// Move `key` out of an object body. Absent and `null` are both `None`.
fn take_field(mut body: Value, key: &str) -> Option<Value> {
    body.as_object_mut()?.remove(key).filter(|v| !v.is_null())
}

fn has_splits(entry: &Value) -> bool {
    entry
        .get("splits")
        .and_then(Value::as_array)
        .is_some_and(|splits| !splits.is_empty())
}
