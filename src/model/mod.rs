//! Domain entities assembled from the raw API responses.
//!
//! The decode layer ([`crate::riot::types`]) keeps every upstream field
//! optional; the conversions here apply the explicit fallback values so the
//! rest of the crate works with plain data.

use serde::Deserialize;

pub mod lol_match;

pub use lol_match::{MatchDetail, MatchId, ParticipantStats, TeamResult};

/// Globally unique, rename-stable player identifier (puuid).
///
/// This is the only safe cache key for a player: game name and tag line can
/// change or collide in case, the puuid cannot.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(pub String);

impl PlayerId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for PlayerId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A player's progression record, one-to-one with a [`PlayerId`].
/// Replaced wholesale on re-fetch, never patched field by field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummonerSummary {
    pub player_id: PlayerId,
    /// Encrypted summoner id, needed for the league lookup.
    pub summoner_id: String,
    pub profile_icon_id: i64,
    pub level: i64,
}

/// The two ranked queues the profile surfaces. Anything else upstream
/// returns (arena, TFT leftovers, ...) is discarded during aggregation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RankedQueue {
    SoloDuo,
    Flex,
}

impl RankedQueue {
    pub fn api_name(&self) -> &'static str {
        match self {
            Self::SoloDuo => "RANKED_SOLO_5x5",
            Self::Flex => "RANKED_FLEX_SR",
        }
    }

    pub fn from_api_name(name: &str) -> Option<Self> {
        match name {
            "RANKED_SOLO_5x5" => Some(Self::SoloDuo),
            "RANKED_FLEX_SR" => Some(Self::Flex),
            _ => None,
        }
    }
}

/// Competitive placement for one ranked queue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedStanding {
    pub queue: RankedQueue,
    pub tier: String,
    pub division: String,
    pub league_points: i64,
    pub wins: i64,
    pub losses: i64,
}

impl RankedStanding {
    pub fn total_games(&self) -> i64 {
        self.wins + self.losses
    }

    pub fn win_rate(&self) -> f64 {
        if self.total_games() == 0 {
            0.0
        } else {
            self.wins as f64 / self.total_games() as f64 * 100.0
        }
    }
}

/// Cumulative proficiency with one champion. Unordered set per player,
/// champion id unique.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MasteryEntry {
    pub champion_id: i64,
    pub champion_level: i64,
    pub champion_points: i64,
}
