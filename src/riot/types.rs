//! Raw response shapes for the Riot endpoints we consume.
//!
//! The upstream schema is not contractually stable, so every field decodes
//! absent-safe: a missing or extra field must never fail a decode. The
//! conversions into [`crate::model`] entities apply the fallback values.

use serde::Deserialize;

use crate::model::{
    MasteryEntry, MatchDetail, ParticipantStats, PlayerId, RankedQueue, RankedStanding,
    SummonerSummary, TeamResult,
};

// ============================================================================
// Account-v1
// ============================================================================

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountDto {
    #[serde(default)]
    pub puuid: Option<String>,
    #[serde(default)]
    pub game_name: Option<String>,
    #[serde(default)]
    pub tag_line: Option<String>,
}

// ============================================================================
// Summoner-v4
// ============================================================================

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummonerDto {
    #[serde(default)]
    pub puuid: Option<String>,
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub profile_icon_id: Option<i64>,
    #[serde(default)]
    pub summoner_level: Option<i64>,
}

impl SummonerDto {
    pub fn into_summary(self, player_id: PlayerId) -> SummonerSummary {
        SummonerSummary {
            player_id,
            summoner_id: self.id.unwrap_or_default(),
            profile_icon_id: self.profile_icon_id.unwrap_or_default(),
            level: self.summoner_level.unwrap_or_default(),
        }
    }
}

// ============================================================================
// League-v4
// ============================================================================

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeagueEntryDto {
    #[serde(default)]
    pub queue_type: Option<String>,
    #[serde(default)]
    pub tier: Option<String>,
    #[serde(default)]
    pub rank: Option<String>,
    #[serde(default)]
    pub league_points: Option<i64>,
    #[serde(default)]
    pub wins: Option<i64>,
    #[serde(default)]
    pub losses: Option<i64>,
}

impl LeagueEntryDto {
    /// Standing for one of the two surfaced queues; `None` for everything
    /// else upstream may return.
    pub fn into_standing(self) -> Option<RankedStanding> {
        let queue = RankedQueue::from_api_name(self.queue_type.as_deref().unwrap_or_default())?;

        Some(RankedStanding {
            queue,
            tier: self.tier.unwrap_or_default(),
            division: self.rank.unwrap_or_default(),
            league_points: self.league_points.unwrap_or_default(),
            wins: self.wins.unwrap_or_default(),
            losses: self.losses.unwrap_or_default(),
        })
    }
}

// ============================================================================
// Champion-Mastery-v4
// ============================================================================

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChampionMasteryDto {
    #[serde(default)]
    pub champion_id: Option<i64>,
    #[serde(default)]
    pub champion_level: Option<i64>,
    #[serde(default)]
    pub champion_points: Option<i64>,
}

impl From<ChampionMasteryDto> for MasteryEntry {
    fn from(value: ChampionMasteryDto) -> Self {
        Self {
            champion_id: value.champion_id.unwrap_or_default(),
            champion_level: value.champion_level.unwrap_or_default(),
            champion_points: value.champion_points.unwrap_or_default(),
        }
    }
}

// ============================================================================
// Match-v5
// ============================================================================

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchDto {
    #[serde(default)]
    pub metadata: Option<MetadataDto>,
    #[serde(default)]
    pub info: Option<InfoDto>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetadataDto {
    #[serde(default)]
    pub match_id: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InfoDto {
    #[serde(default)]
    pub game_creation: Option<i64>,
    #[serde(default)]
    pub game_duration: Option<i64>,
    #[serde(default)]
    pub queue_id: Option<i64>,
    #[serde(default)]
    pub participants: Vec<ParticipantDto>,
    #[serde(default)]
    pub teams: Vec<TeamDto>,
}

impl MatchDto {
    /// Assemble the immutable match entity. `fallback_id` covers responses
    /// whose metadata block is missing the match id.
    pub fn into_detail(self, fallback_id: &str) -> MatchDetail {
        let match_id = self
            .metadata
            .and_then(|m| m.match_id)
            .unwrap_or_else(|| fallback_id.to_string());
        let info = self.info.unwrap_or_default();

        MatchDetail {
            match_id,
            game_creation: info.game_creation.unwrap_or_default(),
            game_duration: info.game_duration.unwrap_or_default(),
            queue_id: info.queue_id.unwrap_or_default(),
            participants: info.participants.into_iter().map(Into::into).collect(),
            teams: info.teams.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParticipantDto {
    #[serde(default)]
    pub puuid: Option<String>,
    #[serde(default)]
    pub riot_id_game_name: Option<String>,
    #[serde(default)]
    pub riot_id_tagline: Option<String>,
    #[serde(default)]
    pub champion_id: Option<i64>,
    #[serde(default)]
    pub champion_name: Option<String>,
    #[serde(default)]
    pub champ_level: Option<i64>,
    #[serde(default)]
    pub team_id: Option<i64>,
    #[serde(default)]
    pub team_position: Option<String>,
    #[serde(default)]
    pub win: Option<bool>,
    #[serde(default)]
    pub kills: Option<i64>,
    #[serde(default)]
    pub deaths: Option<i64>,
    #[serde(default)]
    pub assists: Option<i64>,
    #[serde(default)]
    pub total_damage_dealt_to_champions: Option<i64>,
    #[serde(default)]
    pub total_damage_taken: Option<i64>,
    #[serde(default)]
    pub total_minions_killed: Option<i64>,
    #[serde(default)]
    pub neutral_minions_killed: Option<i64>,
    #[serde(default)]
    pub gold_earned: Option<i64>,
    #[serde(default)]
    pub vision_score: Option<i64>,
    #[serde(default)]
    pub item0: Option<i64>,
    #[serde(default)]
    pub item1: Option<i64>,
    #[serde(default)]
    pub item2: Option<i64>,
    #[serde(default)]
    pub item3: Option<i64>,
    #[serde(default)]
    pub item4: Option<i64>,
    #[serde(default)]
    pub item5: Option<i64>,
    #[serde(default)]
    pub item6: Option<i64>,
    #[serde(default)]
    pub perks: Option<PerksDto>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerksDto {
    #[serde(default)]
    pub styles: Vec<PerkStyleDto>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerkStyleDto {
    #[serde(default)]
    pub selections: Vec<PerkSelectionDto>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerkSelectionDto {
    #[serde(default)]
    pub perk: Option<i64>,
}

impl ParticipantDto {
    /// Keystone rune: first selection of the first (primary) style.
    fn primary_rune(&self) -> Option<i64> {
        self.perks
            .as_ref()?
            .styles
            .first()?
            .selections
            .first()?
            .perk
    }
}

impl From<ParticipantDto> for ParticipantStats {
    fn from(value: ParticipantDto) -> Self {
        let primary_rune = value.primary_rune();
        Self {
            puuid: value.puuid.unwrap_or_default(),
            riot_id_game_name: value.riot_id_game_name.unwrap_or_default(),
            riot_id_tagline: value.riot_id_tagline.unwrap_or_default(),
            champion_id: value.champion_id.unwrap_or_default(),
            champion_name: value.champion_name.unwrap_or_default(),
            champion_level: value.champ_level.unwrap_or_default(),
            team_id: value.team_id.unwrap_or_default(),
            team_position: value.team_position.unwrap_or_default(),
            win: value.win.unwrap_or_default(),
            kills: value.kills.unwrap_or_default(),
            deaths: value.deaths.unwrap_or_default(),
            assists: value.assists.unwrap_or_default(),
            total_damage_dealt_to_champions: value
                .total_damage_dealt_to_champions
                .unwrap_or_default(),
            total_damage_taken: value.total_damage_taken.unwrap_or_default(),
            total_minions_killed: value.total_minions_killed.unwrap_or_default(),
            neutral_minions_killed: value.neutral_minions_killed.unwrap_or_default(),
            gold_earned: value.gold_earned.unwrap_or_default(),
            vision_score: value.vision_score.unwrap_or_default(),
            items: [
                value.item0.unwrap_or_default(),
                value.item1.unwrap_or_default(),
                value.item2.unwrap_or_default(),
                value.item3.unwrap_or_default(),
                value.item4.unwrap_or_default(),
                value.item5.unwrap_or_default(),
                value.item6.unwrap_or_default(),
            ],
            primary_rune,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamDto {
    #[serde(default)]
    pub team_id: Option<i64>,
    #[serde(default)]
    pub win: Option<bool>,
    #[serde(default)]
    pub objectives: Option<ObjectivesDto>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObjectivesDto {
    #[serde(default)]
    pub baron: Option<ObjectiveDto>,
    #[serde(default)]
    pub dragon: Option<ObjectiveDto>,
    #[serde(default)]
    pub tower: Option<ObjectiveDto>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObjectiveDto {
    #[serde(default)]
    pub kills: Option<i64>,
}

impl From<TeamDto> for TeamResult {
    fn from(value: TeamDto) -> Self {
        let objectives = value.objectives.unwrap_or_default();
        let kills_of = |o: &Option<ObjectiveDto>| {
            o.as_ref().and_then(|o| o.kills).unwrap_or_default()
        };
        Self {
            team_id: value.team_id.unwrap_or_default(),
            win: value.win.unwrap_or_default(),
            baron_kills: kills_of(&objectives.baron),
            dragon_kills: kills_of(&objectives.dragon),
            tower_kills: kills_of(&objectives.tower),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn account_decodes_with_missing_fields() {
        let account: AccountDto = serde_json::from_str(r#"{"puuid": "abc"}"#).unwrap();
        assert_eq!(account.puuid.as_deref(), Some("abc"));
        assert_eq!(account.game_name, None);
    }

    #[test]
    fn summoner_summary_applies_fallbacks() {
        let dto: SummonerDto = serde_json::from_str(r#"{"profileIconId": 512}"#).unwrap();
        let summary = dto.into_summary(PlayerId("p".into()));

        assert_eq!(summary.profile_icon_id, 512);
        assert_eq!(summary.summoner_id, "");
        assert_eq!(summary.level, 0);
    }

    #[test]
    fn unranked_queue_entries_are_discarded() {
        let entry: LeagueEntryDto =
            serde_json::from_str(r#"{"queueType": "CHERRY", "leaguePoints": 10}"#).unwrap();
        assert!(entry.into_standing().is_none());

        let entry: LeagueEntryDto = serde_json::from_str(
            r#"{"queueType": "RANKED_SOLO_5x5", "tier": "GOLD", "rank": "II", "leaguePoints": 55, "wins": 10, "losses": 5}"#,
        )
        .unwrap();
        let standing = entry.into_standing().unwrap();
        assert_eq!(standing.queue, RankedQueue::SoloDuo);
        assert_eq!(standing.league_points, 55);
    }

    #[test]
    fn empty_match_payload_still_produces_a_detail() {
        let dto: MatchDto = serde_json::from_str("{}").unwrap();
        let detail = dto.into_detail("NA1_42");

        assert_eq!(detail.match_id, "NA1_42");
        assert_eq!(detail.game_duration, 0);
        assert!(detail.participants.is_empty());
    }

    #[test]
    fn participant_extracts_primary_rune() {
        let json = r#"{
            "puuid": "p1",
            "championName": "Ahri",
            "kills": 3,
            "perks": {"styles": [{"selections": [{"perk": 8112}, {"perk": 8126}]}]}
        }"#;
        let dto: ParticipantDto = serde_json::from_str(json).unwrap();
        let stats: ParticipantStats = dto.into();

        assert_eq!(stats.primary_rune, Some(8112));
        assert_eq!(stats.champion_name, "Ahri");
        assert_eq!(stats.deaths, 0);
    }

    #[test]
    fn team_objectives_default_to_zero() {
        let dto: TeamDto =
            serde_json::from_str(r#"{"teamId": 100, "win": true, "objectives": {"baron": {"kills": 2}}}"#)
                .unwrap();
        let team: TeamResult = dto.into();

        assert_eq!(team.baron_kills, 2);
        assert_eq!(team.dragon_kills, 0);
        assert!(team.win);
    }
}
