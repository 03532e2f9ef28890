//! Match entities and the per-participant derived statistics.

/// Opaque match identifier (e.g. `NA1_5112233445`).
///
/// Sorting these lexically happens to approximate recency but is not a
/// guarantee; recency should come from [`MatchDetail::game_creation`] where
/// present, falling back to the server-returned id order.
pub type MatchId = String;

/// Full stat record of one completed game. Immutable once fetched.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchDetail {
    pub match_id: MatchId,
    /// Unix millis at game creation, 0 when the API omits it.
    pub game_creation: i64,
    /// Game duration in seconds.
    pub game_duration: i64,
    pub queue_id: i64,
    pub participants: Vec<ParticipantStats>,
    pub teams: Vec<TeamResult>,
}

impl MatchDetail {
    pub fn participant(&self, puuid: &str) -> Option<&ParticipantStats> {
        self.participants.iter().find(|p| p.puuid == puuid)
    }

    pub fn duration_formatted(&self) -> String {
        let minutes = self.game_duration / 60;
        let seconds = self.game_duration % 60;
        format!("{}:{:02}", minutes, seconds)
    }

    pub fn queue_name(&self) -> &'static str {
        match self.queue_id {
            400 => "Normal Draft",
            420 => "Ranked Solo/Duo",
            430 => "Normal Blind",
            440 => "Ranked Flex",
            450 => "ARAM",
            490 => "Quickplay",
            _ => "Other",
        }
    }
}

/// One player's performance within a match. Read-only; the stat helpers are
/// derived on demand, never stored.
#[derive(Debug, Clone, PartialEq)]
pub struct ParticipantStats {
    pub puuid: String,
    pub riot_id_game_name: String,
    pub riot_id_tagline: String,
    pub champion_id: i64,
    pub champion_name: String,
    pub champion_level: i64,
    pub team_id: i64,
    pub team_position: String,
    pub win: bool,
    pub kills: i64,
    pub deaths: i64,
    pub assists: i64,
    pub total_damage_dealt_to_champions: i64,
    pub total_damage_taken: i64,
    pub total_minions_killed: i64,
    pub neutral_minions_killed: i64,
    pub gold_earned: i64,
    pub vision_score: i64,
    /// Item slots 0-5 plus trinket.
    pub items: [i64; 7],
    /// Keystone rune id, when the perks block was present.
    pub primary_rune: Option<i64>,
}

impl ParticipantStats {
    pub fn cs_total(&self) -> i64 {
        self.total_minions_killed + self.neutral_minions_killed
    }

    pub fn cs_per_minute(&self, game_duration_secs: i64) -> f64 {
        if game_duration_secs == 0 {
            return 0.0;
        }
        let minutes = game_duration_secs as f64 / 60.0;
        (self.cs_total() as f64 / minutes * 100.0).round() / 100.0
    }

    pub fn kda_ratio(&self) -> f64 {
        if self.deaths == 0 {
            (self.kills + self.assists) as f64
        } else {
            (self.kills + self.assists) as f64 / self.deaths as f64
        }
    }

    pub fn gold_formatted(&self) -> String {
        if self.gold_earned >= 1_000 {
            format!("{:.1}k", self.gold_earned as f64 / 1_000.0)
        } else {
            self.gold_earned.to_string()
        }
    }

    pub fn position_display(&self) -> &'static str {
        match self.team_position.as_str() {
            "TOP" => "Top",
            "JUNGLE" => "Jungle",
            "MIDDLE" => "Mid",
            "BOTTOM" => "ADC",
            "UTILITY" => "Support",
            _ => "",
        }
    }
}

/// Aggregate outcome of one side of a match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamResult {
    pub team_id: i64,
    pub win: bool,
    pub baron_kills: i64,
    pub dragon_kills: i64,
    pub tower_kills: i64,
}
