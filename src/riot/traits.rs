use async_trait::async_trait;

use crate::error::{ApiError, ApiResult};
use crate::model::{
    MasteryEntry, MatchDetail, MatchId, PlayerId, RankedStanding, SummonerSummary,
};
use crate::riot::client::RiotClient;

/// The full endpoint surface the profile aggregation needs, in dependency
/// order. Abstracted so the pipeline can run against an in-memory fake.
#[async_trait]
pub trait LolApi: Send + Sync {
    async fn resolve_player_id(&self, game_name: &str, tag_line: &str) -> ApiResult<PlayerId>;

    async fn get_summoner(&self, player_id: &PlayerId) -> ApiResult<SummonerSummary>;

    async fn get_ranked_standings(&self, summoner_id: &str) -> ApiResult<Vec<RankedStanding>>;

    async fn get_champion_masteries(&self, player_id: &PlayerId) -> ApiResult<Vec<MasteryEntry>>;

    async fn get_match_ids(&self, player_id: &PlayerId, count: u32) -> ApiResult<Vec<MatchId>>;

    async fn get_match_detail(&self, match_id: &str) -> ApiResult<MatchDetail>;
}

#[async_trait]
impl LolApi for RiotClient {
    async fn resolve_player_id(&self, game_name: &str, tag_line: &str) -> ApiResult<PlayerId> {
        let account = self.get_account_by_riot_id(game_name, tag_line).await?;

        // A 200 without a puuid is still an unresolved identity.
        account
            .puuid
            .filter(|p| !p.is_empty())
            .map(PlayerId)
            .ok_or_else(|| ApiError::PlayerNotFound {
                game_name: game_name.to_string(),
                tag_line: tag_line.to_string(),
            })
    }

    async fn get_summoner(&self, player_id: &PlayerId) -> ApiResult<SummonerSummary> {
        let dto = self.get_summoner_by_puuid(player_id.as_str()).await?;
        Ok(dto.into_summary(player_id.clone()))
    }

    async fn get_ranked_standings(&self, summoner_id: &str) -> ApiResult<Vec<RankedStanding>> {
        let entries = self.get_league_entries(summoner_id).await?;
        Ok(entries
            .into_iter()
            .filter_map(|e| e.into_standing())
            .collect())
    }

    async fn get_champion_masteries(&self, player_id: &PlayerId) -> ApiResult<Vec<MasteryEntry>> {
        let entries = RiotClient::get_champion_masteries(self, player_id.as_str()).await?;
        Ok(entries.into_iter().map(Into::into).collect())
    }

    async fn get_match_ids(&self, player_id: &PlayerId, count: u32) -> ApiResult<Vec<MatchId>> {
        RiotClient::get_match_ids(self, player_id.as_str(), count).await
    }

    async fn get_match_detail(&self, match_id: &str) -> ApiResult<MatchDetail> {
        let dto = self.get_match(match_id).await?;
        Ok(dto.into_detail(match_id))
    }
}
