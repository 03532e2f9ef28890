use tracing::debug;

use crate::error::ApiResult;
use crate::riot::client::RiotClient;
use crate::riot::types::MatchDto;

impl RiotClient {
    /// Get the most recent match ids by PUUID, newest first
    /// (server-determined order). Uses regional routing.
    pub async fn get_match_ids(&self, puuid: &str, count: u32) -> ApiResult<Vec<String>> {
        debug!(puuid, count, "fetching match ids");

        let url = format!(
            "{}/lol/match/v5/matches/by-puuid/{}/ids?start=0&count={}",
            self.regional_base(),
            puuid,
            count
        );

        self.get(&url).await
    }

    /// Get full match details by match id. Uses regional routing.
    pub async fn get_match(&self, match_id: &str) -> ApiResult<MatchDto> {
        debug!(match_id, "fetching match");

        let url = format!("{}/lol/match/v5/matches/{}", self.regional_base(), match_id);

        self.get(&url).await
    }
}
