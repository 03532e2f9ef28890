use tracing::debug;

use crate::error::ApiResult;
use crate::riot::client::RiotClient;
use crate::riot::types::SummonerDto;

impl RiotClient {
    /// Get summoner (level, profile icon, encrypted id) by PUUID.
    /// Uses platform routing (na1, euw1, kr, ...).
    pub async fn get_summoner_by_puuid(&self, puuid: &str) -> ApiResult<SummonerDto> {
        debug!(puuid, "fetching summoner");

        let url = format!(
            "{}/lol/summoner/v4/summoners/by-puuid/{}",
            self.platform_base(),
            puuid
        );

        self.get(&url).await
    }
}
