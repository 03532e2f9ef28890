use tracing::debug;

use crate::error::ApiResult;
use crate::riot::client::RiotClient;
use crate::riot::types::ChampionMasteryDto;

impl RiotClient {
    /// Get all champion mastery entries by PUUID.
    /// Uses platform routing (na1, euw1, kr, ...).
    pub async fn get_champion_masteries(&self, puuid: &str) -> ApiResult<Vec<ChampionMasteryDto>> {
        debug!(puuid, "fetching champion masteries");

        let url = format!(
            "{}/lol/champion-mastery/v4/champion-masteries/by-puuid/{}",
            self.platform_base(),
            puuid
        );

        self.get(&url).await
    }
}
