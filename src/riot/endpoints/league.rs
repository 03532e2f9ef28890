use tracing::debug;

use crate::error::ApiResult;
use crate::riot::client::RiotClient;
use crate::riot::types::LeagueEntryDto;

impl RiotClient {
    /// Get league entries (ranked standings) by encrypted summoner id.
    /// Uses platform routing (na1, euw1, kr, ...).
    pub async fn get_league_entries(&self, summoner_id: &str) -> ApiResult<Vec<LeagueEntryDto>> {
        debug!(summoner_id, "fetching league entries");

        let url = format!(
            "{}/lol/league/v4/entries/by-summoner/{}",
            self.platform_base(),
            summoner_id
        );

        self.get(&url).await
    }
}
