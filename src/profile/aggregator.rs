//! The profile load pipeline.
//!
//! One load chains the dependent fetches for a player in order: identity →
//! summoner → ranked‖mastery → match ids → match details. Identity, summoner
//! and match-id failures terminate the load; ranked, mastery and individual
//! match details are best-effort and only mark the error slot. Whatever was
//! populated before a failure stays populated.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::error::ApiResult;
use crate::model::{MatchId, RankedQueue};
use crate::profile::registry::ProfileRegistry;
use crate::profile::state::{LoadPhase, MatchSlot, PlayerProfile};
use crate::report::ErrorReport;
use crate::riot::traits::LolApi;

pub struct ProfileAggregator {
    api: Arc<dyn LolApi>,
    registry: Arc<ProfileRegistry>,
    match_history_count: u32,
}

impl ProfileAggregator {
    pub fn new(api: Arc<dyn LolApi>, registry: Arc<ProfileRegistry>, match_history_count: u32) -> Self {
        Self {
            api,
            registry,
            match_history_count,
        }
    }

    /// Run the full pipeline for one riot id.
    ///
    /// Returns the registry handle for the player as soon as the identity
    /// resolves, even when a later step fails; before that point there is no
    /// profile to hand back and the error is the only result.
    pub async fn load(
        &self,
        game_name: &str,
        tag_line: &str,
    ) -> Result<Arc<PlayerProfile>, ErrorReport> {
        info!(game_name, tag_line, "starting profile load");

        let player_id = self
            .api
            .resolve_player_id(game_name, tag_line)
            .await
            .map_err(|e| {
                warn!(game_name, tag_line, error = %e, "identity resolution failed");
                ErrorReport::from(&e)
            })?;

        let profile = self.registry.get_or_create(&player_id);
        profile.update(|s| {
            s.last_error = None;
            s.game_name = Some(game_name.to_string());
            s.tag_line = Some(tag_line.to_string());
            s.phase = LoadPhase::LoadingSummary;
        });

        if let Err(e) = self.run_pipeline(&profile).await {
            let report = ErrorReport::from(&e);
            warn!(player_id = %profile.id(), error = %e, "profile load terminated early");
            profile.update(|s| {
                s.phase = LoadPhase::Failed(report.kind);
                s.last_error = Some(report);
            });
        }

        Ok(profile)
    }

    /// Everything after identity resolution. An `Err` here is a
    /// pipeline-terminating failure; best-effort steps handle their own.
    async fn run_pipeline(&self, profile: &Arc<PlayerProfile>) -> ApiResult<()> {
        let player_id = profile.id().clone();

        let summary = self.api.get_summoner(&player_id).await?;
        let summoner_id = summary.summoner_id.clone();
        profile.update(|s| {
            s.summary = Some(summary);
            s.phase = LoadPhase::LoadingRankedAndMastery;
        });

        // Independent of each other, so fetched concurrently. Both are
        // best-effort: a failure leaves the field empty and the load going.
        let (ranked, mastery) = tokio::join!(
            self.api.get_ranked_standings(&summoner_id),
            self.api.get_champion_masteries(&player_id),
        );

        match ranked {
            Ok(standings) => profile.update(|s| {
                for standing in standings {
                    match standing.queue {
                        RankedQueue::SoloDuo => s.ranked_solo = Some(standing),
                        RankedQueue::Flex => s.ranked_flex = Some(standing),
                    }
                }
            }),
            Err(e) => {
                warn!(player_id = %player_id, error = %e, "ranked standings fetch failed");
                profile.update(|s| s.last_error = Some(ErrorReport::from(&e)));
            }
        }

        match mastery {
            Ok(entries) => profile.update(|s| s.mastery = Some(entries)),
            Err(e) => {
                warn!(player_id = %player_id, error = %e, "champion mastery fetch failed");
                profile.update(|s| s.last_error = Some(ErrorReport::from(&e)));
            }
        }

        profile.update(|s| s.phase = LoadPhase::LoadingMatchIds);
        let match_ids = self
            .api
            .get_match_ids(&player_id, self.match_history_count)
            .await?;
        debug!(player_id = %player_id, count = match_ids.len(), "match ids fetched");
        profile.update(|s| {
            s.match_ids = match_ids.clone();
            s.phase = LoadPhase::LoadingMatchDetails;
        });

        // Strictly sequential on purpose: detail fetches are the bulk of the
        // request volume and issuing them one at a time keeps a profile load
        // inside the API rate budget. Each result is published immediately.
        for match_id in &match_ids {
            match self.api.get_match_detail(match_id).await {
                Ok(detail) => profile.update(|s| {
                    s.match_history
                        .insert(match_id.clone(), MatchSlot::Loaded(detail));
                }),
                Err(e) => {
                    warn!(match_id = %match_id, error = %e, "match detail fetch failed");
                    profile.update(|s| {
                        s.match_history.insert(match_id.clone(), MatchSlot::Failed);
                        s.last_error = Some(ErrorReport::from(&e));
                    });
                }
            }
        }

        profile.update(|s| s.phase = LoadPhase::Complete);
        info!(player_id = %player_id, "profile load complete");
        Ok(())
    }

    /// Re-fetch a single match and overwrite its history entry in place.
    ///
    /// Callable at any time and from concurrent tasks; for races on the same
    /// id the last write wins. A failed reload keeps the existing entry and
    /// only records the error.
    pub async fn reload_match(
        &self,
        profile: &Arc<PlayerProfile>,
        match_id: &MatchId,
    ) -> Result<(), ErrorReport> {
        debug!(player_id = %profile.id(), match_id = %match_id, "reloading match detail");

        match self.api.get_match_detail(match_id).await {
            Ok(detail) => {
                profile.update(|s| {
                    s.match_history
                        .insert(match_id.clone(), MatchSlot::Loaded(detail));
                });
                Ok(())
            }
            Err(e) => {
                warn!(match_id = %match_id, error = %e, "match reload failed");
                let report = ErrorReport::from(&e);
                profile.update(|s| s.last_error = Some(report.clone()));
                Err(report)
            }
        }
    }
}
