//! Observable per-player profile state.
//!
//! A [`PlayerProfile`] holds plain state behind a mutex plus a watch channel
//! carrying a revision counter. The aggregator mutates the state and bumps
//! the revision; a UI layer subscribes and re-reads a snapshot on every
//! change. The mutex is never held across an await point.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use tokio::sync::watch;

use crate::model::{
    MasteryEntry, MatchDetail, MatchId, PlayerId, RankedStanding, SummonerSummary,
};
use crate::report::{ErrorKind, ErrorReport};

/// Pipeline position of the latest load for one profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadPhase {
    #[default]
    Idle,
    ResolvingIdentity,
    LoadingSummary,
    LoadingRankedAndMastery,
    LoadingMatchIds,
    LoadingMatchDetails,
    Complete,
    /// Absorbing state; already-populated fields are kept as-is.
    Failed(ErrorKind),
}

impl LoadPhase {
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Complete | Self::Failed(_))
    }
}

/// Outcome of one match-detail fetch.
///
/// Absence from the history map means the id was never attempted, so the
/// three cases "not yet requested", "loaded" and "load failed" stay
/// distinguishable.
#[derive(Debug, Clone, PartialEq)]
pub enum MatchSlot {
    Loaded(MatchDetail),
    Failed,
}

impl MatchSlot {
    pub fn detail(&self) -> Option<&MatchDetail> {
        match self {
            Self::Loaded(detail) => Some(detail),
            Self::Failed => None,
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed)
    }
}

/// Snapshot of everything loaded for one player so far. Fields populate
/// progressively and independently; a failed sub-fetch never rolls back
/// fields that were already filled in.
#[derive(Debug, Clone, Default)]
pub struct ProfileState {
    pub phase: LoadPhase,
    pub game_name: Option<String>,
    pub tag_line: Option<String>,
    pub summary: Option<SummonerSummary>,
    pub ranked_solo: Option<RankedStanding>,
    pub ranked_flex: Option<RankedStanding>,
    /// `None` until the mastery fetch has succeeded at least once.
    pub mastery: Option<Vec<MasteryEntry>>,
    /// Match ids in server-returned (recency) order.
    pub match_ids: Vec<MatchId>,
    pub match_history: HashMap<MatchId, MatchSlot>,
    /// Current error of the latest aggregation session. Cleared when a new
    /// load starts, overwritten by each new failure.
    pub last_error: Option<ErrorReport>,
}

/// Aggregate root for one player, keyed by the rename-stable [`PlayerId`].
#[derive(Debug)]
pub struct PlayerProfile {
    id: PlayerId,
    state: Mutex<ProfileState>,
    changes: watch::Sender<u64>,
}

impl PlayerProfile {
    pub(crate) fn new(id: PlayerId) -> Arc<Self> {
        let (changes, _) = watch::channel(0);
        Arc::new(Self {
            id,
            state: Mutex::new(ProfileState::default()),
            changes,
        })
    }

    pub fn id(&self) -> &PlayerId {
        &self.id
    }

    /// Receiver yielding a new revision number after every state change.
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.changes.subscribe()
    }

    pub fn snapshot(&self) -> ProfileState {
        self.state.lock().expect("profile state poisoned").clone()
    }

    pub fn phase(&self) -> LoadPhase {
        self.state.lock().expect("profile state poisoned").phase
    }

    pub fn match_slot(&self, match_id: &str) -> Option<MatchSlot> {
        self.state
            .lock()
            .expect("profile state poisoned")
            .match_history
            .get(match_id)
            .cloned()
    }

    /// Mutate the state and notify subscribers.
    pub(crate) fn update<R>(&self, f: impl FnOnce(&mut ProfileState) -> R) -> R {
        let result = {
            let mut state = self.state.lock().expect("profile state poisoned");
            f(&mut state)
        };
        self.changes.send_modify(|revision| *revision += 1);
        result
    }
}
