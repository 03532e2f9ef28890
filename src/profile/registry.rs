use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use tracing::debug;

use crate::model::PlayerId;
use crate::profile::state::PlayerProfile;

/// Session-wide collection of every profile loaded so far, keyed by the
/// rename-stable [`PlayerId`].
///
/// At most one [`PlayerProfile`] instance exists per id: repeated navigation
/// to the same player hands back the existing (possibly in-flight, possibly
/// stale) handle instead of a fresh one. Append-only, no eviction; entries
/// live for the whole session.
#[derive(Debug, Default)]
pub struct ProfileRegistry {
    profiles: Mutex<HashMap<PlayerId, Arc<PlayerProfile>>>,
}

impl ProfileRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Existing handle for `id`, or a freshly created empty profile.
    pub fn get_or_create(&self, id: &PlayerId) -> Arc<PlayerProfile> {
        let mut profiles = self.profiles.lock().expect("registry poisoned");
        profiles
            .entry(id.clone())
            .or_insert_with(|| {
                debug!(player_id = %id, "registering new profile");
                PlayerProfile::new(id.clone())
            })
            .clone()
    }

    pub fn lookup(&self, id: &PlayerId) -> Option<Arc<PlayerProfile>> {
        self.profiles
            .lock()
            .expect("registry poisoned")
            .get(id)
            .cloned()
    }

    pub fn len(&self) -> usize {
        self.profiles.lock().expect("registry poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_or_create_returns_the_same_handle() {
        let registry = ProfileRegistry::new();
        let id = PlayerId("puuid-1".into());

        let first = registry.get_or_create(&id);
        let second = registry.get_or_create(&id);

        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn lookup_misses_unknown_players() {
        let registry = ProfileRegistry::new();
        let id = PlayerId("puuid-1".into());

        assert!(registry.lookup(&id).is_none());

        let created = registry.get_or_create(&id);
        let found = registry.lookup(&id).unwrap();

        assert!(Arc::ptr_eq(&created, &found));
    }
}
