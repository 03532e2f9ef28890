pub mod aggregator;
pub mod registry;
pub mod state;

pub use aggregator::ProfileAggregator;
pub use registry::ProfileRegistry;
pub use state::{LoadPhase, MatchSlot, PlayerProfile, ProfileState};
