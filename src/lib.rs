//! Data aggregation core for a League of Legends player profile viewer.
//!
//! The crate chains the Riot API lookups needed to build one player profile
//! (account → summoner → ranked/mastery/match ids → match details), handles
//! partial failure across that chain and exposes the growing profile state to
//! a UI layer through a change channel. Rendering and display layout live
//! with the consumer; [`ddragon`] only builds asset URLs.

pub mod config;
pub mod ddragon;
pub mod error;
pub mod logging;
pub mod model;
pub mod profile;
pub mod report;
pub mod riot;

pub use config::Config;
pub use error::ApiError;
pub use profile::aggregator::ProfileAggregator;
pub use profile::registry::ProfileRegistry;
pub use report::{ErrorKind, ErrorReport};
pub use riot::client::RiotClient;
