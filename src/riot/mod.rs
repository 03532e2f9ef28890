pub mod client;
pub mod endpoints;
pub mod metrics;
pub mod region;
pub mod traits;
pub mod types;

pub use client::RiotClient;
pub use region::{Platform, Region};
pub use traits::LolApi;
