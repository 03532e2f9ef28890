//! Data Dragon asset URL construction.
//!
//! Pure lookups, no network. The CDN serves champion art by champion name
//! only, so mastery rows (which carry numeric ids) can fail to produce a URL.

/// Data Dragon asset version pinned with each release.
pub const DDRAGON_VERSION: &str = "14.20.1";

const DDRAGON_CDN: &str = "https://ddragon.leagueoflegends.com/cdn";

pub fn profile_icon_url(icon_id: i64) -> String {
    format!("{DDRAGON_CDN}/{DDRAGON_VERSION}/img/profileicon/{icon_id}.png")
}

pub fn champion_icon_url(champion_name: &str) -> Option<String> {
    if champion_name.is_empty() {
        return None;
    }
    // Riot ships one champion with inconsistent casing between APIs.
    let name = if champion_name == "FiddleSticks" {
        "Fiddlesticks"
    } else {
        champion_name
    };
    Some(format!("{DDRAGON_CDN}/{DDRAGON_VERSION}/img/champion/{name}.png"))
}
