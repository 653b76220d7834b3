use serde::Deserialize;

use super::Localized;
use crate::config::TrackerConfig;
use crate::error::Result;

/// Team stat listing: skater/goalie id lists with season sub-totals.
pub(crate) async fn club_stats(
    client: &reqwest::Client,
    config: &TrackerConfig,
) -> Result<ClubStats> {
    let url = format!(
        "{}/club-stats/{}/now",
        config.api_base, config.franchise.abbrev
    );
    super::get_json(client, &url).await
}

/// Per-player landing page: biography plus featured season stats.
pub(crate) async fn player_landing(
    client: &reqwest::Client,
    config: &TrackerConfig,
    player_id: i64,
) -> Result<PlayerLanding> {
    let url = format!("{}/player/{player_id}/landing", config.api_base);
    super::get_json(client, &url).await
}

#[derive(Debug, Deserialize)]
pub(crate) struct ClubStats {
    pub skaters: Vec<ClubSkater>,
    pub goalies: Vec<ClubGoalie>,
}

/// Skater entry in the club listing. Only the fields absent from the
/// landing page are read here.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ClubSkater {
    pub player_id: i64,
    pub faceoff_win_pctg: f64,
    /// Seconds per game.
    pub avg_time_on_ice_per_game: f64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ClubGoalie {
    pub player_id: i64,
    pub games_started: i64,
    pub shots_against: i64,
    pub saves: i64,
    pub goals_against: i64,
    /// Total seconds across the season.
    pub time_on_ice: i64,
    pub shutouts: i64,
    pub goals: i64,
    pub assists: i64,
    pub points: i64,
    pub penalty_minutes: i64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct PlayerLanding {
    pub player_id: i64,
    pub first_name: Localized,
    pub last_name: Localized,
    pub sweater_number: i64,
    pub shoots_catches: String,
    pub position: String,
    pub headshot: String,
    pub height_in_inches: i64,
    pub weight_in_pounds: i64,
    /// ISO date, `YYYY-MM-DD`.
    pub birth_date: String,
    pub birth_city: Localized,
    pub birth_state_province: Option<Localized>,
    pub birth_country: String,
    pub featured_stats: Option<FeaturedStats>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct FeaturedStats {
    pub regular_season: RegularSeason,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RegularSeason {
    pub sub_season: SubSeason,
}

/// Current-season regular-season sub-totals. The document carries skater
/// fields for skaters and goalie fields for goalies; everything is
/// optional here and required at extraction, where a missing field is
/// fatal for the pull.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub(crate) struct SubSeason {
    pub games_played: Option<i64>,
    pub goals: Option<i64>,
    pub assists: Option<i64>,
    pub points: Option<i64>,
    pub plus_minus: Option<i64>,
    pub pim: Option<i64>,
    pub power_play_goals: Option<i64>,
    pub power_play_points: Option<i64>,
    pub shorthanded_goals: Option<i64>,
    pub shorthanded_points: Option<i64>,
    pub ot_goals: Option<i64>,
    pub game_winning_goals: Option<i64>,
    pub shots: Option<i64>,
    pub shooting_pctg: Option<f64>,
    pub wins: Option<i64>,
    pub losses: Option<i64>,
    pub ot_losses: Option<i64>,
    pub save_pctg: Option<f64>,
    pub goals_against_avg: Option<f64>,
}
