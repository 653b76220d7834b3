use serde::Deserialize;

use super::Localized;
use crate::config::TrackerConfig;
use crate::error::Result;

/// Full season game list for the tracked club, with UTC start times.
pub(crate) async fn club_schedule(
    client: &reqwest::Client,
    config: &TrackerConfig,
) -> Result<ClubSchedule> {
    let url = format!(
        "{}/club-schedule-season/{}/now",
        config.api_base, config.franchise.abbrev
    );
    super::get_json(client, &url).await
}

#[derive(Debug, Deserialize)]
pub(crate) struct ClubSchedule {
    pub games: Vec<ScheduledGame>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ScheduledGame {
    /// ISO date, `YYYY-MM-DD`.
    pub game_date: String,
    /// 1 = preseason, 2 = regular season, 3 = playoffs.
    pub game_type: i64,
    /// RFC 3339 timestamp, e.g. `2024-10-12T17:00:00Z`. The feed spells
    /// the key with UTC fully uppercased, so camelCase renaming misses it.
    #[serde(rename = "startTimeUTC")]
    pub start_time_utc: String,
    pub home_team: ScheduledTeam,
    pub away_team: ScheduledTeam,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ScheduledTeam {
    pub place_name: Localized,
    pub common_name: Localized,
}
