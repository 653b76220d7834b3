use serde::Deserialize;

use super::Localized;
use crate::config::TrackerConfig;
use crate::error::Result;

/// Score-by-date: every game on a given date (or "now"), any team.
pub(crate) async fn scores_on(
    client: &reqwest::Client,
    config: &TrackerConfig,
    date: &str,
) -> Result<DailyScores> {
    let url = format!("{}/score/{date}", config.api_base);
    super::get_json(client, &url).await
}

/// Game landing page: scoring, penalties and three-stars summary.
pub(crate) async fn game_landing(
    client: &reqwest::Client,
    config: &TrackerConfig,
    game_id: i64,
) -> Result<GameLanding> {
    let url = format!("{}/gamecenter/{game_id}/landing", config.api_base);
    super::get_json(client, &url).await
}

/// Game story: team-level aggregate stats and the game date.
pub(crate) async fn game_story(
    client: &reqwest::Client,
    config: &TrackerConfig,
    game_id: i64,
) -> Result<GameStory> {
    let url = format!("{}/wsc/game-story/{game_id}", config.api_base);
    super::get_json(client, &url).await
}

/// Game box score: per-player rows including starting-goaltender flags.
pub(crate) async fn boxscore(
    client: &reqwest::Client,
    config: &TrackerConfig,
    game_id: i64,
) -> Result<Boxscore> {
    let url = format!("{}/gamecenter/{game_id}/boxscore", config.api_base);
    super::get_json(client, &url).await
}

#[derive(Debug, Deserialize)]
pub(crate) struct DailyScores {
    pub games: Vec<DailyGame>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct DailyGame {
    pub id: i64,
    pub away_team: TeamId,
    pub home_team: TeamId,
}

#[derive(Debug, Deserialize)]
pub(crate) struct TeamId {
    pub id: i64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct GameLanding {
    pub away_team: LandingTeam,
    pub home_team: LandingTeam,
    pub summary: LandingSummary,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct LandingTeam {
    pub id: i64,
    pub place_name: Localized,
    pub common_name: Localized,
    pub score: i64,
    pub sog: i64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct LandingSummary {
    pub scoring: Vec<ScoringPeriod>,
    /// Absent until the first penalty of the game.
    pub penalties: Option<Vec<PenaltyPeriod>>,
    pub three_stars: Vec<Star>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ScoringPeriod {
    pub period_descriptor: PeriodDescriptor,
    pub goals: Vec<Goal>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct PeriodDescriptor {
    pub number: i64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Goal {
    pub first_name: Localized,
    pub last_name: Localized,
    pub goals_to_date: i64,
    /// "ev", "pp" or "sh".
    pub strength: String,
    pub goal_modifier: String,
    pub time_in_period: String,
    pub assists: Vec<Assist>,
    pub team_abbrev: Localized,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Assist {
    pub name: Localized,
    pub assists_to_date: i64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct PenaltyPeriod {
    pub period_descriptor: PeriodDescriptor,
    pub penalties: Vec<Penalty>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Penalty {
    /// Minutes.
    pub duration: i64,
    pub desc_key: String,
    #[serde(rename = "type")]
    pub kind: String,
    /// Absent for bench penalties (`kind == "BEN"`).
    pub committed_by_player: Option<String>,
    pub time_in_period: String,
    pub team_abbrev: Localized,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Star {
    pub name: Localized,
    pub position: String,
    pub sweater_no: i64,
    pub team_abbrev: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct GameStory {
    /// ISO date, `YYYY-MM-DD`.
    pub game_date: String,
    pub summary: StorySummary,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct StorySummary {
    pub team_game_stats: Vec<TeamStat>,
}

/// One home/away keyed stat category. Values are mixed-typed: counts are
/// numbers, percentages are fractions, the power-play record is a
/// "made/attempts" string.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct TeamStat {
    pub category: String,
    pub home_value: serde_json::Value,
    pub away_value: serde_json::Value,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Boxscore {
    pub player_by_game_stats: PlayerByGameStats,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct PlayerByGameStats {
    pub home_team: BoxTeam,
    pub away_team: BoxTeam,
}

#[derive(Debug, Deserialize)]
pub(crate) struct BoxTeam {
    pub goalies: Vec<BoxGoalie>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct BoxGoalie {
    pub starter: bool,
    pub name: Localized,
}
