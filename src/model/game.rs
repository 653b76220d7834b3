use serde::Serialize;

use super::StagingRow;

/// Joiner for the list-valued game columns in staging artifacts.
const LIST_SEPARATOR: &str = "; ";

/// A completed game from the tracked franchise's point of view.
///
/// Paired stats come as (tracked team, opponent); list fields hold
/// pre-formatted display lines.
#[derive(Debug, Clone, Serialize)]
pub struct GameResult {
    pub opponent: String,
    /// "home" or "away" for the tracked franchise.
    pub home_away: String,
    /// ISO date, `YYYY-MM-DD`.
    pub date: String,
    /// Display copy of the date; formatted by the table loader.
    pub date_str: String,
    /// Starting goaltenders.
    pub goalie: String,
    pub opp_goalie: String,
    /// Shots on goal.
    pub sog: i64,
    pub opp_sog: i64,
    /// Faceoff win percentage, 1 decimal.
    pub faceoff_pctg: String,
    pub opp_faceoff_pctg: String,
    /// Power-play record, "made/attempts".
    pub power_play: String,
    /// Power-play percentage, 1 decimal.
    pub power_play_pctg: String,
    pub opp_power_play: String,
    pub opp_power_play_pctg: String,
    pub penalty_minutes: i64,
    pub opp_penalty_minutes: i64,
    pub hits: i64,
    pub opp_hits: i64,
    pub blocked_shots: i64,
    pub opp_blocked_shots: i64,
    pub giveaways: i64,
    pub opp_giveaways: i64,
    pub takeaways: i64,
    pub opp_takeaways: i64,
    /// Goal description lines, or a single "None".
    pub goals: Vec<String>,
    pub opp_goals: Vec<String>,
    /// Penalty description lines, or a single "None".
    pub penalties: Vec<String>,
    pub opp_penalties: Vec<String>,
    /// Three-stars selections.
    pub stars: Vec<String>,
    /// "Win"/"Loss", suffixed " (OT)" or " (OT+)".
    pub result: String,
}

impl StagingRow for GameResult {
    const COLUMNS: &'static [&'static str] = &[
        "opponent",
        "home_away",
        "date",
        "date_str",
        "goalie",
        "opp_goalie",
        "sog",
        "opp_sog",
        "fop",
        "opp_fop",
        "pp",
        "ppp",
        "opp_pp",
        "opp_ppp",
        "pim",
        "opp_pim",
        "hits",
        "opp_hits",
        "bs",
        "opp_bs",
        "gv",
        "opp_gv",
        "tk",
        "opp_tk",
        "goals",
        "opp_goals",
        "penalties",
        "opp_penalties",
        "stars",
        "result",
    ];

    fn values(&self) -> Vec<String> {
        vec![
            self.opponent.clone(),
            self.home_away.clone(),
            self.date.clone(),
            self.date_str.clone(),
            self.goalie.clone(),
            self.opp_goalie.clone(),
            self.sog.to_string(),
            self.opp_sog.to_string(),
            self.faceoff_pctg.clone(),
            self.opp_faceoff_pctg.clone(),
            self.power_play.clone(),
            self.power_play_pctg.clone(),
            self.opp_power_play.clone(),
            self.opp_power_play_pctg.clone(),
            self.penalty_minutes.to_string(),
            self.opp_penalty_minutes.to_string(),
            self.hits.to_string(),
            self.opp_hits.to_string(),
            self.blocked_shots.to_string(),
            self.opp_blocked_shots.to_string(),
            self.giveaways.to_string(),
            self.opp_giveaways.to_string(),
            self.takeaways.to_string(),
            self.opp_takeaways.to_string(),
            self.goals.join(LIST_SEPARATOR),
            self.opp_goals.join(LIST_SEPARATOR),
            self.penalties.join(LIST_SEPARATOR),
            self.opp_penalties.join(LIST_SEPARATOR),
            self.stars.join(LIST_SEPARATOR),
            self.result.clone(),
        ]
    }
}
