use serde::Serialize;

use super::StagingRow;

/// A roster listing for one player (skater or goalie).
#[derive(Debug, Clone, Serialize)]
pub struct RosterEntry {
    pub player_id: i64,
    pub headshot: String,
    pub name: String,
    pub jersey: i64,
    /// Shoots (skaters) or catches (goalies) handedness.
    pub shoots_catches: String,
    pub position: String,
    /// Formatted `F'I"`.
    pub height: String,
    /// Pounds.
    pub weight: i64,
    /// Display string, `Mon d, yyyy`.
    pub born: String,
    /// `city[, state], country`.
    pub birthplace: String,
}

impl StagingRow for RosterEntry {
    const COLUMNS: &'static [&'static str] = &[
        "player_id",
        "headshot",
        "name",
        "jersey",
        "s/c",
        "pos",
        "ht",
        "wt",
        "born",
        "birthplace",
    ];

    fn values(&self) -> Vec<String> {
        vec![
            self.player_id.to_string(),
            self.headshot.clone(),
            self.name.clone(),
            self.jersey.to_string(),
            self.shoots_catches.clone(),
            self.position.clone(),
            self.height.clone(),
            self.weight.to_string(),
            self.born.clone(),
            self.birthplace.clone(),
        ]
    }
}

/// Current-season counting stats for one skater.
///
/// Invariant: `ev_goals + pp_goals + sh_goals == goals` (and the same
/// for points), unless the source data itself is inconsistent.
#[derive(Debug, Clone, Serialize)]
pub struct Skater {
    pub player_id: i64,
    pub headshot: String,
    pub name: String,
    pub jersey: i64,
    pub shoots_catches: String,
    pub position: String,
    pub games_played: i64,
    pub goals: i64,
    pub assists: i64,
    pub points: i64,
    pub plus_minus: i64,
    pub penalty_minutes: i64,
    /// 2 decimals.
    pub points_per_game: String,
    pub ev_goals: i64,
    pub ev_points: i64,
    pub pp_goals: i64,
    pub pp_points: i64,
    pub sh_goals: i64,
    pub sh_points: i64,
    pub ot_goals: i64,
    pub gw_goals: i64,
    pub shots: i64,
    /// Percentage, 1 decimal.
    pub shooting_pctg: String,
    /// Per-game average, `m:ss`.
    pub avg_toi: String,
    /// Percentage, 1 decimal.
    pub faceoff_win_pctg: String,
}

impl StagingRow for Skater {
    const COLUMNS: &'static [&'static str] = &[
        "player_id",
        "headshot",
        "name",
        "jersey",
        "s/c",
        "pos",
        "gp",
        "g",
        "a",
        "p",
        "+/-",
        "pim",
        "p/gp",
        "evg",
        "evp",
        "ppg",
        "ppp",
        "shg",
        "shp",
        "otg",
        "gwg",
        "s",
        "s%",
        "toi/gp",
        "fow%",
    ];

    fn values(&self) -> Vec<String> {
        vec![
            self.player_id.to_string(),
            self.headshot.clone(),
            self.name.clone(),
            self.jersey.to_string(),
            self.shoots_catches.clone(),
            self.position.clone(),
            self.games_played.to_string(),
            self.goals.to_string(),
            self.assists.to_string(),
            self.points.to_string(),
            self.plus_minus.to_string(),
            self.penalty_minutes.to_string(),
            self.points_per_game.clone(),
            self.ev_goals.to_string(),
            self.ev_points.to_string(),
            self.pp_goals.to_string(),
            self.pp_points.to_string(),
            self.sh_goals.to_string(),
            self.sh_points.to_string(),
            self.ot_goals.to_string(),
            self.gw_goals.to_string(),
            self.shots.to_string(),
            self.shooting_pctg.clone(),
            self.avg_toi.clone(),
            self.faceoff_win_pctg.clone(),
        ]
    }
}

/// Current-season record for one goaltender, plus the incidental skater
/// stats goalies can record.
#[derive(Debug, Clone, Serialize)]
pub struct Goalie {
    pub player_id: i64,
    pub headshot: String,
    pub name: String,
    pub jersey: i64,
    pub catches: String,
    pub games_played: i64,
    pub games_started: i64,
    pub wins: i64,
    pub losses: i64,
    pub ot_losses: i64,
    pub shots_against: i64,
    pub saves: i64,
    pub goals_against: i64,
    /// 3 decimals, unscaled.
    pub save_pctg: String,
    /// 2 decimals.
    pub goals_against_avg: String,
    /// Season total, `m:ss`.
    pub toi: String,
    pub shutouts: i64,
    pub goals: i64,
    pub assists: i64,
    pub points: i64,
    pub penalty_minutes: i64,
}

impl StagingRow for Goalie {
    const COLUMNS: &'static [&'static str] = &[
        "player_id",
        "headshot",
        "name",
        "jersey",
        "s/c",
        "gp",
        "gs",
        "w",
        "l",
        "otl",
        "sa",
        "svs",
        "ga",
        "sv%",
        "gaa",
        "toi",
        "so",
        "g",
        "a",
        "p",
        "pim",
    ];

    fn values(&self) -> Vec<String> {
        vec![
            self.player_id.to_string(),
            self.headshot.clone(),
            self.name.clone(),
            self.jersey.to_string(),
            self.catches.clone(),
            self.games_played.to_string(),
            self.games_started.to_string(),
            self.wins.to_string(),
            self.losses.to_string(),
            self.ot_losses.to_string(),
            self.shots_against.to_string(),
            self.saves.to_string(),
            self.goals_against.to_string(),
            self.save_pctg.clone(),
            self.goals_against_avg.clone(),
            self.toi.clone(),
            self.shutouts.to_string(),
            self.goals.to_string(),
            self.assists.to_string(),
            self.points.to_string(),
            self.penalty_minutes.to_string(),
        ]
    }
}
