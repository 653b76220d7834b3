use serde::Serialize;

use super::StagingRow;

/// One non-preseason game on the season schedule.
#[derive(Debug, Clone, Serialize)]
pub struct ScheduleEntry {
    /// ISO date, `YYYY-MM-DD`.
    pub date: String,
    /// Franchise-local start, 12-hour clock (`07:00 PM`).
    pub start_time: String,
    pub home_team: String,
    pub away_team: String,
    /// Whether the tracked franchise is the home side.
    pub is_home: bool,
}

impl StagingRow for ScheduleEntry {
    const COLUMNS: &'static [&'static str] =
        &["date", "time", "home_team", "away_team", "is_home"];

    fn values(&self) -> Vec<String> {
        vec![
            self.date.clone(),
            self.start_time.clone(),
            self.home_team.clone(),
            self.away_team.clone(),
            self.is_home.to_string(),
        ]
    }
}
