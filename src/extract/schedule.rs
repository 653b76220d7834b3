use chrono::DateTime;
use tracing::debug;

use crate::api::schedule::ScheduledGame;
use crate::api::{self};
use crate::config::TrackerConfig;
use crate::error::Result;
use crate::extract::team_name;
use crate::model::ScheduleEntry;

/// Preseason game-type code; these entries are dropped.
const GAME_TYPE_PRESEASON: i64 = 1;

/// Pull the season schedule, excluding preseason games.
pub(crate) async fn pull_schedule(
    client: &reqwest::Client,
    config: &TrackerConfig,
) -> Result<Vec<ScheduleEntry>> {
    let schedule = api::schedule::club_schedule(client, config).await?;

    let entries = schedule
        .games
        .iter()
        .filter(|game| game.game_type != GAME_TYPE_PRESEASON)
        .map(|game| schedule_entry(game, config))
        .collect::<Result<Vec<_>>>()?;

    debug!(count = entries.len(), "built schedule entries");
    Ok(entries)
}

fn schedule_entry(game: &ScheduledGame, config: &TrackerConfig) -> Result<ScheduleEntry> {
    let start_utc = DateTime::parse_from_rfc3339(&game.start_time_utc)?;
    let start_local = start_utc.with_timezone(&config.franchise.timezone);

    let home_team = team_name(&game.home_team.place_name, &game.home_team.common_name);
    let away_team = team_name(&game.away_team.place_name, &game.away_team.common_name);
    let is_home = home_team == config.franchise.full_name;

    Ok(ScheduleEntry {
        date: game.game_date.clone(),
        start_time: start_local.format("%I:%M %p").to_string(),
        home_team,
        away_team,
        is_home,
    })
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::api::schedule::ClubSchedule;

    fn schedule_fixture() -> ClubSchedule {
        serde_json::from_value(json!({
            "games": [
                {
                    "gameDate": "2024-09-22",
                    "gameType": 1,
                    "startTimeUTC": "2024-09-22T17:00:00Z",
                    "homeTeam": {"placeName": {"default": "Washington"}, "commonName": {"default": "Capitals"}},
                    "awayTeam": {"placeName": {"default": "Buffalo"}, "commonName": {"default": "Sabres"}},
                },
                {
                    "gameDate": "2024-10-12",
                    "gameType": 2,
                    "startTimeUTC": "2024-10-12T23:00:00Z",
                    "homeTeam": {"placeName": {"default": "Washington"}, "commonName": {"default": "Capitals"}},
                    "awayTeam": {"placeName": {"default": "New Jersey"}, "commonName": {"default": "Devils"}},
                },
                {
                    "gameDate": "2025-01-04",
                    "gameType": 2,
                    "startTimeUTC": "2025-01-05T00:00:00Z",
                    "homeTeam": {"placeName": {"default": "New York"}, "commonName": {"default": "Rangers"}},
                    "awayTeam": {"placeName": {"default": "Washington"}, "commonName": {"default": "Capitals"}},
                },
            ]
        }))
        .unwrap()
    }

    fn entries() -> Vec<ScheduleEntry> {
        let config = TrackerConfig::default();
        schedule_fixture()
            .games
            .iter()
            .filter(|game| game.game_type != GAME_TYPE_PRESEASON)
            .map(|game| schedule_entry(game, &config).unwrap())
            .collect()
    }

    #[test]
    fn preseason_games_are_dropped() {
        let entries = entries();
        assert_eq!(entries.len(), 2);
        assert!(entries.iter().all(|e| e.date != "2024-09-22"));
    }

    #[test]
    fn start_times_convert_to_eastern_twelve_hour() {
        let entries = entries();
        // 23:00 UTC on Oct 12 is 7 PM EDT.
        assert_eq!(entries[0].start_time, "07:00 PM");
        // Midnight UTC on Jan 5 is 7 PM EST the prior evening.
        assert_eq!(entries[1].start_time, "07:00 PM");
    }

    #[test]
    fn home_flag_matches_franchise_name() {
        let entries = entries();
        assert!(entries[0].is_home);
        assert_eq!(entries[0].away_team, "New Jersey Devils");
        assert!(!entries[1].is_home);
        assert_eq!(entries[1].home_team, "New York Rangers");
    }
}
