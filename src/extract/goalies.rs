use tracing::debug;

use crate::api::player::{ClubGoalie, PlayerLanding};
use crate::api::{self};
use crate::config::TrackerConfig;
use crate::error::Result;
use crate::extract::{format_toi, full_name, require, sub_season};
use crate::model::Goalie;

/// Pull current-season stats for every goaltender in the club listing.
pub(crate) async fn pull_goalies(
    client: &reqwest::Client,
    config: &TrackerConfig,
) -> Result<Vec<Goalie>> {
    let club = api::player::club_stats(client, config).await?;

    let mut goalies = Vec::with_capacity(club.goalies.len());
    for club_goalie in &club.goalies {
        let landing = api::player::player_landing(client, config, club_goalie.player_id).await?;
        goalies.push(goalie_row(club_goalie, &landing)?);
    }

    debug!(count = goalies.len(), "built goalie rows");
    Ok(goalies)
}

fn goalie_row(club: &ClubGoalie, player: &PlayerLanding) -> Result<Goalie> {
    let season = sub_season(player)?;

    Ok(Goalie {
        player_id: player.player_id,
        headshot: player.headshot.clone(),
        name: full_name(&player.first_name, &player.last_name),
        jersey: player.sweater_number,
        catches: player.shoots_catches.clone(),
        games_played: require(season.games_played, "gamesPlayed")?,
        games_started: club.games_started,
        wins: require(season.wins, "wins")?,
        losses: require(season.losses, "losses")?,
        ot_losses: require(season.ot_losses, "otLosses")?,
        shots_against: club.shots_against,
        saves: club.saves,
        goals_against: club.goals_against,
        save_pctg: format!("{:.3}", require(season.save_pctg, "savePctg")?),
        goals_against_avg: format!(
            "{:.2}",
            require(season.goals_against_avg, "goalsAgainstAvg")?
        ),
        toi: format_toi(club.time_on_ice as f64),
        shutouts: club.shutouts,
        goals: club.goals,
        assists: club.assists,
        points: club.points,
        penalty_minutes: club.penalty_minutes,
    })
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn club_goalie() -> ClubGoalie {
        serde_json::from_value(json!({
            "playerId": 8475683,
            "gamesStarted": 29,
            "shotsAgainst": 812,
            "saves": 744,
            "goalsAgainst": 68,
            "timeOnIce": 103327,
            "shutouts": 3,
            "goals": 0,
            "assists": 2,
            "points": 2,
            "penaltyMinutes": 4,
        }))
        .unwrap()
    }

    fn landing() -> PlayerLanding {
        serde_json::from_value(json!({
            "playerId": 8475683,
            "firstName": {"default": "Charlie"},
            "lastName": {"default": "Lindgren"},
            "sweaterNumber": 79,
            "shootsCatches": "R",
            "position": "G",
            "headshot": "https://assets.example.com/8475683.png",
            "heightInInches": 73,
            "weightInPounds": 191,
            "birthDate": "1993-12-18",
            "birthCity": {"default": "Lakeville"},
            "birthStateProvince": {"default": "MN"},
            "birthCountry": "USA",
            "featuredStats": {
                "regularSeason": {
                    "subSeason": {
                        "gamesPlayed": 31,
                        "wins": 16,
                        "losses": 10,
                        "otLosses": 3,
                        "savePctg": 0.9162,
                        "goalsAgainstAvg": 2.347,
                    }
                }
            },
        }))
        .unwrap()
    }

    #[test]
    fn decimals_match_column_contract() {
        let goalie = goalie_row(&club_goalie(), &landing()).unwrap();
        assert_eq!(goalie.save_pctg, "0.916");
        assert_eq!(goalie.goals_against_avg, "2.35");
    }

    #[test]
    fn toi_round_trips_to_seconds() {
        let goalie = goalie_row(&club_goalie(), &landing()).unwrap();
        assert_eq!(goalie.toi, "1722:07");
        let (minutes, seconds) = goalie.toi.split_once(':').unwrap();
        let recomputed =
            minutes.parse::<i64>().unwrap() * 60 + seconds.parse::<i64>().unwrap();
        assert_eq!(recomputed, 103327);
    }

    #[test]
    fn incidental_skater_stats_come_from_club_listing() {
        let goalie = goalie_row(&club_goalie(), &landing()).unwrap();
        assert_eq!(goalie.games_started, 29);
        assert_eq!(goalie.assists, 2);
        assert_eq!(goalie.points, 2);
        assert_eq!(goalie.penalty_minutes, 4);
    }

    #[test]
    fn missing_goalie_record_is_fatal() {
        let doc = json!({
            "playerId": 8475683,
            "firstName": {"default": "Charlie"},
            "lastName": {"default": "Lindgren"},
            "sweaterNumber": 79,
            "shootsCatches": "R",
            "position": "G",
            "headshot": "h",
            "heightInInches": 73,
            "weightInPounds": 191,
            "birthDate": "1993-12-18",
            "birthCity": {"default": "Lakeville"},
            "birthCountry": "USA",
            "featuredStats": {"regularSeason": {"subSeason": {"gamesPlayed": 31}}},
        });
        let landing: PlayerLanding = serde_json::from_value(doc).unwrap();
        let err = goalie_row(&club_goalie(), &landing).unwrap_err();
        assert!(matches!(
            err,
            crate::error::EtlError::MissingField { field: "wins" }
        ));
    }
}
