use tracing::debug;

use crate::api::player::{ClubSkater, PlayerLanding};
use crate::api::{self};
use crate::config::TrackerConfig;
use crate::error::Result;
use crate::extract::{format_pctg, format_toi, full_name, require, sub_season};
use crate::model::Skater;

/// Pull current-season stats for every skater in the club listing.
pub(crate) async fn pull_skaters(
    client: &reqwest::Client,
    config: &TrackerConfig,
) -> Result<Vec<Skater>> {
    let club = api::player::club_stats(client, config).await?;

    let mut skaters = Vec::with_capacity(club.skaters.len());
    for club_skater in &club.skaters {
        let landing = api::player::player_landing(client, config, club_skater.player_id).await?;
        skaters.push(skater_row(club_skater, &landing)?);
    }

    debug!(count = skaters.len(), "built skater rows");
    Ok(skaters)
}

fn skater_row(club: &ClubSkater, player: &PlayerLanding) -> Result<Skater> {
    let season = sub_season(player)?;

    let games_played = require(season.games_played, "gamesPlayed")?;
    let goals = require(season.goals, "goals")?;
    let assists = require(season.assists, "assists")?;
    let points = require(season.points, "points")?;
    let pp_goals = require(season.power_play_goals, "powerPlayGoals")?;
    let pp_points = require(season.power_play_points, "powerPlayPoints")?;
    let sh_goals = require(season.shorthanded_goals, "shorthandedGoals")?;
    let sh_points = require(season.shorthanded_points, "shorthandedPoints")?;

    Ok(Skater {
        player_id: player.player_id,
        headshot: player.headshot.clone(),
        name: full_name(&player.first_name, &player.last_name),
        jersey: player.sweater_number,
        shoots_catches: player.shoots_catches.clone(),
        position: player.position.clone(),
        games_played,
        goals,
        assists,
        points,
        plus_minus: require(season.plus_minus, "plusMinus")?,
        penalty_minutes: require(season.pim, "pim")?,
        points_per_game: points_per_game(points, games_played),
        ev_goals: goals - (pp_goals + sh_goals),
        ev_points: points - (pp_points + sh_points),
        pp_goals,
        pp_points,
        sh_goals,
        sh_points,
        ot_goals: require(season.ot_goals, "otGoals")?,
        gw_goals: require(season.game_winning_goals, "gameWinningGoals")?,
        shots: require(season.shots, "shots")?,
        shooting_pctg: format_pctg(require(season.shooting_pctg, "shootingPctg")?),
        avg_toi: format_toi(club.avg_time_on_ice_per_game),
        faceoff_win_pctg: format_pctg(club.faceoff_win_pctg),
    })
}

fn points_per_game(points: i64, games_played: i64) -> String {
    if games_played == 0 {
        return "0.00".to_string();
    }
    format!("{:.2}", points as f64 / games_played as f64)
}
