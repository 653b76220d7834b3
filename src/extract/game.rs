use std::collections::HashMap;

use itertools::Itertools;
use serde_json::Value;
use tracing::debug;

use crate::api::game::{
    BoxGoalie, Boxscore, GameLanding, GameStory, Goal, Penalty, PenaltyPeriod, ScoringPeriod,
    Star, TeamStat,
};
use crate::api::{self};
use crate::config::TrackerConfig;
use crate::error::{EtlError, Result};
use crate::extract::{format_pctg, require, team_name};
use crate::model::GameResult;

/// Pull every game on `date` involving the tracked franchise. `date` is
/// `YYYY-MM-DD` or the "now" sentinel.
pub(crate) async fn pull_games_on(
    client: &reqwest::Client,
    config: &TrackerConfig,
    date: &str,
) -> Result<Vec<GameResult>> {
    let scores = api::game::scores_on(client, config, date).await?;

    let mut games = Vec::new();
    for game in &scores.games {
        let team_id = config.franchise.team_id;
        if game.home_team.id == team_id || game.away_team.id == team_id {
            games.push(pull_game(client, config, game.id).await?);
        }
    }

    debug!(count = games.len(), date, "pulled games by date");
    Ok(games)
}

/// Pull a single completed game: landing page, story, and box score.
pub(crate) async fn pull_game(
    client: &reqwest::Client,
    config: &TrackerConfig,
    game_id: i64,
) -> Result<GameResult> {
    let landing = api::game::game_landing(client, config, game_id).await?;
    let story = api::game::game_story(client, config, game_id).await?;
    let boxscore = api::game::boxscore(client, config, game_id).await?;
    build_game(config, &landing, &story, &boxscore)
}

fn build_game(
    config: &TrackerConfig,
    landing: &GameLanding,
    story: &GameStory,
    boxscore: &Boxscore,
) -> Result<GameResult> {
    let is_home = landing.away_team.id != config.franchise.team_id;
    let (team, opponent) = if is_home {
        (&landing.home_team, &landing.away_team)
    } else {
        (&landing.away_team, &landing.home_team)
    };

    let abbrev = &config.franchise.abbrev;
    let (goals, opp_goals) = goal_lines(&landing.summary.scoring, abbrev);
    let (penalties, opp_penalties) =
        penalty_lines(landing.summary.penalties.as_deref().unwrap_or(&[]), abbrev)?;
    let stars = star_lines(&landing.summary.three_stars);

    let (team_stats, opp_stats) = split_team_stats(&story.summary.team_game_stats, is_home);
    let (goalie, opp_goalie) = starting_goalies(boxscore, is_home)?;

    Ok(GameResult {
        opponent: dedup_name(&team_name(&opponent.place_name, &opponent.common_name)),
        home_away: if is_home { "home" } else { "away" }.to_string(),
        date: story.game_date.clone(),
        date_str: story.game_date.clone(),
        goalie,
        opp_goalie,
        sog: team.sog,
        opp_sog: opponent.sog,
        faceoff_pctg: stat_pctg(&team_stats, "faceoffWinningPctg")?,
        opp_faceoff_pctg: stat_pctg(&opp_stats, "faceoffWinningPctg")?,
        power_play: stat_text(&team_stats, "powerPlay")?,
        power_play_pctg: stat_pctg(&team_stats, "powerPlayPctg")?,
        opp_power_play: stat_text(&opp_stats, "powerPlay")?,
        opp_power_play_pctg: stat_pctg(&opp_stats, "powerPlayPctg")?,
        penalty_minutes: stat_count(&team_stats, "pim")?,
        opp_penalty_minutes: stat_count(&opp_stats, "pim")?,
        hits: stat_count(&team_stats, "hits")?,
        opp_hits: stat_count(&opp_stats, "hits")?,
        blocked_shots: stat_count(&team_stats, "blockedShots")?,
        opp_blocked_shots: stat_count(&opp_stats, "blockedShots")?,
        giveaways: stat_count(&team_stats, "giveaways")?,
        opp_giveaways: stat_count(&opp_stats, "giveaways")?,
        takeaways: stat_count(&team_stats, "takeaways")?,
        opp_takeaways: stat_count(&opp_stats, "takeaways")?,
        goals,
        opp_goals,
        penalties,
        opp_penalties,
        stars,
        result: result_string(team.score, opponent.score, landing.summary.scoring.len()),
    })
}

/// Split period-by-period goals into (tracked team, opponent) description
/// lines; either side collapses to a single "None" when scoreless.
fn goal_lines(scoring: &[ScoringPeriod], abbrev: &str) -> (Vec<String>, Vec<String>) {
    let mut team = Vec::new();
    let mut opp = Vec::new();

    for period in scoring {
        for goal in &period.goals {
            let line = goal_line(goal, period.period_descriptor.number);
            if goal.team_abbrev.default == abbrev {
                team.push(line);
            } else {
                opp.push(line);
            }
        }
    }

    for side in [&mut team, &mut opp] {
        if side.is_empty() {
            side.push("None".to_string());
        }
    }
    (team, opp)
}

/// `Scorer (total)[ STRENGTH][ EN] - P{n} {time} ({assists})`.
fn goal_line(goal: &Goal, period: i64) -> String {
    let mut scorer = format!(
        "{} {} ({})",
        goal.first_name.default, goal.last_name.default, goal.goals_to_date
    );
    if goal.strength != "ev" {
        scorer.push(' ');
        scorer.push_str(&goal.strength.to_uppercase());
    }
    if goal.goal_modifier == "empty-net" {
        scorer.push_str(" EN");
    }

    let assists = if goal.assists.is_empty() {
        "Unassisted".to_string()
    } else {
        goal.assists
            .iter()
            .map(|a| format!("{} ({})", a.name.default, a.assists_to_date))
            .join(", ")
    };

    format!("{scorer} - P{period} {} ({assists})", goal.time_in_period)
}

fn penalty_lines(
    penalties: &[PenaltyPeriod],
    abbrev: &str,
) -> Result<(Vec<String>, Vec<String>)> {
    let mut team = Vec::new();
    let mut opp = Vec::new();

    for period in penalties {
        for penalty in &period.penalties {
            let line = penalty_line(penalty, period.period_descriptor.number)?;
            if penalty.team_abbrev.default == abbrev {
                team.push(line);
            } else {
                opp.push(line);
            }
        }
    }

    for side in [&mut team, &mut opp] {
        if side.is_empty() {
            side.push("None".to_string());
        }
    }
    Ok((team, opp))
}

/// `Who - infraction (Nmin) P{n} {time}`; bench penalties attribute to
/// "Bench" rather than a player.
fn penalty_line(penalty: &Penalty, period: i64) -> Result<String> {
    let committed_by = if penalty.kind == "BEN" {
        "Bench"
    } else {
        require(penalty.committed_by_player.as_deref(), "committedByPlayer")?
    };
    Ok(format!(
        "{committed_by} - {} ({}min) P{period} {}",
        penalty.desc_key, penalty.duration, penalty.time_in_period
    ))
}

/// `Name PosNo (TEAM)` for each three-stars selection.
fn star_lines(stars: &[Star]) -> Vec<String> {
    stars
        .iter()
        .map(|star| {
            format!(
                "{} {}{} ({})",
                star.name.default, star.position, star.sweater_no, star.team_abbrev
            )
        })
        .collect()
}

/// Key the home/away stat categories by name and orient them as
/// (tracked team, opponent).
fn split_team_stats(
    stats: &[TeamStat],
    is_home: bool,
) -> (HashMap<&str, &Value>, HashMap<&str, &Value>) {
    let mut home = HashMap::new();
    let mut away = HashMap::new();
    for stat in stats {
        home.insert(stat.category.as_str(), &stat.home_value);
        away.insert(stat.category.as_str(), &stat.away_value);
    }
    if is_home {
        (home, away)
    } else {
        (away, home)
    }
}

fn stat_count(stats: &HashMap<&str, &Value>, category: &'static str) -> Result<i64> {
    stats
        .get(category)
        .and_then(|v| v.as_i64())
        .ok_or(EtlError::MissingField { field: category })
}

fn stat_pctg(stats: &HashMap<&str, &Value>, category: &'static str) -> Result<String> {
    stats
        .get(category)
        .and_then(|v| v.as_f64())
        .map(format_pctg)
        .ok_or(EtlError::MissingField { field: category })
}

fn stat_text(stats: &HashMap<&str, &Value>, category: &'static str) -> Result<String> {
    let value = stats
        .get(category)
        .ok_or(EtlError::MissingField { field: category })?;
    Ok(match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    })
}

/// Find each side's starting goaltender via the box-score starter flags.
fn starting_goalies(boxscore: &Boxscore, is_home: bool) -> Result<(String, String)> {
    fn starter(goalies: &[BoxGoalie]) -> Result<String> {
        goalies
            .iter()
            .find(|g| g.starter)
            .map(|g| g.name.default.clone())
            .ok_or(EtlError::MissingField { field: "starter" })
    }

    let home = starter(&boxscore.player_by_game_stats.home_team.goalies)?;
    let away = starter(&boxscore.player_by_game_stats.away_team.goalies)?;
    Ok(if is_home { (home, away) } else { (away, home) })
}

/// "Win"/"Loss", with an overtime suffix derived from the scoring-period
/// count: 4 periods is one extra period, more is multiple.
fn result_string(team_score: i64, opp_score: i64, periods: usize) -> String {
    let mut result = if team_score > opp_score { "Win" } else { "Loss" }.to_string();
    if periods == 4 {
        result.push_str(" (OT)");
    } else if periods > 4 {
        result.push_str(" (OT+)");
    }
    result
}

/// Drop any word that already appeared earlier in the name. Guards
/// against an upstream defect producing doubled names
/// ("Utah Utah Hockey Club").
fn dedup_name(name: &str) -> String {
    name.split_whitespace().unique().join(" ")
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::api::game::LandingSummary;

    fn config() -> TrackerConfig {
        TrackerConfig::default()
    }

    fn summary_fixture() -> LandingSummary {
        serde_json::from_value(json!({
            "scoring": [
                {
                    "periodDescriptor": {"number": 1},
                    "goals": [
                        {
                            "firstName": {"default": "Tom"},
                            "lastName": {"default": "Wilson"},
                            "goalsToDate": 12,
                            "strength": "ev",
                            "goalModifier": "none",
                            "timeInPeriod": "04:31",
                            "assists": [
                                {"name": {"default": "D. Strome"}, "assistsToDate": 20},
                                {"name": {"default": "J. Chychrun"}, "assistsToDate": 14},
                            ],
                            "teamAbbrev": {"default": "WSH"},
                        },
                    ],
                },
                {
                    "periodDescriptor": {"number": 2},
                    "goals": [
                        {
                            "firstName": {"default": "Clayton"},
                            "lastName": {"default": "Keller"},
                            "goalsToDate": 9,
                            "strength": "pp",
                            "goalModifier": "none",
                            "timeInPeriod": "11:02",
                            "assists": [],
                            "teamAbbrev": {"default": "UTA"},
                        },
                    ],
                },
                {"periodDescriptor": {"number": 3}, "goals": []},
            ],
            "penalties": [
                {
                    "periodDescriptor": {"number": 1},
                    "penalties": [
                        {
                            "duration": 2,
                            "descKey": "tripping",
                            "type": "MIN",
                            "committedByPlayer": "T. Wilson",
                            "timeInPeriod": "08:14",
                            "teamAbbrev": {"default": "WSH"},
                        },
                        {
                            "duration": 2,
                            "descKey": "too-many-men-on-the-ice",
                            "type": "BEN",
                            "timeInPeriod": "15:00",
                            "teamAbbrev": {"default": "UTA"},
                        },
                    ],
                },
            ],
            "threeStars": [
                {
                    "name": {"default": "T. Wilson"},
                    "position": "R",
                    "sweaterNo": 43,
                    "teamAbbrev": "WSH",
                },
            ],
        }))
        .unwrap()
    }

    #[test]
    fn goal_lines_format_and_split_by_side() {
        let summary = summary_fixture();
        let (team, opp) = goal_lines(&summary.scoring, "WSH");
        assert_eq!(
            team,
            vec!["Tom Wilson (12) - P1 04:31 (D. Strome (20), J. Chychrun (14))"]
        );
        assert_eq!(opp, vec!["Clayton Keller (9) PP - P2 11:02 (Unassisted)"]);
    }

    #[test]
    fn empty_net_goal_gets_en_marker() {
        let goal: Goal = serde_json::from_value(json!({
            "firstName": {"default": "Alex"},
            "lastName": {"default": "Ovechkin"},
            "goalsToDate": 31,
            "strength": "sh",
            "goalModifier": "empty-net",
            "timeInPeriod": "19:22",
            "assists": [],
            "teamAbbrev": {"default": "WSH"},
        }))
        .unwrap();
        assert_eq!(
            goal_line(&goal, 3),
            "Alex Ovechkin (31) SH EN - P3 19:22 (Unassisted)"
        );
    }

    #[test]
    fn scoreless_side_collapses_to_none() {
        let summary = summary_fixture();
        let (team, opp) = goal_lines(&summary.scoring, "NYR");
        assert_eq!(opp.len(), 2);
        assert_eq!(team, vec!["None"]);
    }

    #[test]
    fn bench_penalty_attributes_to_bench() {
        let summary = summary_fixture();
        let (team, opp) =
            penalty_lines(summary.penalties.as_deref().unwrap(), "WSH").unwrap();
        assert_eq!(team, vec!["T. Wilson - tripping (2min) P1 08:14"]);
        assert_eq!(
            opp,
            vec!["Bench - too-many-men-on-the-ice (2min) P1 15:00"]
        );
    }

    #[test]
    fn star_lines_concatenate_position_and_number() {
        let summary = summary_fixture();
        assert_eq!(
            star_lines(&summary.three_stars),
            vec!["T. Wilson R43 (WSH)"]
        );
    }

    #[test]
    fn result_suffixes_follow_period_count() {
        assert_eq!(result_string(4, 2, 3), "Win");
        assert_eq!(result_string(2, 3, 4), "Loss (OT)");
        assert_eq!(result_string(3, 2, 5), "Win (OT+)");
        assert_eq!(result_string(1, 2, 3), "Loss");
    }

    #[test]
    fn opponent_name_dedup_drops_repeated_words() {
        assert_eq!(dedup_name("Utah Utah Hockey Club"), "Utah Hockey Club");
        assert_eq!(dedup_name("Washington Capitals"), "Washington Capitals");
    }

    #[test]
    fn team_stats_orient_to_tracked_side() {
        let stats: Vec<TeamStat> = serde_json::from_value(json!([
            {"category": "hits", "homeValue": 20, "awayValue": 14},
            {"category": "faceoffWinningPctg", "homeValue": 0.538, "awayValue": 0.462},
            {"category": "powerPlay", "homeValue": "1/3", "awayValue": "0/2"},
        ]))
        .unwrap();

        let (team, opp) = split_team_stats(&stats, false);
        assert_eq!(stat_count(&team, "hits").unwrap(), 14);
        assert_eq!(stat_count(&opp, "hits").unwrap(), 20);
        assert_eq!(stat_pctg(&team, "faceoffWinningPctg").unwrap(), "46.2");
        assert_eq!(stat_text(&team, "powerPlay").unwrap(), "0/2");
        assert_eq!(stat_text(&opp, "powerPlay").unwrap(), "1/3");
    }

    #[test]
    fn starting_goalies_follow_starter_flags() {
        let boxscore: Boxscore = serde_json::from_value(json!({
            "playerByGameStats": {
                "homeTeam": {"goalies": [
                    {"starter": false, "name": {"default": "Backup Home"}},
                    {"starter": true, "name": {"default": "Starter Home"}},
                ]},
                "awayTeam": {"goalies": [
                    {"starter": true, "name": {"default": "Starter Away"}},
                ]},
            }
        }))
        .unwrap();

        let (goalie, opp_goalie) = starting_goalies(&boxscore, true).unwrap();
        assert_eq!(goalie, "Starter Home");
        assert_eq!(opp_goalie, "Starter Away");

        let (goalie, opp_goalie) = starting_goalies(&boxscore, false).unwrap();
        assert_eq!(goalie, "Starter Away");
        assert_eq!(opp_goalie, "Starter Home");
    }

    #[test]
    fn build_game_assembles_tracked_side_away() {
        let landing: GameLanding = serde_json::from_value(json!({
            "awayTeam": {
                "id": 15,
                "placeName": {"default": "Washington"},
                "commonName": {"default": "Capitals"},
                "score": 2,
                "sog": 28,
            },
            "homeTeam": {
                "id": 59,
                "placeName": {"default": "Utah"},
                "commonName": {"default": "Utah Hockey Club"},
                "score": 1,
                "sog": 33,
            },
            "summary": {
                "scoring": [
                    {"periodDescriptor": {"number": 1}, "goals": []},
                    {"periodDescriptor": {"number": 2}, "goals": []},
                    {"periodDescriptor": {"number": 3}, "goals": []},
                    {"periodDescriptor": {"number": 4}, "goals": []},
                ],
                "threeStars": [],
            },
        }))
        .unwrap();
        let story: GameStory = serde_json::from_value(json!({
            "gameDate": "2024-11-18",
            "summary": {"teamGameStats": [
                {"category": "faceoffWinningPctg", "homeValue": 0.5, "awayValue": 0.5},
                {"category": "powerPlay", "homeValue": "0/1", "awayValue": "1/4"},
                {"category": "powerPlayPctg", "homeValue": 0.0, "awayValue": 0.25},
                {"category": "pim", "homeValue": 8, "awayValue": 2},
                {"category": "hits", "homeValue": 22, "awayValue": 18},
                {"category": "blockedShots", "homeValue": 12, "awayValue": 15},
                {"category": "giveaways", "homeValue": 7, "awayValue": 5},
                {"category": "takeaways", "homeValue": 4, "awayValue": 9},
            ]},
        }))
        .unwrap();
        let boxscore: Boxscore = serde_json::from_value(json!({
            "playerByGameStats": {
                "homeTeam": {"goalies": [{"starter": true, "name": {"default": "K. Vejmelka"}}]},
                "awayTeam": {"goalies": [{"starter": true, "name": {"default": "C. Lindgren"}}]},
            }
        }))
        .unwrap();

        let game = build_game(&config(), &landing, &story, &boxscore).unwrap();
        assert_eq!(game.opponent, "Utah Hockey Club");
        assert_eq!(game.home_away, "away");
        assert_eq!(game.date, "2024-11-18");
        assert_eq!(game.goalie, "C. Lindgren");
        assert_eq!(game.opp_goalie, "K. Vejmelka");
        assert_eq!(game.sog, 28);
        assert_eq!(game.opp_sog, 33);
        assert_eq!(game.power_play, "1/4");
        assert_eq!(game.power_play_pctg, "25.0");
        assert_eq!(game.opp_power_play, "0/1");
        assert_eq!(game.penalty_minutes, 2);
        assert_eq!(game.opp_hits, 22);
        assert_eq!(game.takeaways, 9);
        assert_eq!(game.goals, vec!["None"]);
        assert_eq!(game.penalties, vec!["None"]);
        assert_eq!(game.result, "Win (OT)");
    }
}
