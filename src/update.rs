//! Bulk-update orchestration: pull everything stale, stage it, load the
//! season store, clean up.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use chrono::Utc;
use tracing::{info, warn};

use crate::client::StatsClient;
use crate::error::Result;
use crate::model::GameResult;
use crate::staging;
use crate::store::{SeasonStore, Table, WriteMode};

/// Pull and stage the roster.
pub async fn pull_roster(client: &StatsClient) -> Result<PathBuf> {
    let rows = client.get_roster().await?;
    staging::write_rows(
        &client.config().staging_dir,
        staging::ROSTER_ARTIFACT,
        &rows,
    )
}

/// Pull and stage skater stats.
pub async fn pull_skaters(client: &StatsClient) -> Result<PathBuf> {
    let rows = client.get_skaters().await?;
    staging::write_rows(
        &client.config().staging_dir,
        staging::SKATERS_ARTIFACT,
        &rows,
    )
}

/// Pull and stage goaltender stats.
pub async fn pull_goalies(client: &StatsClient) -> Result<PathBuf> {
    let rows = client.get_goalies().await?;
    staging::write_rows(
        &client.config().staging_dir,
        staging::GOALIES_ARTIFACT,
        &rows,
    )
}

/// Pull and stage the season schedule.
pub async fn pull_schedule(client: &StatsClient) -> Result<PathBuf> {
    let rows = client.get_schedule().await?;
    staging::write_rows(
        &client.config().staging_dir,
        staging::SCHEDULE_ARTIFACT,
        &rows,
    )
}

/// Roster, skaters, and goalies in one pass.
pub async fn pull_all_player_data(client: &StatsClient) -> Result<()> {
    pull_roster(client).await?;
    pull_skaters(client).await?;
    pull_goalies(client).await?;
    Ok(())
}

/// Pull and stage a single game by id.
pub async fn pull_game(client: &StatsClient, game_id: i64) -> Result<PathBuf> {
    let game = client.get_game(game_id).await?;
    write_game_artifact(&client.config().staging_dir, &game)
}

/// Pull and stage every franchise game on `date`.
pub async fn pull_games_on(client: &StatsClient, date: &str) -> Result<Vec<PathBuf>> {
    let games = client.get_games_on(date).await?;
    games
        .iter()
        .map(|game| write_game_artifact(&client.config().staging_dir, game))
        .collect()
}

/// Pull every scheduled game already played but not yet in the store.
/// Seeds the schedule table first when the store is fresh.
pub async fn pull_all_completed_games(
    client: &StatsClient,
    store: &SeasonStore,
) -> Result<Vec<PathBuf>> {
    let scheduled = match store.dates(Table::Schedule)? {
        Some(dates) => dates,
        None => {
            let artifact = pull_schedule(client).await?;
            store.load_staging(&artifact, Table::Schedule, &[], WriteMode::Replace)?;
            store.dates(Table::Schedule)?.unwrap_or_default()
        }
    };
    let recorded = store.dates(Table::Games)?.unwrap_or_default();
    let today = franchise_today(client);

    let pending = dates_to_pull(&scheduled, &recorded, &today);
    info!(count = pending.len(), "game dates to pull");

    let mut artifacts = Vec::new();
    for date in &pending {
        artifacts.extend(pull_games_on(client, date).await?);
    }
    Ok(artifacts)
}

/// Refresh everything: stage roster, skaters, goalies, the schedule, and
/// all newly completed games, load the store, then clear staging. A
/// failed pull aborts; a failed load is logged and skipped.
pub async fn bulk_update(client: &StatsClient, store_path: &Path) -> Result<()> {
    let store = SeasonStore::open(store_path)?;
    let staging_dir = client.config().staging_dir.clone();

    pull_all_player_data(client).await?;
    let schedule_artifact = pull_schedule(client).await?;
    pull_all_completed_games(client, &store).await?;

    load_or_skip(
        &store,
        &staging_dir.join(staging::ROSTER_ARTIFACT),
        Table::Roster,
    );
    load_or_skip(
        &store,
        &staging_dir.join(staging::SKATERS_ARTIFACT),
        Table::Skaters,
    );
    load_or_skip(
        &store,
        &staging_dir.join(staging::GOALIES_ARTIFACT),
        Table::Goalies,
    );
    load_or_skip(&store, &schedule_artifact, Table::Schedule);

    for artifact in staging::game_artifacts(&staging_dir)? {
        match store.load_staging(&artifact, Table::Games, &[], WriteMode::Append) {
            Ok(rows) => info!(path = %artifact.display(), rows, "recorded game"),
            Err(err) => warn!(path = %artifact.display(), %err, "skipping game artifact"),
        }
    }

    staging::clear(&staging_dir)?;
    info!("bulk update complete");
    Ok(())
}

fn write_game_artifact(dir: &Path, game: &GameResult) -> Result<PathBuf> {
    staging::write_rows(dir, &staging::game_artifact(&game.date), std::slice::from_ref(game))
}

fn load_or_skip(store: &SeasonStore, artifact: &Path, table: Table) {
    match store.load_staging(artifact, table, &[], WriteMode::Replace) {
        Ok(rows) => info!(%table, rows, "loaded table"),
        Err(err) => warn!(%table, path = %artifact.display(), %err, "skipping load"),
    }
}

/// Today's date where the franchise plays, as an ISO string.
fn franchise_today(client: &StatsClient) -> String {
    Utc::now()
        .with_timezone(&client.config().franchise.timezone)
        .date_naive()
        .format("%Y-%m-%d")
        .to_string()
}

/// Scheduled dates strictly before `today` with no recorded game. ISO
/// dates compare correctly as strings.
fn dates_to_pull(scheduled: &[String], recorded: &[String], today: &str) -> Vec<String> {
    let recorded: HashSet<&str> = recorded.iter().map(String::as_str).collect();
    scheduled
        .iter()
        .filter(|date| date.as_str() < today && !recorded.contains(date.as_str()))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dates(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|d| d.to_string()).collect()
    }

    #[test]
    fn only_past_unrecorded_dates_are_pulled() {
        let scheduled = dates(&["2024-10-12", "2024-11-18", "2024-11-20", "2025-01-04"]);
        let recorded = dates(&["2024-10-12"]);

        let pending = dates_to_pull(&scheduled, &recorded, "2024-11-20");
        assert_eq!(pending, dates(&["2024-11-18"]));
    }

    #[test]
    fn today_itself_is_not_pulled() {
        let scheduled = dates(&["2024-11-20"]);
        let pending = dates_to_pull(&scheduled, &[], "2024-11-20");
        assert!(pending.is_empty());
    }

    #[test]
    fn fresh_store_pulls_everything_played() {
        let scheduled = dates(&["2024-10-12", "2024-10-14"]);
        let pending = dates_to_pull(&scheduled, &[], "2025-01-01");
        assert_eq!(pending, scheduled);
    }

    #[test]
    fn iso_dates_order_across_months() {
        // Single-digit months sort after double-digit ones when left
        // unpadded; the ISO form keeps October before November.
        let scheduled = dates(&["2024-09-30", "2024-10-01", "2024-11-02"]);
        let pending = dates_to_pull(&scheduled, &[], "2024-10-02");
        assert_eq!(pending, dates(&["2024-09-30", "2024-10-01"]));
    }
}
