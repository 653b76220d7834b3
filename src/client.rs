//! The fetch facade. One [`StatsClient`] per tracked franchise; each
//! method performs the remote calls for one entity type and returns
//! finished staging rows.

use crate::config::TrackerConfig;
use crate::error::Result;
use crate::extract;
use crate::model::{GameResult, Goalie, RosterEntry, ScheduleEntry, Skater};

/// Client for the remote stats API, bound to one franchise.
pub struct StatsClient {
    http: reqwest::Client,
    config: TrackerConfig,
}

impl StatsClient {
    pub fn new(config: TrackerConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    /// Reuse an existing HTTP client (connection pools, proxies).
    pub fn with_client(http: reqwest::Client, config: TrackerConfig) -> Self {
        Self { http, config }
    }

    pub fn config(&self) -> &TrackerConfig {
        &self.config
    }

    /// Biographical rows for everyone in the club listing, skaters first.
    #[tracing::instrument(skip(self))]
    pub async fn get_roster(&self) -> Result<Vec<RosterEntry>> {
        extract::roster::pull_roster(&self.http, &self.config).await
    }

    /// Current-season stat rows for the club's skaters.
    #[tracing::instrument(skip(self))]
    pub async fn get_skaters(&self) -> Result<Vec<Skater>> {
        extract::skaters::pull_skaters(&self.http, &self.config).await
    }

    /// Current-season stat rows for the club's goaltenders.
    #[tracing::instrument(skip(self))]
    pub async fn get_goalies(&self) -> Result<Vec<Goalie>> {
        extract::goalies::pull_goalies(&self.http, &self.config).await
    }

    /// The season schedule, preseason games excluded.
    #[tracing::instrument(skip(self))]
    pub async fn get_schedule(&self) -> Result<Vec<ScheduleEntry>> {
        extract::schedule::pull_schedule(&self.http, &self.config).await
    }

    /// One completed game by id.
    #[tracing::instrument(skip(self))]
    pub async fn get_game(&self, game_id: i64) -> Result<GameResult> {
        extract::game::pull_game(&self.http, &self.config, game_id).await
    }

    /// Every franchise game on `date` (`YYYY-MM-DD` or "now").
    #[tracing::instrument(skip(self))]
    pub async fn get_games_on(&self, date: &str) -> Result<Vec<GameResult>> {
        extract::game::pull_games_on(&self.http, &self.config, date).await
    }
}
