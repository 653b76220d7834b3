use std::path::PathBuf;

use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

/// Configuration for one season's tracker: which franchise to follow,
/// where the remote API lives, and where staging files and the season
/// store are written.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackerConfig {
    /// The tracked franchise.
    pub franchise: FranchiseConfig,

    /// Base URL of the stats API, without a trailing slash.
    pub api_base: String,

    /// Directory staging artifacts are written to between pull and load.
    pub staging_dir: PathBuf,

    /// Path of the season store (one SQLite file per season).
    pub store_path: PathBuf,
}

/// Identity of the tracked franchise as the remote API knows it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FranchiseConfig {
    /// Three-letter team code used in endpoint paths (e.g. "WSH").
    pub abbrev: String,

    /// Numeric team id used to pick sides in game documents.
    pub team_id: i64,

    /// Full display name, matched against schedule home/away names.
    pub full_name: String,

    /// Local time zone for schedule start times.
    pub timezone: Tz,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            franchise: FranchiseConfig {
                abbrev: "WSH".to_string(),
                team_id: 15,
                full_name: "Washington Capitals".to_string(),
                timezone: chrono_tz::US::Eastern,
            },
            api_base: "https://api-web.nhle.com/v1".to_string(),
            staging_dir: PathBuf::from("to_load"),
            store_path: PathBuf::from("data/stats_2425.db"),
        }
    }
}

impl TrackerConfig {
    /// Default configuration with environment overrides applied.
    ///
    /// `PUCKSTATS_STORE` selects the season store file and
    /// `PUCKSTATS_STAGING` the staging directory.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(store) = std::env::var("PUCKSTATS_STORE") {
            config.store_path = PathBuf::from(store);
        }
        if let Ok(staging) = std::env::var("PUCKSTATS_STAGING") {
            config.staging_dir = PathBuf::from(staging);
        }
        config
    }

    /// Same tracker pointed at a different season store.
    pub fn with_store(mut self, store_path: impl Into<PathBuf>) -> Self {
        self.store_path = store_path.into();
        self
    }
}
