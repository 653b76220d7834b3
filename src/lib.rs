//! Single-franchise NHL stats ETL: pull roster, player stats, schedule,
//! and game results from the league's REST API, stage them as CSV
//! artifacts, and load them into a per-season SQLite store.
//!
//! ```no_run
//! use puckstats::{StatsClient, TrackerConfig};
//!
//! # async fn run() -> puckstats::Result<()> {
//! let config = TrackerConfig::default();
//! let store_path = config.store_path.clone();
//! let client = StatsClient::new(config);
//! puckstats::update::bulk_update(&client, &store_path).await?;
//! # Ok(())
//! # }
//! ```

mod api;
mod extract;

pub mod client;
pub mod config;
pub mod error;
pub mod model;
pub mod staging;
pub mod store;
pub mod update;

pub use client::StatsClient;
pub use config::{FranchiseConfig, TrackerConfig};
pub use error::{EtlError, Result};
