//! Delimited staging artifacts: the hand-off between extraction and the
//! table loader. One artifact per entity type per pull, plus one per
//! game keyed by its date; rewrites overwrite.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::Result;
use crate::model::StagingRow;

pub const ROSTER_ARTIFACT: &str = "roster_from_api.csv";
pub const SKATERS_ARTIFACT: &str = "skaters_from_api.csv";
pub const GOALIES_ARTIFACT: &str = "goalies_from_api.csv";
pub const SCHEDULE_ARTIFACT: &str = "schedule_from_api.csv";

const GAME_ARTIFACT_PREFIX: &str = "game_";

/// Artifact name for a single game, keyed by its ISO date.
pub fn game_artifact(date: &str) -> String {
    format!("{GAME_ARTIFACT_PREFIX}{date}.csv")
}

/// Write `rows` (header first) to `dir/name`, creating the staging
/// directory if needed and replacing any prior artifact of that name.
pub fn write_rows<R: StagingRow>(dir: &Path, name: &str, rows: &[R]) -> Result<PathBuf> {
    fs::create_dir_all(dir)?;
    let path = dir.join(name);

    let mut writer = csv::Writer::from_path(&path)?;
    writer.write_record(R::COLUMNS)?;
    for row in rows {
        writer.write_record(row.values())?;
    }
    writer.flush()?;

    debug!(path = %path.display(), rows = rows.len(), "wrote staging artifact");
    Ok(path)
}

/// All per-game artifacts currently staged, in directory order.
pub fn game_artifacts(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.exists() {
        return Ok(Vec::new());
    }
    let mut artifacts = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        let name = path.file_name().and_then(|n| n.to_str()).unwrap_or_default();
        if name.starts_with(GAME_ARTIFACT_PREFIX) && name.ends_with(".csv") {
            artifacts.push(path);
        }
    }
    Ok(artifacts)
}

/// Remove every staged artifact. The directory itself is kept.
pub fn clear(dir: &Path) -> Result<()> {
    if !dir.exists() {
        return Ok(());
    }
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_file() {
            fs::remove_file(&path)?;
        }
    }
    debug!(dir = %dir.display(), "cleared staging artifacts");
    Ok(())
}
