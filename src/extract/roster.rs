use tracing::debug;

use crate::api::player::PlayerLanding;
use crate::api::{self};
use crate::config::TrackerConfig;
use crate::error::Result;
use crate::extract::{format_display_date, full_name};
use crate::model::RosterEntry;

/// Pull the current roster: one landing-page call per listed skater and
/// goalie, in club-listing order (skaters first).
pub(crate) async fn pull_roster(
    client: &reqwest::Client,
    config: &TrackerConfig,
) -> Result<Vec<RosterEntry>> {
    let club = api::player::club_stats(client, config).await?;

    let player_ids = club
        .skaters
        .iter()
        .map(|s| s.player_id)
        .chain(club.goalies.iter().map(|g| g.player_id));

    let mut entries = Vec::with_capacity(club.skaters.len() + club.goalies.len());
    for player_id in player_ids {
        let landing = api::player::player_landing(client, config, player_id).await?;
        entries.push(roster_entry(&landing)?);
    }

    debug!(count = entries.len(), "built roster entries");
    Ok(entries)
}

fn roster_entry(player: &PlayerLanding) -> Result<RosterEntry> {
    Ok(RosterEntry {
        player_id: player.player_id,
        headshot: player.headshot.clone(),
        name: full_name(&player.first_name, &player.last_name),
        jersey: player.sweater_number,
        shoots_catches: player.shoots_catches.clone(),
        position: player.position.clone(),
        height: format_height(player.height_in_inches),
        weight: player.weight_in_pounds,
        born: format_display_date(&player.birth_date)?,
        birthplace: birthplace(player),
    })
}

/// Inches to `F'I"`, e.g. 73 -> `6'1"`.
fn format_height(inches: i64) -> String {
    let feet = inches / 12;
    format!("{feet}'{}\"", inches - feet * 12)
}

/// `city[, state/province], country`; the middle part only when the
/// source provides it.
fn birthplace(player: &PlayerLanding) -> String {
    match &player.birth_state_province {
        Some(state) => format!(
            "{}, {}, {}",
            player.birth_city.default, state.default, player.birth_country
        ),
        None => format!("{}, {}", player.birth_city.default, player.birth_country),
    }
}
