pub(crate) mod game;
pub(crate) mod goalies;
pub(crate) mod roster;
pub(crate) mod schedule;
pub(crate) mod skaters;

use chrono::NaiveDate;

use crate::api::player::{PlayerLanding, SubSeason};
use crate::api::Localized;
use crate::error::{EtlError, Result};

/// Require a field that the wire layer models as optional. A missing
/// field aborts the pull in progress.
pub(crate) fn require<T>(value: Option<T>, field: &'static str) -> Result<T> {
    value.ok_or(EtlError::MissingField { field })
}

/// Current-season regular-season sub-totals from a landing page.
pub(crate) fn sub_season(player: &PlayerLanding) -> Result<&SubSeason> {
    player
        .featured_stats
        .as_ref()
        .map(|f| &f.regular_season.sub_season)
        .ok_or(EtlError::MissingField {
            field: "featuredStats",
        })
}

/// `First Last` display name from localized name parts.
pub(crate) fn full_name(first: &Localized, last: &Localized) -> String {
    format!("{} {}", first.default, last.default)
}

/// `Place Common` team name, e.g. "Washington Capitals".
pub(crate) fn team_name(place: &Localized, common: &Localized) -> String {
    format!("{} {}", place.default, common.default)
}

/// Seconds to `m:ss`, seconds zero-padded. Fractional seconds truncate.
pub(crate) fn format_toi(total_seconds: f64) -> String {
    let minutes = (total_seconds / 60.0) as i64;
    let seconds = (total_seconds - (minutes * 60) as f64) as i64;
    format!("{minutes}:{seconds:02}")
}

/// Fraction to a percentage string with 1 decimal (0.512 -> "51.2").
pub(crate) fn format_pctg(fraction: f64) -> String {
    format!("{:.1}", fraction * 100.0)
}

/// ISO date to the `Mon d, yyyy` display form.
pub(crate) fn format_display_date(iso: &str) -> Result<String> {
    let date = NaiveDate::parse_from_str(iso, "%Y-%m-%d")?;
    Ok(date.format("%b %-d, %Y").to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toi_pads_seconds() {
        assert_eq!(format_toi(1327.0), "22:07");
        assert_eq!(format_toi(3727.0), "62:07");
        assert_eq!(format_toi(59.0), "0:59");
        assert_eq!(format_toi(1200.0), "20:00");
    }

    #[test]
    fn toi_round_trips_whole_seconds() {
        for seconds in [0_i64, 7, 59, 60, 61, 1327, 3727, 59999] {
            let formatted = format_toi(seconds as f64);
            let (minutes, rest) = formatted.split_once(':').unwrap();
            let recomputed =
                minutes.parse::<i64>().unwrap() * 60 + rest.parse::<i64>().unwrap();
            assert_eq!(recomputed, seconds);
        }
    }

    #[test]
    fn toi_truncates_fractional_seconds() {
        assert_eq!(format_toi(1327.8), "22:07");
    }

    #[test]
    fn pctg_scales_and_rounds() {
        assert_eq!(format_pctg(0.512), "51.2");
        assert_eq!(format_pctg(0.0), "0.0");
        assert_eq!(format_pctg(1.0), "100.0");
    }

    #[test]
    fn display_date_drops_zero_padding() {
        assert_eq!(format_display_date("1997-08-03").unwrap(), "Aug 3, 1997");
        assert_eq!(format_display_date("2024-11-18").unwrap(), "Nov 18, 2024");
    }
}
