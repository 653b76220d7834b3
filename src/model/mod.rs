mod game;
mod player;
mod schedule;

pub use game::*;
pub use player::*;
pub use schedule::*;

/// A flat row that can be written to a staging artifact.
///
/// Column order is a compatibility contract: store consumers index by
/// position, not name.
pub trait StagingRow {
    /// Header of the staging artifact, in table column order.
    const COLUMNS: &'static [&'static str];

    /// Field values as display strings, matching [`Self::COLUMNS`].
    fn values(&self) -> Vec<String>;
}
