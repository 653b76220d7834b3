//! The season store: one SQLite file per season, loaded from staging
//! artifacts. Table and column identifiers come from a fixed allow-list
//! and all values are bound as parameters.

use std::fs;
use std::path::Path;

use chrono::{NaiveDate, NaiveTime};
use itertools::Itertools;
use rusqlite::Connection;
use tracing::debug;

use crate::error::{EtlError, Result};
use crate::model::{GameResult, Goalie, RosterEntry, ScheduleEntry, Skater, StagingRow};

/// The tables a season store may contain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum_macros::Display)]
#[strum(serialize_all = "lowercase")]
pub enum Table {
    Roster,
    Skaters,
    Goalies,
    Schedule,
    Games,
}

impl Table {
    /// Columns this table may contain, in contract order.
    fn allowed_columns(self) -> &'static [&'static str] {
        match self {
            Table::Roster => RosterEntry::COLUMNS,
            Table::Skaters => Skater::COLUMNS,
            Table::Goalies => Goalie::COLUMNS,
            Table::Schedule => ScheduleEntry::COLUMNS,
            Table::Games => GameResult::COLUMNS,
        }
    }

    fn allows(self, column: &str) -> bool {
        // The loader synthesizes date_str wherever a date column loads.
        if column.eq_ignore_ascii_case("date_str") {
            return self
                .allowed_columns()
                .iter()
                .any(|allowed| allowed.eq_ignore_ascii_case("date"));
        }
        self.allowed_columns()
            .iter()
            .any(|allowed| allowed.eq_ignore_ascii_case(column))
    }
}

/// How a load writes into its destination table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, strum_macros::Display)]
#[strum(serialize_all = "lowercase")]
pub enum WriteMode {
    /// Drop and recreate the table; the artifact becomes its full contents.
    #[default]
    Replace,
    /// Create the table if absent and append rows.
    Append,
    /// Error if the table already exists.
    Fail,
}

impl From<&str> for WriteMode {
    /// Unknown mode strings fall back to `Replace`. Deliberately
    /// permissive, not an error.
    fn from(raw: &str) -> Self {
        match raw {
            "append" => WriteMode::Append,
            "fail" => WriteMode::Fail,
            _ => WriteMode::Replace,
        }
    }
}

/// An open season store. Owns its connection; dropping the handle
/// releases it on every exit path.
pub struct SeasonStore {
    conn: Connection,
}

impl SeasonStore {
    /// Open (creating if needed) the store at `path`.
    pub fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        Ok(Self {
            conn: Connection::open(path)?,
        })
    }

    /// An in-memory store, handy for tests and dry runs.
    pub fn in_memory() -> Result<Self> {
        Ok(Self {
            conn: Connection::open_in_memory()?,
        })
    }

    /// Load a staging artifact into `table`.
    ///
    /// Drops `drop_columns`, applies the display transforms, validates
    /// the header against the table's column allow-list, then writes per
    /// `mode`. Returns the number of rows written. Nothing is touched
    /// when the artifact has an unsupported extension.
    ///
    /// Only `.csv` is accepted, deliberately: the staging writer emits
    /// nothing else, and binary spreadsheet formats would need a reader
    /// dependency for a path no pull produces.
    pub fn load_staging(
        &self,
        path: &Path,
        table: Table,
        drop_columns: &[&str],
        mode: WriteMode,
    ) -> Result<usize> {
        if path.extension().and_then(|e| e.to_str()) != Some("csv") {
            return Err(EtlError::UnsupportedFormat {
                path: path.display().to_string(),
            });
        }

        let mut reader = csv::Reader::from_path(path)?;
        let mut headers: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();
        let mut records: Vec<Vec<String>> = reader
            .records()
            .map_ok(|record| record.iter().map(str::to_string).collect())
            .collect::<std::result::Result<_, csv::Error>>()?;

        drop_requested_columns(&mut headers, &mut records, drop_columns);
        apply_display_transforms(&mut headers, &mut records);

        for column in &headers {
            if !table.allows(column) {
                return Err(EtlError::UnknownColumn {
                    table: table.to_string(),
                    column: column.clone(),
                });
            }
        }

        let written = self.write_table(table, &headers, &records, mode)?;
        debug!(table = %table, rows = written, %mode, "loaded staging artifact");
        Ok(written)
    }

    fn write_table(
        &self,
        table: Table,
        headers: &[String],
        records: &[Vec<String>],
        mode: WriteMode,
    ) -> Result<usize> {
        match mode {
            WriteMode::Fail if self.table_exists(table)? => {
                return Err(EtlError::TableExists(table.to_string()));
            }
            WriteMode::Replace => {
                self.conn
                    .execute(&format!("DROP TABLE IF EXISTS \"{table}\""), [])?;
            }
            _ => {}
        }

        let column_defs = headers.iter().map(|h| format!("\"{h}\" TEXT")).join(", ");
        self.conn.execute(
            &format!("CREATE TABLE IF NOT EXISTS \"{table}\" ({column_defs})"),
            [],
        )?;

        let column_list = headers.iter().map(|h| format!("\"{h}\"")).join(", ");
        let placeholders = (1..=headers.len()).map(|i| format!("?{i}")).join(", ");
        let tx = self.conn.unchecked_transaction()?;
        {
            let mut insert = tx.prepare(&format!(
                "INSERT INTO \"{table}\" ({column_list}) VALUES ({placeholders})"
            ))?;
            for record in records {
                insert.execute(rusqlite::params_from_iter(record.iter()))?;
            }
        }
        tx.commit()?;

        Ok(records.len())
    }

    pub fn table_exists(&self, table: Table) -> Result<bool> {
        let count: i64 = self.conn.query_row(
            "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = ?1",
            [table.to_string()],
            |row| row.get(0),
        )?;
        Ok(count > 0)
    }

    /// Row count, or `None` when the table does not exist yet.
    pub fn row_count(&self, table: Table) -> Result<Option<usize>> {
        if !self.table_exists(table)? {
            return Ok(None);
        }
        let count: i64 =
            self.conn
                .query_row(&format!("SELECT COUNT(*) FROM \"{table}\""), [], |row| {
                    row.get(0)
                })?;
        Ok(Some(count as usize))
    }

    /// Every row of `table` in insertion order, or `None` when the table
    /// does not exist yet. Columns come back positionally.
    pub fn fetch_all(&self, table: Table) -> Result<Option<Vec<Vec<String>>>> {
        if !self.table_exists(table)? {
            return Ok(None);
        }
        let mut statement = self.conn.prepare(&format!("SELECT * FROM \"{table}\""))?;
        let rows = Self::collect_rows(&mut statement, [])?;
        Ok(Some(rows))
    }

    /// Rows of `table` where `column` equals `value`. The column must be
    /// in the table's allow-list; the value is bound, never spliced.
    pub fn fetch_where(
        &self,
        table: Table,
        column: &str,
        value: &str,
    ) -> Result<Option<Vec<Vec<String>>>> {
        if !table.allows(column) {
            return Err(EtlError::UnknownColumn {
                table: table.to_string(),
                column: column.to_string(),
            });
        }
        if !self.table_exists(table)? {
            return Ok(None);
        }
        let mut statement = self.conn.prepare(&format!(
            "SELECT * FROM \"{table}\" WHERE \"{column}\" = ?1"
        ))?;
        let rows = Self::collect_rows(&mut statement, [value])?;
        Ok(Some(rows))
    }

    /// The `date` column of `table`, or `None` when the table does not
    /// exist yet. Only meaningful for `schedule` and `games`.
    pub fn dates(&self, table: Table) -> Result<Option<Vec<String>>> {
        if !table.allows("date") {
            return Err(EtlError::UnknownColumn {
                table: table.to_string(),
                column: "date".to_string(),
            });
        }
        if !self.table_exists(table)? {
            return Ok(None);
        }
        let mut statement = self
            .conn
            .prepare(&format!("SELECT \"date\" FROM \"{table}\""))?;
        let dates = statement
            .query_map([], |row| row.get::<_, String>(0))?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(Some(dates))
    }

    pub fn drop_table(&self, table: Table) -> Result<()> {
        self.conn
            .execute(&format!("DROP TABLE IF EXISTS \"{table}\""), [])?;
        Ok(())
    }

    fn collect_rows<P: rusqlite::Params>(
        statement: &mut rusqlite::Statement<'_>,
        params: P,
    ) -> Result<Vec<Vec<String>>> {
        let column_count = statement.column_count();
        let rows = statement
            .query_map(params, |row| {
                (0..column_count)
                    .map(|i| row.get::<_, String>(i))
                    .collect::<rusqlite::Result<Vec<String>>>()
            })?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
    }
}

fn drop_requested_columns(
    headers: &mut Vec<String>,
    records: &mut [Vec<String>],
    drop_columns: &[&str],
) {
    for dropped in drop_columns {
        if let Some(index) = find_column(headers, dropped) {
            headers.remove(index);
            for record in records.iter_mut() {
                record.remove(index);
            }
        }
    }
}

/// Reformat date/time-like columns to display strings. Values that do
/// not parse pass through unchanged, so already-formatted artifacts load
/// verbatim.
fn apply_display_transforms(headers: &mut Vec<String>, records: &mut Vec<Vec<String>>) {
    if let Some(index) = find_column(headers, "born") {
        for record in records.iter_mut() {
            record[index] = display_date(&record[index]);
        }
    }

    // A date column splits in two: the raw date stays joinable, the
    // date_str copy (synthesized right after it when absent) carries
    // the display form.
    if let Some(date_index) = find_column(headers, "date") {
        match find_column(headers, "date_str") {
            Some(index) => {
                for record in records.iter_mut() {
                    record[index] = display_date(&record[index]);
                }
            }
            None => {
                headers.insert(date_index + 1, "date_str".to_string());
                for record in records.iter_mut() {
                    let display = display_date(&record[date_index]);
                    record.insert(date_index + 1, display);
                }
            }
        }
    }

    if let Some(index) = find_column(headers, "start_time") {
        for record in records.iter_mut() {
            record[index] = display_time(&record[index]);
        }
    }

    // Height marks spell out as words in the store (6'1" -> 6ft 1in).
    if let Some(index) = find_column(headers, "ht") {
        for record in records.iter_mut() {
            record[index] = record[index].replace('\'', "ft ").replace('"', "in");
        }
    }
}

fn find_column(headers: &[String], name: &str) -> Option<usize> {
    headers.iter().position(|h| h.eq_ignore_ascii_case(name))
}

/// `YYYY-MM-DD` to `Mon d, yyyy`; anything else passes through.
fn display_date(raw: &str) -> String {
    match NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        Ok(date) => date.format("%b %-d, %Y").to_string(),
        Err(_) => raw.to_string(),
    }
}

/// 24-hour clock to `hh:mm AM/PM`; anything else passes through.
fn display_time(raw: &str) -> String {
    NaiveTime::parse_from_str(raw, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(raw, "%H:%M"))
        .map(|time| time.format("%I:%M %p").to_string())
        .unwrap_or_else(|_| raw.to_string())
}
