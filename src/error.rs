/// All errors that can occur while pulling, staging, or loading stats.
#[derive(thiserror::Error, Debug)]
pub enum EtlError {
    /// HTTP request failed (network, DNS, TLS, timeout, etc.).
    #[error("http request failed for {url}: {source}")]
    Http {
        url: String,
        source: reqwest::Error,
    },

    /// Server returned a non-success HTTP status code.
    #[error("unexpected status {status} for {url}")]
    UnexpectedStatus {
        url: String,
        status: reqwest::StatusCode,
    },

    /// Failed to read or decode the JSON response body.
    #[error("failed to decode response from {url}: {source}")]
    Decode {
        url: String,
        source: reqwest::Error,
    },

    /// An expected field was absent from a JSON document. Fatal for the
    /// pull being built; no default is substituted.
    #[error("missing expected field: {field}")]
    MissingField { field: &'static str },

    /// A staging artifact has an extension the loader does not accept.
    #[error("unsupported staging format: {path} (accepted: .csv)")]
    UnsupportedFormat { path: String },

    /// A staging column is not in the destination table's allow-list.
    #[error("column {column} not allowed for table {table}")]
    UnknownColumn { table: String, column: String },

    /// A `fail`-mode load hit a table that already exists.
    #[error("table {0} already exists")]
    TableExists(String),

    /// Filesystem error while handling staging artifacts.
    #[error("staging io error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV read/write error on a staging artifact.
    #[error("staging csv error: {0}")]
    Csv(#[from] csv::Error),

    /// Error from the relational store.
    #[error("store error: {0}")]
    Store(#[from] rusqlite::Error),

    /// Failed to parse a date/time from source data.
    #[error("failed to parse date: {0}")]
    DateParse(#[from] chrono::ParseError),
}

pub type Result<T> = std::result::Result<T, EtlError>;
