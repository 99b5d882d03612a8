use std::path::PathBuf;
use thiserror::Error;

/// Everything that can fail between reading the config and handing back the
/// ranking. All variants are terminal: the first one encountered aborts the
/// pipeline before any output is produced, and `main` is the only place they
/// get reported.
#[derive(Debug, Error)]
pub enum Error {
    /// No config path was given. An absent config is never a valid state for
    /// the rest of the pipeline; it fails here, before any field access.
    #[error("no config file specified (use --path <file>)")]
    ConfigMissing,

    #[error("failed to read config file {}: {}", .path.display(), .source)]
    ConfigRead {
        path: PathBuf,
        source: std::io::Error,
    },

    // toml's Display is multi-line (it quotes the offending span); stderr
    // gets one line per failure, so only message() is rendered.
    #[error("failed to parse config file {}: {}", .path.display(), .source.message())]
    ConfigParse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("\"{value}\" is not a recognized sort. Valid values are \"ascending\" and \"descending\".")]
    InvalidSortDirection { value: String },

    #[error("failed to open data file {}: {}", .path.display(), .source)]
    DataOpen {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("data file {}: row {}: {}", .path.display(), .row, .detail)]
    MalformedRow {
        path: PathBuf,
        /// 1-based record ordinal, as counted by the CSV reader.
        row: usize,
        detail: String,
    },

    #[error("data file {}: row {}: \"{}\" is not a valid score: {}", .path.display(), .row, .value, .source)]
    NumberParse {
        path: PathBuf,
        row: usize,
        value: String,
        source: std::num::ParseFloatError,
    },
}
