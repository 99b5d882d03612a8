use serde::Deserialize;
use std::path::PathBuf;

/// The on-disk config document. Both keys are required; anything else in the
/// file is ignored.
///
/// Example TOML:
/// ```toml
/// sort = "ascending"
/// datafile = "scores.csv"
/// ```
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Config {
    /// Sort direction: "ascending" or "descending".
    pub sort: String,

    /// Path to the two-column CSV data file.
    pub datafile: PathBuf,
}
