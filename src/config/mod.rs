mod schema;

pub use schema::Config;

use std::fs;
use std::path::Path;

use crate::error::Error;

/// Load the TOML config file.
///
/// `None` and the empty path both mean "no config was given", which is an
/// error here: nothing downstream can run without one.
///
/// # Errors
///
/// Returns an error if:
/// - no path was given (`ConfigMissing`)
/// - the file cannot be read (`ConfigRead`)
/// - the document is not valid TOML or lacks a required key (`ConfigParse`)
pub fn load_config(path: Option<&Path>) -> Result<Config, Error> {
    let path = match path {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => return Err(Error::ConfigMissing),
    };

    let raw = fs::read_to_string(path).map_err(|source| Error::ConfigRead {
        path: path.to_path_buf(),
        source,
    })?;

    let config = toml::from_str(&raw).map_err(|source| Error::ConfigParse {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(config)
}
