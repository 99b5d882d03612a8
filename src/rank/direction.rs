use std::fmt;

use crate::error::Error;

/// Which end of the score range ranks first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    /// Lower score is better.
    Ascending,
    /// Higher score is better.
    Descending,
}

impl SortDirection {
    /// Parse the config's `sort` value. Matching is exact: anything but the
    /// two lowercase keywords is an error naming the offending value.
    pub fn parse(s: &str) -> Result<Self, Error> {
        match s {
            "ascending" => Ok(SortDirection::Ascending),
            "descending" => Ok(SortDirection::Descending),
            other => Err(Error::InvalidSortDirection {
                value: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortDirection::Ascending => write!(f, "ascending"),
            SortDirection::Descending => write!(f, "descending"),
        }
    }
}
