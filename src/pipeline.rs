use std::path::Path;

use crate::config;
use crate::data::{self, Record};
use crate::error::Error;
use crate::rank::{self, SortDirection};

/// The pipeline's result: records in final print order, plus the direction
/// that produced it.
#[derive(Debug)]
pub struct Ranking {
    pub records: Vec<Record>,
    pub direction: SortDirection,
}

/// Load the config, resolve the sort direction, load the data file it points
/// at, and sort. All-or-nothing: the first failure aborts before any later
/// step runs, and nothing partial is returned.
///
/// The direction is resolved before the data file is touched, so a bad
/// `sort` value reports without the data file ever being opened.
pub fn build_ranking(config_path: Option<&Path>, verbose: bool) -> Result<Ranking, Error> {
    let config = config::load_config(config_path)?;
    let direction = SortDirection::parse(&config.sort)?;
    if verbose {
        eprintln!(
            "Config: sort={}, datafile={}",
            direction,
            config.datafile.display()
        );
    }

    let mut records = data::load_records(&config.datafile)?;
    if verbose {
        eprintln!("Loaded {} records", records.len());
    }

    rank::sort_records(&mut records, direction);

    Ok(Ranking { records, direction })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    /// Write a config and data file pair; the TempDir keeps both alive.
    fn fixture(sort: &str, data: &str) -> (TempDir, PathBuf) {
        let dir = TempDir::new().unwrap();
        let data_path = dir.path().join("scores.csv");
        fs::write(&data_path, data).unwrap();
        let config_path = dir.path().join("config.toml");
        fs::write(
            &config_path,
            format!(
                "sort = \"{}\"\ndatafile = \"{}\"\n",
                sort,
                data_path.display()
            ),
        )
        .unwrap();
        (dir, config_path)
    }

    fn names(ranking: &Ranking) -> Vec<&str> {
        ranking.records.iter().map(|r| r.name.as_str()).collect()
    }

    #[test]
    fn test_ascending_pipeline() {
        let (_dir, config_path) = fixture("ascending", "c,3\na,1\nb,2\n");
        let ranking = build_ranking(Some(&config_path), false).unwrap();
        assert_eq!(ranking.direction, SortDirection::Ascending);
        assert_eq!(names(&ranking), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_descending_pipeline_reverses_ties() {
        let (_dir, config_path) = fixture("descending", "A,1\nB,1\nC,2\n");
        let ranking = build_ranking(Some(&config_path), false).unwrap();
        assert_eq!(ranking.direction, SortDirection::Descending);
        assert_eq!(names(&ranking), vec!["C", "B", "A"]);
    }

    #[test]
    fn test_record_count_matches_row_count() {
        let (_dir, config_path) = fixture("ascending", "a,4\nb,2\nc,9\nd,1\n");
        let ranking = build_ranking(Some(&config_path), false).unwrap();
        assert_eq!(ranking.records.len(), 4);
    }

    #[test]
    fn test_empty_data_file_gives_empty_ranking() {
        let (_dir, config_path) = fixture("ascending", "");
        let ranking = build_ranking(Some(&config_path), false).unwrap();
        assert!(ranking.records.is_empty());
    }

    #[test]
    fn test_no_config_path_is_config_missing() {
        let err = build_ranking(None, false).unwrap_err();
        assert!(matches!(err, Error::ConfigMissing));
    }

    #[test]
    fn test_bad_sort_value_stops_before_data() {
        // The data file is unparseable, but the bad sort value must win:
        // direction is resolved before the data file is opened.
        let (_dir, config_path) = fixture("sideways", "x,notanumber\n");
        let err = build_ranking(Some(&config_path), false).unwrap_err();
        assert!(matches!(err, Error::InvalidSortDirection { .. }));
    }

    #[test]
    fn test_missing_data_file_is_open_error() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.toml");
        fs::write(
            &config_path,
            "sort = \"ascending\"\ndatafile = \"/nonexistent/scores.csv\"\n",
        )
        .unwrap();
        let err = build_ranking(Some(&config_path), false).unwrap_err();
        assert!(matches!(err, Error::DataOpen { .. }));
    }

    #[test]
    fn test_bad_score_propagates_with_row() {
        let (_dir, config_path) = fixture("ascending", "a,1\nb,zzz\n");
        let err = build_ranking(Some(&config_path), false).unwrap_err();
        assert!(matches!(err, Error::NumberParse { row: 2, .. }));
    }
}
