use std::fs::File;
use std::path::Path;

use crate::data::types::Record;
use crate::error::Error;

/// Read a headerless two-column CSV file (name, score) into records,
/// preserving row order. The whole file is read eagerly and the first bad
/// row aborts the load. Rows are numbered from 1 in errors; blank lines
/// yield no record and are not counted.
pub fn load_records(path: &Path) -> Result<Vec<Record>, Error> {
    let file = File::open(path).map_err(|source| Error::DataOpen {
        path: path.to_path_buf(),
        source,
    })?;

    // The reader accepts ragged rows; the two-field check below owns that
    // failure so every width violation reports the same way.
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(file);

    let mut records = Vec::new();
    for (index, result) in reader.records().enumerate() {
        let row = index + 1;
        let record = result.map_err(|e| Error::MalformedRow {
            path: path.to_path_buf(),
            row,
            detail: e.to_string(),
        })?;
        if record.len() != 2 {
            return Err(Error::MalformedRow {
                path: path.to_path_buf(),
                row,
                detail: format!("expected 2 fields (name, score), found {}", record.len()),
            });
        }
        let score = record[1].parse::<f64>().map_err(|source| Error::NumberParse {
            path: path.to_path_buf(),
            row,
            value: record[1].to_string(),
            source,
        })?;
        records.push(Record {
            name: record[0].to_string(),
            score,
        });
    }

    Ok(records)
}
