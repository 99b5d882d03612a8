use crate::data::Record;

/// Format a single record as one output line: name, a space, then the score
/// with six decimal places ("1" and "1.0" in the data file both print as
/// "1.000000").
pub fn format_record(record: &Record) -> String {
    format!("{} {:.6}", record.name, record.score)
}
