use std::cmp::Ordering;

/// One entry from the data file.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    pub name: String,  // column 0, raw (quoting already undone by the reader)
    pub score: f64,    // column 1
}

impl Record {
    /// Ordering by score, for the stable sort. Scores are compared with the
    /// IEEE 754 total order: every pair is comparable (the standard sort
    /// panics on comparators that are not) and a NaN score sorts above every
    /// number ("-NaN" carries the sign bit and sorts below them instead).
    pub fn cmp_by_score(a: &Record, b: &Record) -> Ordering {
        a.score.total_cmp(&b.score)
    }
}
