pub mod direction;

pub use direction::SortDirection;

use crate::data::Record;

/// Sort records by score in place. The sort is stable and always runs
/// ascending; Descending then reverses the whole sequence, so equal scores
/// come out in reverse input order rather than input order.
pub fn sort_records(records: &mut [Record], direction: SortDirection) {
    records.sort_by(Record::cmp_by_score);
    if direction == SortDirection::Descending {
        records.reverse();
    }
}
