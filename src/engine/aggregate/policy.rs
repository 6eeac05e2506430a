use std::hash::Hash;

use crate::engine::record::SalesRecord;

/// The fixed grouping rules of one report.
///
/// A report is a single fold over the typed records: `admits` is the
/// pre-filter, `key` picks the group (or rejects the record), `update`
/// folds the record into its group's accumulator, and `finalize` turns a
/// finished accumulator into an output row. Output rows are emitted in
/// ascending `Key` order.
pub trait Aggregation {
    type Key: Hash + Eq + Ord;
    type Acc: Default;
    type Row;

    /// Short report name used in logs and summaries.
    const NAME: &'static str;

    /// Record-level filter applied before key extraction.
    fn admits(&self, _record: &SalesRecord) -> bool {
        true
    }

    fn key(&self, record: &SalesRecord) -> Option<Self::Key>;

    fn update(&self, acc: &mut Self::Acc, record: &SalesRecord);

    fn finalize(&self, key: Self::Key, acc: Self::Acc) -> Self::Row;
}
