use tracing::debug;

use super::policy::Aggregation;
use super::table::AccumulatorTable;
use crate::engine::record::SalesRecord;

/// A sink that consumes typed records one at a time
pub trait RecordSink {
    fn on_record(&mut self, record: &SalesRecord);
}

/// Groups records under an [`Aggregation`] policy and finalizes sorted rows.
pub struct GroupedSink<P: Aggregation> {
    policy: P,
    table: AccumulatorTable<P::Key, P::Acc>,
    scanned: usize,
    filtered: usize,
    unkeyed: usize,
}

impl<P: Aggregation> GroupedSink<P> {
    pub fn new(policy: P) -> Self {
        Self {
            policy,
            table: AccumulatorTable::new(),
            scanned: 0,
            filtered: 0,
            unkeyed: 0,
        }
    }

    pub fn group_count(&self) -> usize {
        self.table.len()
    }

    /// Records seen, records dropped by the pre-filter, records with no valid key.
    pub fn counters(&self) -> (usize, usize, usize) {
        (self.scanned, self.filtered, self.unkeyed)
    }

    /// Finalizes every group in ascending key order
    pub fn into_rows(self) -> Vec<P::Row> {
        debug!(
            target: "superstore::aggregate",
            report = P::NAME,
            scanned = self.scanned,
            filtered = self.filtered,
            unkeyed = self.unkeyed,
            groups = self.table.len(),
            "Finalizing groups"
        );

        let GroupedSink { policy, table, .. } = self;
        table
            .into_sorted()
            .into_iter()
            .map(|(key, acc)| policy.finalize(key, acc))
            .collect()
    }
}

impl<P: Aggregation> RecordSink for GroupedSink<P> {
    fn on_record(&mut self, record: &SalesRecord) {
        self.scanned += 1;
        if !self.policy.admits(record) {
            self.filtered += 1;
            return;
        }
        let Some(key) = self.policy.key(record) else {
            self.unkeyed += 1;
            return;
        };
        let acc = self.table.get_or_init(key);
        self.policy.update(acc, record);
    }
}

/// Runs `policy` over `records` in a single pass.
pub fn aggregate<P: Aggregation>(policy: P, records: &[SalesRecord]) -> Vec<P::Row> {
    let mut sink = GroupedSink::new(policy);
    for record in records {
        sink.on_record(record);
    }
    sink.into_rows()
}
