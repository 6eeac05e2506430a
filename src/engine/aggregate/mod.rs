pub mod finalization;
pub mod group_key;
pub mod policy;
pub mod sink;
pub mod table;

pub use policy::Aggregation;
pub use sink::{GroupedSink, RecordSink, aggregate};
pub use table::AccumulatorTable;
