pub mod coerce;
pub mod normalizer;
pub mod raw_record;
pub mod sales_record;

pub use normalizer::{normalize, normalize_all};
pub use raw_record::{RawFields, RawRecord};
pub use sales_record::{SalesRecord, field};
