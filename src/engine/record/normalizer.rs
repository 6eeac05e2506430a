use tracing::debug;

use super::coerce::{coerce_f64, coerce_i64, coerce_text};
use super::raw_record::RawRecord;
use super::sales_record::{SalesRecord, field};

/// Converts one raw line into a typed record. Never fails.
pub fn normalize(raw: &RawRecord) -> SalesRecord {
    // A present `Sub-Category` wins even when blank
    let sub_category = if raw.contains(field::SUB_CATEGORY) {
        coerce_text(raw.get(field::SUB_CATEGORY))
    } else {
        coerce_text(raw.get(field::SUB_CATEGORY_ALIAS))
    };

    SalesRecord {
        region: coerce_text(raw.get(field::REGION)),
        state: coerce_text(raw.get(field::STATE)),
        segment: coerce_text(raw.get(field::SEGMENT)),
        category: coerce_text(raw.get(field::CATEGORY)),
        sub_category,
        sales: coerce_f64(raw.get(field::SALES)),
        profit: coerce_f64(raw.get(field::PROFIT)),
        discount: coerce_f64(raw.get(field::DISCOUNT)),
        quantity: coerce_i64(raw.get(field::QUANTITY)),
    }
}

pub fn normalize_all(raws: &[RawRecord]) -> Vec<SalesRecord> {
    let records: Vec<SalesRecord> = raws.iter().map(normalize).collect();
    debug!(
        target: "superstore::normalize",
        records = records.len(),
        "Normalized raw records"
    );
    records
}
