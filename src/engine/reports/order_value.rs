use serde::Serialize;

use super::ReportRow;
use crate::engine::aggregate::finalization::{CURRENCY_PLACES, ratio_or_zero, round_to};
use crate::engine::aggregate::group_key::pair_key;
use crate::engine::aggregate::{Aggregation, aggregate};
use crate::engine::record::SalesRecord;

/// Sales per unit sold, per (Region, Segment).
#[derive(Debug, Clone, Copy, Default)]
pub struct OrderValueByRegionSegment;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrderValueTotals {
    pub total_sales: f64,
    /// Wider than a single line's quantity so large groups never overflow.
    pub total_quantity: i128,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderValueRow {
    #[serde(rename = "Region")]
    pub region: String,
    #[serde(rename = "Segment")]
    pub segment: String,
    pub total_sales: f64,
    pub total_quantity: i128,
    /// Left unrounded.
    pub avg_order_value: f64,
}

impl ReportRow for OrderValueRow {
    const COLUMNS: &'static [&'static str] = &[
        "Region",
        "Segment",
        "total_sales",
        "total_quantity",
        "avg_order_value",
    ];
}

impl Aggregation for OrderValueByRegionSegment {
    type Key = (String, String);
    type Acc = OrderValueTotals;
    type Row = OrderValueRow;

    const NAME: &'static str = "aov";

    fn key(&self, record: &SalesRecord) -> Option<Self::Key> {
        pair_key(record.region(), record.segment())
    }

    fn update(&self, acc: &mut OrderValueTotals, record: &SalesRecord) {
        acc.total_sales += record.sales;
        acc.total_quantity += i128::from(record.quantity);
    }

    fn finalize(&self, (region, segment): Self::Key, acc: OrderValueTotals) -> OrderValueRow {
        OrderValueRow {
            region,
            segment,
            total_sales: round_to(acc.total_sales, CURRENCY_PLACES),
            total_quantity: acc.total_quantity,
            avg_order_value: ratio_or_zero(acc.total_sales, acc.total_quantity as f64),
        }
    }
}

pub fn avg_order_value_by_region_segment(records: &[SalesRecord]) -> Vec<OrderValueRow> {
    aggregate(OrderValueByRegionSegment, records)
}
