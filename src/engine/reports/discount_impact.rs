use serde::Serialize;

use super::ReportRow;
use super::discount_tier::DiscountTier;
use crate::engine::aggregate::finalization::{RATIO_PLACES, mean_or_zero, round_to};
use crate::engine::aggregate::group_key::required;
use crate::engine::aggregate::{Aggregation, aggregate};
use crate::engine::record::SalesRecord;

/// Line count and mean quantity/sales per (discount tier, Category).
#[derive(Debug, Clone, Copy, Default)]
pub struct DiscountImpactByCategory;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TierTotals {
    pub num_orders: u64,
    pub sum_quantity: i128,
    pub sum_sales: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DiscountImpactRow {
    pub discount_tier: DiscountTier,
    #[serde(rename = "Category")]
    pub category: String,
    pub num_orders: u64,
    pub avg_quantity: f64,
    pub avg_sales: f64,
}

impl ReportRow for DiscountImpactRow {
    const COLUMNS: &'static [&'static str] = &[
        "discount_tier",
        "Category",
        "num_orders",
        "avg_quantity",
        "avg_sales",
    ];
}

impl Aggregation for DiscountImpactByCategory {
    type Key = (DiscountTier, String);
    type Acc = TierTotals;
    type Row = DiscountImpactRow;

    const NAME: &'static str = "discount";

    fn key(&self, record: &SalesRecord) -> Option<Self::Key> {
        let category = required(record.category())?;
        Some((
            DiscountTier::classify(record.discount),
            category.to_string(),
        ))
    }

    fn update(&self, acc: &mut TierTotals, record: &SalesRecord) {
        acc.num_orders += 1;
        acc.sum_quantity += i128::from(record.quantity);
        acc.sum_sales += record.sales;
    }

    fn finalize(
        &self,
        (discount_tier, category): Self::Key,
        acc: TierTotals,
    ) -> DiscountImpactRow {
        let avg_quantity = mean_or_zero(acc.sum_quantity as f64, acc.num_orders);
        let avg_sales = mean_or_zero(acc.sum_sales, acc.num_orders);
        DiscountImpactRow {
            discount_tier,
            category,
            num_orders: acc.num_orders,
            avg_quantity: round_to(avg_quantity, RATIO_PLACES),
            avg_sales: round_to(avg_sales, RATIO_PLACES),
        }
    }
}

pub fn discount_impact_by_category(records: &[SalesRecord]) -> Vec<DiscountImpactRow> {
    aggregate(DiscountImpactByCategory, records)
}
