use serde::Serialize;

use super::ReportRow;
use crate::engine::aggregate::finalization::{
    CURRENCY_PLACES, RATIO_PLACES, ratio_or_zero, round_to,
};
use crate::engine::aggregate::group_key::pair_key;
use crate::engine::aggregate::{Aggregation, aggregate};
use crate::engine::record::SalesRecord;

/// Profit margin per (Region, SubCategory).
#[derive(Debug, Clone, Copy, Default)]
pub struct MarginByRegionSubCategory;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MarginTotals {
    pub total_sales: f64,
    pub total_profit: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MarginRow {
    #[serde(rename = "Region")]
    pub region: String,
    #[serde(rename = "SubCategory")]
    pub sub_category: String,
    pub total_sales: f64,
    pub total_profit: f64,
    pub profit_margin: f64,
}

impl ReportRow for MarginRow {
    const COLUMNS: &'static [&'static str] = &[
        "Region",
        "SubCategory",
        "total_sales",
        "total_profit",
        "profit_margin",
    ];
}

impl Aggregation for MarginByRegionSubCategory {
    type Key = (String, String);
    type Acc = MarginTotals;
    type Row = MarginRow;

    const NAME: &'static str = "margin";

    fn key(&self, record: &SalesRecord) -> Option<Self::Key> {
        pair_key(record.region(), record.sub_category())
    }

    fn update(&self, acc: &mut MarginTotals, record: &SalesRecord) {
        acc.total_sales += record.sales;
        acc.total_profit += record.profit;
    }

    fn finalize(&self, (region, sub_category): Self::Key, acc: MarginTotals) -> MarginRow {
        let margin = ratio_or_zero(acc.total_profit, acc.total_sales);
        MarginRow {
            region,
            sub_category,
            total_sales: round_to(acc.total_sales, CURRENCY_PLACES),
            total_profit: round_to(acc.total_profit, CURRENCY_PLACES),
            profit_margin: round_to(margin, RATIO_PLACES),
        }
    }
}

pub fn margin_by_region_subcategory(records: &[SalesRecord]) -> Vec<MarginRow> {
    aggregate(MarginByRegionSubCategory, records)
}
