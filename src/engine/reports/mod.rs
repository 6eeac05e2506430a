pub mod discount_impact;
pub mod discount_tier;
pub mod loss_rate;
pub mod margin;
pub mod order_value;

use serde::Serialize;

pub use discount_impact::{
    DiscountImpactByCategory, DiscountImpactRow, discount_impact_by_category,
};
pub use discount_tier::{DiscountTier, discount_tier};
pub use loss_rate::{
    LossRateByStateSegment, LossRateRow, loss_pct_high_discount_by_state_segment,
};
pub use margin::{MarginByRegionSubCategory, MarginRow, margin_by_region_subcategory};
pub use order_value::{
    OrderValueByRegionSegment, OrderValueRow, avg_order_value_by_region_segment,
};

/// An output row with a fixed column order.
///
/// `COLUMNS` matches the serialized field order of the row.
pub trait ReportRow: Serialize {
    const COLUMNS: &'static [&'static str];
}

#[cfg(test)]
mod margin_test;
