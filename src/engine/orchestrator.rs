use tracing::info;

use crate::engine::record::{RawRecord, SalesRecord, normalize_all};
use crate::engine::reports::{
    DiscountImpactRow, LossRateRow, MarginRow, OrderValueRow, avg_order_value_by_region_segment,
    discount_impact_by_category, loss_pct_high_discount_by_state_segment,
    margin_by_region_subcategory,
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunOptions {
    /// Run the four reports on the rayon pool instead of one after another.
    pub parallel: bool,
}

/// The four report outputs of one run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReportSet {
    pub margin: Vec<MarginRow>,
    pub loss: Vec<LossRateRow>,
    pub aov: Vec<OrderValueRow>,
    pub discount: Vec<DiscountImpactRow>,
}

impl ReportSet {
    /// `(name, row count)` per report, in fixed order.
    pub fn summary(&self) -> [(&'static str, usize); 4] {
        [
            ("margin", self.margin.len()),
            ("loss", self.loss.len()),
            ("aov", self.aov.len()),
            ("discount", self.discount.len()),
        ]
    }

    pub fn is_empty(&self) -> bool {
        self.summary().iter().all(|(_, rows)| *rows == 0)
    }
}

pub fn run_reports(raw: &[RawRecord]) -> ReportSet {
    run_reports_with(raw, RunOptions::default())
}

/// Normalizes once, then runs every report over the shared typed records.
pub fn run_reports_with(raw: &[RawRecord], options: RunOptions) -> ReportSet {
    let records = normalize_all(raw);
    run_typed(&records, options)
}

pub fn run_typed(records: &[SalesRecord], options: RunOptions) -> ReportSet {
    let reports = if options.parallel {
        let ((margin, loss), (aov, discount)) = rayon::join(
            || {
                rayon::join(
                    || margin_by_region_subcategory(records),
                    || loss_pct_high_discount_by_state_segment(records),
                )
            },
            || {
                rayon::join(
                    || avg_order_value_by_region_segment(records),
                    || discount_impact_by_category(records),
                )
            },
        );
        ReportSet {
            margin,
            loss,
            aov,
            discount,
        }
    } else {
        ReportSet {
            margin: margin_by_region_subcategory(records),
            loss: loss_pct_high_discount_by_state_segment(records),
            aov: avg_order_value_by_region_segment(records),
            discount: discount_impact_by_category(records),
        }
    };

    info!(
        target: "superstore::reports",
        records = records.len(),
        parallel = options.parallel,
        margin = reports.margin.len(),
        loss = reports.loss.len(),
        aov = reports.aov.len(),
        discount = reports.discount.len(),
        "Reports computed"
    );
    reports
}
