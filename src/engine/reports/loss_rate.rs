use serde::Serialize;

use super::ReportRow;
use crate::engine::aggregate::finalization::{RATIO_PLACES, ratio_or_zero, round_to};
use crate::engine::aggregate::group_key::pair_key;
use crate::engine::aggregate::{Aggregation, aggregate};
use crate::engine::record::SalesRecord;

/// Lines at or above this discount count as high-discount.
pub const HIGH_DISCOUNT_THRESHOLD: f64 = 0.20;

/// Share of loss-making lines among high-discount lines per (State, Segment).
#[derive(Debug, Clone, Copy, Default)]
pub struct LossRateByStateSegment;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LossCounts {
    pub num_lines: u64,
    pub num_losses: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LossRateRow {
    #[serde(rename = "State")]
    pub state: String,
    #[serde(rename = "Segment")]
    pub segment: String,
    pub num_lines: u64,
    pub num_losses: u64,
    pub loss_pct: f64,
}

impl ReportRow for LossRateRow {
    const COLUMNS: &'static [&'static str] =
        &["State", "Segment", "num_lines", "num_losses", "loss_pct"];
}

impl Aggregation for LossRateByStateSegment {
    type Key = (String, String);
    type Acc = LossCounts;
    type Row = LossRateRow;

    const NAME: &'static str = "loss";

    fn admits(&self, record: &SalesRecord) -> bool {
        // Negated `<` so a NaN discount is admitted rather than dropped
        !(record.discount < HIGH_DISCOUNT_THRESHOLD)
    }

    fn key(&self, record: &SalesRecord) -> Option<Self::Key> {
        pair_key(record.state(), record.segment())
    }

    fn update(&self, acc: &mut LossCounts, record: &SalesRecord) {
        acc.num_lines += 1;
        if record.profit < 0.0 {
            acc.num_losses += 1;
        }
    }

    fn finalize(&self, (state, segment): Self::Key, acc: LossCounts) -> LossRateRow {
        let loss_pct = ratio_or_zero(acc.num_losses as f64, acc.num_lines as f64);
        LossRateRow {
            state,
            segment,
            num_lines: acc.num_lines,
            num_losses: acc.num_losses,
            loss_pct: round_to(loss_pct, RATIO_PLACES),
        }
    }
}

pub fn loss_pct_high_discount_by_state_segment(records: &[SalesRecord]) -> Vec<LossRateRow> {
    aggregate(LossRateByStateSegment, records)
}
