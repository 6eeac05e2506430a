use std::cmp::Ordering;
use std::fmt;

use serde::{Serialize, Serializer};

pub const LOW_TIER_FLOOR: f64 = 0.20;
pub const HIGH_TIER_FLOOR: f64 = 0.40;

/// Discount band of a sales line.
///
/// Ordering follows the label text (`High < Low < Medium < None`), not the
/// size of the discount, so sorted output matches a plain string sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiscountTier {
    None,
    Low,
    Medium,
    High,
}

impl DiscountTier {
    /// `d <= 0` → None, `d < 0.20` → Low, `d < 0.40` → Medium, otherwise High.
    ///
    /// NaN falls through every comparison and lands in High.
    pub fn classify(discount: f64) -> Self {
        if discount <= 0.0 {
            DiscountTier::None
        } else if discount < LOW_TIER_FLOOR {
            DiscountTier::Low
        } else if discount < HIGH_TIER_FLOOR {
            DiscountTier::Medium
        } else {
            DiscountTier::High
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DiscountTier::None => "None",
            DiscountTier::Low => "Low",
            DiscountTier::Medium => "Medium",
            DiscountTier::High => "High",
        }
    }
}

/// Tier of an optional discount; a missing discount is no discount.
pub fn discount_tier(discount: Option<f64>) -> DiscountTier {
    discount.map_or(DiscountTier::None, DiscountTier::classify)
}

impl Ord for DiscountTier {
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_str().cmp(other.as_str())
    }
}

impl PartialOrd for DiscountTier {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for DiscountTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for DiscountTier {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}
