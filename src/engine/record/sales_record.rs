/// Source column names.
pub mod field {
    pub const REGION: &str = "Region";
    pub const STATE: &str = "State";
    pub const SEGMENT: &str = "Segment";
    pub const CATEGORY: &str = "Category";
    pub const SUB_CATEGORY: &str = "Sub-Category";
    pub const SUB_CATEGORY_ALIAS: &str = "SubCategory";
    pub const SALES: &str = "Sales";
    pub const PROFIT: &str = "Profit";
    pub const DISCOUNT: &str = "Discount";
    pub const QUANTITY: &str = "Quantity";
}

/// A normalized sales line.
///
/// Numeric fields are always populated (zero when the source was missing or
/// malformed). Categorical fields are trimmed and stay `None` when absent;
/// emptiness is judged by each report's key extractor.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SalesRecord {
    pub region: Option<String>,
    pub state: Option<String>,
    pub segment: Option<String>,
    pub category: Option<String>,
    pub sub_category: Option<String>,
    pub sales: f64,
    pub profit: f64,
    pub discount: f64,
    pub quantity: i64,
}

impl SalesRecord {
    pub fn region(&self) -> Option<&str> {
        self.region.as_deref()
    }

    pub fn state(&self) -> Option<&str> {
        self.state.as_deref()
    }

    pub fn segment(&self) -> Option<&str> {
        self.segment.as_deref()
    }

    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    pub fn sub_category(&self) -> Option<&str> {
        self.sub_category.as_deref()
    }
}
