use crate::engine::record::{SalesRecord, field};

/// Builds typed records directly, bypassing normalization.
pub struct SalesRecordFactory {
    record: SalesRecord,
}

impl SalesRecordFactory {
    pub fn new() -> Self {
        Self {
            record: SalesRecord {
                region: Some("East".into()),
                state: Some("New York".into()),
                segment: Some("Consumer".into()),
                category: Some("Furniture".into()),
                sub_category: Some("Chairs".into()),
                sales: 200.0,
                profit: 20.0,
                discount: 0.1,
                quantity: 4,
            },
        }
    }

    pub fn with_region(mut self, region: &str) -> Self {
        self.record.region = Some(region.to_string());
        self
    }

    pub fn with_state(mut self, state: &str) -> Self {
        self.record.state = Some(state.to_string());
        self
    }

    pub fn with_segment(mut self, segment: &str) -> Self {
        self.record.segment = Some(segment.to_string());
        self
    }

    pub fn with_category(mut self, category: &str) -> Self {
        self.record.category = Some(category.to_string());
        self
    }

    pub fn with_sub_category(mut self, sub_category: &str) -> Self {
        self.record.sub_category = Some(sub_category.to_string());
        self
    }

    /// Clears a categorical field, named by its source column.
    pub fn without(mut self, name: &str) -> Self {
        match name {
            field::REGION => self.record.region = None,
            field::STATE => self.record.state = None,
            field::SEGMENT => self.record.segment = None,
            field::CATEGORY => self.record.category = None,
            field::SUB_CATEGORY | field::SUB_CATEGORY_ALIAS => self.record.sub_category = None,
            other => panic!("not a categorical field: {other}"),
        }
        self
    }

    pub fn with_sales(mut self, sales: f64) -> Self {
        self.record.sales = sales;
        self
    }

    pub fn with_profit(mut self, profit: f64) -> Self {
        self.record.profit = profit;
        self
    }

    pub fn with_discount(mut self, discount: f64) -> Self {
        self.record.discount = discount;
        self
    }

    pub fn with_quantity(mut self, quantity: i64) -> Self {
        self.record.quantity = quantity;
        self
    }

    pub fn create(self) -> SalesRecord {
        self.record
    }

    pub fn create_list(self, count: usize) -> Vec<SalesRecord> {
        vec![self.record; count]
    }
}
