use crate::engine::record::RawRecord;
use indexmap::IndexMap;
use serde_json::{Value, json};

/// Builds raw CSV-like lines. Defaults to a complete, well-formed row.
pub struct RawRecordFactory {
    params: IndexMap<String, Value>,
}

impl RawRecordFactory {
    pub fn new() -> Self {
        let mut params = IndexMap::new();
        params.insert("Region".into(), json!("East"));
        params.insert("State".into(), json!("New York"));
        params.insert("Segment".into(), json!("Consumer"));
        params.insert("Category".into(), json!("Furniture"));
        params.insert("Sub-Category".into(), json!("Chairs"));
        params.insert("Sales".into(), json!("200"));
        params.insert("Profit".into(), json!("20"));
        params.insert("Discount".into(), json!("0.1"));
        params.insert("Quantity".into(), json!("4"));
        Self { params }
    }

    /// Starts from a line with no fields at all.
    pub fn empty() -> Self {
        Self {
            params: IndexMap::new(),
        }
    }

    pub fn with(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.params.insert(key.to_string(), value.into());
        self
    }

    pub fn without(mut self, key: &str) -> Self {
        self.params.shift_remove(key);
        self
    }

    pub fn create(self) -> RawRecord {
        self.params.into_iter().collect()
    }

    pub fn create_list(self, count: usize) -> Vec<RawRecord> {
        (0..count)
            .map(|i| {
                let mut record: RawRecord = self.params.clone().into_iter().collect();
                record.insert("Row ID", json!(i + 1));
                record
            })
            .collect()
    }
}
