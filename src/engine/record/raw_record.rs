use indexmap::IndexMap;
use serde_json::Value;

/// Ordered field map as read from the source, values still untyped.
pub type RawFields = IndexMap<String, Value>;

/// One input line before normalization.
///
/// Values are kept as JSON scalars so that in-memory fixtures can hand in
/// numbers directly while the CSV reader hands in strings. A field that is
/// present with a `Null` value is distinct from a field that is absent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawRecord {
    fields: RawFields,
}

impl RawRecord {
    pub fn new() -> Self {
        Self {
            fields: RawFields::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            fields: RawFields::with_capacity(capacity),
        }
    }

    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<Value>) {
        self.fields.insert(field.into(), value.into());
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn fields(&self) -> &RawFields {
        &self.fields
    }
}

impl<K, V> FromIterator<(K, V)> for RawRecord
where
    K: Into<String>,
    V: Into<Value>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut record = RawRecord::new();
        for (k, v) in iter {
            record.insert(k, v);
        }
        record
    }
}

impl From<serde_json::Map<String, Value>> for RawRecord {
    fn from(map: serde_json::Map<String, Value>) -> Self {
        map.into_iter().collect()
    }
}
