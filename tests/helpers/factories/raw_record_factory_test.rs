use crate::test_helpers::factory::Factory;
use serde_json::json;

#[test]
fn test_raw_record_factory() {
    let record = Factory::raw_record()
        .with("Region", "  West ")
        .with("Quantity", json!(3))
        .without("Discount")
        .create();

    assert_eq!(record.get("Region"), Some(&json!("  West ")));
    assert_eq!(record.get("Quantity"), Some(&json!(3)));
    assert!(!record.contains("Discount"));
    assert!(record.contains("Sub-Category"));
}

#[test]
fn test_raw_record_factory_list() {
    let records = Factory::raw_record().create_list(3);
    assert_eq!(records.len(), 3);
    assert_eq!(records[2].get("Row ID"), Some(&json!(3)));
}
