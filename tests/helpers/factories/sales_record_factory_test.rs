use crate::engine::record::field;
use crate::test_helpers::factory::Factory;

#[test]
fn test_sales_record_factory() {
    let record = Factory::sales_record()
        .with_region("West")
        .with_discount(0.25)
        .with_quantity(7)
        .without(field::SEGMENT)
        .create();

    assert_eq!(record.region(), Some("West"));
    assert_eq!(record.segment(), None);
    assert_eq!(record.discount, 0.25);
    assert_eq!(record.quantity, 7);
    assert_eq!(record.category(), Some("Furniture"));
}
