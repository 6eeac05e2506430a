use super::factories::SalesRecordFactory;
use crate::engine::record::SalesRecord;

/// The six-line reference dataset shared by the report tests.
pub fn reference_records() -> Vec<SalesRecord> {
    vec![
        SalesRecordFactory::new()
            .with_region("East")
            .with_sub_category("Chairs")
            .with_sales(200.0)
            .with_profit(20.0)
            .with_quantity(4)
            .with_discount(0.1)
            .with_state("New York")
            .with_segment("Consumer")
            .with_category("Furniture")
            .create(),
        SalesRecordFactory::new()
            .with_region("East")
            .with_sub_category("Chairs")
            .with_sales(0.0)
            .with_profit(0.0)
            .with_quantity(2)
            .with_discount(0.0)
            .with_state("New York")
            .with_segment("Consumer")
            .with_category("Furniture")
            .create(),
        SalesRecordFactory::new()
            .with_region("West")
            .with_sub_category("Tables")
            .with_sales(300.0)
            .with_profit(-30.0)
            .with_quantity(3)
            .with_discount(0.25)
            .with_state("California")
            .with_segment("Corporate")
            .with_category("Furniture")
            .create(),
        SalesRecordFactory::new()
            .with_region("West")
            .with_sub_category("Tables")
            .with_sales(200.0)
            .with_profit(10.0)
            .with_quantity(1)
            .with_discount(0.5)
            .with_state("California")
            .with_segment("Corporate")
            .with_category("Furniture")
            .create(),
        SalesRecordFactory::new()
            .with_region("South")
            .with_sub_category("Paper")
            .with_sales(100.0)
            .with_profit(50.0)
            .with_quantity(10)
            .with_discount(0.0)
            .with_state("Texas")
            .with_segment("Home Office")
            .with_category("Office Supplies")
            .create(),
        SalesRecordFactory::new()
            .with_region("South")
            .with_sub_category("Paper")
            .with_sales(100.0)
            .with_profit(-50.0)
            .with_quantity(10)
            .with_discount(0.2)
            .with_state("Texas")
            .with_segment("Home Office")
            .with_category("Office Supplies")
            .create(),
    ]
}
