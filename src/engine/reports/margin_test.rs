use crate::engine::record::field;
use crate::engine::reports::{MarginRow, margin_by_region_subcategory};
use crate::test_helpers::factories::SalesRecordFactory;
use crate::test_helpers::fixtures::reference_records;

fn find<'a>(rows: &'a [MarginRow], region: &str, sub: &str) -> &'a MarginRow {
    rows.iter()
        .find(|r| r.region == region && r.sub_category == sub)
        .expect("group present")
}

#[test]
fn margin_sums_sales_and_profit_per_group() {
    let rows = margin_by_region_subcategory(&reference_records());

    let east_chairs = find(&rows, "East", "Chairs");
    assert_eq!(east_chairs.total_sales, 200.0);
    assert_eq!(east_chairs.total_profit, 20.0);
    assert_eq!(east_chairs.profit_margin, 0.1);

    let west_tables = find(&rows, "West", "Tables");
    assert_eq!(west_tables.total_sales, 500.0);
    assert_eq!(west_tables.total_profit, -20.0);
    assert_eq!(west_tables.profit_margin, -0.04);

    let south_paper = find(&rows, "South", "Paper");
    assert_eq!(south_paper.total_profit, 0.0);
    assert_eq!(south_paper.profit_margin, 0.0);
}

#[test]
fn margin_rows_sorted_by_region_then_sub_category() {
    let rows = margin_by_region_subcategory(&reference_records());
    let keys: Vec<(&str, &str)> = rows
        .iter()
        .map(|r| (r.region.as_str(), r.sub_category.as_str()))
        .collect();
    assert_eq!(
        keys,
        vec![("East", "Chairs"), ("South", "Paper"), ("West", "Tables")]
    );
}

#[test]
fn margin_zero_sales_yields_zero_margin() {
    let records = vec![
        SalesRecordFactory::new()
            .with_region("X")
            .with_sub_category("Y")
            .with_sales(0.0)
            .with_profit(10.0)
            .create(),
    ];
    let rows = margin_by_region_subcategory(&records);
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].total_profit, 10.0);
    assert_eq!(rows[0].profit_margin, 0.0);
}

#[test]
fn margin_excludes_records_missing_labels() {
    let records = vec![
        SalesRecordFactory::new()
            .without(field::SUB_CATEGORY)
            .create(),
        SalesRecordFactory::new().with_region("").create(),
        SalesRecordFactory::new().without(field::REGION).create(),
    ];
    assert!(margin_by_region_subcategory(&records).is_empty());
}

#[test]
fn margin_rounds_totals_and_ratio() {
    let records = vec![
        SalesRecordFactory::new()
            .with_sales(100.004)
            .with_profit(33.3333)
            .create(),
        SalesRecordFactory::new()
            .with_sales(0.0)
            .with_profit(0.0)
            .create(),
    ];
    let rows = margin_by_region_subcategory(&records);
    assert_eq!(rows[0].total_sales, 100.0);
    assert_eq!(rows[0].total_profit, 33.33);
    assert_eq!(rows[0].profit_margin, 0.333320);
}
