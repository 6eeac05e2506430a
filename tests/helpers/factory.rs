pub use super::factories::{RawRecordFactory, SalesRecordFactory};

pub struct Factory;

impl Factory {
    pub fn raw_record() -> RawRecordFactory {
        RawRecordFactory::new()
    }

    pub fn sales_record() -> SalesRecordFactory {
        SalesRecordFactory::new()
    }
}
