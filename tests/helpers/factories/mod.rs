pub mod raw_record_factory;
pub mod sales_record_factory;

pub use raw_record_factory::RawRecordFactory;
pub use sales_record_factory::SalesRecordFactory;

#[cfg(test)]
mod raw_record_factory_test;
#[cfg(test)]
mod sales_record_factory_test;
