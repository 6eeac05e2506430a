pub mod errors;
pub mod reader;
pub mod writer;

pub use errors::IoError;
pub use reader::{read_records, read_records_from};
pub use writer::{write_report_set, write_rows, write_rows_to};
