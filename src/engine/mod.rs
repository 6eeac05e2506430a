pub mod aggregate;
pub mod orchestrator;
pub mod record;
pub mod reports;

pub use orchestrator::{ReportSet, RunOptions, run_reports, run_reports_with, run_typed};
