use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use csv::WriterBuilder;
use tracing::{debug, info};

use super::errors::IoError;
use crate::engine::ReportSet;
use crate::engine::reports::ReportRow;

pub const MARGIN_FILE: &str = "margin_by_region_subcategory.csv";
pub const LOSS_FILE: &str = "loss_pct_high_discount_by_state_segment.csv";
pub const AOV_FILE: &str = "avg_order_value_by_region_segment.csv";
pub const DISCOUNT_FILE: &str = "discount_impact_by_category.csv";

/// Writes rows as CSV with a header line, even when `rows` is empty.
pub fn write_rows_to<W: Write, T: ReportRow>(writer: W, rows: &[T]) -> Result<(), IoError> {
    let mut wtr = WriterBuilder::new().has_headers(false).from_writer(writer);
    wtr.write_record(T::COLUMNS)?;
    for row in rows {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn write_rows<T: ReportRow>(path: impl AsRef<Path>, rows: &[T]) -> Result<(), IoError> {
    let path = path.as_ref();
    let file = File::create(path).map_err(|source| IoError::Create {
        path: path.to_path_buf(),
        source,
    })?;
    write_rows_to(file, rows)?;
    debug!(
        target: "superstore::io",
        path = %path.display(),
        rows = rows.len(),
        "Wrote report file"
    );
    Ok(())
}

/// Writes all four reports into `dir`, creating it if needed.
///
/// Returns the written paths in margin, loss, aov, discount order.
pub fn write_report_set(
    dir: impl AsRef<Path>,
    reports: &ReportSet,
) -> Result<Vec<PathBuf>, IoError> {
    let dir = dir.as_ref();
    fs::create_dir_all(dir).map_err(|source| IoError::Create {
        path: dir.to_path_buf(),
        source,
    })?;

    let paths = vec![
        dir.join(MARGIN_FILE),
        dir.join(LOSS_FILE),
        dir.join(AOV_FILE),
        dir.join(DISCOUNT_FILE),
    ];
    write_rows(&paths[0], &reports.margin)?;
    write_rows(&paths[1], &reports.loss)?;
    write_rows(&paths[2], &reports.aov)?;
    write_rows(&paths[3], &reports.discount)?;

    info!(
        target: "superstore::io",
        dir = %dir.display(),
        files = paths.len(),
        "Wrote report set"
    );
    Ok(paths)
}
