use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::ReaderBuilder;
use serde_json::Value;
use tracing::{debug, info};

use super::errors::IoError;
use crate::engine::record::RawRecord;

/// Reads every data row of a headed CSV file.
pub fn read_records(path: impl AsRef<Path>) -> Result<Vec<RawRecord>, IoError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| IoError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let records = read_records_from(file)?;
    info!(
        target: "superstore::io",
        path = %path.display(),
        rows = records.len(),
        "Loaded input rows"
    );
    Ok(records)
}

/// Reads headed CSV from any reader.
///
/// Each row maps header → raw string. A row shorter than the header gets
/// `Null` for the missing trailing fields; cells past the header are dropped.
pub fn read_records_from<R: Read>(reader: R) -> Result<Vec<RawRecord>, IoError> {
    let mut rdr = ReaderBuilder::new().flexible(true).from_reader(reader);
    let headers = rdr.headers()?.clone();

    let mut out = Vec::new();
    for result in rdr.records() {
        let row = result?;
        let mut record = RawRecord::with_capacity(headers.len());
        for (idx, name) in headers.iter().enumerate() {
            match row.get(idx) {
                Some(value) => record.insert(name, value),
                None => record.insert(name, Value::Null),
            }
        }
        out.push(record);
    }

    debug!(
        target: "superstore::io",
        columns = headers.len(),
        rows = out.len(),
        "Parsed CSV rows"
    );
    Ok(out)
}
