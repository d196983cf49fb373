// CSV export and import of filter change records

use crate::record::{FilterChange, parse_change_date};
use eyre::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info};

/// Header row written at the top of every export
pub const CSV_HEADER: [&str; 5] = ["ID", "Location", "Size", "Product Number", "Change Date"];

#[derive(Debug, Serialize, Deserialize)]
struct CsvRow {
    #[serde(rename = "ID")]
    id: i64,
    #[serde(rename = "Location")]
    location: String,
    #[serde(rename = "Size")]
    size: String,
    #[serde(rename = "Product Number")]
    product_number: String,
    #[serde(rename = "Change Date")]
    change_date: String,
}

impl From<&FilterChange> for CsvRow {
    fn from(record: &FilterChange) -> Self {
        Self {
            id: record.id,
            location: record.location.clone(),
            size: record.size.clone(),
            product_number: record.product_number.clone(),
            change_date: record.change_date_str(),
        }
    }
}

/// Write `records` to a CSV file at `path`, replacing it. Returns the row count.
pub fn write_csv(path: &Path, records: &[FilterChange]) -> Result<usize> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(path)
        .with_context(|| format!("Failed to create CSV file {}", path.display()))?;

    writer.write_record(CSV_HEADER)?;
    for record in records {
        writer.serialize(CsvRow::from(record))?;
    }
    writer.flush().context("Failed to flush CSV file")?;

    info!(path = ?path, rows = records.len(), "Wrote CSV export");
    Ok(records.len())
}

/// Read records from a CSV file written by [`write_csv`]
pub fn read_csv(path: &Path) -> Result<Vec<FilterChange>> {
    let mut reader =
        csv::Reader::from_path(path).with_context(|| format!("Failed to open CSV file {}", path.display()))?;

    let mut records = Vec::new();
    for (index, result) in reader.deserialize::<CsvRow>().enumerate() {
        // Header is line 1
        let line = index + 2;
        let row = result.with_context(|| format!("Malformed CSV row at line {}", line))?;
        let change_date =
            parse_change_date(&row.change_date).with_context(|| format!("Bad change date at line {}", line))?;

        records.push(FilterChange {
            id: row.id,
            location: row.location,
            size: row.size,
            product_number: row.product_number,
            change_date,
        });
    }

    debug!(path = ?path, rows = records.len(), "Read CSV file");
    Ok(records)
}
