// Console rendering of store results

use crate::record::FilterChange;
use colored::Colorize;
use eyre::Result;
use serde::Serialize;
use std::collections::BTreeMap;

/// One-line answer for `check`
pub fn last_change(record: &FilterChange) -> String {
    format!(
        "The filter at '{}' was last changed on {} using product '{}'.",
        record.location,
        record.change_date_str(),
        record.product_number
    )
}

/// Fixed-width table of every record
pub fn record_table(records: &[FilterChange]) -> String {
    if records.is_empty() {
        return "No filter change records found.".to_string();
    }

    let header = format!(
        "{:<4} {:<20} {:<10} {:<15} {:<12}",
        "ID", "Location", "Size", "Product #", "Change Date"
    );
    let mut lines = vec![header.bold().to_string(), "-".repeat(70)];

    for record in records {
        lines.push(format!(
            "{:<4} {:<20} {:<10} {:<15} {:<12}",
            record.id,
            record.location,
            record.size,
            record.product_number,
            record.change_date_str()
        ));
    }

    lines.join("\n")
}

/// Table of the latest change at each location
pub fn latest_table(latest: &BTreeMap<String, FilterChange>) -> String {
    if latest.is_empty() {
        return "No records found.".to_string();
    }

    let header = format!("{:<20} {:<12}", "Location", "Last Change Date");
    let mut lines = vec![header.bold().to_string(), "-".repeat(35)];

    for (location, record) in latest {
        lines.push(format!(
            "{:<20} {:<12} (Product: {})",
            location,
            record.change_date_str(),
            record.product_number
        ));
    }

    lines.join("\n")
}

/// Pretty JSON for `--json` output
pub fn json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}
