//! Example 01: Basic Usage
//!
//! Records a few filter changes, edits one, and reads them back with the
//! list and "latest per location" queries.
//!
//! Run with: cargo run --example 01_basic_usage

use chrono::NaiveDate;
use eyre::Result;
use filtertrack::{FilterChangeUpdate, FixedClock, NewFilterChange, Store, UpdateOutcome, export, render};

fn main() -> Result<()> {
    // Create a temporary directory for this example
    let temp_dir = tempfile::tempdir()?;
    let db_path = temp_dir.path().join("filters.db");

    println!("FilterTrack Basic Usage Example");
    println!("===============================\n");
    println!("Database: {}\n", db_path.display());

    // A fixed clock makes "today" predictable for records added without a date
    let today = NaiveDate::from_ymd_opt(2024, 6, 1).ok_or_else(|| eyre::eyre!("invalid date"))?;
    let store = Store::open_with_clock(&db_path, FixedClock(today))?;

    // CREATE
    println!("1. CREATE - Recording filter changes...");
    store.create(&NewFilterChange::new("Kitchen", "20x20x1", "ABC123").on("2024-01-01"))?;
    let kitchen = store.create(&NewFilterChange::new("Kitchen", "20x20x1", "ABC999").on("2024-01-01"))?;
    let furnace = store.create(&NewFilterChange::new("Furnace", "16x25x4", "MERV11"))?;
    println!("   Kitchen latest is ID {}, furnace is ID {}\n", kitchen, furnace);

    // CHECK
    println!("2. CHECK - Latest change in the kitchen...");
    let latest = store.find_latest_by_location("Kitchen")?;
    println!("   {}\n", render::last_change(&latest));

    // EDIT
    println!("3. EDIT - Correcting the furnace filter size...");
    let update = FilterChangeUpdate {
        size: Some("16x25x5".to_string()),
        ..Default::default()
    };
    if store.update(furnace, &update)? == UpdateOutcome::Updated {
        println!("   Record {} updated\n", furnace);
    }

    // LIST
    println!("4. LIST - Every record:");
    println!("{}\n", render::record_table(&store.list_all()?));

    println!("5. LAST CHANGES - One row per location:");
    println!("{}\n", render::latest_table(&store.latest_per_location()?));

    // EXPORT
    let csv_path = temp_dir.path().join("last.csv");
    let rows = export::write_csv(&csv_path, &store.export_latest_per_location()?)?;
    println!("6. EXPORT - Wrote {} rows to {}", rows, csv_path.display());

    // DELETE
    store.delete(kitchen)?;
    println!("7. DELETE - Removed ID {}; {} records remain", kitchen, store.list_all()?.len());

    Ok(())
}
