// SQLite-backed record store for filter changes

use crate::clock::{Clock, SystemClock};
use crate::error::StoreError;
use crate::record::{
    FilterChange, FilterChangeUpdate, NewFilterChange, UpdateOutcome, parse_change_date, parse_stored_date,
    require_text,
};
use rusqlite::{Connection, OptionalExtension, Row};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info, warn};

pub type Result<T> = std::result::Result<T, StoreError>;

/// Waits this long on a lock held by another process before failing
const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

const COLUMNS: &str = "id, location, size, product_number, change_date";

/// Persistent store of filter change records.
///
/// Holds only the database location and a clock. Every operation opens its own
/// connection and drops it before returning, so nothing is cached between calls.
pub struct Store {
    db_path: PathBuf,
    clock: Box<dyn Clock>,
}

impl Store {
    /// Open or create a store at the given database file, using the system clock
    pub fn open<P: AsRef<Path>>(db_path: P) -> Result<Self> {
        Self::open_with_clock(db_path, SystemClock)
    }

    /// Open or create a store whose default change date comes from `clock`
    pub fn open_with_clock<P: AsRef<Path>, C: Clock + 'static>(db_path: P, clock: C) -> Result<Self> {
        let db_path = db_path.as_ref().to_path_buf();

        if let Some(parent) = db_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        let store = Self {
            db_path,
            clock: Box::new(clock),
        };
        store.initialize()?;

        Ok(store)
    }

    /// Path of the SQLite database file
    pub fn db_path(&self) -> &Path {
        &self.db_path
    }

    fn connect(&self) -> Result<Connection> {
        let conn = Connection::open(&self.db_path)?;
        conn.busy_timeout(BUSY_TIMEOUT)?;
        Ok(conn)
    }

    /// Create the `filters` table if it does not exist yet
    pub fn initialize(&self) -> Result<()> {
        debug!(path = ?self.db_path, "Creating database schema");

        self.connect()?.execute_batch(
            r#"
            CREATE TABLE IF NOT EXISTS filters (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                location TEXT NOT NULL,
                size TEXT NOT NULL,
                product_number TEXT NOT NULL,
                change_date TEXT NOT NULL
            );

            CREATE INDEX IF NOT EXISTS idx_filters_location_date ON filters(location, change_date);
            "#,
        )?;

        Ok(())
    }

    // ========================================================================
    // CRUD
    // ========================================================================

    /// Record a new filter change and return its id
    pub fn create(&self, new: &NewFilterChange) -> Result<i64> {
        require_text("location", &new.location)?;
        require_text("size", &new.size)?;
        require_text("product_number", &new.product_number)?;

        let change_date = match new.change_date.as_deref() {
            Some(text) => parse_change_date(text)?,
            None => self.clock.today(),
        };

        let conn = self.connect()?;
        conn.execute(
            "INSERT INTO filters (location, size, product_number, change_date)
             VALUES (?1, ?2, ?3, ?4)",
            rusqlite::params![new.location, new.size, new.product_number, change_date],
        )?;
        let id = conn.last_insert_rowid();

        info!(id, location = %new.location, %change_date, "Recorded filter change");
        Ok(id)
    }

    /// Get a record by id
    pub fn get(&self, id: i64) -> Result<FilterChange> {
        self.connect()?
            .query_row(
                &format!("SELECT {COLUMNS} FROM filters WHERE id = ?1"),
                [id],
                StoredRow::read,
            )
            .optional()?
            .ok_or(StoreError::RecordNotFound(id))?
            .into_record()
    }

    /// Most recent change at `location`; the highest id wins a date tie
    pub fn find_latest_by_location(&self, location: &str) -> Result<FilterChange> {
        debug!(location, "find_latest_by_location: called");

        self.connect()?
            .query_row(
                &format!(
                    "SELECT {COLUMNS} FROM filters
                     WHERE location = ?1
                     ORDER BY change_date DESC, id DESC
                     LIMIT 1"
                ),
                [location],
                StoredRow::read,
            )
            .optional()?
            .ok_or_else(|| StoreError::LocationNotFound(location.to_string()))?
            .into_record()
    }

    /// Every record, by location ascending then newest change first
    pub fn list_all(&self) -> Result<Vec<FilterChange>> {
        self.query_all(&format!(
            "SELECT {COLUMNS} FROM filters
             ORDER BY location ASC, change_date DESC, id DESC"
        ))
    }

    /// Delete a record by id
    pub fn delete(&self, id: i64) -> Result<()> {
        let affected = self.connect()?.execute("DELETE FROM filters WHERE id = ?1", [id])?;

        if affected == 0 {
            return Err(StoreError::RecordNotFound(id));
        }

        info!(id, "Deleted filter change");
        Ok(())
    }

    /// Change the supplied fields of a record, leaving the rest as they are
    pub fn update(&self, id: i64, update: &FilterChangeUpdate) -> Result<UpdateOutcome> {
        let conn = self.connect()?;

        let exists = conn
            .query_row("SELECT 1 FROM filters WHERE id = ?1", [id], |_| Ok(()))
            .optional()?
            .is_some();
        if !exists {
            return Err(StoreError::RecordNotFound(id));
        }

        if update.is_empty() {
            debug!(id, "update: no fields supplied");
            return Ok(UpdateOutcome::NoChanges);
        }

        let mut assignments = Vec::new();
        let mut params: Vec<Box<dyn rusqlite::ToSql>> = Vec::new();

        for (column, value) in update.supplied() {
            if column == "change_date" {
                params.push(Box::new(parse_change_date(value)?));
            } else {
                params.push(Box::new(value.to_string()));
            }
            assignments.push(format!("{} = ?{}", column, params.len()));
        }

        params.push(Box::new(id));
        let query = format!(
            "UPDATE filters SET {} WHERE id = ?{}",
            assignments.join(", "),
            params.len()
        );

        let params_refs: Vec<&dyn rusqlite::ToSql> = params.iter().map(|p| p.as_ref()).collect();
        conn.execute(&query, params_refs.as_slice())?;

        info!(id, fields = assignments.len(), "Updated filter change");
        Ok(UpdateOutcome::Updated)
    }

    // ========================================================================
    // Aggregation and export
    // ========================================================================

    /// Latest record for every distinct location
    pub fn latest_per_location(&self) -> Result<BTreeMap<String, FilterChange>> {
        Ok(self
            .export_latest_per_location()?
            .into_iter()
            .map(|record| (record.location.clone(), record))
            .collect())
    }

    /// Same rows as [`Store::list_all`], for serialization
    pub fn export_all(&self) -> Result<Vec<FilterChange>> {
        self.list_all()
    }

    /// Latest record per location as a flat list ordered by location
    pub fn export_latest_per_location(&self) -> Result<Vec<FilterChange>> {
        self.query_all(&format!(
            "SELECT {COLUMNS} FROM (
                 SELECT {COLUMNS},
                        ROW_NUMBER() OVER (
                            PARTITION BY location
                            ORDER BY change_date DESC, id DESC
                        ) AS rn
                 FROM filters
             )
             WHERE rn = 1
             ORDER BY location ASC"
        ))
    }

    /// Insert the content of `records` with freshly assigned ids.
    ///
    /// All rows are validated before anything is written, and the inserts share
    /// one transaction. Returns the number of rows inserted.
    pub fn import(&self, records: &[FilterChange]) -> Result<usize> {
        for record in records {
            require_text("location", &record.location)?;
            require_text("size", &record.size)?;
            require_text("product_number", &record.product_number)?;
        }

        let mut conn = self.connect()?;
        let tx = conn.transaction()?;
        for record in records {
            tx.execute(
                "INSERT INTO filters (location, size, product_number, change_date)
                 VALUES (?1, ?2, ?3, ?4)",
                rusqlite::params![record.location, record.size, record.product_number, record.change_date],
            )?;
        }
        tx.commit()?;

        info!(count = records.len(), "Imported filter changes");
        Ok(records.len())
    }

    /// Run a multi-row query, leaving out rows whose date cannot be read
    fn query_all(&self, query: &str) -> Result<Vec<FilterChange>> {
        let conn = self.connect()?;
        let mut stmt = conn.prepare(query)?;
        let rows = stmt.query_map([], StoredRow::read)?;

        let mut results = Vec::new();
        for row_result in rows {
            match row_result?.into_record() {
                Ok(record) => results.push(record),
                Err(StoreError::UnreadableDate { id, value }) => {
                    warn!(id, change_date = %value, "Skipping record with unreadable change date");
                }
                Err(e) => return Err(e),
            }
        }
        Ok(results)
    }
}

/// A `filters` row as stored, before its date is interpreted
struct StoredRow {
    id: i64,
    location: String,
    size: String,
    product_number: String,
    change_date: String,
}

impl StoredRow {
    fn read(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            location: row.get(1)?,
            size: row.get(2)?,
            product_number: row.get(3)?,
            change_date: row.get(4)?,
        })
    }

    fn into_record(self) -> Result<FilterChange> {
        let Some(change_date) = parse_stored_date(&self.change_date) else {
            return Err(StoreError::UnreadableDate {
                id: self.id,
                value: self.change_date,
            });
        };

        Ok(FilterChange {
            id: self.id,
            location: self.location,
            size: self.size,
            product_number: self.product_number,
            change_date,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn open_store(temp: &TempDir) -> Store {
        Store::open_with_clock(temp.path().join("filters.db"), FixedClock(date("2024-06-15"))).unwrap()
    }

    fn add(store: &Store, location: &str, product: &str, change_date: &str) -> i64 {
        store
            .create(&NewFilterChange::new(location, "20x20", product).on(change_date))
            .unwrap()
    }

    #[test]
    fn test_open_creates_database_and_parent_directory() {
        let temp = TempDir::new().unwrap();
        let db_path = temp.path().join("nested/dir/filters.db");

        let store = Store::open(&db_path).unwrap();
        assert!(db_path.exists());
        assert_eq!(store.db_path(), db_path.as_path());
    }

    #[test]
    fn test_initialize_is_idempotent() {
        let temp = TempDir::new().unwrap();
        let store = open_store(&temp);
        let id = add(&store, "Kitchen", "ABC123", "2024-01-01");

        store.initialize().unwrap();
        let reopened = open_store(&temp);

        assert_eq!(reopened.get(id).unwrap().product_number, "ABC123");
    }

    #[test]
    fn test_create_defaults_to_clock_date() {
        let temp = TempDir::new().unwrap();
        let store = open_store(&temp);

        let id = store.create(&NewFilterChange::new("Kitchen", "20x20", "ABC123")).unwrap();

        let latest = store.find_latest_by_location("Kitchen").unwrap();
        assert_eq!(latest.id, id);
        assert_eq!(latest.size, "20x20");
        assert_eq!(latest.product_number, "ABC123");
        assert_eq!(latest.change_date, date("2024-06-15"));
    }

    #[test]
    fn test_create_assigns_increasing_ids_never_reused() {
        let temp = TempDir::new().unwrap();
        let store = open_store(&temp);

        let first = add(&store, "Kitchen", "A", "2024-01-01");
        let second = add(&store, "Kitchen", "B", "2024-01-01");
        assert!(second > first);

        store.delete(second).unwrap();
        let third = add(&store, "Kitchen", "C", "2024-01-01");
        assert!(third > second);
    }

    #[test]
    fn test_create_rejects_empty_fields() {
        let temp = TempDir::new().unwrap();
        let store = open_store(&temp);

        let cases = [
            (NewFilterChange::new("", "20x20", "ABC"), "location"),
            (NewFilterChange::new("Kitchen", " ", "ABC"), "size"),
            (NewFilterChange::new("Kitchen", "20x20", ""), "product_number"),
        ];

        for (new, expected_field) in cases {
            match store.create(&new) {
                Err(StoreError::Validation { field, .. }) => assert_eq!(field, expected_field),
                other => panic!("expected validation error, got {:?}", other),
            }
        }

        assert!(store.list_all().unwrap().is_empty());
    }

    #[test]
    fn test_create_rejects_malformed_date() {
        let temp = TempDir::new().unwrap();
        let store = open_store(&temp);

        let result = store.create(&NewFilterChange::new("Kitchen", "20x20", "ABC").on("01/02/2024"));
        assert!(matches!(result, Err(StoreError::Validation { field: "change_date", .. })));
        assert!(store.list_all().unwrap().is_empty());
    }

    #[test]
    fn test_find_latest_prefers_newest_date() {
        let temp = TempDir::new().unwrap();
        let store = open_store(&temp);

        add(&store, "Kitchen", "NEW", "2024-03-01");
        add(&store, "Kitchen", "OLD", "2023-12-01");

        assert_eq!(store.find_latest_by_location("Kitchen").unwrap().product_number, "NEW");
    }

    #[test]
    fn test_find_latest_tie_goes_to_highest_id() {
        let temp = TempDir::new().unwrap();
        let store = open_store(&temp);

        add(&store, "Kitchen", "ABC123", "2024-01-01");
        let second = add(&store, "Kitchen", "ABC999", "2024-01-01");

        let latest = store.find_latest_by_location("Kitchen").unwrap();
        assert_eq!(latest.id, second);
        assert_eq!(latest.product_number, "ABC999");
    }

    #[test]
    fn test_find_latest_is_exact_and_case_sensitive() {
        let temp = TempDir::new().unwrap();
        let store = open_store(&temp);
        add(&store, "Kitchen", "ABC", "2024-01-01");

        for miss in ["kitchen", "Kitchen ", "Kitch"] {
            let err = store.find_latest_by_location(miss).unwrap_err();
            assert!(matches!(err, StoreError::LocationNotFound(ref loc) if loc == miss));
        }
    }

    #[test]
    fn test_empty_store() {
        let temp = TempDir::new().unwrap();
        let store = open_store(&temp);

        assert!(store.list_all().unwrap().is_empty());
        assert!(store.latest_per_location().unwrap().is_empty());
        assert!(store.export_latest_per_location().unwrap().is_empty());
        assert!(store.find_latest_by_location("Anywhere").unwrap_err().is_not_found());
    }

    #[test]
    fn test_list_all_ordering() {
        let temp = TempDir::new().unwrap();
        let store = open_store(&temp);

        add(&store, "Office", "O1", "2024-02-01");
        add(&store, "Attic", "A1", "2023-05-01");
        add(&store, "Office", "O2", "2024-05-01");
        add(&store, "Attic", "A2", "2024-01-01");
        add(&store, "Office", "O3", "2023-01-01");

        let records = store.list_all().unwrap();
        let order: Vec<&str> = records.iter().map(|r| r.product_number.as_str()).collect();
        assert_eq!(order, vec!["A2", "A1", "O2", "O1", "O3"]);

        for pair in records.windows(2) {
            let (a, b) = (&pair[0], &pair[1]);
            assert!(a.location < b.location || (a.location == b.location && a.change_date >= b.change_date));
        }
    }

    #[test]
    fn test_list_all_same_date_orders_newest_insert_first() {
        let temp = TempDir::new().unwrap();
        let store = open_store(&temp);

        let first = add(&store, "Kitchen", "A", "2024-01-01");
        let second = add(&store, "Kitchen", "B", "2024-01-01");

        let ids: Vec<i64> = store.list_all().unwrap().iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![second, first]);
    }

    #[test]
    fn test_delete_removes_record() {
        let temp = TempDir::new().unwrap();
        let store = open_store(&temp);
        let id = add(&store, "Kitchen", "ABC", "2024-01-01");

        store.delete(id).unwrap();

        assert!(matches!(store.get(id), Err(StoreError::RecordNotFound(missing)) if missing == id));
        assert!(matches!(store.delete(id), Err(StoreError::RecordNotFound(_))));
        assert!(matches!(store.update(id, &FilterChangeUpdate::default()), Err(StoreError::RecordNotFound(_))));
    }

    #[test]
    fn test_delete_nonexistent_leaves_store_unchanged() {
        let temp = TempDir::new().unwrap();
        let store = open_store(&temp);
        add(&store, "Kitchen", "ABC", "2024-01-01");
        add(&store, "Garage", "XYZ", "2024-02-01");

        let before = store.list_all().unwrap();
        assert!(matches!(store.delete(9999), Err(StoreError::RecordNotFound(9999))));
        assert_eq!(store.list_all().unwrap(), before);
    }

    #[test]
    fn test_update_with_no_fields_is_noop() {
        let temp = TempDir::new().unwrap();
        let store = open_store(&temp);
        let id = add(&store, "Kitchen", "ABC", "2024-01-01");
        let before = store.get(id).unwrap();

        let blank = FilterChangeUpdate {
            location: Some(String::new()),
            ..Default::default()
        };
        assert_eq!(store.update(id, &FilterChangeUpdate::default()).unwrap(), UpdateOutcome::NoChanges);
        assert_eq!(store.update(id, &blank).unwrap(), UpdateOutcome::NoChanges);
        assert_eq!(store.get(id).unwrap(), before);
    }

    #[test]
    fn test_update_changes_only_supplied_fields() {
        let temp = TempDir::new().unwrap();
        let store = open_store(&temp);
        let id = add(&store, "Kitchen", "ABC", "2024-01-01");

        let update = FilterChangeUpdate {
            product_number: Some("XYZ789".to_string()),
            change_date: Some("2024-02-02".to_string()),
            ..Default::default()
        };
        assert_eq!(store.update(id, &update).unwrap(), UpdateOutcome::Updated);

        let after = store.get(id).unwrap();
        assert_eq!(after.id, id);
        assert_eq!(after.location, "Kitchen");
        assert_eq!(after.size, "20x20");
        assert_eq!(after.product_number, "XYZ789");
        assert_eq!(after.change_date, date("2024-02-02"));
    }

    #[test]
    fn test_update_unknown_id_is_not_found() {
        let temp = TempDir::new().unwrap();
        let store = open_store(&temp);

        let update = FilterChangeUpdate {
            size: Some("16x25".to_string()),
            ..Default::default()
        };
        assert!(matches!(store.update(42, &update), Err(StoreError::RecordNotFound(42))));
    }

    #[test]
    fn test_update_rejects_malformed_date_without_writing() {
        let temp = TempDir::new().unwrap();
        let store = open_store(&temp);
        let id = add(&store, "Kitchen", "ABC", "2024-01-01");
        let before = store.get(id).unwrap();

        let update = FilterChangeUpdate {
            size: Some("16x25".to_string()),
            change_date: Some("tomorrow".to_string()),
            ..Default::default()
        };
        assert!(matches!(store.update(id, &update), Err(StoreError::Validation { .. })));
        assert_eq!(store.get(id).unwrap(), before);
    }

    #[test]
    fn test_latest_per_location() {
        let temp = TempDir::new().unwrap();
        let store = open_store(&temp);

        add(&store, "Kitchen", "K-OLD", "2023-01-01");
        add(&store, "Kitchen", "K-TIE-1", "2024-01-01");
        let kitchen_latest = add(&store, "Kitchen", "K-TIE-2", "2024-01-01");
        add(&store, "Kitchen", "K-TIE-3-EARLIER", "2023-12-31");
        let garage = add(&store, "Garage", "G1", "2022-07-04");

        let latest = store.latest_per_location().unwrap();
        assert_eq!(latest.len(), 2);
        assert_eq!(latest["Kitchen"].id, kitchen_latest);
        assert_eq!(latest["Garage"].id, garage);

        let exported = store.export_latest_per_location().unwrap();
        let locations: Vec<&str> = exported.iter().map(|r| r.location.as_str()).collect();
        assert_eq!(locations, vec!["Garage", "Kitchen"]);
        assert_eq!(exported[1].id, kitchen_latest);

        assert_eq!(store.find_latest_by_location("Kitchen").unwrap().id, kitchen_latest);
    }

    #[test]
    fn test_export_all_matches_list_all() {
        let temp = TempDir::new().unwrap();
        let store = open_store(&temp);
        add(&store, "B", "1", "2024-01-01");
        add(&store, "A", "2", "2024-01-02");

        assert_eq!(store.export_all().unwrap(), store.list_all().unwrap());
    }

    #[test]
    fn test_import_reassigns_ids_and_keeps_content() {
        let source_dir = TempDir::new().unwrap();
        let source = open_store(&source_dir);
        add(&source, "Kitchen", "ABC", "2024-01-01");
        add(&source, "Garage", "XYZ", "2023-06-30");
        add(&source, "Kitchen", "DEF", "2024-03-01");
        let exported = source.export_all().unwrap();

        let target_dir = TempDir::new().unwrap();
        let target = open_store(&target_dir);
        add(&target, "Existing", "E1", "2020-01-01");

        assert_eq!(target.import(&exported).unwrap(), 3);

        let mut expected: Vec<_> = exported.iter().map(|r| r.content()).collect();
        expected.push(("Existing", "20x20", "E1", date("2020-01-01")));
        expected.sort();
        let imported = target.list_all().unwrap();
        let mut actual: Vec<_> = imported.iter().map(|r| r.content()).collect();
        actual.sort();
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_import_is_all_or_nothing() {
        let temp = TempDir::new().unwrap();
        let store = open_store(&temp);

        let good = FilterChange {
            id: 1,
            location: "Kitchen".to_string(),
            size: "20x20".to_string(),
            product_number: "ABC".to_string(),
            change_date: date("2024-01-01"),
        };
        let bad = FilterChange {
            product_number: String::new(),
            ..good.clone()
        };

        assert!(matches!(store.import(&[good, bad]), Err(StoreError::Validation { .. })));
        assert!(store.list_all().unwrap().is_empty());
    }

    fn insert_raw(store: &Store, location: &str, product: &str, change_date: &str) -> i64 {
        let conn = Connection::open(store.db_path()).unwrap();
        conn.execute(
            "INSERT INTO filters (location, size, product_number, change_date) VALUES (?1, '16x25', ?2, ?3)",
            rusqlite::params![location, product, change_date],
        )
        .unwrap();
        conn.last_insert_rowid()
    }

    #[test]
    fn test_legacy_dates_are_readable() {
        let temp = TempDir::new().unwrap();
        let store = open_store(&temp);
        let kitchen = add(&store, "Kitchen", "A", "2024-02-01");
        let garage = insert_raw(&store, "Garage", "B", "01/05/2024");

        let records = store.list_all().unwrap();
        let ids: Vec<i64> = records.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![garage, kitchen]);
        assert_eq!(records[0].change_date, date("2024-01-05"));

        let latest = store.latest_per_location().unwrap();
        assert_eq!(latest.len(), 2);
        assert_eq!(store.find_latest_by_location("Garage").unwrap().id, garage);
        assert_eq!(store.export_latest_per_location().unwrap().len(), 2);
    }

    #[test]
    fn test_unreadable_date_skipped_in_lists_and_fixable_by_id() {
        let temp = TempDir::new().unwrap();
        let store = open_store(&temp);
        let kitchen = add(&store, "Kitchen", "A", "2024-02-01");
        let broken = insert_raw(&store, "Garage", "B", "last spring");

        let ids: Vec<i64> = store.list_all().unwrap().iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![kitchen]);
        assert_eq!(store.export_all().unwrap().len(), 1);
        assert!(!store.latest_per_location().unwrap().contains_key("Garage"));

        assert!(matches!(
            store.get(broken),
            Err(StoreError::UnreadableDate { id, ref value }) if id == broken && value == "last spring"
        ));
        assert!(matches!(
            store.find_latest_by_location("Garage"),
            Err(StoreError::UnreadableDate { .. })
        ));

        let fix = FilterChangeUpdate {
            change_date: Some("2024-03-01".to_string()),
            ..Default::default()
        };
        assert_eq!(store.update(broken, &fix).unwrap(), UpdateOutcome::Updated);
        assert_eq!(store.get(broken).unwrap().change_date, date("2024-03-01"));

        let other = insert_raw(&store, "Shed", "C", "??");
        store.delete(other).unwrap();
        assert!(matches!(store.get(other), Err(StoreError::RecordNotFound(_))));
    }

    #[test]
    fn test_open_unwritable_location_is_storage_error() {
        let temp = TempDir::new().unwrap();
        let blocker = temp.path().join("not-a-dir");
        fs::write(&blocker, "file").unwrap();

        let err = Store::open(blocker.join("filters.db")).err().unwrap();
        assert_eq!(err.exit_code(), crate::error::ExitStatus::Storage);
    }
}
