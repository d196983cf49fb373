// Filter change records and their inputs

use crate::error::StoreError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Date format used for `change_date` everywhere: storage, CSV and console
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A persisted maintenance event
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterChange {
    pub id: i64,
    pub location: String,
    pub size: String,
    pub product_number: String,
    pub change_date: NaiveDate,
}

impl FilterChange {
    /// `change_date` as `YYYY-MM-DD`
    pub fn change_date_str(&self) -> String {
        self.change_date.format(DATE_FORMAT).to_string()
    }

    /// Everything except the store-assigned id
    pub fn content(&self) -> (&str, &str, &str, NaiveDate) {
        (&self.location, &self.size, &self.product_number, self.change_date)
    }
}

/// Input for [`crate::Store::create`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewFilterChange {
    pub location: String,
    pub size: String,
    pub product_number: String,
    /// `YYYY-MM-DD`; the store's clock supplies today when absent
    pub change_date: Option<String>,
}

impl NewFilterChange {
    pub fn new(location: impl Into<String>, size: impl Into<String>, product_number: impl Into<String>) -> Self {
        Self {
            location: location.into(),
            size: size.into(),
            product_number: product_number.into(),
            change_date: None,
        }
    }

    pub fn on(mut self, change_date: impl Into<String>) -> Self {
        self.change_date = Some(change_date.into());
        self
    }
}

/// Subset of fields to change on an existing record.
///
/// Fields left as `None` or set to an empty string keep their stored value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterChangeUpdate {
    pub location: Option<String>,
    pub size: Option<String>,
    pub product_number: Option<String>,
    pub change_date: Option<String>,
}

impl FilterChangeUpdate {
    /// True when no field would change
    pub fn is_empty(&self) -> bool {
        self.supplied().next().is_none()
    }

    /// Supplied (non-empty) fields as `(column, value)` pairs
    pub(crate) fn supplied(&self) -> impl Iterator<Item = (&'static str, &str)> {
        [
            ("location", self.location.as_deref()),
            ("size", self.size.as_deref()),
            ("product_number", self.product_number.as_deref()),
            ("change_date", self.change_date.as_deref()),
        ]
        .into_iter()
        .filter_map(|(column, value)| value.filter(|v| !v.trim().is_empty()).map(|v| (column, v)))
    }
}

/// Result of a successful [`crate::Store::update`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateOutcome {
    Updated,
    /// Nothing was supplied to change; the record is untouched
    NoChanges,
}

/// Reject empty or whitespace-only required text
pub(crate) fn require_text(field: &'static str, value: &str) -> Result<(), StoreError> {
    if value.trim().is_empty() {
        return Err(StoreError::validation(field, "must not be empty"));
    }
    Ok(())
}

/// Parse a strict `YYYY-MM-DD` date
pub fn parse_change_date(value: &str) -> Result<NaiveDate, StoreError> {
    let invalid = || StoreError::validation("change_date", format!("expected YYYY-MM-DD, got '{}'", value));

    let date = NaiveDate::parse_from_str(value, DATE_FORMAT).map_err(|_| invalid())?;

    // chrono accepts unpadded months and days; the column stores the canonical form only
    if date.format(DATE_FORMAT).to_string() != value {
        return Err(invalid());
    }

    Ok(date)
}

/// Other layouts found in databases written before dates were validated
const LEGACY_DATE_FORMATS: [&str; 3] = ["%m/%d/%Y", "%Y/%m/%d", "%d.%m.%Y"];

/// Parse a `change_date` already stored in the database.
///
/// Accepts the canonical form (padded or not) and a few legacy layouts;
/// returns `None` when nothing matches.
pub fn parse_stored_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    std::iter::once(DATE_FORMAT)
        .chain(LEGACY_DATE_FORMATS)
        .find_map(|format| NaiveDate::parse_from_str(value, format).ok())
}
