//! Database row types. These map directly to SQLite rows and are kept apart
//! from the greet-types wire models so the DB layer stays independent.

use rusqlite::Row;

use crate::{Result, StoreError};

/// Persisted form of `Greeting::timestamp`.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Form of the date-range bounds accepted by search.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// One recorded greeting. Rows are never updated once inserted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Greeting {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub message: String,
    pub timestamp: String,
}

impl Greeting {
    pub(crate) fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            first_name: row.get(1)?,
            last_name: row.get(2)?,
            message: row.get(3)?,
            timestamp: row.get(4)?,
        })
    }
}

/// Confirmation text stored with every greeting.
pub fn confirmation_message(first_name: &str, last_name: &str) -> String {
    format!("Thank you, {first_name} {last_name}! Your greeting has been recorded.")
}

/// Reject empty or whitespace-only names.
pub fn validate_name(field: &'static str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(StoreError::InvalidInput { field });
    }
    Ok(())
}
