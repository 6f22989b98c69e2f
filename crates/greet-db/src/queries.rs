use chrono::{Local, NaiveDateTime};
use rusqlite::{params, params_from_iter};
use tracing::{debug, info};

use crate::filter::{GreetingFilter, build_predicate};
use crate::models::{Greeting, TIMESTAMP_FORMAT, confirmation_message, validate_name};
use crate::{Database, Result};

const SELECT_GREETINGS: &str =
    "SELECT id, first_name, last_name, message, timestamp FROM greetings";

impl Database {
    /// Record a greeting stamped with the current local wall-clock time.
    pub fn insert_greeting(&self, first_name: &str, last_name: &str) -> Result<Greeting> {
        self.insert_greeting_at(first_name, last_name, Local::now().naive_local())
    }

    /// Record a greeting with an explicit timestamp.
    pub fn insert_greeting_at(
        &self,
        first_name: &str,
        last_name: &str,
        at: NaiveDateTime,
    ) -> Result<Greeting> {
        validate_name("first_name", first_name)?;
        validate_name("last_name", last_name)?;

        let message = confirmation_message(first_name, last_name);
        let timestamp = at.format(TIMESTAMP_FORMAT).to_string();

        // The rowid must be read under the same lock as the insert, or a
        // concurrent insert could overwrite last_insert_rowid.
        let id = self.with_conn_mut(|conn| {
            conn.execute(
                "INSERT INTO greetings (first_name, last_name, message, timestamp) VALUES (?1, ?2, ?3, ?4)",
                params![first_name, last_name, message, timestamp],
            )?;
            Ok(conn.last_insert_rowid())
        })?;

        info!(id, "Recorded greeting from {} {}", first_name, last_name);
        Ok(Greeting {
            id,
            first_name: first_name.to_owned(),
            last_name: last_name.to_owned(),
            message,
            timestamp,
        })
    }

    /// All greetings in id order. Empty table gives an empty vec.
    pub fn list_greetings(&self) -> Result<Vec<Greeting>> {
        self.with_conn(|conn| {
            let mut stmt = conn.prepare_cached(&format!("{SELECT_GREETINGS} ORDER BY id"))?;
            let rows = stmt
                .query_map([], Greeting::from_row)?
                .collect::<rusqlite::Result<Vec<_>>>()?;
            Ok(rows)
        })
    }

    /// Delete every greeting in one statement. Returns the number removed.
    pub fn clear_greetings(&self) -> Result<usize> {
        let removed = self.with_conn_mut(|conn| Ok(conn.execute("DELETE FROM greetings", [])?))?;

        info!(removed, "Cleared greetings");
        Ok(removed)
    }

    /// Greetings matching every supplied field of `filter`, in id order.
    pub fn search_greetings(&self, filter: &GreetingFilter) -> Result<Vec<Greeting>> {
        if filter.is_empty() {
            return self.list_greetings();
        }

        let predicate = build_predicate(filter)?;
        let sql = format!("{SELECT_GREETINGS}{} ORDER BY id", predicate.where_clause());
        debug!(sql = %sql, params = predicate.params.len(), "Searching greetings");

        self.with_conn(|conn| {
            let mut stmt = conn.prepare(&sql)?;
            let rows = stmt
                .query_map(params_from_iter(predicate.params.iter()), Greeting::from_row)?
                .collect::<rusqlite::Result<Vec<_>>>()?;
            Ok(rows)
        })
    }

    pub fn count_greetings(&self) -> Result<u64> {
        self.with_conn(|conn| {
            let count: i64 =
                conn.query_row("SELECT COUNT(*) FROM greetings", [], |row| row.get(0))?;
            Ok(count as u64)
        })
    }
}
