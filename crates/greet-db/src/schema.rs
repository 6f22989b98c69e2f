use rusqlite::Connection;
use tracing::info;

use crate::Result;

/// Create the greetings table if it does not exist yet. Existing rows are
/// left alone.
pub fn ensure(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS greetings (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            first_name  TEXT NOT NULL,
            last_name   TEXT NOT NULL,
            message     TEXT NOT NULL,
            timestamp   TEXT NOT NULL
        );
        ",
    )?;

    info!("Greeting schema ready");
    Ok(())
}
