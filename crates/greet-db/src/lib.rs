pub mod error;
pub mod filter;
pub mod models;
pub mod queries;
pub mod schema;

pub use error::{Result, StoreError};
pub use filter::{GreetingFilter, Predicate, build_predicate};
pub use models::Greeting;

use rusqlite::{Connection, OpenFlags};
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, PoisonError};
use std::time::Duration;
use tracing::info;

pub const DEFAULT_READER_POOL_SIZE: usize = 4;

const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Greeting store with reader/writer split.
///
/// All writes go through the single writer connection and are serialized by
/// its mutex. Reads are spread round-robin over read-only connections; WAL
/// gives each read statement a consistent snapshot, so readers never observe
/// a write in progress and never wait on the writer lock.
///
/// `path` must be a file. The writer and readers are separate connections,
/// so `:memory:` would give each of them its own empty database.
///
/// The lock only covers the statement itself. Anything the caller does with
/// the returned rows (encoding, rendering) happens outside of it.
pub struct Database {
    writer: Mutex<Connection>,
    readers: Vec<Mutex<Connection>>,
    reader_idx: AtomicUsize,
}

impl Database {
    pub fn open(path: &Path) -> Result<Self> {
        Self::open_with_readers(path, DEFAULT_READER_POOL_SIZE)
    }

    pub fn open_with_readers(path: &Path, reader_count: usize) -> Result<Self> {
        let writer = Connection::open(path)?;
        writer.pragma_update(None, "journal_mode", "WAL")?;
        writer.busy_timeout(BUSY_TIMEOUT)?;

        schema::ensure(&writer)?;

        let reader_count = reader_count.max(1);
        let mut readers = Vec::with_capacity(reader_count);
        for _ in 0..reader_count {
            let conn = Connection::open_with_flags(
                path,
                OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
            )?;
            conn.busy_timeout(BUSY_TIMEOUT)?;
            readers.push(Mutex::new(conn));
        }

        info!(
            "Greeting DB opened at {} (1 writer + {} readers)",
            path.display(),
            reader_count
        );
        Ok(Self {
            writer: Mutex::new(writer),
            readers,
            reader_idx: AtomicUsize::new(0),
        })
    }

    /// Run `f` on one of the read-only connections.
    pub fn with_conn<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&Connection) -> Result<T>,
    {
        let idx = self.reader_idx.fetch_add(1, Ordering::Relaxed) % self.readers.len();
        // A panic while holding the guard cannot leave a half-run statement
        // behind, so a poisoned connection is still usable.
        let conn = self.readers[idx]
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        f(&conn)
    }

    /// Run `f` on the writer connection, holding the exclusive write lock.
    pub fn with_conn_mut<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&Connection) -> Result<T>,
    {
        let conn = self.writer.lock().unwrap_or_else(PoisonError::into_inner);
        f(&conn)
    }
}
