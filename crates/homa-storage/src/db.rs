use std::path::Path;
use std::str::FromStr;
use std::sync::{Mutex, MutexGuard};

use rusqlite::types::Type;
use rusqlite::{Connection, Row};
use serde::Serialize;

use homa_core::models::measurements::{HistoryFlag, NumericField};

use crate::error::StorageError;

/// Handle to the clinic database.
///
/// The connection sits behind a `Mutex`; statements are short and the store
/// is shared across request handlers via `Arc<Store>`.
pub struct Store {
    conn: Mutex<Connection>,
}

/// Row counts reported by the health endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RecordCounts {
    pub patients: u64,
    pub assessments: u64,
    pub staff: u64,
}

impl Store {
    /// Open (or create) the database file at `path` and ensure the schema.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, StorageError> {
        let conn = Connection::open(path.as_ref())?;
        tracing::info!(path = %path.as_ref().display(), "opened database");
        Self::with_connection(conn)
    }

    /// A private in-memory database, used by tests.
    pub fn in_memory() -> Result<Self, StorageError> {
        Self::with_connection(Connection::open_in_memory()?)
    }

    fn with_connection(conn: Connection) -> Result<Self, StorageError> {
        conn.execute_batch("PRAGMA foreign_keys = ON;")?;
        conn.execute_batch(&schema_sql())?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    pub(crate) fn conn(&self) -> Result<MutexGuard<'_, Connection>, StorageError> {
        self.conn.lock().map_err(|_| StorageError::LockPoisoned)
    }

    pub fn counts(&self) -> Result<RecordCounts, StorageError> {
        let conn = self.conn()?;
        let count = |table: &str| -> Result<u64, StorageError> {
            let n: i64 = conn.query_row(&format!("SELECT COUNT(*) FROM {table}"), [], |r| r.get(0))?;
            Ok(n as u64)
        };
        Ok(RecordCounts {
            patients: count("patients")?,
            assessments: count("assessments")?,
            staff: count("staff")?,
        })
    }
}

/// Columns holding raw measurements, in [`NumericField::ALL`] then
/// [`HistoryFlag::ALL`] order.
pub(crate) fn measurement_columns() -> impl Iterator<Item = &'static str> {
    NumericField::ALL
        .iter()
        .map(|f| f.name())
        .chain(HistoryFlag::ALL.iter().map(|f| f.name()))
}

fn schema_sql() -> String {
    let numeric: Vec<String> = NumericField::ALL
        .iter()
        .map(|f| format!("    {} REAL", f.name()))
        .collect();
    let flags: Vec<String> = HistoryFlag::ALL
        .iter()
        .map(|f| format!("    {} INTEGER", f.name()))
        .collect();

    format!(
        r"
        CREATE TABLE IF NOT EXISTS patients (
            id TEXT PRIMARY KEY,
            name TEXT NOT NULL,
            age INTEGER NOT NULL CHECK (age BETWEEN 0 AND 150),
            sex TEXT NOT NULL,
            phone TEXT,
            email TEXT,
            created_at INTEGER NOT NULL,
            updated_at INTEGER NOT NULL
        );

        CREATE TABLE IF NOT EXISTS staff (
            id TEXT PRIMARY KEY,
            name TEXT NOT NULL,
            email TEXT NOT NULL UNIQUE,
            phone TEXT,
            role TEXT NOT NULL,
            is_active INTEGER NOT NULL DEFAULT 1,
            password_hash TEXT NOT NULL,
            created_at INTEGER NOT NULL
        );

        CREATE TABLE IF NOT EXISTS assessments (
            id TEXT PRIMARY KEY,
            patient_id TEXT NOT NULL REFERENCES patients(id) ON DELETE CASCADE,
{numeric},
{flags},
            bmi REAL,
            homa_ir REAL,
            tyg_index REAL,
            waist_score INTEGER NOT NULL,
            total_score INTEGER NOT NULL,
            speedometer_zone TEXT NOT NULL,
            risk_category TEXT NOT NULL,
            lab_notes TEXT,
            recorded_by TEXT,
            created_at INTEGER NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_assessments_patient
            ON assessments(patient_id, created_at);
        ",
        numeric = numeric.join(",\n"),
        flags = flags.join(",\n"),
    )
}

/// Current time at the precision the database keeps.
pub(crate) fn now() -> jiff::Timestamp {
    let micros = jiff::Timestamp::now().as_microsecond();
    jiff::Timestamp::from_microsecond(micros).unwrap_or(jiff::Timestamp::UNIX_EPOCH)
}

pub(crate) fn timestamp_column(row: &Row<'_>, name: &str) -> rusqlite::Result<jiff::Timestamp> {
    let micros: i64 = row.get(name)?;
    jiff::Timestamp::from_microsecond(micros).map_err(|e| conversion_error(row, name, Type::Integer, e))
}

/// Read a TEXT column through `FromStr`.
pub(crate) fn parsed_column<T>(row: &Row<'_>, name: &str) -> rusqlite::Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    let text: String = row.get(name)?;
    text.parse()
        .map_err(|e| conversion_error(row, name, Type::Text, e))
}

pub(crate) fn optional_parsed_column<T>(row: &Row<'_>, name: &str) -> rusqlite::Result<Option<T>>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    let text: Option<String> = row.get(name)?;
    text.map(|t| t.parse().map_err(|e| conversion_error(row, name, Type::Text, e)))
        .transpose()
}

fn conversion_error<E>(row: &Row<'_>, name: &str, ty: Type, err: E) -> rusqlite::Error
where
    E: std::error::Error + Send + Sync + 'static,
{
    let idx = row.as_ref().column_index(name).unwrap_or_default();
    rusqlite::Error::FromSqlConversionFailure(idx, ty, Box::new(err))
}

/// Map a UNIQUE violation to [`StorageError::Conflict`].
pub(crate) fn conflict_on_unique(err: rusqlite::Error, message: impl Into<String>) -> StorageError {
    match err {
        rusqlite::Error::SqliteFailure(e, _) if e.code == rusqlite::ErrorCode::ConstraintViolation => {
            StorageError::Conflict(message.into())
        }
        other => StorageError::Database(other),
    }
}
