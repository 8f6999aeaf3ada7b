use std::path::Path;
use std::time::Duration;

use chrono::{DateTime, Utc};
use rusqlite::types::Type;
use rusqlite::{Connection, ErrorCode, OpenFlags, Row};
use thiserror::Error;
use tracing::debug;

use crate::query::{QuerySuffix, SuffixError};

/// Columns selected from the places table, in decode order.
pub const PLACE_COLUMNS: &str = "id, url, title, visit_count, frecency, last_visit_date, description";

#[derive(Debug, Error)]
pub enum PlacesError {
    #[error("sqlite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
    #[error(transparent)]
    Suffix(#[from] SuffixError),
}

impl PlacesError {
    /// True when another process holds a lock on the database.
    pub fn is_locked(&self) -> bool {
        match self {
            PlacesError::Sqlite(rusqlite::Error::SqliteFailure(err, _)) => matches!(
                err.code,
                ErrorCode::DatabaseBusy | ErrorCode::DatabaseLocked
            ),
            _ => false,
        }
    }
}

#[derive(Debug, Error)]
#[error("last_visit_date out of range: {0}us")]
pub struct TimestampOutOfRange(pub i64);

/// One row of `moz_places`.
#[derive(Debug, Clone, PartialEq)]
pub struct Place {
    pub id: i64,
    pub url: String,
    pub title: String,
    pub visit_count: i64,
    pub frecency: i64,
    pub last_visit_date: DateTime<Utc>,
    pub description: String,
}

impl Place {
    /// Decodes a row selected with [`PLACE_COLUMNS`]. NULL text decodes to an
    /// empty string and a NULL visit date to the epoch.
    pub fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        let id: i64 = row.get(0)?;
        let url: Option<String> = row.get(1)?;
        let title: Option<String> = row.get(2)?;
        let visit_count: i64 = row.get(3)?;
        let frecency: i64 = row.get(4)?;
        let last_visit_date: Option<i64> = row.get(5)?;
        let description: Option<String> = row.get(6)?;

        let micros = last_visit_date.unwrap_or(0);
        let last_visit_date = unix_micro_to_datetime(micros).ok_or_else(|| {
            rusqlite::Error::FromSqlConversionFailure(
                5,
                Type::Integer,
                Box::new(TimestampOutOfRange(micros)),
            )
        })?;

        Ok(Self {
            id,
            url: url.unwrap_or_default(),
            title: title.unwrap_or_default(),
            visit_count,
            frecency,
            last_visit_date,
            description: description.unwrap_or_default(),
        })
    }
}

pub fn unix_micro_to_datetime(microseconds: i64) -> Option<DateTime<Utc>> {
    DateTime::<Utc>::from_timestamp_micros(microseconds)
}

/// Opens a places database. Lock contention is reported immediately rather
/// than waited out.
pub fn open_places(path: &Path, read_only: bool) -> Result<Connection, PlacesError> {
    let flags = if read_only {
        OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX
    } else {
        OpenFlags::SQLITE_OPEN_READ_WRITE | OpenFlags::SQLITE_OPEN_NO_MUTEX
    };
    debug!("opening {} read_only={read_only}", path.display());
    let conn = Connection::open_with_flags(path, flags)?;
    conn.busy_timeout(Duration::ZERO)?;
    Ok(conn)
}

pub fn select_statement(table: &str, suffix: &QuerySuffix) -> Result<String, PlacesError> {
    let mut stmt = format!("select {PLACE_COLUMNS} from {table}");
    let suf = suffix.to_sql()?;
    if !suf.is_empty() {
        stmt.push(' ');
        stmt.push_str(&suf);
    }
    Ok(stmt)
}

/// Selects every place in `table`, ordered and limited by `suffix`. The first
/// row that fails to decode aborts the whole query.
pub fn select_places(
    conn: &Connection,
    table: &str,
    suffix: &QuerySuffix,
) -> Result<Vec<Place>, PlacesError> {
    let sql = select_statement(table, suffix)?;
    debug!("query: {sql}");

    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt.query_map([], Place::from_row)?;
    let places = rows.collect::<rusqlite::Result<Vec<_>>>()?;

    debug!("selected {} places", places.len());
    Ok(places)
}
