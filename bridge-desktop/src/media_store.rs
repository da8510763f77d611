//! SQLite-backed media index.
//!
//! Each [`ContentUri`] collection maps to one table. Queries are rendered as
//! `SELECT <projection> FROM <table> [WHERE <selection>] [ORDER BY <sort>]`,
//! with the selection arguments bound as SQLite parameters. Rows are copied
//! out of SQLite before the cursor is returned, so the connection is only
//! held for the duration of the read.

use std::path::Path;
use std::sync::Mutex;

use bridge_traits::error::{BridgeError, Result};
use bridge_traits::media_store::{ContentQuery, ContentUri, Cursor, MediaStore, MemoryCursor};
use rusqlite::types::ValueRef;
use rusqlite::{params_from_iter, Connection, OpenFlags};
use tracing::{debug, info};

/// Table layout of a desktop media index.
pub const MEDIA_INDEX_SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS genres (
    _id INTEGER PRIMARY KEY,
    name TEXT
);

CREATE TABLE IF NOT EXISTS playlists (
    _id INTEGER PRIMARY KEY,
    name TEXT,
    _data TEXT,
    date_added INTEGER
);

CREATE TABLE IF NOT EXISTS artists (
    _id INTEGER PRIMARY KEY,
    artist TEXT,
    number_of_albums INTEGER,
    number_of_tracks INTEGER
);

CREATE TABLE IF NOT EXISTS albums (
    _id INTEGER PRIMARY KEY,
    album TEXT,
    artist TEXT,
    numsongs INTEGER,
    minyear INTEGER,
    maxyear INTEGER,
    album_art TEXT
);

CREATE TABLE IF NOT EXISTS audio (
    _id INTEGER PRIMARY KEY,
    title TEXT,
    _display_name TEXT,
    artist TEXT,
    artist_id INTEGER,
    album TEXT,
    album_id INTEGER,
    composer TEXT,
    duration INTEGER,
    year INTEGER,
    track INTEGER,
    _data TEXT,
    _size INTEGER,
    date_added INTEGER
);
"#;

/// [`MediaStore`] reading a SQLite media index.
pub struct SqliteMediaStore {
    conn: Mutex<Connection>,
}

impl SqliteMediaStore {
    /// Opens an existing media index read-only.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let conn = Connection::open_with_flags(
            path,
            OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )
        .map_err(|e| {
            BridgeError::NotAvailable(format!(
                "Cannot open media index {}: {}",
                path.display(),
                e
            ))
        })?;

        info!(path = %path.display(), "Opened desktop media index");
        Ok(Self::from_connection(conn))
    }

    /// Empty in-memory index with the [`MEDIA_INDEX_SCHEMA`] tables.
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory().map_err(fault)?;
        conn.execute_batch(MEDIA_INDEX_SCHEMA).map_err(fault)?;
        Ok(Self::from_connection(conn))
    }

    /// Wraps a connection the caller has already prepared.
    pub fn from_connection(conn: Connection) -> Self {
        Self {
            conn: Mutex::new(conn),
        }
    }

    /// Table backing `uri`.
    pub fn table_for(uri: ContentUri) -> &'static str {
        match uri {
            ContentUri::Genres => "genres",
            ContentUri::Playlists => "playlists",
            ContentUri::Artists => "artists",
            ContentUri::Albums => "albums",
            ContentUri::Media => "audio",
        }
    }

    fn render_sql(query: &ContentQuery) -> Result<String> {
        if query.projection.is_empty() {
            return Err(BridgeError::QueryFault("empty projection".to_string()));
        }

        let mut sql = format!(
            "SELECT {} FROM {}",
            query.projection.join(", "),
            Self::table_for(query.uri)
        );

        if let Some(selection) = query.selection.as_deref() {
            sql.push_str(" WHERE ");
            sql.push_str(selection);
        }

        if let Some(sort_order) = query.sort_order.as_deref() {
            sql.push_str(" ORDER BY ");
            sql.push_str(sort_order);
        }

        Ok(sql)
    }
}

impl std::fmt::Debug for SqliteMediaStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SqliteMediaStore").finish_non_exhaustive()
    }
}

impl MediaStore for SqliteMediaStore {
    fn query(&self, query: &ContentQuery) -> Result<Option<Box<dyn Cursor>>> {
        let sql = Self::render_sql(query)?;
        debug!(sql = %sql, args = query.selection_args.len(), "Querying desktop media index");

        let conn = self
            .conn
            .lock()
            .map_err(|_| BridgeError::OperationFailed("media index lock poisoned".to_string()))?;

        let mut stmt = conn.prepare(&sql).map_err(fault)?;
        let columns: Vec<String> = stmt
            .column_names()
            .into_iter()
            .map(str::to_string)
            .collect();

        let mut rows = stmt
            .query(params_from_iter(query.selection_args.iter()))
            .map_err(fault)?;

        let mut values = Vec::new();
        while let Some(row) = rows.next().map_err(fault)? {
            let mut record = Vec::with_capacity(columns.len());
            for index in 0..columns.len() {
                record.push(value_as_string(row.get_ref(index).map_err(fault)?)?);
            }
            values.push(record);
        }

        Ok(Some(Box::new(MemoryCursor::new(columns, values))))
    }
}

fn fault(err: rusqlite::Error) -> BridgeError {
    BridgeError::QueryFault(err.to_string())
}

/// String view of a column value, the way a media cursor's `getString` reads it.
fn value_as_string(value: ValueRef<'_>) -> Result<Option<String>> {
    match value {
        ValueRef::Null => Ok(None),
        ValueRef::Integer(i) => Ok(Some(i.to_string())),
        // Debug keeps the fractional part (`1.0`, not `1`).
        ValueRef::Real(r) => Ok(Some(format!("{:?}", r))),
        ValueRef::Text(text) => Ok(Some(String::from_utf8_lossy(text).into_owned())),
        ValueRef::Blob(_) => Err(BridgeError::QueryFault(
            "unable to convert BLOB to string".to_string(),
        )),
    }
}
