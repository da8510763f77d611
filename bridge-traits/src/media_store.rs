//! Media Index Query Abstraction
//!
//! The platform media index is a read-only, SQL-like store of device media
//! metadata. The core addresses it through [`MediaStore::query`], which mirrors
//! the shape of Android's `ContentResolver.query`: a collection URI, a
//! projection, an optional selection template with `?` placeholders, the
//! values to bind into those placeholders, and an optional order-by clause.
//!
//! ## Usage
//!
//! ```ignore
//! use bridge_traits::media_store::{ContentQuery, ContentUri, MediaStore};
//!
//! let query = ContentQuery::new(ContentUri::Genres, vec!["name".into()])
//!     .with_selection("name LIKE ?", vec!["Ja%".into()])
//!     .with_sort_order("name ASC");
//!
//! if let Some(mut cursor) = store.query(&query)? {
//!     while cursor.move_to_next()? {
//!         println!("{:?}", cursor.get_string(0)?);
//!     }
//!     cursor.close();
//! }
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{BridgeError, Result};

/// Collections of the external audio media index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentUri {
    Genres,
    Playlists,
    Artists,
    Albums,
    Media,
}

impl ContentUri {
    /// Collection segment of the URI (`content://media/external/audio/<segment>`).
    pub fn collection(&self) -> &'static str {
        match self {
            ContentUri::Genres => "genres",
            ContentUri::Playlists => "playlists",
            ContentUri::Artists => "artists",
            ContentUri::Albums => "albums",
            ContentUri::Media => "media",
        }
    }

    pub fn as_uri(&self) -> String {
        format!("content://media/external/audio/{}", self.collection())
    }
}

impl fmt::Display for ContentUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "content://media/external/audio/{}", self.collection())
    }
}

/// A single read-only query against the media index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentQuery {
    /// Collection to query
    pub uri: ContentUri,
    /// Projected columns, possibly carrying a `DISTINCT` modifier on the first
    pub projection: Vec<String>,
    /// WHERE clause template with `?` placeholders; `None` selects every row
    pub selection: Option<String>,
    /// Values bound to the placeholders, in order
    pub selection_args: Vec<String>,
    /// ORDER BY clause; `None` leaves the order to the store
    pub sort_order: Option<String>,
}

impl ContentQuery {
    pub fn new(uri: ContentUri, projection: Vec<String>) -> Self {
        Self {
            uri,
            projection,
            selection: None,
            selection_args: Vec::new(),
            sort_order: None,
        }
    }

    pub fn with_selection(mut self, selection: impl Into<String>, args: Vec<String>) -> Self {
        self.selection = Some(selection.into());
        self.selection_args = args;
        self
    }

    pub fn with_sort_order(mut self, sort_order: impl Into<String>) -> Self {
        self.sort_order = Some(sort_order.into());
        self
    }
}

/// Forward-only view over the rows produced by a query.
///
/// A cursor starts positioned before the first row. Implementations should
/// release their underlying resources in [`close`](Cursor::close), which may be
/// called more than once.
pub trait Cursor: Send {
    /// Names of the result columns, in result order.
    fn column_names(&self) -> &[String];

    /// Advances to the next row. Returns `false` once the rows are exhausted.
    fn move_to_next(&mut self) -> Result<bool>;

    /// Reads the value of `column_index` in the current row as a string.
    ///
    /// `Ok(None)` means the column is NULL.
    fn get_string(&self, column_index: usize) -> Result<Option<String>>;

    /// Position of `name` among [`column_names`](Cursor::column_names).
    fn column_index(&self, name: &str) -> Option<usize> {
        self.column_names().iter().position(|column| column == name)
    }

    /// Releases the cursor.
    fn close(&mut self);

    fn is_closed(&self) -> bool;
}

/// Read-only query capability of the platform media index.
///
/// Calls may block; the core only invokes this from a blocking worker.
///
/// # Errors
///
/// Any failure of the index (malformed selection, storage I/O, revoked
/// permission) is reported as [`BridgeError::QueryFault`]. Returning
/// `Ok(None)` means the index produced no cursor at all.
pub trait MediaStore: Send + Sync {
    fn query(&self, query: &ContentQuery) -> Result<Option<Box<dyn Cursor>>>;
}

/// Cursor over rows that have already been read into memory.
///
/// Platform adapters that copy results out of the native query layer (much
/// like Android's `CursorWindow`) hand these back from [`MediaStore::query`].
#[derive(Debug, Clone)]
pub struct MemoryCursor {
    columns: Vec<String>,
    rows: Vec<Vec<Option<String>>>,
    position: Option<usize>,
    closed: bool,
}

impl MemoryCursor {
    pub fn new(columns: Vec<String>, rows: Vec<Vec<Option<String>>>) -> Self {
        Self {
            columns,
            rows,
            position: None,
            closed: false,
        }
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}

impl Cursor for MemoryCursor {
    fn column_names(&self) -> &[String] {
        &self.columns
    }

    fn move_to_next(&mut self) -> Result<bool> {
        if self.closed {
            return Err(BridgeError::QueryFault("cursor is closed".to_string()));
        }

        let next = self.position.map_or(0, |position| position + 1);
        if next < self.rows.len() {
            self.position = Some(next);
            Ok(true)
        } else {
            self.position = Some(self.rows.len());
            Ok(false)
        }
    }

    fn get_string(&self, column_index: usize) -> Result<Option<String>> {
        if self.closed {
            return Err(BridgeError::QueryFault("cursor is closed".to_string()));
        }

        let row = self
            .position
            .and_then(|position| self.rows.get(position))
            .ok_or_else(|| BridgeError::QueryFault("cursor is not positioned on a row".to_string()))?;

        row.get(column_index).cloned().ok_or_else(|| {
            BridgeError::QueryFault(format!(
                "column index {} out of range ({} columns)",
                column_index,
                self.columns.len()
            ))
        })
    }

    fn close(&mut self) {
        self.closed = true;
    }

    fn is_closed(&self) -> bool {
        self.closed
    }
}
