//! # Desktop Bridge Implementations
//!
//! Bridge implementations for desktop hosts (macOS, Windows, Linux), where no
//! OS media index exists and the plugin reads a SQLite database laid out like
//! Android's external audio `MediaStore` instead.
//!
//! ## Overview
//!
//! - [`SqliteMediaStore`] implements `MediaStore` on top of `rusqlite`
//! - [`MEDIA_INDEX_SCHEMA`] is the table layout the store expects
//!
//! ## Usage
//!
//! ```ignore
//! use bridge_desktop::SqliteMediaStore;
//! use std::sync::Arc;
//!
//! let store = Arc::new(SqliteMediaStore::open("/path/to/media-index.db")?);
//! // Inject into the plugin configuration
//! ```

mod media_store;

pub use media_store::{SqliteMediaStore, MEDIA_INDEX_SCHEMA};
