//! # Media Library Query Module
//!
//! Reads media metadata (genres, playlists, artists, albums, songs) out of the
//! platform media index and shapes it for the host application.
//!
//! ## Overview
//!
//! - [`query`] builds order-by clauses, parameterized selections and
//!   projections
//! - [`sort`] holds the per-entity sort enumerations
//! - [`task`] runs one query on a blocking worker and delivers its rows to a
//!   one-shot [`MethodResult`](bridge_traits::MethodResult)
//! - [`loaders`] exposes the `get_*` / `search_*` operations per entity
//!
//! Nothing here writes to the media index or caches results; every call is a
//! fresh read.

pub mod columns;
pub mod error;
pub mod loaders;
pub mod query;
pub mod record;
pub mod sort;
pub mod task;

pub use error::{LibraryError, Result};
pub use loaders::{
    AlbumLoader, ArtistLoader, EntityLoader, GenreLoader, LoaderContext, PlaylistLoader,
    SongLoader,
};
pub use query::{build_search_predicate, build_sort_clause, Projection, SelectionPredicate};
pub use record::{MediaRecord, ResultSet};
pub use sort::{
    AlbumSortType, ArtistSortType, GenreSortType, PlaylistSortType, SongSortType, SortOrder,
};
pub use task::{LoadRequest, LoadTask, RowMaterializer, TaskHandle, TaskState};
