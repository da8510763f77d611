//! Per-entity loaders.
//!
//! Every loader follows the same shape: a fixed collection, projection and
//! search column, a sort enumeration, and `get_*` / `search_*` operations that
//! build a [`LoadRequest`] and execute it as a [`LoadTask`]. The shared parts
//! live in [`EntityLoader`]; the entity modules only declare their constants
//! and any extra filtered queries.

mod album;
mod artist;
mod genre;
mod playlist;
mod song;

pub use album::AlbumLoader;
pub use artist::ArtistLoader;
pub use genre::GenreLoader;
pub use playlist::PlaylistLoader;
pub use song::SongLoader;

use std::sync::Arc;

use bridge_traits::channel::MethodResult;
use bridge_traits::media_store::{ContentUri, MediaStore};
use bridge_traits::platform::PlatformCapabilities;
use core_async::runtime::Handle;

use crate::query::{build_search_predicate, build_sort_clause, Projection, SelectionPredicate};
use crate::sort::SortOrder;
use crate::task::{LoadRequest, LoadTask, RowMaterializer, TaskHandle};

/// Dependencies shared by every loader.
#[derive(Clone)]
pub struct LoaderContext {
    store: Arc<dyn MediaStore>,
    capabilities: PlatformCapabilities,
    runtime: Handle,
}

impl LoaderContext {
    pub fn new(
        store: Arc<dyn MediaStore>,
        capabilities: PlatformCapabilities,
        runtime: Handle,
    ) -> Self {
        Self {
            store,
            capabilities,
            runtime,
        }
    }

    pub fn capabilities(&self) -> &PlatformCapabilities {
        &self.capabilities
    }

    pub fn store(&self) -> Arc<dyn MediaStore> {
        Arc::clone(&self.store)
    }

    pub fn runtime(&self) -> &Handle {
        &self.runtime
    }
}

impl std::fmt::Debug for LoaderContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoaderContext")
            .field("capabilities", &self.capabilities)
            .field("store", &"MediaStore { ... }")
            .finish()
    }
}

/// Common behaviour of the entity loaders.
pub trait EntityLoader {
    type Sort: SortOrder;

    /// Loader name used in diagnostics.
    const NAME: &'static str;
    const URI: ContentUri;
    const PROJECTION: Projection;
    /// Column matched by [`search`](EntityLoader::search).
    const SEARCH_COLUMN: &'static str;

    fn context(&self) -> &LoaderContext;

    fn materializer(&self) -> RowMaterializer {
        RowMaterializer::Plain
    }

    fn create_load_task(
        &self,
        result: Box<dyn MethodResult>,
        selection: SelectionPredicate,
        sort: Self::Sort,
    ) -> LoadTask {
        let context = self.context();
        let request = LoadRequest {
            uri: Self::URI,
            projection: Self::PROJECTION,
            selection,
            sort_order: build_sort_clause(sort),
            materializer: self.materializer(),
        };

        LoadTask::new(
            Self::NAME,
            context.store(),
            context.runtime().clone(),
            request,
            result,
        )
    }

    /// Every entity, sorted.
    fn get_all(&self, result: Box<dyn MethodResult>, sort: Self::Sort) -> TaskHandle {
        self.create_load_task(result, SelectionPredicate::none(), sort)
            .execute()
    }

    /// Entities whose search column starts with `term`, sorted.
    fn search(&self, result: Box<dyn MethodResult>, term: &str, sort: Self::Sort) -> TaskHandle {
        self.create_load_task(result, build_search_predicate(Self::SEARCH_COLUMN, term), sort)
            .execute()
    }
}
