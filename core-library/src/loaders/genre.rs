use bridge_traits::channel::MethodResult;
use bridge_traits::media_store::ContentUri;

use super::{EntityLoader, LoaderContext};
use crate::columns::genre;
use crate::query::Projection;
use crate::sort::GenreSortType;
use crate::task::{RowMaterializer, TaskHandle};

/// Loads genres from the media index.
///
/// Genre rows repeat across volumes on some hosts, so the loader asks the
/// index for distinct names where the host accepts a `DISTINCT` projection and
/// falls back to guarded insertion elsewhere.
#[derive(Debug, Clone)]
pub struct GenreLoader {
    context: LoaderContext,
    materializer: RowMaterializer,
}

impl GenreLoader {
    pub fn new(context: LoaderContext) -> Self {
        let materializer = RowMaterializer::for_capabilities(context.capabilities());
        Self {
            context,
            materializer,
        }
    }

    /// Queries every genre on the device.
    pub fn get_genres(&self, result: Box<dyn MethodResult>, sort: GenreSortType) -> TaskHandle {
        self.get_all(result, sort)
    }

    /// Queries genres whose name starts with `name_query`.
    pub fn search_genres(
        &self,
        result: Box<dyn MethodResult>,
        name_query: &str,
        sort: GenreSortType,
    ) -> TaskHandle {
        self.search(result, name_query, sort)
    }
}

impl EntityLoader for GenreLoader {
    type Sort = GenreSortType;

    const NAME: &'static str = "GenreLoader";
    const URI: ContentUri = ContentUri::Genres;
    const PROJECTION: Projection = Projection::new(&[genre::NAME]);
    const SEARCH_COLUMN: &'static str = genre::NAME;

    fn context(&self) -> &LoaderContext {
        &self.context
    }

    fn materializer(&self) -> RowMaterializer {
        self.materializer
    }
}
