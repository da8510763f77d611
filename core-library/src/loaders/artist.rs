use bridge_traits::channel::MethodResult;
use bridge_traits::media_store::ContentUri;

use super::{EntityLoader, LoaderContext};
use crate::columns::artist;
use crate::query::Projection;
use crate::sort::ArtistSortType;
use crate::task::TaskHandle;

/// Loads artists from the media index.
#[derive(Debug, Clone)]
pub struct ArtistLoader {
    context: LoaderContext,
}

impl ArtistLoader {
    pub fn new(context: LoaderContext) -> Self {
        Self { context }
    }

    pub fn get_artists(&self, result: Box<dyn MethodResult>, sort: ArtistSortType) -> TaskHandle {
        self.get_all(result, sort)
    }

    pub fn search_artists(
        &self,
        result: Box<dyn MethodResult>,
        name_query: &str,
        sort: ArtistSortType,
    ) -> TaskHandle {
        self.search(result, name_query, sort)
    }
}

impl EntityLoader for ArtistLoader {
    type Sort = ArtistSortType;

    const NAME: &'static str = "ArtistLoader";
    const URI: ContentUri = ContentUri::Artists;
    const PROJECTION: Projection = Projection::new(&[
        artist::ID,
        artist::ARTIST,
        artist::NUMBER_OF_ALBUMS,
        artist::NUMBER_OF_TRACKS,
    ]);
    const SEARCH_COLUMN: &'static str = artist::ARTIST;

    fn context(&self) -> &LoaderContext {
        &self.context
    }
}
