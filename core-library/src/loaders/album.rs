use bridge_traits::channel::MethodResult;
use bridge_traits::media_store::ContentUri;

use super::{EntityLoader, LoaderContext};
use crate::columns::album;
use crate::query::{Projection, SelectionPredicate};
use crate::sort::AlbumSortType;
use crate::task::TaskHandle;

/// Loads albums from the media index.
#[derive(Debug, Clone)]
pub struct AlbumLoader {
    context: LoaderContext,
}

impl AlbumLoader {
    pub fn new(context: LoaderContext) -> Self {
        Self { context }
    }

    pub fn get_albums(&self, result: Box<dyn MethodResult>, sort: AlbumSortType) -> TaskHandle {
        self.get_all(result, sort)
    }

    pub fn search_albums(
        &self,
        result: Box<dyn MethodResult>,
        name_query: &str,
        sort: AlbumSortType,
    ) -> TaskHandle {
        self.search(result, name_query, sort)
    }

    /// Albums credited to exactly `artist`.
    pub fn get_albums_from_artist(
        &self,
        result: Box<dyn MethodResult>,
        artist: &str,
        sort: AlbumSortType,
    ) -> TaskHandle {
        self.create_load_task(result, SelectionPredicate::equals(album::ARTIST, artist), sort)
            .execute()
    }
}

impl EntityLoader for AlbumLoader {
    type Sort = AlbumSortType;

    const NAME: &'static str = "AlbumLoader";
    const URI: ContentUri = ContentUri::Albums;
    const PROJECTION: Projection = Projection::new(&[
        album::ID,
        album::ALBUM,
        album::ARTIST,
        album::NUMBER_OF_SONGS,
        album::FIRST_YEAR,
        album::LAST_YEAR,
        album::ALBUM_ART,
    ]);
    const SEARCH_COLUMN: &'static str = album::ALBUM;

    fn context(&self) -> &LoaderContext {
        &self.context
    }
}
