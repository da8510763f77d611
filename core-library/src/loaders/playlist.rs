use bridge_traits::channel::MethodResult;
use bridge_traits::media_store::ContentUri;

use super::{EntityLoader, LoaderContext};
use crate::columns::playlist;
use crate::query::Projection;
use crate::sort::PlaylistSortType;
use crate::task::TaskHandle;

/// Loads playlists from the media index.
#[derive(Debug, Clone)]
pub struct PlaylistLoader {
    context: LoaderContext,
}

impl PlaylistLoader {
    pub fn new(context: LoaderContext) -> Self {
        Self { context }
    }

    pub fn get_playlists(
        &self,
        result: Box<dyn MethodResult>,
        sort: PlaylistSortType,
    ) -> TaskHandle {
        self.get_all(result, sort)
    }

    pub fn search_playlists(
        &self,
        result: Box<dyn MethodResult>,
        name_query: &str,
        sort: PlaylistSortType,
    ) -> TaskHandle {
        self.search(result, name_query, sort)
    }
}

impl EntityLoader for PlaylistLoader {
    type Sort = PlaylistSortType;

    const NAME: &'static str = "PlaylistLoader";
    const URI: ContentUri = ContentUri::Playlists;
    const PROJECTION: Projection = Projection::new(&[
        playlist::ID,
        playlist::NAME,
        playlist::DATA,
        playlist::DATE_ADDED,
    ]);
    const SEARCH_COLUMN: &'static str = playlist::NAME;

    fn context(&self) -> &LoaderContext {
        &self.context
    }
}
