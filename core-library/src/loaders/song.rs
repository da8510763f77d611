use bridge_traits::channel::MethodResult;
use bridge_traits::media_store::ContentUri;

use super::{EntityLoader, LoaderContext};
use crate::columns::song;
use crate::query::{Projection, SelectionPredicate};
use crate::sort::SongSortType;
use crate::task::TaskHandle;

/// Loads songs (audio media rows) from the media index.
#[derive(Debug, Clone)]
pub struct SongLoader {
    context: LoaderContext,
}

impl SongLoader {
    pub fn new(context: LoaderContext) -> Self {
        Self { context }
    }

    pub fn get_songs(&self, result: Box<dyn MethodResult>, sort: SongSortType) -> TaskHandle {
        self.get_all(result, sort)
    }

    /// Songs whose title starts with `title_query`.
    pub fn search_songs(
        &self,
        result: Box<dyn MethodResult>,
        title_query: &str,
        sort: SongSortType,
    ) -> TaskHandle {
        self.search(result, title_query, sort)
    }

    pub fn get_songs_from_album(
        &self,
        result: Box<dyn MethodResult>,
        album_id: &str,
        sort: SongSortType,
    ) -> TaskHandle {
        self.create_load_task(result, SelectionPredicate::equals(song::ALBUM_ID, album_id), sort)
            .execute()
    }

    pub fn get_songs_from_artist(
        &self,
        result: Box<dyn MethodResult>,
        artist: &str,
        sort: SongSortType,
    ) -> TaskHandle {
        self.create_load_task(result, SelectionPredicate::equals(song::ARTIST, artist), sort)
            .execute()
    }

    /// Songs whose `_id` is one of `ids`. An empty `ids` yields no songs.
    pub fn get_songs_by_id<I, V>(
        &self,
        result: Box<dyn MethodResult>,
        ids: I,
        sort: SongSortType,
    ) -> TaskHandle
    where
        I: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.create_load_task(result, SelectionPredicate::any_of(song::ID, ids), sort)
            .execute()
    }
}

impl EntityLoader for SongLoader {
    type Sort = SongSortType;

    const NAME: &'static str = "SongLoader";
    const URI: ContentUri = ContentUri::Media;
    const PROJECTION: Projection = Projection::new(&[
        song::ID,
        song::TITLE,
        song::DISPLAY_NAME,
        song::ARTIST,
        song::ARTIST_ID,
        song::ALBUM,
        song::ALBUM_ID,
        song::COMPOSER,
        song::DURATION,
        song::YEAR,
        song::TRACK,
        song::DATA,
        song::SIZE,
        song::DATE_ADDED,
    ]);
    const SEARCH_COLUMN: &'static str = song::TITLE;

    fn context(&self) -> &LoaderContext {
        &self.context
    }
}
