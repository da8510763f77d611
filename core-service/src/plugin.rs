//! Method channel dispatcher.

use std::fmt;
use std::str::FromStr;

use bridge_traits::{MethodCall, MethodResult, PlatformCapabilities};
use core_library::{
    AlbumLoader, AlbumSortType, ArtistLoader, ArtistSortType, GenreLoader, GenreSortType,
    LoaderContext, PlaylistLoader, PlaylistSortType, SongLoader, SongSortType, TaskHandle,
};
use core_runtime::config::PluginConfig;
use serde_json::Value;
use tracing::{debug, warn};

use crate::arguments::{self, ALBUM_ID, ARTIST, QUERY, SONG_IDS};
use crate::error::{CoreError, Result};

/// Name of the method channel hosts register the plugin under.
pub const CHANNEL_NAME: &str = "flutter_music_query";

/// Error code reported for missing or ill-typed arguments.
pub const INVALID_ARGUMENT: &str = "INVALID_ARGUMENT";

/// Methods the plugin answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    GetPlatformVersion,
    GetGenres,
    SearchGenres,
    GetPlaylists,
    SearchPlaylists,
    GetArtists,
    SearchArtists,
    GetAlbums,
    SearchAlbums,
    GetAlbumsFromArtist,
    GetSongs,
    SearchSongs,
    GetSongsFromAlbum,
    GetSongsFromArtist,
    GetSongsById,
}

impl Method {
    pub const ALL: &'static [Method] = &[
        Method::GetPlatformVersion,
        Method::GetGenres,
        Method::SearchGenres,
        Method::GetPlaylists,
        Method::SearchPlaylists,
        Method::GetArtists,
        Method::SearchArtists,
        Method::GetAlbums,
        Method::SearchAlbums,
        Method::GetAlbumsFromArtist,
        Method::GetSongs,
        Method::SearchSongs,
        Method::GetSongsFromAlbum,
        Method::GetSongsFromArtist,
        Method::GetSongsById,
    ];

    /// Name on the method channel.
    pub fn name(&self) -> &'static str {
        match self {
            Method::GetPlatformVersion => "getPlatformVersion",
            Method::GetGenres => "getGenres",
            Method::SearchGenres => "searchGenres",
            Method::GetPlaylists => "getPlaylists",
            Method::SearchPlaylists => "searchPlaylists",
            Method::GetArtists => "getArtists",
            Method::SearchArtists => "searchArtists",
            Method::GetAlbums => "getAlbums",
            Method::SearchAlbums => "searchAlbums",
            Method::GetAlbumsFromArtist => "getAlbumsFromArtist",
            Method::GetSongs => "getSongs",
            Method::SearchSongs => "searchSongs",
            Method::GetSongsFromAlbum => "getSongsFromAlbum",
            Method::GetSongsFromArtist => "getSongsFromArtist",
            Method::GetSongsById => "getSongsById",
        }
    }
}

impl FromStr for Method {
    type Err = CoreError;

    fn from_str(name: &str) -> Result<Self> {
        Method::ALL
            .iter()
            .copied()
            .find(|method| method.name() == name)
            .ok_or_else(|| CoreError::invalid_argument("method", format!("unknown method {}", name)))
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Entry point for host method calls.
///
/// Every query method starts a load task and returns immediately; the task
/// completes the [`MethodResult`] later. Argument errors and unknown methods
/// complete it right away.
#[derive(Debug, Clone)]
pub struct MediaQueryPlugin {
    capabilities: PlatformCapabilities,
    genres: GenreLoader,
    playlists: PlaylistLoader,
    artists: ArtistLoader,
    albums: AlbumLoader,
    songs: SongLoader,
}

impl MediaQueryPlugin {
    pub fn new(config: PluginConfig) -> Self {
        let context = LoaderContext::new(
            config.media_store,
            config.capabilities.clone(),
            config.runtime,
        );

        Self {
            capabilities: config.capabilities,
            genres: GenreLoader::new(context.clone()),
            playlists: PlaylistLoader::new(context.clone()),
            artists: ArtistLoader::new(context.clone()),
            albums: AlbumLoader::new(context.clone()),
            songs: SongLoader::new(context),
        }
    }

    pub fn capabilities(&self) -> &PlatformCapabilities {
        &self.capabilities
    }

    pub fn genres(&self) -> &GenreLoader {
        &self.genres
    }

    pub fn playlists(&self) -> &PlaylistLoader {
        &self.playlists
    }

    pub fn artists(&self) -> &ArtistLoader {
        &self.artists
    }

    pub fn albums(&self) -> &AlbumLoader {
        &self.albums
    }

    pub fn songs(&self) -> &SongLoader {
        &self.songs
    }

    /// Dispatches `call`, completing `result` exactly once.
    ///
    /// Returns the handle of the load task when one was started.
    pub fn handle_method_call(
        &self,
        call: MethodCall,
        result: Box<dyn MethodResult>,
    ) -> Option<TaskHandle> {
        let Ok(method) = call.method.parse::<Method>() else {
            debug!(method = %call.method, "Method not implemented");
            result.not_implemented();
            return None;
        };

        match Request::parse(method, &call) {
            Ok(request) => {
                debug!(method = %method, "Dispatching method call");
                self.execute(request, result)
            }
            Err(err) => {
                warn!(method = %method, error = %err, "Rejected method call");
                let details = match &err {
                    CoreError::InvalidArgument { argument, .. } => {
                        Some(Value::String(argument.clone()))
                    }
                    _ => None,
                };
                result.error(INVALID_ARGUMENT, &err.to_string(), details);
                None
            }
        }
    }

    fn execute(&self, request: Request, result: Box<dyn MethodResult>) -> Option<TaskHandle> {
        let handle = match request {
            Request::PlatformVersion => {
                result.success(Value::String(self.capabilities.description()));
                return None;
            }
            Request::Genres { search: None, sort } => self.genres.get_genres(result, sort),
            Request::Genres {
                search: Some(query),
                sort,
            } => self.genres.search_genres(result, &query, sort),
            Request::Playlists { search: None, sort } => {
                self.playlists.get_playlists(result, sort)
            }
            Request::Playlists {
                search: Some(query),
                sort,
            } => self.playlists.search_playlists(result, &query, sort),
            Request::Artists { search: None, sort } => self.artists.get_artists(result, sort),
            Request::Artists {
                search: Some(query),
                sort,
            } => self.artists.search_artists(result, &query, sort),
            Request::Albums { search: None, sort } => self.albums.get_albums(result, sort),
            Request::Albums {
                search: Some(query),
                sort,
            } => self.albums.search_albums(result, &query, sort),
            Request::AlbumsFromArtist { artist, sort } => {
                self.albums.get_albums_from_artist(result, &artist, sort)
            }
            Request::Songs { search: None, sort } => self.songs.get_songs(result, sort),
            Request::Songs {
                search: Some(query),
                sort,
            } => self.songs.search_songs(result, &query, sort),
            Request::SongsFromAlbum { album_id, sort } => {
                self.songs.get_songs_from_album(result, &album_id, sort)
            }
            Request::SongsFromArtist { artist, sort } => {
                self.songs.get_songs_from_artist(result, &artist, sort)
            }
            Request::SongsById { ids, sort } => self.songs.get_songs_by_id(result, ids, sort),
        };

        Some(handle)
    }
}

/// A method call with its arguments parsed.
#[derive(Debug, Clone, PartialEq)]
enum Request {
    PlatformVersion,
    Genres {
        search: Option<String>,
        sort: GenreSortType,
    },
    Playlists {
        search: Option<String>,
        sort: PlaylistSortType,
    },
    Artists {
        search: Option<String>,
        sort: ArtistSortType,
    },
    Albums {
        search: Option<String>,
        sort: AlbumSortType,
    },
    AlbumsFromArtist {
        artist: String,
        sort: AlbumSortType,
    },
    Songs {
        search: Option<String>,
        sort: SongSortType,
    },
    SongsFromAlbum {
        album_id: String,
        sort: SongSortType,
    },
    SongsFromArtist {
        artist: String,
        sort: SongSortType,
    },
    SongsById {
        ids: Vec<String>,
        sort: SongSortType,
    },
}

impl Request {
    fn parse(method: Method, call: &MethodCall) -> Result<Self> {
        let search = || arguments::string(call, QUERY).map(|query| Some(query.to_string()));

        let request = match method {
            Method::GetPlatformVersion => Request::PlatformVersion,
            Method::GetGenres => Request::Genres {
                search: None,
                sort: arguments::sort_type(call)?,
            },
            Method::SearchGenres => Request::Genres {
                search: search()?,
                sort: arguments::sort_type(call)?,
            },
            Method::GetPlaylists => Request::Playlists {
                search: None,
                sort: arguments::sort_type(call)?,
            },
            Method::SearchPlaylists => Request::Playlists {
                search: search()?,
                sort: arguments::sort_type(call)?,
            },
            Method::GetArtists => Request::Artists {
                search: None,
                sort: arguments::sort_type(call)?,
            },
            Method::SearchArtists => Request::Artists {
                search: search()?,
                sort: arguments::sort_type(call)?,
            },
            Method::GetAlbums => Request::Albums {
                search: None,
                sort: arguments::sort_type(call)?,
            },
            Method::SearchAlbums => Request::Albums {
                search: search()?,
                sort: arguments::sort_type(call)?,
            },
            Method::GetAlbumsFromArtist => Request::AlbumsFromArtist {
                artist: arguments::string(call, ARTIST)?.to_string(),
                sort: arguments::sort_type(call)?,
            },
            Method::GetSongs => Request::Songs {
                search: None,
                sort: arguments::sort_type(call)?,
            },
            Method::SearchSongs => Request::Songs {
                search: search()?,
                sort: arguments::sort_type(call)?,
            },
            Method::GetSongsFromAlbum => Request::SongsFromAlbum {
                album_id: arguments::id(call, ALBUM_ID)?,
                sort: arguments::sort_type(call)?,
            },
            Method::GetSongsFromArtist => Request::SongsFromArtist {
                artist: arguments::string(call, ARTIST)?.to_string(),
                sort: arguments::sort_type(call)?,
            },
            Method::GetSongsById => Request::SongsById {
                ids: arguments::id_list(call, SONG_IDS)?,
                sort: arguments::sort_type(call)?,
            },
        };

        Ok(request)
    }
}
