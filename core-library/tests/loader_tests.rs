mod common;

use bridge_traits::PlatformCapabilities;
use core_library::{
    AlbumLoader, AlbumSortType, ArtistLoader, ArtistSortType, GenreLoader, GenreSortType,
    PlaylistLoader, PlaylistSortType, SongLoader, SongSortType,
};

use common::{context, load, media_index, media_index_with, strings};

#[core_async::test]
async fn test_get_genres_sorted_by_name() {
    let loader = GenreLoader::new(context(media_index(), PlatformCapabilities::android(33)));

    let genres = load(|result| loader.get_genres(result, GenreSortType::Default)).await;

    assert_eq!(strings(genres.column("name")), vec!["Blues", "Jazz", "Rock"]);
    assert!(genres.has_fields(&["name"]));
}

#[core_async::test]
async fn test_search_genres_by_prefix() {
    let loader = GenreLoader::new(context(media_index(), PlatformCapabilities::android(28)));

    let genres = load(|result| loader.search_genres(result, "Ja", GenreSortType::Default)).await;
    assert_eq!(strings(genres.column("name")), vec!["Jazz"]);

    let everything = load(|result| loader.search_genres(result, "", GenreSortType::Default)).await;
    assert_eq!(everything.len(), 3);

    let nothing = load(|result| loader.search_genres(result, "Zydeco", GenreSortType::Default)).await;
    assert!(nothing.is_empty());
}

#[core_async::test]
async fn test_search_term_is_bound_not_interpolated() {
    let loader = GenreLoader::new(context(media_index(), PlatformCapabilities::desktop()));

    let genres = load(|result| {
        loader.search_genres(result, "x' OR '1'='1", GenreSortType::Default)
    })
    .await;

    assert!(genres.is_empty());
}

#[core_async::test]
async fn test_genre_duplicates_collapse_only_with_distinct_projection() {
    let duplicated = || {
        media_index_with(|conn| {
            conn.execute("INSERT INTO genres (_id, name) VALUES (4, 'Jazz')", [])
                .unwrap();
        })
    };

    let distinct = GenreLoader::new(context(duplicated(), PlatformCapabilities::android(28)));
    let genres = load(|result| distinct.get_genres(result, GenreSortType::Default)).await;
    assert_eq!(strings(genres.column("name")), vec!["Blues", "Jazz", "Rock"]);

    // The guard compares values within one row, so separate rows stay.
    let guarded = GenreLoader::new(context(duplicated(), PlatformCapabilities::android(33)));
    let genres = load(|result| guarded.get_genres(result, GenreSortType::Default)).await;
    assert_eq!(
        strings(genres.column("name")),
        vec!["Blues", "Jazz", "Jazz", "Rock"]
    );
}

#[core_async::test]
async fn test_repeated_loads_are_identical() {
    let loader = GenreLoader::new(context(media_index(), PlatformCapabilities::ios("17.2")));

    let first = load(|result| loader.get_genres(result, GenreSortType::Default)).await;
    let second = load(|result| loader.get_genres(result, GenreSortType::Default)).await;

    assert_eq!(first, second);
}

#[core_async::test]
async fn test_playlists_by_date_added() {
    let loader = PlaylistLoader::new(context(media_index(), PlatformCapabilities::desktop()));

    let newest = load(|result| loader.get_playlists(result, PlaylistSortType::NewestFirst)).await;
    assert_eq!(
        strings(newest.column("name")),
        vec!["Road Trip", "Workout", "Chill"]
    );
    assert!(newest.has_fields(&["_id", "name", "_data", "date_added"]));

    let oldest = load(|result| loader.get_playlists(result, PlaylistSortType::OldestFirst)).await;
    assert_eq!(
        strings(oldest.column("name")),
        vec!["Chill", "Workout", "Road Trip"]
    );

    let workout = &oldest.records()[1];
    assert!(workout.contains_field("_data"));
    assert_eq!(workout.get("_data"), None);
}

#[core_async::test]
async fn test_search_playlists() {
    let loader = PlaylistLoader::new(context(media_index(), PlatformCapabilities::desktop()));

    let playlists = load(|result| {
        loader.search_playlists(result, "Ro", PlaylistSortType::Default)
    })
    .await;

    assert_eq!(strings(playlists.column("name")), vec!["Road Trip"]);
}

#[core_async::test]
async fn test_artists_by_track_count() {
    let loader = ArtistLoader::new(context(media_index(), PlatformCapabilities::desktop()));

    let artists = load(|result| {
        loader.get_artists(result, ArtistSortType::MoreTracksNumberFirst)
    })
    .await;

    assert_eq!(
        strings(artists.column("artist")),
        vec!["Muddy Waters", "Miles Davis", "Nina Simone"]
    );
    assert_eq!(artists.records()[0].get("number_of_tracks"), Some("12"));
}

#[core_async::test]
async fn test_search_artists() {
    let loader = ArtistLoader::new(context(media_index(), PlatformCapabilities::desktop()));

    let artists = load(|result| loader.search_artists(result, "M", ArtistSortType::Default)).await;

    assert_eq!(
        strings(artists.column("artist")),
        vec!["Miles Davis", "Muddy Waters"]
    );
}

#[core_async::test]
async fn test_albums_from_artist() {
    let loader = AlbumLoader::new(context(media_index(), PlatformCapabilities::desktop()));

    let albums = load(|result| {
        loader.get_albums_from_artist(result, "Miles Davis", AlbumSortType::Default)
    })
    .await;
    assert_eq!(
        strings(albums.column("album")),
        vec!["Bitches Brew", "Kind of Blue"]
    );

    let newest = load(|result| {
        loader.get_albums_from_artist(result, "Miles Davis", AlbumSortType::MostRecentYear)
    })
    .await;
    assert_eq!(
        strings(newest.column("album")),
        vec!["Bitches Brew", "Kind of Blue"]
    );

    let oldest = load(|result| loader.get_albums(result, AlbumSortType::OldestYear)).await;
    assert_eq!(oldest.records()[0].get("album"), Some("Kind of Blue"));
}

#[core_async::test]
async fn test_search_albums() {
    let loader = AlbumLoader::new(context(media_index(), PlatformCapabilities::desktop()));

    let albums = load(|result| loader.search_albums(result, "P", AlbumSortType::Default)).await;

    assert_eq!(strings(albums.column("album")), vec!["Pastel Blues"]);
}

#[core_async::test]
async fn test_songs_from_album_and_artist() {
    let loader = SongLoader::new(context(media_index(), PlatformCapabilities::desktop()));

    let kind_of_blue = load(|result| {
        loader.get_songs_from_album(result, "10", SongSortType::SmallerTrackNumber)
    })
    .await;
    assert_eq!(
        strings(kind_of_blue.column("title")),
        vec!["So What", "Blue in Green"]
    );
    assert_eq!(kind_of_blue.records()[0].len(), 14);

    let nina = load(|result| {
        loader.get_songs_from_artist(result, "Nina Simone", SongSortType::Default)
    })
    .await;
    assert_eq!(strings(nina.column("title")), vec!["Sinnerman"]);
    assert_eq!(nina.records()[0].get("composer"), None);
}

#[core_async::test]
async fn test_songs_by_id() {
    let loader = SongLoader::new(context(media_index(), PlatformCapabilities::desktop()));

    let songs = load(|result| {
        loader.get_songs_by_id(result, ["4", "1"], SongSortType::GreaterDuration)
    })
    .await;
    assert_eq!(strings(songs.column("_id")), vec!["4", "1"]);

    let none = load(|result| {
        loader.get_songs_by_id(result, Vec::<String>::new(), SongSortType::Default)
    })
    .await;
    assert!(none.is_empty());
}

#[core_async::test]
async fn test_search_songs() {
    let loader = SongLoader::new(context(media_index(), PlatformCapabilities::desktop()));

    let songs = load(|result| loader.search_songs(result, "S", SongSortType::Default)).await;

    assert_eq!(
        strings(songs.column("title")),
        vec!["Sinnerman", "So What", "Spanish Key"]
    );
}
