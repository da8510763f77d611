//! Sort orders for media queries.
//!
//! Each entity has a closed enumeration of sort intents. The host sends them
//! across the bridge either as the enum index or as the variant name
//! (`"NEWEST_FIRST"`); anything unrecognised falls back to `DEFAULT`, which
//! always sorts ascending by the entity's display field.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::columns::{album, artist, genre, playlist, song};

/// Direction of an order-by term.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Asc,
    Desc,
}

impl Direction {
    pub fn as_sql(&self) -> &'static str {
        match self {
            Direction::Asc => "ASC",
            Direction::Desc => "DESC",
        }
    }
}

/// A sort intent that can be rendered into an order-by clause.
pub trait SortOrder: Copy + PartialEq + fmt::Debug + Send + Sync + 'static {
    /// All variants, in bridge index order. The first one is `DEFAULT`.
    const VARIANTS: &'static [Self];

    /// Column and direction this intent sorts by.
    fn ordering(&self) -> (&'static str, Direction);

    /// Bridge name of the variant, e.g. `"NEWEST_FIRST"`.
    fn name(&self) -> &'static str;

    /// The canonical `DEFAULT` variant.
    fn default_order() -> Self {
        Self::VARIANTS[0]
    }

    /// Renders the order-by clause, e.g. `"date_added DESC"`.
    fn order_by(&self) -> String {
        let (column, direction) = self.ordering();
        format!("{} {}", column, direction.as_sql())
    }

    /// Variant at `index`; out-of-range indexes map to `DEFAULT`.
    fn from_index(index: i64) -> Self {
        usize::try_from(index)
            .ok()
            .and_then(|index| Self::VARIANTS.get(index).copied())
            .unwrap_or_else(Self::default_order)
    }

    /// Variant named `name` (case-insensitive); unknown names map to `DEFAULT`.
    fn from_name(name: &str) -> Self {
        Self::VARIANTS
            .iter()
            .copied()
            .find(|variant| variant.name().eq_ignore_ascii_case(name))
            .unwrap_or_else(Self::default_order)
    }
}

macro_rules! sort_type {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $( $(#[$variant_meta:meta])* $variant:ident => ($label:literal, $column:expr, $direction:ident) ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(rename_all = "SCREAMING_SNAKE_CASE")]
        pub enum $name {
            $( $(#[$variant_meta])* $variant ),+
        }

        impl SortOrder for $name {
            const VARIANTS: &'static [Self] = &[$( $name::$variant ),+];

            fn ordering(&self) -> (&'static str, Direction) {
                match self {
                    $( $name::$variant => ($column, Direction::$direction) ),+
                }
            }

            fn name(&self) -> &'static str {
                match self {
                    $( $name::$variant => $label ),+
                }
            }
        }

        impl Default for $name {
            fn default() -> Self {
                <Self as SortOrder>::default_order()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.name())
            }
        }
    };
}

sort_type! {
    /// Sort orders for genre queries.
    pub enum GenreSortType {
        /// Alphabetical by genre name
        Default => ("DEFAULT", genre::NAME, Asc),
    }
}

sort_type! {
    /// Sort orders for playlist queries.
    pub enum PlaylistSortType {
        /// Alphabetical by playlist name
        Default => ("DEFAULT", playlist::NAME, Asc),
        /// Most recently created playlists first
        NewestFirst => ("NEWEST_FIRST", playlist::DATE_ADDED, Desc),
        /// Oldest playlists first
        OldestFirst => ("OLDEST_FIRST", playlist::DATE_ADDED, Asc),
    }
}

sort_type! {
    /// Sort orders for artist queries.
    pub enum ArtistSortType {
        Default => ("DEFAULT", artist::ARTIST, Asc),
        MoreTracksNumberFirst => ("MORE_TRACKS_NUMBER_FIRST", artist::NUMBER_OF_TRACKS, Desc),
        LessTracksNumberFirst => ("LESS_TRACKS_NUMBER_FIRST", artist::NUMBER_OF_TRACKS, Asc),
        MoreAlbumsNumberFirst => ("MORE_ALBUMS_NUMBER_FIRST", artist::NUMBER_OF_ALBUMS, Desc),
        LessAlbumsNumberFirst => ("LESS_ALBUMS_NUMBER_FIRST", artist::NUMBER_OF_ALBUMS, Asc),
    }
}

sort_type! {
    /// Sort orders for album queries.
    pub enum AlbumSortType {
        Default => ("DEFAULT", album::ALBUM, Asc),
        AlphabeticArtistName => ("ALPHABETIC_ARTIST_NAME", album::ARTIST, Asc),
        MoreSongsNumberFirst => ("MORE_SONGS_NUMBER_FIRST", album::NUMBER_OF_SONGS, Desc),
        LessSongsNumberFirst => ("LESS_SONGS_NUMBER_FIRST", album::NUMBER_OF_SONGS, Asc),
        /// Albums with the most recent release year first
        MostRecentYear => ("MOST_RECENT_YEAR", album::LAST_YEAR, Desc),
        OldestYear => ("OLDEST_YEAR", album::FIRST_YEAR, Asc),
    }
}

sort_type! {
    /// Sort orders for song queries.
    pub enum SongSortType {
        Default => ("DEFAULT", song::TITLE, Asc),
        AlphabeticComposer => ("ALPHABETIC_COMPOSER", song::COMPOSER, Asc),
        GreaterDuration => ("GREATER_DURATION", song::DURATION, Desc),
        SmallerDuration => ("SMALLER_DURATION", song::DURATION, Asc),
        RecentYear => ("RECENT_YEAR", song::YEAR, Desc),
        OldestYear => ("OLDEST_YEAR", song::YEAR, Asc),
        AlphabeticArtist => ("ALPHABETIC_ARTIST", song::ARTIST, Asc),
        AlphabeticAlbum => ("ALPHABETIC_ALBUM", song::ALBUM, Asc),
        GreaterTrackNumber => ("GREATER_TRACK_NUMBER", song::TRACK, Desc),
        SmallerTrackNumber => ("SMALLER_TRACK_NUMBER", song::TRACK, Asc),
        DisplayName => ("DISPLAY_NAME", song::DISPLAY_NAME, Asc),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_total<S: SortOrder>() {
        for variant in S::VARIANTS {
            let clause = variant.order_by();
            assert!(!clause.is_empty());
            assert_eq!(clause, variant.order_by());
            assert!(clause.ends_with(" ASC") || clause.ends_with(" DESC"));
        }
    }

    #[test]
    fn test_every_variant_renders_a_clause() {
        assert_total::<GenreSortType>();
        assert_total::<PlaylistSortType>();
        assert_total::<ArtistSortType>();
        assert_total::<AlbumSortType>();
        assert_total::<SongSortType>();
    }

    #[test]
    fn test_default_clauses() {
        assert_eq!(GenreSortType::default().order_by(), "name ASC");
        assert_eq!(PlaylistSortType::default().order_by(), "name ASC");
        assert_eq!(ArtistSortType::default().order_by(), "artist ASC");
        assert_eq!(AlbumSortType::default().order_by(), "album ASC");
        assert_eq!(SongSortType::default().order_by(), "title ASC");
    }

    #[test]
    fn test_playlist_clauses() {
        assert_eq!(PlaylistSortType::NewestFirst.order_by(), "date_added DESC");
        assert_eq!(PlaylistSortType::OldestFirst.order_by(), "date_added ASC");
    }

    #[test]
    fn test_from_index_falls_back_to_default() {
        assert_eq!(PlaylistSortType::from_index(1), PlaylistSortType::NewestFirst);
        assert_eq!(PlaylistSortType::from_index(2), PlaylistSortType::OldestFirst);
        assert_eq!(PlaylistSortType::from_index(3), PlaylistSortType::Default);
        assert_eq!(PlaylistSortType::from_index(-1), PlaylistSortType::Default);
        assert_eq!(GenreSortType::from_index(7), GenreSortType::Default);
        assert_eq!(SongSortType::from_index(10), SongSortType::DisplayName);
    }

    #[test]
    fn test_from_name() {
        assert_eq!(
            AlbumSortType::from_name("MOST_RECENT_YEAR"),
            AlbumSortType::MostRecentYear
        );
        assert_eq!(
            AlbumSortType::from_name("most_recent_year"),
            AlbumSortType::MostRecentYear
        );
        assert_eq!(AlbumSortType::from_name("LOUDEST"), AlbumSortType::Default);
    }

    #[test]
    fn test_serde_uses_bridge_names() {
        let json = serde_json::to_string(&ArtistSortType::MoreAlbumsNumberFirst).unwrap();
        assert_eq!(json, "\"MORE_ALBUMS_NUMBER_FIRST\"");
        assert_eq!(PlaylistSortType::NewestFirst.to_string(), "NEWEST_FIRST");
    }
}
