//! Media index column names, per collection.

pub mod genre {
    pub const NAME: &str = "name";
}

pub mod playlist {
    pub const ID: &str = "_id";
    pub const NAME: &str = "name";
    pub const DATA: &str = "_data";
    pub const DATE_ADDED: &str = "date_added";
}

pub mod artist {
    pub const ID: &str = "_id";
    pub const ARTIST: &str = "artist";
    pub const NUMBER_OF_ALBUMS: &str = "number_of_albums";
    pub const NUMBER_OF_TRACKS: &str = "number_of_tracks";
}

pub mod album {
    pub const ID: &str = "_id";
    pub const ALBUM: &str = "album";
    pub const ARTIST: &str = "artist";
    pub const NUMBER_OF_SONGS: &str = "numsongs";
    pub const FIRST_YEAR: &str = "minyear";
    pub const LAST_YEAR: &str = "maxyear";
    pub const ALBUM_ART: &str = "album_art";
}

pub mod song {
    pub const ID: &str = "_id";
    pub const TITLE: &str = "title";
    pub const DISPLAY_NAME: &str = "_display_name";
    pub const ARTIST: &str = "artist";
    pub const ARTIST_ID: &str = "artist_id";
    pub const ALBUM: &str = "album";
    pub const ALBUM_ID: &str = "album_id";
    pub const COMPOSER: &str = "composer";
    pub const DURATION: &str = "duration";
    pub const YEAR: &str = "year";
    pub const TRACK: &str = "track";
    pub const DATA: &str = "_data";
    pub const SIZE: &str = "_size";
    pub const DATE_ADDED: &str = "date_added";
}
