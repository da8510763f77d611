#![allow(dead_code)]

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use bridge_desktop::{SqliteMediaStore, MEDIA_INDEX_SCHEMA};
use bridge_traits::error::{BridgeError, Result as BridgeResult};
use bridge_traits::{
    ChannelResult, ContentQuery, Cursor, MediaStore, MemoryCursor, MethodResponse, MethodResult,
    PlatformCapabilities,
};
use core_async::runtime::Handle;
use core_library::{LoaderContext, ResultSet, TaskHandle};
use mockall::mock;
use rusqlite::Connection;
use serde_json::Value;

mock! {
    pub Store {}

    impl MediaStore for Store {
        fn query(&self, query: &ContentQuery) -> BridgeResult<Option<Box<dyn Cursor>>>;
    }
}

const FIXTURE: &str = r#"
INSERT INTO genres (_id, name) VALUES
    (1, 'Rock'), (2, 'Jazz'), (3, 'Blues');

INSERT INTO playlists (_id, name, _data, date_added) VALUES
    (1, 'Road Trip', '/playlists/road.m3u', 1700000300),
    (2, 'Chill', '/playlists/chill.m3u', 1700000100),
    (3, 'Workout', NULL, 1700000200);

INSERT INTO artists (_id, artist, number_of_albums, number_of_tracks) VALUES
    (1, 'Miles Davis', 2, 11),
    (2, 'Nina Simone', 1, 9),
    (3, 'Muddy Waters', 1, 12);

INSERT INTO albums (_id, album, artist, numsongs, minyear, maxyear, album_art) VALUES
    (10, 'Kind of Blue', 'Miles Davis', 5, 1959, 1959, NULL),
    (11, 'Bitches Brew', 'Miles Davis', 6, 1970, 1970, NULL),
    (12, 'Pastel Blues', 'Nina Simone', 9, 1965, 1965, NULL),
    (13, 'Folk Singer', 'Muddy Waters', 12, 1964, 1964, NULL);

INSERT INTO audio (_id, title, _display_name, artist, artist_id, album, album_id, composer,
                   duration, year, track, _data, _size, date_added) VALUES
    (1, 'So What', 'so_what.flac', 'Miles Davis', 1, 'Kind of Blue', 10, 'Miles Davis',
        562000, 1959, 1, '/music/so_what.flac', 60000000, 1700000000),
    (2, 'Blue in Green', 'blue_in_green.flac', 'Miles Davis', 1, 'Kind of Blue', 10, 'Bill Evans',
        337000, 1959, 3, '/music/blue_in_green.flac', 35000000, 1700000001),
    (3, 'Sinnerman', 'sinnerman.flac', 'Nina Simone', 2, 'Pastel Blues', 12, NULL,
        622000, 1965, 9, '/music/sinnerman.flac', 65000000, 1700000002),
    (4, 'Spanish Key', 'spanish_key.flac', 'Miles Davis', 1, 'Bitches Brew', 11, 'Miles Davis',
        1052000, 1970, 3, '/music/spanish_key.flac', 110000000, 1700000003);
"#;

/// In-memory media index with a handful of rows per collection.
pub fn media_index() -> SqliteMediaStore {
    media_index_with(|_| {})
}

/// Like [`media_index`], letting the test add rows before the store is built.
pub fn media_index_with(extra: impl FnOnce(&Connection)) -> SqliteMediaStore {
    let conn = Connection::open_in_memory().unwrap();
    conn.execute_batch(MEDIA_INDEX_SCHEMA).unwrap();
    conn.execute_batch(FIXTURE).unwrap();
    extra(&conn);
    SqliteMediaStore::from_connection(conn)
}

pub fn context(store: impl MediaStore + 'static, capabilities: PlatformCapabilities) -> LoaderContext {
    LoaderContext::new(Arc::new(store), capabilities, Handle::current())
}

/// Starts a load, waits for it and returns the delivered rows.
pub async fn load(start: impl FnOnce(Box<dyn MethodResult>) -> TaskHandle) -> ResultSet {
    let (result, reply) = ChannelResult::new();
    let handle = start(result);
    handle.wait().await.unwrap();

    let value = reply.await.unwrap().into_success().unwrap();
    serde_json::from_value(value).unwrap()
}

pub fn strings(values: Vec<Option<&str>>) -> Vec<String> {
    values
        .into_iter()
        .map(|value| value.unwrap_or_default().to_string())
        .collect()
}

/// Cursor that records `close` and can fault or panic after a number of rows.
pub struct TrackedCursor {
    inner: MemoryCursor,
    closed: Arc<AtomicBool>,
    fail_after: Option<usize>,
    panic_after: Option<usize>,
    served: usize,
}

impl TrackedCursor {
    pub fn new(columns: &[&str], rows: &[&[Option<&str>]]) -> Self {
        let inner = MemoryCursor::new(
            columns.iter().map(|column| column.to_string()).collect(),
            rows.iter()
                .map(|row| row.iter().map(|value| value.map(str::to_string)).collect())
                .collect(),
        );
        Self {
            inner,
            closed: Arc::new(AtomicBool::new(false)),
            fail_after: None,
            panic_after: None,
            served: 0,
        }
    }

    /// Faults on the advance after `rows` rows were served.
    pub fn failing_after(mut self, rows: usize) -> Self {
        self.fail_after = Some(rows);
        self
    }

    /// Panics on the advance after `rows` rows were served.
    pub fn panicking_after(mut self, rows: usize) -> Self {
        self.panic_after = Some(rows);
        self
    }

    pub fn closed_flag(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.closed)
    }
}

impl Cursor for TrackedCursor {
    fn column_names(&self) -> &[String] {
        self.inner.column_names()
    }

    fn move_to_next(&mut self) -> BridgeResult<bool> {
        if self.panic_after == Some(self.served) {
            panic!("media provider process died");
        }

        if self.fail_after == Some(self.served) {
            return Err(BridgeError::QueryFault(
                "cursor window could not be filled".to_string(),
            ));
        }

        let moved = self.inner.move_to_next()?;
        if moved {
            self.served += 1;
        }
        Ok(moved)
    }

    fn get_string(&self, column_index: usize) -> BridgeResult<Option<String>> {
        self.inner.get_string(column_index)
    }

    fn close(&mut self) {
        self.inner.close();
        self.closed.store(true, Ordering::SeqCst);
    }

    fn is_closed(&self) -> bool {
        self.inner.is_closed()
    }
}

/// Mock store handing out `cursor` once.
pub fn store_returning(cursor: TrackedCursor) -> MockStore {
    let mut store = MockStore::new();
    let mut cursor = Some(cursor);
    store
        .expect_query()
        .times(1)
        .returning(move |_| Ok(cursor.take().map(|cursor| Box::new(cursor) as Box<dyn Cursor>)));
    store
}

/// [`MethodResult`] counting how many times it was completed.
#[derive(Clone, Default)]
pub struct RecordingResult {
    pub completions: Arc<AtomicUsize>,
    pub responses: Arc<Mutex<Vec<MethodResponse>>>,
}

impl RecordingResult {
    pub fn boxed(&self) -> Box<dyn MethodResult> {
        Box::new(self.clone())
    }

    pub fn completions(&self) -> usize {
        self.completions.load(Ordering::SeqCst)
    }

    fn record(&self, response: MethodResponse) {
        self.completions.fetch_add(1, Ordering::SeqCst);
        self.responses.lock().unwrap().push(response);
    }
}

impl MethodResult for RecordingResult {
    fn success(self: Box<Self>, value: Value) {
        self.record(MethodResponse::Success { value });
    }

    fn error(self: Box<Self>, code: &str, message: &str, details: Option<Value>) {
        self.record(MethodResponse::Error {
            code: code.to_string(),
            message: message.to_string(),
            details,
        });
    }

    fn not_implemented(self: Box<Self>) {
        self.record(MethodResponse::NotImplemented);
    }
}
