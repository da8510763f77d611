//! Faults swallowed by load tasks still reach the log.

mod common;

use std::io;
use std::sync::{Arc, Mutex};

use bridge_traits::PlatformCapabilities;
use core_library::{GenreLoader, GenreSortType};

use common::{context, load, store_returning, TrackedCursor};

#[derive(Clone, Default)]
struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

impl io::Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl SharedBuffer {
    fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

#[core_async::test]
async fn test_fault_is_logged_with_loader_and_message() {
    let buffer = SharedBuffer::default();
    let writer = buffer.clone();
    // The fault is logged from a blocking worker thread, so a thread-local
    // default subscriber would miss it.
    tracing_subscriber::fmt()
        .with_writer(move || writer.clone())
        .with_ansi(false)
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let cursor = TrackedCursor::new(&["name"], &[&[Some("Blues")], &[Some("Jazz")]]).failing_after(1);
    let loader = GenreLoader::new(context(
        store_returning(cursor),
        PlatformCapabilities::android(33),
    ));

    let genres = load(|result| loader.get_genres(result, GenreSortType::Default)).await;
    assert_eq!(genres.len(), 1);

    let logs = buffer.contents();
    assert!(logs.contains("GenreLoader::load_data failed"), "logs: {}", logs);
    assert!(logs.contains("cursor window could not be filled"), "logs: {}", logs);
    assert!(logs.contains("ERROR"), "logs: {}", logs);
}
