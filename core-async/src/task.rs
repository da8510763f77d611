//! Task spawning.
//!
//! A load task is split in two halves: the platform query runs on the
//! blocking pool through [`spawn_blocking`], while the half that waits for it
//! and fires the result callback is an ordinary async task created with
//! [`spawn`] or [`spawn_on`].

use std::future::Future;

use crate::runtime::Handle;

pub use tokio::task::{spawn_blocking, yield_now, JoinError, JoinHandle};

/// Spawns a future on the runtime the caller is currently running in.
///
/// # Panics
///
/// Panics when called outside of a runtime context. Code that cannot
/// guarantee a surrounding runtime should hold a [`Handle`] and use
/// [`spawn_on`] instead.
pub fn spawn<F>(future: F) -> JoinHandle<F::Output>
where
    F: Future + Send + 'static,
    F::Output: Send + 'static,
{
    tokio::task::spawn(future)
}

/// Spawns a future on the runtime behind `handle`.
pub fn spawn_on<F>(handle: &Handle, future: F) -> JoinHandle<F::Output>
where
    F: Future + Send + 'static,
    F::Output: Send + 'static,
{
    handle.spawn(future)
}
