//! Runtime construction helpers.

pub use tokio::runtime::{Builder, Handle, Runtime, RuntimeFlavor};

/// Runs `future` to completion on a fresh current-thread runtime.
///
/// Used by `#[core_async::test]` and `#[core_async::main]`.
pub fn block_on<F>(future: F) -> F::Output
where
    F: std::future::Future,
{
    Builder::new_current_thread()
        .enable_all()
        .build()
        .expect("core_async::runtime::block_on: failed to build Tokio runtime")
        .block_on(future)
}

/// Runs `future` to completion on a fresh multi-thread runtime.
///
/// Used by `#[core_async::test(multi_thread)]`, where tests need several load
/// tasks genuinely running at once.
pub fn block_on_multi_thread<F>(future: F) -> F::Output
where
    F: std::future::Future,
{
    Builder::new_multi_thread()
        .worker_threads(2)
        .enable_all()
        .build()
        .expect("core_async::runtime::block_on_multi_thread: failed to build Tokio runtime")
        .block_on(future)
}

/// Returns the handle of the runtime the caller is running in, if any.
pub fn try_current() -> Option<Handle> {
    Handle::try_current().ok()
}
