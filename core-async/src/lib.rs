//! Runtime abstraction layer for the media query core.
//!
//! Every crate in the workspace schedules work through this crate instead of
//! reaching for Tokio directly. The load tasks need exactly three things from
//! the runtime:
//!
//! - a place to run the possibly-blocking platform query ([`task::spawn_blocking`])
//! - a context to deliver the terminal callback from ([`task::spawn`], [`runtime::Handle`])
//! - one-shot and state channels for completion signalling ([`sync`])
//!
//! # Examples
//!
//! ```rust
//! use core_async::{runtime, task};
//!
//! let value = runtime::block_on(async {
//!     task::spawn_blocking(|| 6 * 7).await.unwrap()
//! });
//! assert_eq!(value, 42);
//! ```

// Re-export the entry-point/test macros so downstream crates never need a
// direct Tokio dependency.
pub use core_async_macros::{main, test};

pub mod runtime;
pub mod sync;
pub mod task;

pub use task::{spawn, spawn_blocking};
