//! Channels used to signal load-task completion.
//!
//! - [`oneshot`] carries the single terminal result of a task.
//! - [`watch`] publishes the task's lifecycle state to observers.

pub use tokio::sync::{oneshot, watch};
