//! Workspace placeholder crate.
//!
//! Exposes the feature flags that map onto the individual workspace crates so
//! a host binding can depend on `media-query-workspace` alone and receive the
//! plugin facade from `core-service`.

#[cfg(feature = "desktop-shims")]
pub use core_service::{bootstrap, MediaQueryPlugin};
