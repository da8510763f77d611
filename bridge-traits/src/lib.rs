//! # Host Bridge Traits
//!
//! Contracts between the media query core and the host platform.
//!
//! ## Overview
//!
//! The core never talks to the operating system directly. Everything it needs
//! from the host is expressed as a trait (or a plain data type) in this crate
//! and injected at construction time:
//!
//! - [`MediaStore`](media_store::MediaStore) / [`Cursor`](media_store::Cursor) -
//!   read-only queries against the platform media index (Android
//!   `ContentResolver`, an iOS media library, a desktop SQLite index)
//! - [`PlatformCapabilities`](platform::PlatformCapabilities) - what the host's
//!   query layer supports, and how the platform describes itself
//! - [`MethodResult`](channel::MethodResult) - the one-shot result callback of a
//!   cross-language method call
//! - [`LoggerSink`](logging::LoggerSink) - forwards structured logs to the host
//!   logger (Logcat, os_log)
//!
//! ## Platform Requirements
//!
//! | Platform | Implementation | Status |
//! |----------|----------------|--------|
//! | Desktop  | `bridge-desktop` (`SqliteMediaStore`) | ✅ Available |
//! | Android  | host binding over `ContentResolver` | 📋 Host-provided |
//! | iOS      | host binding over `MPMediaQuery` | 📋 Host-provided |
//!
//! ## Query Safety
//!
//! `MediaStore` implementations receive selection templates with `?`
//! placeholders and the values to bind separately. Values must be bound as
//! literals by the underlying query engine and never spliced into the
//! template text.
//!
//! ## Thread Safety
//!
//! `MediaStore` and `LoggerSink` require `Send + Sync`; a store is shared by
//! every load task. A `Cursor` is owned by exactly one task and only needs
//! `Send`.

pub mod channel;
pub mod error;
pub mod logging;
pub mod media_store;
pub mod platform;

pub use error::BridgeError;

pub use channel::{ChannelResult, MethodCall, MethodResponse, MethodResult};
pub use logging::{ConsoleLogger, LogEntry, LogLevel, LoggerSink};
pub use media_store::{ContentQuery, ContentUri, Cursor, MediaStore, MemoryCursor};
pub use platform::{PlatformCapabilities, PlatformKind};
