//! # Core Runtime Module
//!
//! Provides the runtime infrastructure the media query plugin is assembled on:
//! - Logging and tracing infrastructure
//! - Plugin configuration with fail-fast capability validation
//!
//! ## Overview
//!
//! This crate contains the runtime utilities that the service layer depends
//! on. It establishes the logging conventions used throughout the system and
//! decides which `MediaStore`, platform capabilities and runtime handle the
//! loaders are built with.

pub mod config;
pub mod error;
pub mod logging;

pub use error::{Error, Result};
