//! # Plugin Configuration Module
//!
//! Provides configuration management for the media query plugin.
//!
//! ## Overview
//!
//! The configuration system uses a builder pattern to construct a
//! `PluginConfig` instance that holds every dependency the loaders are built
//! with. It enforces fail-fast validation so a missing bridge surfaces when the
//! host attaches the plugin, not on the first query.
//!
//! ## Required Dependencies
//!
//! - `MediaStore` - The platform media index every load task queries
//! - Runtime `Handle` - Where result callbacks are delivered from
//!
//! ## Optional Settings (with defaults)
//!
//! - `PlatformCapabilities` - defaults to `PlatformCapabilities::desktop()`
//! - `LoggingConfig` - logging is left untouched when absent
//!
//! When the `desktop-shims` feature is enabled and no `MediaStore` is
//! injected, a read-only `SqliteMediaStore` is opened from
//! `media_index_path`. The runtime handle defaults to the runtime the builder
//! runs in.
//!
//! ## Usage
//!
//! ### Desktop host
//!
//! ```ignore
//! use core_runtime::config::PluginConfig;
//!
//! let config = PluginConfig::builder()
//!     .media_index_path("/path/to/media-index.db")
//!     .build()?;
//! ```
//!
//! ### Mobile host with a native media index
//!
//! ```ignore
//! use bridge_traits::PlatformCapabilities;
//! use core_runtime::config::PluginConfig;
//! use std::sync::Arc;
//!
//! let config = PluginConfig::builder()
//!     .media_store(Arc::new(AndroidMediaStore::new(content_resolver)))
//!     .capabilities(PlatformCapabilities::android(sdk_int))
//!     .runtime(runtime.handle().clone())
//!     .build()?;
//! ```

use crate::error::{Error, Result};
use crate::logging::LoggingConfig;
use bridge_traits::{MediaStore, PlatformCapabilities};
use core_async::runtime::{self, Handle};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Configuration for the media query plugin.
///
/// Use [`PluginConfigBuilder`] to construct instances.
#[derive(Clone)]
pub struct PluginConfig {
    /// Platform media index queried by every load task
    pub media_store: Arc<dyn MediaStore>,

    /// What the host's media index accepts
    pub capabilities: PlatformCapabilities,

    /// Runtime the result callbacks are delivered from
    pub runtime: Handle,

    /// Logging to install at bootstrap, if any
    pub logging: Option<LoggingConfig>,

    /// Location of the desktop media index, when one was configured
    pub media_index_path: Option<PathBuf>,
}

impl std::fmt::Debug for PluginConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PluginConfig")
            .field("media_store", &"MediaStore { ... }")
            .field("capabilities", &self.capabilities)
            .field("runtime", &self.runtime.runtime_flavor())
            .field("logging", &self.logging)
            .field("media_index_path", &self.media_index_path)
            .finish()
    }
}

impl PluginConfig {
    /// Creates a new configuration builder.
    pub fn builder() -> PluginConfigBuilder {
        PluginConfigBuilder::default()
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.capabilities.os_version.trim().is_empty() {
            return Err(Error::Config(
                "Platform version cannot be empty. Report the host OS version through \
                 PlatformCapabilities."
                    .to_string(),
            ));
        }

        if let Some(path) = &self.media_index_path {
            if path.as_os_str().is_empty() {
                return Err(Error::Config(
                    "Media index path cannot be empty".to_string(),
                ));
            }
        }

        Ok(())
    }
}

fn runtime_missing_error() -> Error {
    Error::CapabilityMissing {
        capability: "RuntimeHandle".to_string(),
        message: "A Tokio runtime handle is required to deliver query results. \
                 Build the configuration from inside a runtime or pass one with .runtime()."
            .to_string(),
    }
}

#[cfg(not(feature = "desktop-shims"))]
fn media_store_missing_error() -> Error {
    Error::CapabilityMissing {
        capability: "MediaStore".to_string(),
        message: "MediaStore implementation is required to query the media index. \
                 Desktop: ensure the 'desktop-shims' feature is enabled to use the default SqliteMediaStore. \
                 Android: inject a ContentResolver-backed store. \
                 iOS: inject an MPMediaQuery-backed store."
            .to_string(),
    }
}

#[cfg(feature = "desktop-shims")]
fn provide_default_media_store(media_index_path: Option<&Path>) -> Result<Arc<dyn MediaStore>> {
    use crate::logging::strip_path;
    use bridge_desktop::SqliteMediaStore;

    let path = media_index_path.ok_or_else(|| {
        Error::Config(
            "Media index path is required when no MediaStore is injected. \
             Use .media_index_path() to set it."
                .to_string(),
        )
    })?;

    let store = SqliteMediaStore::open(path).map_err(|e| {
        Error::Internal(format!("Failed to open default MediaStore: {}", e))
    })?;

    tracing::info!(
        index = %strip_path(&path.to_string_lossy()),
        "Using desktop media index"
    );

    let store: Arc<dyn MediaStore> = Arc::new(store);
    Ok(store)
}

#[cfg(not(feature = "desktop-shims"))]
fn provide_default_media_store(_media_index_path: Option<&Path>) -> Result<Arc<dyn MediaStore>> {
    Err(media_store_missing_error())
}

/// Builder for constructing [`PluginConfig`] instances.
#[derive(Default)]
pub struct PluginConfigBuilder {
    media_store: Option<Arc<dyn MediaStore>>,
    capabilities: Option<PlatformCapabilities>,
    runtime: Option<Handle>,
    logging: Option<LoggingConfig>,
    media_index_path: Option<PathBuf>,
}

impl PluginConfigBuilder {
    /// Sets the media index implementation.
    ///
    /// If not provided, the desktop default (`SqliteMediaStore`) is opened
    /// from [`media_index_path`](Self::media_index_path) when the
    /// `desktop-shims` feature is enabled.
    pub fn media_store(mut self, store: Arc<dyn MediaStore>) -> Self {
        self.media_store = Some(store);
        self
    }

    /// Sets the SQLite media index the desktop default store reads.
    pub fn media_index_path<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.media_index_path = Some(path.into());
        self
    }

    /// Describes the host platform.
    ///
    /// Default: `PlatformCapabilities::desktop()`
    pub fn capabilities(mut self, capabilities: PlatformCapabilities) -> Self {
        self.capabilities = Some(capabilities);
        self
    }

    /// Sets the runtime result callbacks are delivered from.
    ///
    /// Default: the runtime `build()` is called in.
    pub fn runtime(mut self, handle: Handle) -> Self {
        self.runtime = Some(handle);
        self
    }

    /// Logging installed by `core_service::bootstrap`.
    pub fn logging(mut self, logging: LoggingConfig) -> Self {
        self.logging = Some(logging);
        self
    }

    /// Builds the final `PluginConfig` instance.
    ///
    /// # Returns
    ///
    /// Returns `Ok(PluginConfig)` on success, or an error if:
    /// - No runtime handle was given and `build()` runs outside a runtime
    /// - No `MediaStore` was injected and no default can be provided
    /// - Configuration values are invalid
    pub fn build(self) -> Result<PluginConfig> {
        let runtime = match self.runtime {
            Some(handle) => handle,
            None => runtime::try_current().ok_or_else(runtime_missing_error)?,
        };

        let media_store = match self.media_store {
            Some(store) => store,
            None => provide_default_media_store(self.media_index_path.as_deref())?,
        };

        let config = PluginConfig {
            media_store,
            capabilities: self.capabilities.unwrap_or_default(),
            runtime,
            logging: self.logging,
            media_index_path: self.media_index_path,
        };

        config.validate()?;

        Ok(config)
    }
}
