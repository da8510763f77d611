//! Plugin façade and bootstrap helpers.
//!
//! This crate wires a host-provided media index into the loaders and exposes
//! them behind a single method-call dispatcher, [`MediaQueryPlugin`]. Mobile
//! hosts inject their own `MediaStore`; desktop apps typically enable the
//! `desktop-shims` feature (which depends on `bridge-desktop`) and point the
//! configuration at a SQLite media index instead.
//!
//! ```ignore
//! use bridge_traits::{ChannelResult, MethodCall};
//! use core_runtime::config::PluginConfig;
//! use serde_json::json;
//!
//! let config = PluginConfig::builder()
//!     .media_index_path("/path/to/media-index.db")
//!     .build()?;
//! let plugin = core_service::bootstrap(config)?;
//!
//! let (result, reply) = ChannelResult::new();
//! plugin.handle_method_call(MethodCall::new("searchGenres", json!({ "query": "Ja" })), result);
//! let genres = reply.await?.into_success();
//! ```

mod arguments;
pub mod error;
pub mod plugin;

pub use error::{CoreError, Result};
pub use plugin::{MediaQueryPlugin, Method, CHANNEL_NAME, INVALID_ARGUMENT};

use core_runtime::config::PluginConfig;
use core_runtime::logging::init_logging;
use tracing::info;

/// Installs the configured logging and builds the plugin.
///
/// Logging is only initialized when the configuration carries a
/// `LoggingConfig`; hosts that install their own subscriber leave it unset.
pub fn bootstrap(config: PluginConfig) -> Result<MediaQueryPlugin> {
    if let Some(logging) = config.logging.clone() {
        init_logging(logging)
            .map_err(|err| CoreError::InitializationFailed(err.to_string()))?;
    }

    let plugin = MediaQueryPlugin::new(config);
    info!(
        channel = CHANNEL_NAME,
        platform = %plugin.capabilities().description(),
        "Media query plugin ready"
    );

    Ok(plugin)
}
