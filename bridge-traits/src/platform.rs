//! Host platform description.
//!
//! The core adapts a small amount of its query behaviour to what the host's
//! media index accepts. Hosts describe themselves once, at plugin
//! construction, through [`PlatformCapabilities`].

use serde::{Deserialize, Serialize};

/// First Android API level (Android 10, "Q") whose media provider rejects
/// SQL modifiers smuggled into the projection.
pub const ANDROID_Q_SDK_INT: u32 = 29;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlatformKind {
    Android,
    Ios,
    Desktop,
}

/// Capabilities of the host media index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlatformCapabilities {
    pub platform: PlatformKind,
    /// Host OS version as reported by the platform (`"28"`, `"17.2"`, ...)
    pub os_version: String,
    /// Whether a `DISTINCT` modifier may be prefixed to the first projected
    /// column to have the index de-duplicate rows natively.
    pub supports_distinct_projection: bool,
}

impl PlatformCapabilities {
    /// Android host at the given API level.
    pub fn android(sdk_int: u32) -> Self {
        Self {
            platform: PlatformKind::Android,
            os_version: sdk_int.to_string(),
            supports_distinct_projection: sdk_int < ANDROID_Q_SDK_INT,
        }
    }

    /// iOS host. The media library exposes no SQL modifiers.
    pub fn ios(system_version: impl Into<String>) -> Self {
        Self {
            platform: PlatformKind::Ios,
            os_version: system_version.into(),
            supports_distinct_projection: false,
        }
    }

    /// Desktop host backed by a SQLite media index.
    pub fn desktop() -> Self {
        Self {
            platform: PlatformKind::Desktop,
            os_version: std::env::consts::OS.to_string(),
            supports_distinct_projection: true,
        }
    }

    /// Human-readable platform description, e.g. `"Android 28"`.
    pub fn description(&self) -> String {
        match self.platform {
            PlatformKind::Android => format!("Android {}", self.os_version),
            PlatformKind::Ios => format!("iOS {}", self.os_version),
            PlatformKind::Desktop => format!("Desktop {}", self.os_version),
        }
    }
}

impl Default for PlatformCapabilities {
    fn default() -> Self {
        Self::desktop()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_android_distinct_support_ends_at_q() {
        assert!(PlatformCapabilities::android(28).supports_distinct_projection);
        assert!(!PlatformCapabilities::android(ANDROID_Q_SDK_INT).supports_distinct_projection);
        assert!(!PlatformCapabilities::android(34).supports_distinct_projection);
    }

    #[test]
    fn test_descriptions() {
        assert_eq!(PlatformCapabilities::android(28).description(), "Android 28");
        assert_eq!(PlatformCapabilities::ios("17.2").description(), "iOS 17.2");
        assert!(PlatformCapabilities::desktop()
            .description()
            .starts_with("Desktop "));
    }

    #[test]
    fn test_ios_has_no_distinct_projection() {
        assert!(!PlatformCapabilities::ios("16.0").supports_distinct_projection);
    }
}
