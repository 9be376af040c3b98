//! Platform and OS version detection

use crate::host::HostPlatform;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::{Arc, OnceLock};

/// Platform family the shell is running on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    /// iOS (packaged app or Safari)
    Ios,
    /// Android (packaged app or Chrome)
    Android,
    /// Desktop or plain web
    #[default]
    Desktop,
}

impl Platform {
    /// Map a container-reported platform name
    ///
    /// Anything unrecognised, including `"web"`, is treated as desktop.
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "ios" => Platform::Ios,
            "android" => Platform::Android,
            _ => Platform::Desktop,
        }
    }
}

/// Result of platform detection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct PlatformInfo {
    /// Running inside a packaged native container
    pub is_native: bool,
    /// Platform family
    pub platform: Platform,
}

/// Detect the platform, failing closed to desktop web
pub fn detect_platform(host: &dyn HostPlatform) -> PlatformInfo {
    let Some(is_native) = host.is_native_platform() else {
        tracing::debug!("Native capability API unavailable, assuming desktop web");
        return PlatformInfo::default();
    };

    let platform = host
        .platform_name()
        .map(|name| Platform::from_name(&name))
        .unwrap_or_default();

    PlatformInfo { is_native, platform }
}

/// Parse the Android major version out of a user agent
///
/// Returns 0 when no version can be found; callers treat 0 as the lowest
/// supported version.
pub fn parse_android_version(user_agent: &str) -> u32 {
    static ANDROID_REGEX: OnceLock<Regex> = OnceLock::new();
    let regex = ANDROID_REGEX.get_or_init(|| Regex::new(r"Android (\d+)").expect("valid regex"));

    regex
        .captures(user_agent)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse::<u32>().ok())
        .unwrap_or(0)
}

/// Environment probe with per-context caching
///
/// The platform and OS version cannot change without a restart, so both are
/// computed once and kept for the probe's lifetime.
pub struct EnvironmentProbe {
    host: Arc<dyn HostPlatform>,
    platform: OnceLock<PlatformInfo>,
    android_version: OnceLock<u32>,
}

impl EnvironmentProbe {
    /// Create a probe over the given host
    pub fn new(host: Arc<dyn HostPlatform>) -> Self {
        Self { host, platform: OnceLock::new(), android_version: OnceLock::new() }
    }

    /// Platform info, cached after the first call
    pub fn platform(&self) -> PlatformInfo {
        *self.platform.get_or_init(|| {
            let info = detect_platform(self.host.as_ref());
            tracing::info!(is_native = info.is_native, platform = ?info.platform, "Detected platform");
            info
        })
    }

    /// Android major version, cached after the first call (0 if unknown)
    pub fn android_version(&self) -> u32 {
        *self.android_version.get_or_init(|| {
            let version = self
                .host
                .user_agent()
                .map(|ua| parse_android_version(&ua))
                .unwrap_or(0);
            tracing::debug!("Android version resolved to {}", version);
            version
        })
    }
}
