//! Shell configuration

use app_ui::{EdgeSwipeConfig, ProgressConfig};
use i18n::{Language, LocaleConfig};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use storage::KvConfig;

/// Top-level shell configuration
///
/// Every field has a default, so an empty JSON object is a valid config.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ShellConfig {
    /// Path of the durable store; `None` keeps preferences in memory
    pub store_path: Option<String>,
    /// Locale settings
    pub locale: LocaleConfig,
    /// Loading affordance settings
    pub progress: ProgressConfig,
    /// Edge-swipe settings
    pub edge_swipe: EdgeSwipeConfig,
    /// Grace period before pointer input is re-enabled (ms)
    pub lock_grace_ms: u64,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            store_path: None,
            locale: LocaleConfig::default(),
            progress: ProgressConfig::default(),
            edge_swipe: EdgeSwipeConfig::default(),
            lock_grace_ms: app_ui::tokens::timing::LOCK_RELEASE_GRACE.as_millis() as u64,
        }
    }
}

impl ShellConfig {
    /// Parse a JSON config
    pub fn from_json(json: &str) -> crate::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Persist preferences at the given path
    pub fn store_path(mut self, path: impl Into<String>) -> Self {
        self.store_path = Some(path.into());
        self
    }

    /// Set the default language
    pub fn default_language(mut self, language: Language) -> Self {
        self.locale = self.locale.default_language(language);
        self
    }

    /// Enable or disable browser language negotiation
    pub fn negotiate_browser_language(mut self, enabled: bool) -> Self {
        self.locale = self.locale.negotiate_browser_language(enabled);
        self
    }

    /// Set the desktop breakpoint (px)
    pub fn desktop_breakpoint(mut self, width: u32) -> Self {
        self.progress.desktop_breakpoint = width;
        self
    }

    /// Set the mobile loading show/hide delays
    pub fn progress_delays(mut self, show: Duration, hide: Duration) -> Self {
        self.progress.show_delay_ms = show.as_millis() as u64;
        self.progress.hide_delay_ms = hide.as_millis() as u64;
        self
    }

    /// Set the interaction lock grace period
    pub fn lock_grace(mut self, grace: Duration) -> Self {
        self.lock_grace_ms = grace.as_millis() as u64;
        self
    }

    pub(crate) fn kv_config(&self) -> Option<KvConfig> {
        self.store_path.as_ref().map(KvConfig::new)
    }
}
