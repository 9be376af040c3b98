//! Locale/direction store
//!
//! Process-wide owner of the UI language. Every change is applied to the
//! document root synchronously, so the `dir` attribute and the stored
//! language never disagree. Persistence is best-effort: a failing store or
//! cookie write is logged and never blocks the in-memory change.

use crate::document::DocumentRoot;
use crate::lang::{DirectionSource, Language, TextDirection};
use crate::Result;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use storage::{Cookie, CookieJar, PreferenceStore};
use tokio::sync::watch;

/// Default key for the stored language (store and cookie)
pub const LANGUAGE_KEY: &str = "language";

/// Locale store configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LocaleConfig {
    /// Key in the durable store
    pub storage_key: String,
    /// Cookie name
    pub cookie_name: String,
    /// Language used when nothing is stored
    pub default_language: Language,
    /// Consult the browser language before falling back to the default
    pub negotiate_browser_language: bool,
}

impl Default for LocaleConfig {
    fn default() -> Self {
        Self {
            storage_key: LANGUAGE_KEY.to_string(),
            cookie_name: LANGUAGE_KEY.to_string(),
            default_language: Language::Ar,
            negotiate_browser_language: false,
        }
    }
}

impl LocaleConfig {
    /// Set the default language
    pub fn default_language(mut self, language: Language) -> Self {
        self.default_language = language;
        self
    }

    /// Enable or disable browser language negotiation
    pub fn negotiate_browser_language(mut self, enabled: bool) -> Self {
        self.negotiate_browser_language = enabled;
        self
    }
}

/// Owner of the current UI language
pub struct LocaleStore {
    config: LocaleConfig,
    language_tx: watch::Sender<Language>,
    store: Arc<dyn PreferenceStore>,
    cookies: Arc<dyn CookieJar>,
    document: Arc<dyn DocumentRoot>,
}

impl LocaleStore {
    /// Create a store; call [`LocaleStore::initialize`] before use
    pub fn new(
        config: LocaleConfig,
        store: Arc<dyn PreferenceStore>,
        cookies: Arc<dyn CookieJar>,
        document: Arc<dyn DocumentRoot>,
    ) -> Self {
        let (language_tx, _) = watch::channel(config.default_language);
        Self { config, language_tx, store, cookies, document }
    }

    /// Resolve the starting language and apply it to the document
    ///
    /// Priority: stored preference, then (if enabled) the browser language,
    /// then the configured default.
    pub fn initialize(&self) -> Language {
        let language = self
            .stored_language()
            .or_else(|| self.browser_language())
            .unwrap_or(self.config.default_language);

        self.language_tx.send_replace(language);
        self.apply_document(language);
        tracing::info!(language = %language, "Locale initialized");

        language
    }

    /// Current language
    pub fn language(&self) -> Language {
        *self.language_tx.borrow()
    }

    /// Current text direction
    pub fn direction(&self) -> TextDirection {
        self.language().direction()
    }

    /// Whether the current language is right to left
    pub fn is_rtl(&self) -> bool {
        self.direction().is_rtl()
    }

    /// Change the language, persist it and re-apply the document direction
    pub fn set(&self, language: Language) {
        self.language_tx.send_replace(language);

        if let Err(e) = self.persist(language) {
            tracing::warn!("Failed to persist language preference: {}", e);
        }

        self.apply_document(language);
    }

    /// Flip between the two supported languages
    pub fn toggle(&self) -> Language {
        let next = self.language().toggled();
        self.set(next);
        next
    }

    /// Subscribe to language changes
    pub fn subscribe(&self) -> watch::Receiver<Language> {
        self.language_tx.subscribe()
    }

    fn persist(&self, language: Language) -> Result<()> {
        // Both writes are attempted even if the first one fails.
        let stored = self.store.write(&self.config.storage_key, language.code());
        let cookie = Cookie::new(self.config.cookie_name.clone(), language.code())
            .and_then(|cookie| self.cookies.set_cookie(&cookie));

        stored?;
        cookie?;
        Ok(())
    }

    fn stored_language(&self) -> Option<Language> {
        match self.store.read(&self.config.storage_key) {
            Ok(Some(value)) => match value.parse() {
                Ok(language) => Some(language),
                Err(e) => {
                    tracing::warn!("Ignoring stored language: {}", e);
                    None
                }
            },
            Ok(None) => None,
            Err(e) => {
                tracing::warn!("Failed to read stored language: {}", e);
                None
            }
        }
    }

    fn browser_language(&self) -> Option<Language> {
        if !self.config.negotiate_browser_language {
            return None;
        }
        self.document
            .browser_language()
            .and_then(|tag| Language::from_browser_tag(&tag))
    }

    fn apply_document(&self, language: Language) {
        self.document.apply(language, language.direction());
    }
}

impl DirectionSource for LocaleStore {
    fn text_direction(&self) -> TextDirection {
        self.direction()
    }
}
