//! Cookie mirror for server-rendered pages
//!
//! Preferences that the server needs before the client boots (the UI
//! language) are mirrored into a cookie next to the durable store.

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::time::Duration;
use thiserror::Error;

/// Default cookie lifetime (365 days)
pub const DEFAULT_MAX_AGE: Duration = Duration::from_secs(365 * 24 * 60 * 60);

/// Cookie error types
#[derive(Debug, Error)]
pub enum CookieError {
    /// Cookie name or value contains characters that cannot be serialized
    #[error("Invalid cookie {field}: {value:?}")]
    Invalid {
        /// Which part was rejected
        field: &'static str,
        /// Offending input
        value: String,
    },

    /// The host refused the write
    #[error("Cookie write rejected: {0}")]
    Rejected(String),
}

/// Result type for cookie operations
pub type Result<T> = std::result::Result<T, CookieError>;

/// SameSite policy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum SameSite {
    /// Strict same-site
    Strict,
    /// Lax same-site (sent on top-level navigations)
    #[default]
    Lax,
    /// No restriction
    None,
}

impl fmt::Display for SameSite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SameSite::Strict => write!(f, "Strict"),
            SameSite::Lax => write!(f, "Lax"),
            SameSite::None => write!(f, "None"),
        }
    }
}

/// A cookie to be written through a [`CookieJar`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cookie {
    /// Cookie name
    pub name: String,
    /// Cookie value
    pub value: String,
    /// Path attribute
    pub path: String,
    /// Max-Age attribute
    pub max_age: Duration,
    /// SameSite attribute
    pub same_site: SameSite,
}

impl Cookie {
    /// Create a root-path, Lax cookie with the default one year lifetime
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Result<Self> {
        let name = name.into();
        let value = value.into();

        if name.is_empty() || name.chars().any(|c| matches!(c, '=' | ';' | ',') || c.is_whitespace()) {
            return Err(CookieError::Invalid { field: "name", value: name });
        }
        if value.chars().any(|c| matches!(c, ';' | ',') || c.is_whitespace()) {
            return Err(CookieError::Invalid { field: "value", value });
        }

        Ok(Self {
            name,
            value,
            path: "/".to_string(),
            max_age: DEFAULT_MAX_AGE,
            same_site: SameSite::Lax,
        })
    }

    /// Override the lifetime
    pub fn max_age(mut self, max_age: Duration) -> Self {
        self.max_age = max_age;
        self
    }

    /// Serialize to the `document.cookie` assignment form
    pub fn to_header_string(&self) -> String {
        format!(
            "{}={};path={};max-age={};SameSite={}",
            self.name,
            self.value,
            self.path,
            self.max_age.as_secs(),
            self.same_site
        )
    }
}

impl fmt::Display for Cookie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_header_string())
    }
}

/// Seam for the host cookie store
pub trait CookieJar: Send + Sync {
    /// Write a cookie
    fn set_cookie(&self, cookie: &Cookie) -> Result<()>;

    /// Read a cookie value by name
    fn get_cookie(&self, name: &str) -> Option<String>;
}

/// In-process cookie jar, used on desktop builds and in tests
#[derive(Debug, Default)]
pub struct MemoryCookieJar {
    cookies: Mutex<HashMap<String, Cookie>>,
}

impl MemoryCookieJar {
    /// Create an empty jar
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the full cookie record
    pub fn cookie(&self, name: &str) -> Option<Cookie> {
        self.cookies.lock().get(name).cloned()
    }
}

impl CookieJar for MemoryCookieJar {
    fn set_cookie(&self, cookie: &Cookie) -> Result<()> {
        self.cookies.lock().insert(cookie.name.clone(), cookie.clone());
        Ok(())
    }

    fn get_cookie(&self, name: &str) -> Option<String> {
        self.cookies.lock().get(name).map(|c| c.value.clone())
    }
}
