//! Internationalization for Native Shell
//!
//! This crate owns the UI language and the text direction derived from it:
//! language negotiation, persistence of the user's choice, and applying
//! `lang`/`dir` to the document root.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod document;
pub mod lang;
pub mod locale;

pub use document::{DocumentRoot, MemoryDocument};
pub use lang::{DirectionSource, Language, TextDirection};
pub use locale::{LocaleConfig, LocaleStore};

/// Result type for locale operations
pub type Result<T> = std::result::Result<T, LocaleError>;

/// Error types for locale operations
#[derive(Debug, thiserror::Error)]
pub enum LocaleError {
    /// Durable store failure
    #[error("Storage error: {0}")]
    Storage(#[from] storage::KvError),

    /// Cookie write failure
    #[error("Cookie error: {0}")]
    Cookie(#[from] storage::CookieError),

    /// Language code outside the supported set
    #[error("Unsupported language: {0}")]
    UnsupportedLanguage(String),
}
