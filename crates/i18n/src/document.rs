//! Document root binding
//!
//! The shell writes `lang` and `dir` on the root element so that layout,
//! fonts and the transition engine all agree on the text direction.

use crate::lang::{Language, TextDirection};
use parking_lot::RwLock;

/// The root element of the host document
pub trait DocumentRoot: Send + Sync {
    /// Apply `lang` and `dir` attributes
    fn apply(&self, language: Language, direction: TextDirection);

    /// Current `dir` attribute
    fn direction(&self) -> TextDirection;

    /// Browser language preference (`navigator.language`), if exposed
    fn browser_language(&self) -> Option<String> {
        None
    }
}

#[derive(Debug, Default)]
struct Attributes {
    lang: Option<Language>,
    dir: TextDirection,
    applied: usize,
}

/// In-process document root, used on desktop builds and in tests
#[derive(Debug, Default)]
pub struct MemoryDocument {
    attributes: RwLock<Attributes>,
    browser_language: Option<String>,
}

impl MemoryDocument {
    /// Create a document with no attributes set
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a document that reports a browser language
    pub fn with_browser_language(tag: impl Into<String>) -> Self {
        Self { browser_language: Some(tag.into()), ..Default::default() }
    }

    /// Current `lang` attribute
    pub fn lang(&self) -> Option<Language> {
        self.attributes.read().lang
    }

    /// Number of times attributes were applied
    pub fn apply_count(&self) -> usize {
        self.attributes.read().applied
    }
}

impl DocumentRoot for MemoryDocument {
    fn apply(&self, language: Language, direction: TextDirection) {
        let mut attributes = self.attributes.write();
        attributes.lang = Some(language);
        attributes.dir = direction;
        attributes.applied += 1;
    }

    fn direction(&self) -> TextDirection {
        self.attributes.read().dir
    }

    fn browser_language(&self) -> Option<String> {
        self.browser_language.clone()
    }
}
