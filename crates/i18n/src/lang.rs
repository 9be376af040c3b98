//! Supported languages and text direction

use crate::LocaleError;
use serde::{Deserialize, Serialize};
use unic_langid::LanguageIdentifier;

/// UI language
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// Arabic (default)
    #[default]
    Ar,
    /// English
    En,
}

impl Language {
    /// All supported languages
    pub fn all() -> [Language; 2] {
        [Language::Ar, Language::En]
    }

    /// BCP 47 code used for `lang` and for persistence
    pub fn code(&self) -> &'static str {
        match self {
            Language::Ar => "ar",
            Language::En => "en",
        }
    }

    /// Text direction for this language
    pub fn direction(&self) -> TextDirection {
        match self {
            Language::Ar => TextDirection::Rtl,
            Language::En => TextDirection::Ltr,
        }
    }

    /// The other supported language
    pub fn toggled(&self) -> Language {
        match self {
            Language::Ar => Language::En,
            Language::En => Language::Ar,
        }
    }

    /// Negotiate a browser language tag (`navigator.language`)
    ///
    /// Any Arabic variant maps to Arabic, everything else to English.
    /// Unparseable tags yield `None`.
    pub fn from_browser_tag(tag: &str) -> Option<Language> {
        let langid: LanguageIdentifier = tag.trim().parse().ok()?;
        if langid.language.as_str() == "ar" {
            Some(Language::Ar)
        } else {
            Some(Language::En)
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

impl std::str::FromStr for Language {
    type Err = LocaleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ar" => Ok(Language::Ar),
            "en" => Ok(Language::En),
            _ => Err(LocaleError::UnsupportedLanguage(s.to_string())),
        }
    }
}

/// Document text direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TextDirection {
    /// Left to right
    #[default]
    Ltr,
    /// Right to left
    Rtl,
}

impl TextDirection {
    /// Value of the `dir` attribute
    pub fn as_str(&self) -> &'static str {
        match self {
            TextDirection::Ltr => "ltr",
            TextDirection::Rtl => "rtl",
        }
    }

    /// Whether this is right to left
    pub fn is_rtl(&self) -> bool {
        matches!(self, TextDirection::Rtl)
    }
}

impl std::fmt::Display for TextDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Anything that can report the current text direction
pub trait DirectionSource: Send + Sync {
    /// Current text direction
    fn text_direction(&self) -> TextDirection;
}

impl DirectionSource for TextDirection {
    fn text_direction(&self) -> TextDirection {
        *self
    }
}
