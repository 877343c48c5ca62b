//! Supported Locales

use std::fmt;

/// A supported locale
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Lang {
    En,
    Ro,
}

impl Lang {
    /// All supported locales, in switcher order
    pub const ALL: [Lang; 2] = [Lang::En, Lang::Ro];

    /// Locale used when none is given
    pub const DEFAULT: Lang = Lang::En;

    /// Path segment / storage value for this locale
    pub fn as_str(self) -> &'static str {
        match self {
            Lang::En => "en",
            Lang::Ro => "ro",
        }
    }

    /// Short label shown in the language switcher
    pub fn label(self) -> &'static str {
        match self {
            Lang::En => "EN",
            Lang::Ro => "RO",
        }
    }

    /// Parse an exact path segment. Only `en` and `ro` are locales.
    pub fn from_segment(segment: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|lang| lang.as_str() == segment)
    }
}

impl Default for Lang {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for Lang {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Map an arbitrary locale tag to a supported locale.
///
/// Only the exact tag `ro` selects Romanian; anything else falls back to English.
pub fn resolve_locale(tag: &str) -> Lang {
    if tag == Lang::Ro.as_str() {
        Lang::Ro
    } else {
        Lang::En
    }
}
