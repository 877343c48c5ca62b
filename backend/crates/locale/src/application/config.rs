//! Application Configuration
//!
//! Configuration for the locale application layer.

use crate::domain::lang::Lang;

/// Locale application configuration
#[derive(Debug, Clone)]
pub struct LocaleConfig {
    /// Locale prepended to paths that have none
    pub default_locale: Lang,
    /// First-segment prefixes that are never localized
    pub excluded_prefixes: Vec<String>,
    /// Client `localStorage` key holding the last chosen locale
    pub storage_key: String,
}

impl Default for LocaleConfig {
    fn default() -> Self {
        Self {
            default_locale: Lang::DEFAULT,
            excluded_prefixes: vec![
                "_next".to_string(),
                "api".to_string(),
                "favicon.ico".to_string(),
            ],
            storage_key: "app-language".to_string(),
        }
    }
}

impl LocaleConfig {
    /// Whether `path` is an internal path that bypasses localization.
    ///
    /// Matches by prefix after the leading slash, so `/api`, `/api/x` and
    /// `/apidocs` are all excluded.
    pub fn is_excluded(&self, path: &str) -> bool {
        let rest = path.strip_prefix('/').unwrap_or(path);
        self.excluded_prefixes
            .iter()
            .any(|prefix| rest.starts_with(prefix.as_str()))
    }
}
