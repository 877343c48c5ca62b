//! Locale Path Normalization
//!
//! Decides, from the request path alone, whether a request is already
//! localized, must bypass localization, or must be redirected to the default
//! locale.

use crate::application::config::LocaleConfig;
use crate::domain::lang::Lang;
use crate::domain::route_key::split_locale;

/// Outcome of normalizing a request path
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LocaleRouting {
    /// Path already starts with a locale segment
    PassThrough,
    /// Internal path, never localized
    Excluded,
    /// Redirect to this location (path and query)
    Redirect(String),
}

/// Normalize a request path.
///
/// `/en`, `/en/...`, `/ro` and `/ro/...` pass through. Excluded paths are
/// left alone. Everything else is redirected to `/{default_locale}{path}`
/// with the query string preserved.
pub fn normalize_path(path: &str, query: Option<&str>, config: &LocaleConfig) -> LocaleRouting {
    if config.is_excluded(path) {
        return LocaleRouting::Excluded;
    }

    if split_locale(path).is_some() {
        return LocaleRouting::PassThrough;
    }

    let mut location = format!("/{}{}", config.default_locale, path);
    if let Some(query) = query.filter(|q| !q.is_empty()) {
        location.push('?');
        location.push_str(query);
    }

    LocaleRouting::Redirect(location)
}

/// Path of the same page in another locale.
///
/// Replaces the first path segment with `lang`: `/en/about` → `/ro/about`.
pub fn switch_locale_path(path: &str, lang: Lang) -> String {
    let rest = path.strip_prefix('/').unwrap_or(path);
    let remainder = rest.find('/').map_or("", |idx| &rest[idx..]);
    format!("/{}{}", lang, remainder)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_redirect_preserves_query() {
        let config = LocaleConfig::default();
        assert_eq!(
            normalize_path("/about", Some("ref=mail&x=1"), &config),
            LocaleRouting::Redirect("/en/about?ref=mail&x=1".to_string())
        );
        assert_eq!(
            normalize_path("/about", Some(""), &config),
            LocaleRouting::Redirect("/en/about".to_string())
        );
    }

    #[test]
    fn test_root_redirects_to_default_locale() {
        let config = LocaleConfig::default();
        assert_eq!(
            normalize_path("/", None, &config),
            LocaleRouting::Redirect("/en/".to_string())
        );
    }

    #[test]
    fn test_custom_default_locale() {
        let config = LocaleConfig {
            default_locale: Lang::Ro,
            ..LocaleConfig::default()
        };
        assert_eq!(
            normalize_path("/contact", None, &config),
            LocaleRouting::Redirect("/ro/contact".to_string())
        );
    }

    #[test]
    fn test_switch_locale_path() {
        assert_eq!(switch_locale_path("/en/about", Lang::Ro), "/ro/about");
        assert_eq!(switch_locale_path("/ro", Lang::En), "/en");
        assert_eq!(switch_locale_path("/en/", Lang::Ro), "/ro/");
        assert_eq!(switch_locale_path("/ro/about/team", Lang::En), "/en/about/team");
    }
}
