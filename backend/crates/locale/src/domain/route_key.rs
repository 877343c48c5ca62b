//! Route Key
//!
//! The part of a page path after the locale segment, used to look up
//! translations.

use std::fmt;

use crate::domain::lang::Lang;

/// Key of a page in the translation table (`home`, `about`, ...)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RouteKey(String);

impl RouteKey {
    /// Key of the locale root page
    pub const HOME: &'static str = "home";

    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn home() -> Self {
        Self::new(Self::HOME)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RouteKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// First segment of a path, without the leading slash
pub fn first_segment(path: &str) -> &str {
    let rest = path.strip_prefix('/').unwrap_or(path);
    rest.split('/').next().unwrap_or(rest)
}

/// Split a path into its locale and the remainder (`/en/about` → `(En, "/about")`).
///
/// Returns `None` when the first segment is not a supported locale.
/// `/english` is not `/en`.
pub fn split_locale(path: &str) -> Option<(Lang, &str)> {
    let rest = path.strip_prefix('/')?;
    let (segment, remainder) = match rest.find('/') {
        Some(idx) => rest.split_at(idx),
        None => (rest, ""),
    };
    Lang::from_segment(segment).map(|lang| (lang, remainder))
}

/// Derive the route key of a page path.
///
/// Strips a leading `/en` or `/ro` segment. An empty remainder or `/` is the
/// home page; anything else is the remainder without its leading slash and
/// without one trailing slash (`/ro/about/` is `about`). The key is not
/// checked against the translation table.
pub fn route_key_from_path(path: &str) -> RouteKey {
    let remainder = split_locale(path).map_or(path, |(_, remainder)| remainder);
    let key = remainder.strip_prefix('/').unwrap_or(remainder);
    let key = key.strip_suffix('/').unwrap_or(key);

    if key.is_empty() {
        RouteKey::home()
    } else {
        RouteKey::new(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_locale() {
        assert_eq!(split_locale("/en"), Some((Lang::En, "")));
        assert_eq!(split_locale("/ro/"), Some((Lang::Ro, "/")));
        assert_eq!(split_locale("/en/about"), Some((Lang::En, "/about")));
        assert_eq!(split_locale("/english"), None);
        assert_eq!(split_locale("/about"), None);
        assert_eq!(split_locale("en/about"), None);
    }

    #[test]
    fn test_first_segment() {
        assert_eq!(first_segment("/ro/about"), "ro");
        assert_eq!(first_segment("/"), "");
        assert_eq!(first_segment("/en"), "en");
    }

    #[test]
    fn test_nested_route_key_keeps_slashes() {
        assert_eq!(route_key_from_path("/en/about/team").as_str(), "about/team");
        assert_eq!(route_key_from_path("/en/about/team/").as_str(), "about/team");
    }

    #[test]
    fn test_trailing_slash_is_dropped() {
        assert_eq!(route_key_from_path("/ro/about/").as_str(), "about");
        assert_eq!(route_key_from_path("/en/").as_str(), RouteKey::HOME);
    }
}
