//! Resolve Page Use Case

use std::sync::Arc;

use crate::domain::lang::{Lang, resolve_locale};
use crate::domain::route_key::{RouteKey, first_segment, route_key_from_path};
use crate::domain::translation::{TranslationRecord, TranslationTable};

/// Title shown when the route key has no translation
pub const NOT_FOUND_TITLE: &str = "Page Not Found";

/// Everything the page view needs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageContext {
    pub lang: Lang,
    pub route_key: RouteKey,
    pub path: String,
    pub record: Option<TranslationRecord>,
}

impl PageContext {
    /// Whether the route key resolved to a translation
    pub fn is_found(&self) -> bool {
        self.record.is_some()
    }

    /// Page title, or the not-found title when missing or empty
    pub fn title(&self) -> &str {
        self.record
            .as_ref()
            .and_then(|r| r.title.as_deref())
            .filter(|t| !t.is_empty())
            .unwrap_or(NOT_FOUND_TITLE)
    }

    pub fn description(&self) -> Option<&str> {
        self.record.as_ref()?.description.as_deref()
    }
}

/// Resolve Page Use Case
pub struct ResolvePageUseCase {
    table: Arc<TranslationTable>,
}

impl ResolvePageUseCase {
    pub fn new(table: Arc<TranslationTable>) -> Self {
        Self { table }
    }

    /// Resolve a localized path (`/{locale}/{routeKey}`) to its page context
    pub fn execute(&self, path: &str) -> PageContext {
        let lang = resolve_locale(first_segment(path));
        let route_key = route_key_from_path(path);
        let record = self.table.lookup(lang, &route_key).cloned();

        if record.is_none() {
            tracing::debug!(lang = %lang, route_key = %route_key, "No translation for route");
        }

        PageContext {
            lang,
            route_key,
            path: path.to_string(),
            record,
        }
    }
}
