//! Translation Table
//!
//! Per-locale documents mapping a route key to its page texts. Built once at
//! startup and shared read-only.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::domain::lang::Lang;
use crate::domain::route_key::RouteKey;

/// Texts of one page in one locale
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationRecord {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

/// One locale's document: `routeKey -> record`
pub type TranslationDocument = HashMap<String, TranslationRecord>;

/// All loaded documents, keyed by locale
#[derive(Debug, Clone, Default)]
pub struct TranslationTable {
    documents: HashMap<Lang, TranslationDocument>,
}

impl TranslationTable {
    /// Build a table from per-locale documents. A later document for the same
    /// locale replaces an earlier one.
    pub fn from_documents(documents: impl IntoIterator<Item = (Lang, TranslationDocument)>) -> Self {
        Self {
            documents: documents.into_iter().collect(),
        }
    }

    /// Record for `route_key` in `lang`, if the document has one
    pub fn lookup(&self, lang: Lang, route_key: &RouteKey) -> Option<&TranslationRecord> {
        self.documents.get(&lang)?.get(route_key.as_str())
    }

    /// Number of route keys in `lang`'s document
    pub fn route_count(&self, lang: Lang) -> usize {
        self.documents.get(&lang).map_or(0, HashMap::len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(title: &str) -> TranslationRecord {
        TranslationRecord {
            title: Some(title.to_string()),
            description: None,
        }
    }

    #[test]
    fn test_lookup_is_per_locale() {
        let table = TranslationTable::from_documents([
            (Lang::En, HashMap::from([("about".to_string(), record("About"))])),
            (Lang::Ro, HashMap::new()),
        ]);

        let about = RouteKey::new("about");
        assert_eq!(table.lookup(Lang::En, &about), Some(&record("About")));
        assert_eq!(table.lookup(Lang::Ro, &about), None);
        assert_eq!(table.lookup(Lang::En, &RouteKey::new("missing")), None);
    }

    #[test]
    fn test_missing_locale_document() {
        let table = TranslationTable::default();
        assert_eq!(table.lookup(Lang::En, &RouteKey::home()), None);
        assert_eq!(table.route_count(Lang::En), 0);
    }

    #[test]
    fn test_record_fields_are_optional() {
        let record: TranslationRecord = serde_json::from_str(r#"{"title":"Only title"}"#).unwrap();
        assert_eq!(record.title.as_deref(), Some("Only title"));
        assert!(record.description.is_none());
    }
}
