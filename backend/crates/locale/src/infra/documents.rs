//! Translation Documents
//!
//! Loads `translations/{locale}/translations.json` for every supported
//! locale, either from the copy embedded at build time or from a directory
//! with the same layout.

use rust_embed::RustEmbed;
use std::path::Path;

use kernel::error::app_error::{AppError, AppResult, OptionExt};
use kernel::error::kind::ErrorKind;

use crate::domain::lang::Lang;
use crate::domain::translation::{TranslationDocument, TranslationTable};

const DOCUMENT_FILE: &str = "translations.json";

#[derive(RustEmbed)]
#[folder = "translations/"]
struct EmbeddedTranslations;

/// Load the documents embedded in the binary
pub fn load_embedded() -> AppResult<TranslationTable> {
    let mut documents = Vec::with_capacity(Lang::ALL.len());

    for lang in Lang::ALL {
        let file_path = format!("{}/{}", lang, DOCUMENT_FILE);
        let file = EmbeddedTranslations::get(&file_path).ok_or_app_err(
            ErrorKind::InternalServerError,
            format!("Embedded translation document missing: {}", file_path),
        )?;
        documents.push((lang, parse_document(&file.data)?));
    }

    Ok(TranslationTable::from_documents(documents))
}

/// Load the documents from `dir/{locale}/translations.json`.
///
/// Every supported locale must have a document.
pub fn load_dir(dir: &Path) -> AppResult<TranslationTable> {
    let mut documents = Vec::with_capacity(Lang::ALL.len());

    for lang in Lang::ALL {
        let path = dir.join(lang.as_str()).join(DOCUMENT_FILE);
        let bytes = std::fs::read(&path).map_err(|e| {
            AppError::from(e).with_action(format!("Check TRANSLATIONS_DIR ({})", path.display()))
        })?;
        let document = parse_document(&bytes)
            .map_err(|e| e.with_action(format!("Fix JSON in {}", path.display())))?;
        documents.push((lang, document));
    }

    Ok(TranslationTable::from_documents(documents))
}

fn parse_document(bytes: &[u8]) -> AppResult<TranslationDocument> {
    Ok(serde_json::from_slice(bytes)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn bundled_dir() -> PathBuf {
        Path::new(env!("CARGO_MANIFEST_DIR")).join("translations")
    }

    #[test]
    fn test_embedded_documents_cover_every_locale() {
        let table = load_embedded().unwrap();
        for lang in Lang::ALL {
            assert_eq!(table.route_count(lang), 3);
        }
    }

    #[test]
    fn test_load_dir_matches_embedded() {
        let from_dir = load_dir(&bundled_dir()).unwrap();
        let embedded = load_embedded().unwrap();
        for lang in Lang::ALL {
            assert_eq!(from_dir.route_count(lang), embedded.route_count(lang));
        }
    }

    #[test]
    fn test_load_dir_missing_directory() {
        let err = load_dir(&bundled_dir().join("does-not-exist")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert!(err.action().is_some());
    }

    #[test]
    fn test_parse_document_rejects_invalid_json() {
        let err = parse_document(b"{ not json").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::BadRequest);
    }
}
