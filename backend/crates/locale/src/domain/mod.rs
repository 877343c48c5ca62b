//! Domain Layer
//!
//! Locales, route keys and the translation table.

pub mod lang;
pub mod route_key;
pub mod translation;

// Re-exports
pub use lang::Lang;
pub use route_key::RouteKey;
pub use translation::{TranslationRecord, TranslationTable};
