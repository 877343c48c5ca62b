//! Locale (Localized Page Server) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Locales, route keys, translation table
//! - `application/` - Path normalization and page resolution
//! - `infra/` - Embedded and on-disk translation documents
//! - `presentation/` - Locale prefix middleware, page handler, HTML view
//!
//! ## Routing Model
//! - Every page lives under `/{locale}/{routeKey}`; the home page is `/{locale}`
//! - Paths without a locale segment are redirected (307) to the default locale
//! - Internal paths (`_next`, `api`, `favicon.ico`) are never localized
//! - The translation table is loaded once at startup and never mutated

pub mod application;
pub mod domain;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::LocaleConfig;
pub use application::normalize::{LocaleRouting, normalize_path, switch_locale_path};
pub use domain::lang::{Lang, resolve_locale};
pub use domain::route_key::{RouteKey, route_key_from_path};
pub use domain::translation::{TranslationRecord, TranslationTable};
pub use presentation::router::locale_router;

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};
