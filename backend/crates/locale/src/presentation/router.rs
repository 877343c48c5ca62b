//! Locale Router

use axum::{Router, middleware};
use std::sync::Arc;

use crate::application::config::LocaleConfig;
use crate::domain::translation::TranslationTable;
use crate::presentation::handlers::{self, LocaleAppState};
use crate::presentation::middleware::ensure_locale_prefix;

/// Create the page router.
///
/// Every path goes through the locale prefix middleware, then to the page
/// handler.
pub fn locale_router(table: TranslationTable, config: LocaleConfig) -> Router {
    let state = LocaleAppState {
        table: Arc::new(table),
        config: Arc::new(config),
    };

    Router::new()
        .fallback(handlers::render_page)
        .layer(middleware::from_fn_with_state(
            state.config.clone(),
            ensure_locale_prefix,
        ))
        .with_state(state)
}
