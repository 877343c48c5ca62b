//! HTTP Handlers

use axum::extract::State;
use axum::http::{StatusCode, Uri};
use axum::response::{Html, IntoResponse, Response};
use std::sync::Arc;

use crate::application::config::LocaleConfig;
use crate::application::resolve_page::ResolvePageUseCase;
use crate::domain::translation::TranslationTable;
use crate::presentation::view;

/// Shared state for page handlers
#[derive(Clone)]
pub struct LocaleAppState {
    pub table: Arc<TranslationTable>,
    pub config: Arc<LocaleConfig>,
}

/// GET /{locale}/{routeKey}
///
/// Renders any localized path. Unknown route keys render the not-found page
/// with 404. Excluded internal paths have no page here.
pub async fn render_page(State(state): State<LocaleAppState>, uri: Uri) -> Response {
    let path = uri.path();

    if state.config.is_excluded(path) {
        return StatusCode::NOT_FOUND.into_response();
    }

    let page = ResolvePageUseCase::new(state.table.clone()).execute(path);
    let status = if page.is_found() {
        StatusCode::OK
    } else {
        StatusCode::NOT_FOUND
    };

    (status, Html(view::render_page(&page, &state.config))).into_response()
}
