//! Locale Middleware

use axum::body::Body;
use axum::extract::State;
use axum::http::Request;
use axum::middleware::Next;
use axum::response::{IntoResponse, Redirect, Response};
use std::sync::Arc;

use crate::application::config::LocaleConfig;
use crate::application::normalize::{LocaleRouting, normalize_path};

/// Middleware that redirects unlocalized paths to the default locale (307)
pub async fn ensure_locale_prefix(
    State(config): State<Arc<LocaleConfig>>,
    req: Request<Body>,
    next: Next,
) -> Response {
    let routing = normalize_path(req.uri().path(), req.uri().query(), &config);

    match routing {
        LocaleRouting::PassThrough | LocaleRouting::Excluded => next.run(req).await,
        LocaleRouting::Redirect(location) => {
            tracing::debug!(from = %req.uri(), to = %location, "Redirecting to default locale");
            Redirect::temporary(&location).into_response()
        }
    }
}
