//! Web Server Entry Point
//!
//! Localized page server. Translation documents are loaded once here and
//! shared read-only by every request.

mod config;

use locale::{Lang, LocaleConfig, infra, locale_router};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::WebConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "web=info,locale=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = WebConfig::from_env()?;

    // Translation documents
    let table = match &config.translations_dir {
        Some(dir) => {
            tracing::info!(dir = %dir.display(), "Loading translations from directory");
            infra::load_dir(dir)?
        }
        None => infra::load_embedded()?,
    };

    for lang in Lang::ALL {
        tracing::info!(lang = %lang, routes = table.route_count(lang), "Translations loaded");
    }

    let app = locale_router(table, LocaleConfig::default()).layer(TraceLayer::new_for_http());

    // Start server
    let listener = TcpListener::bind((config.host.as_str(), config.port)).await?;
    tracing::info!(addr = %listener.local_addr()?, "Listening");

    axum::serve(listener, app).await?;

    Ok(())
}
