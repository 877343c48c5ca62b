//! Web Configuration

use anyhow::Context;
use std::path::PathBuf;

/// Page server configuration
#[derive(Debug, Clone)]
pub struct WebConfig {
    pub host: String,
    pub port: u16,
    /// Load translation documents from here instead of the embedded copy
    pub translations_dir: Option<PathBuf>,
}

impl WebConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let port = match std::env::var("WEB_PORT") {
            Ok(value) => value
                .parse::<u16>()
                .with_context(|| format!("WEB_PORT must be a valid port, got {value:?}"))?,
            Err(_) => 3000,
        };

        Ok(Self {
            host: std::env::var("WEB_HOST").unwrap_or_else(|_| "0.0.0.0".into()),
            port,
            translations_dir: std::env::var_os("TRANSLATIONS_DIR").map(PathBuf::from),
        })
    }
}
