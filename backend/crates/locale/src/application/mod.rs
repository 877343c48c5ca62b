//! Application Layer
//!
//! Configuration, path normalization and page resolution.

pub mod config;
pub mod normalize;
pub mod resolve_page;

// Re-exports
pub use config::LocaleConfig;
pub use normalize::{LocaleRouting, normalize_path, switch_locale_path};
pub use resolve_page::{PageContext, ResolvePageUseCase};
