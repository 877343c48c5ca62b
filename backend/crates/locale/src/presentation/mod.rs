//! Presentation Layer
//!
//! Locale prefix middleware, page handler, HTML view and router.

pub mod handlers;
pub mod middleware;
pub mod router;
pub mod view;

pub use handlers::LocaleAppState;
pub use router::locale_router;
