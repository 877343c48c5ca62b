//! Infrastructure Layer
//!
//! Translation document sources.

pub mod documents;

pub use documents::{load_dir, load_embedded};
