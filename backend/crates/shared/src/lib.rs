//! Shared Kernel
//!
//! Vocabulary used by every crate in the workspace:
//! - Error classification, the generic [`AppError`](error::app_error::AppError)
//!   and the JSON error body
//! - Typed entity IDs

pub mod error {
    pub mod app_error;
    pub mod body;
    pub mod conversions;
    pub mod kind;
}
pub mod id;
