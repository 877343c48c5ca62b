//! User ID
//!
//! Assigned by the service at registration; never supplied by the caller.

pub use kernel::id::UserId;
