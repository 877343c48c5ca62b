//! Application Layer
//!
//! Use cases and application services.

pub mod login;
pub mod public_user;
pub mod register;

// Re-exports
pub use login::{LoginInput, LoginUseCase};
pub use public_user::PublicUser;
pub use register::{RegisterInput, RegisterUseCase};
