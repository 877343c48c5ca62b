//! Auth (Credential Service) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Entities, value objects, repository traits
//! - `application/` - Register and login use cases
//! - `infra/` - PostgreSQL and in-memory repositories
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! ## Features
//! - Registration with email + password + display name
//! - Login with email + password
//!
//! ## Credential Model
//! - Email is the identity key and is stored exactly as submitted
//! - Passwords are stored and compared verbatim (no hashing, no sessions)
//! - The password never leaves the service: responses carry [`PublicUser`] only
//! - Email uniqueness is enforced by the storage layer with an atomic
//!   conditional insert, so concurrent duplicate registrations cannot both win

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::PublicUser;
pub use error::{AuthError, AuthResult};
pub use infra::memory::InMemoryUserRepository;
pub use infra::postgres::PgUserRepository;
pub use presentation::router::{auth_router, auth_router_generic};

// Re-export kernel error types for unified error handling
pub use kernel::error::kind::ErrorKind;
