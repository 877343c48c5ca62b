//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use crate::domain::entity::user::User;
use crate::domain::value_object::email::Email;
use crate::error::AuthResult;

/// User repository trait
#[trait_variant::make(UserRepository: Send)]
pub trait LocalUserRepository {
    /// Insert a user unless the email is already taken.
    ///
    /// The check and the insert are one atomic step: of two concurrent
    /// inserts with the same email exactly one succeeds, the other gets
    /// [`AuthError::EmailTaken`](crate::error::AuthError::EmailTaken).
    async fn create(&self, user: &User) -> AuthResult<()>;

    /// Find user by email (exact match)
    async fn find_by_email(&self, email: &Email) -> AuthResult<Option<User>>;

    /// Check if email exists
    async fn exists_by_email(&self, email: &Email) -> AuthResult<bool>;
}
