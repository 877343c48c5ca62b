//! Login Use Case
//!
//! Checks a credential claim against the stored user.

use std::sync::Arc;

use crate::application::public_user::PublicUser;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::email::Email;
use crate::error::{AuthError, AuthResult};

/// Login input (the credential claim)
pub struct LoginInput {
    pub email: String,
    pub password: String,
}

/// Login use case
pub struct LoginUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
}

impl<U> LoginUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>) -> Self {
        Self { user_repo }
    }

    pub async fn execute(&self, input: LoginInput) -> AuthResult<PublicUser> {
        let email = Email::new(input.email);

        // Unknown email and wrong password must be indistinguishable
        let user = self
            .user_repo
            .find_by_email(&email)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        if !user.verify_password(&input.password) {
            return Err(AuthError::InvalidCredentials);
        }

        tracing::info!(user_id = %user.user_id, "User logged in");

        Ok(PublicUser::from(user))
    }
}
