//! Public User
//!
//! The user as seen by callers: every field except the credential.

use chrono::{DateTime, Utc};

use crate::domain::entity::user::User;
use crate::domain::value_object::user_id::UserId;

/// User with the password stripped
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublicUser {
    pub user_id: UserId,
    pub email: String,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

impl From<User> for PublicUser {
    fn from(user: User) -> Self {
        Self {
            user_id: user.user_id,
            email: user.email.into_inner(),
            name: user.name,
            created_at: user.created_at,
        }
    }
}
