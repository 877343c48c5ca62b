//! User Entity
//!
//! A registered account. Created once on registration and read on login;
//! nothing in this service updates or deletes it.

use chrono::{DateTime, Utc};

use crate::domain::value_object::{email::Email, user_id::UserId, user_password::UserPassword};

/// User entity
#[derive(Debug, Clone)]
pub struct User {
    /// Internal UUID identifier
    pub user_id: UserId,
    /// Identity key (unique)
    pub email: Email,
    /// Display name
    pub name: String,
    /// Stored credential
    pub password: UserPassword,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Create a new user
    pub fn new(email: Email, name: impl Into<String>, password: UserPassword) -> Self {
        Self {
            user_id: UserId::new(),
            email,
            name: name.into(),
            password,
            created_at: Utc::now(),
        }
    }

    /// Check a submitted password against the stored credential
    pub fn verify_password(&self, candidate: &str) -> bool {
        self.password.matches(candidate)
    }
}
