//! User domain model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{HomeError, HomeResult};
use crate::models::role::Role;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    /// Credential secret, stored as supplied. Never serialized.
    #[serde(skip_serializing, default)]
    pub password: String,
    pub email: String,
    /// Snapshots of the catalog roles resolved at registration.
    pub roles: Vec<Role>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUser {
    pub username: String,
    pub password: String,
    pub email: String,
    /// Requested role names. Unknown names are ignored.
    #[serde(default)]
    pub roles: Vec<String>,
}

impl CreateUser {
    pub fn validate(&self) -> HomeResult<()> {
        if self.username.trim().is_empty() {
            return Err(HomeError::validation("username is required"));
        }
        if self.password.is_empty() {
            return Err(HomeError::validation("password is required"));
        }
        if !self.email.contains('@') {
            return Err(HomeError::validation(format!(
                "invalid email address: {:?}",
                self.email
            )));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginInput {
    pub username: String,
    pub password: String,
}

/// Token plus the user it was issued for.
#[derive(Debug, Clone, Serialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: User,
}

/// Listing envelope: the items plus their count.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserListResponse {
    pub users: Vec<User>,
    pub total: usize,
}

impl From<Vec<User>> for UserListResponse {
    fn from(users: Vec<User>) -> Self {
        Self {
            total: users.len(),
            users,
        }
    }
}
