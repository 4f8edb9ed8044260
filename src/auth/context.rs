use uuid::Uuid;

use crate::domain::auth::User;

/// Authenticated user context resolved from a session token
#[derive(Debug, Clone)]
pub struct AuthContext {
    /// User ID
    pub user_id: Uuid,

    /// Login email
    pub email: String,

    /// Display name
    pub name: String,

    /// Bearer token the session was resolved from
    token: String,
}

impl AuthContext {
    pub fn new(user: &User, token: &str) -> Self {
        Self {
            user_id: user.id,
            email: user.email.clone(),
            name: user.name.clone(),
            token: token.to_string(),
        }
    }

    /// Get the raw session token
    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn user(&self) -> User {
        User {
            id: self.user_id,
            email: self.email.clone(),
            name: self.name.clone(),
        }
    }
}
