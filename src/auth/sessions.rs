//! Mock session registry
//!
//! Any non-empty email/password pair logs in. Each email (case-insensitive)
//! maps to one stable user id for the lifetime of the process, and every
//! login issues a fresh opaque bearer token that expires after the TTL.

use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};
use thiserror::Error;
use uuid::Uuid;

use super::AuthContext;
use crate::domain::auth::{AuthResponse, User};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LoginError {
    #[error("Please fill in all fields")]
    MissingCredentials,
}

/// Issued session with expiration
#[derive(Clone)]
struct Session {
    user: User,
    issued_at: Instant,
}

/// In-memory accounts and sessions
#[derive(Clone)]
pub struct SessionRegistry {
    inner: Arc<RwLock<SessionRegistryInner>>,
    ttl: Duration,
}

struct SessionRegistryInner {
    /// Keyed by lowercased email
    accounts: HashMap<String, User>,
    /// Keyed by token
    sessions: HashMap<String, Session>,
}

/// Display name derived from the local part of an email
fn name_from_email(email: &str) -> String {
    email.split('@').next().unwrap_or(email).to_string()
}

/// `now + ttl`, saturating at the latest representable instant
fn expiry_after(now: DateTime<Utc>, ttl: Duration) -> DateTime<Utc> {
    chrono::Duration::from_std(ttl)
        .ok()
        .and_then(|ttl| now.checked_add_signed(ttl))
        .unwrap_or(DateTime::<Utc>::MAX_UTC)
}

impl SessionRegistry {
    pub fn new(ttl_seconds: u64) -> Self {
        Self {
            inner: Arc::new(RwLock::new(SessionRegistryInner {
                accounts: HashMap::new(),
                sessions: HashMap::new(),
            })),
            ttl: Duration::from_secs(ttl_seconds),
        }
    }

    /// Make `email` log in as an existing user id (used for demo accounts)
    pub fn register_account(&self, email: &str, name: &str, user_id: Uuid) -> User {
        let user = User {
            id: user_id,
            email: email.trim().to_string(),
            name: name.to_string(),
        };

        self.inner
            .write()
            .accounts
            .insert(email.trim().to_lowercase(), user.clone());

        tracing::debug!(user_id = %user_id, "Registered account");
        user
    }

    /// Accept any non-empty credentials and issue a new token
    pub fn login(&self, email: &str, password: &str) -> Result<AuthResponse, LoginError> {
        let email = email.trim();
        if email.is_empty() || password.is_empty() {
            return Err(LoginError::MissingCredentials);
        }

        let mut inner = self.inner.write();
        let user = inner
            .accounts
            .entry(email.to_lowercase())
            .or_insert_with(|| User {
                id: Uuid::new_v4(),
                email: email.to_string(),
                name: name_from_email(email),
            })
            .clone();

        // Tokens nobody presents again would otherwise live forever
        let ttl = self.ttl;
        inner.sessions.retain(|_, s| s.issued_at.elapsed() < ttl);

        let token = Uuid::new_v4().simple().to_string();
        inner.sessions.insert(
            token.clone(),
            Session {
                user: user.clone(),
                issued_at: Instant::now(),
            },
        );

        let expires_at = expiry_after(Utc::now(), self.ttl);

        tracing::info!(user_id = %user.id, "User logged in");

        Ok(AuthResponse {
            access_token: token,
            expires_at,
            user,
        })
    }

    /// Resolve a token to its user, dropping it if expired
    pub fn resolve(&self, token: &str) -> Option<AuthContext> {
        {
            let inner = self.inner.read();
            let session = inner.sessions.get(token)?;
            if session.issued_at.elapsed() < self.ttl {
                return Some(AuthContext::new(&session.user, token));
            }
        }

        self.inner.write().sessions.remove(token);
        tracing::debug!("Expired session removed");
        None
    }

    /// Forget a token. Returns whether it was active.
    pub fn logout(&self, token: &str) -> bool {
        self.inner.write().sessions.remove(token).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_credentials_are_rejected() {
        let sessions = SessionRegistry::new(60);
        assert_eq!(
            sessions.login("", "secret").unwrap_err(),
            LoginError::MissingCredentials
        );
        assert_eq!(
            sessions.login("kim@example.com", "").unwrap_err(),
            LoginError::MissingCredentials
        );
    }

    #[test]
    fn same_email_maps_to_same_user() {
        let sessions = SessionRegistry::new(60);

        let first = sessions.login("Kim@Example.com", "x").unwrap();
        let second = sessions.login("kim@example.com", "y").unwrap();

        assert_eq!(first.user.id, second.user.id);
        assert_eq!(first.user.name, "Kim");
        assert_ne!(first.access_token, second.access_token);
    }

    #[test]
    fn tokens_resolve_until_logout() {
        let sessions = SessionRegistry::new(60);
        let auth = sessions.login("kim@example.com", "x").unwrap();

        let ctx = sessions.resolve(&auth.access_token).unwrap();
        assert_eq!(ctx.user_id, auth.user.id);
        assert_eq!(ctx.token(), auth.access_token);

        assert!(sessions.logout(&auth.access_token));
        assert!(sessions.resolve(&auth.access_token).is_none());
        assert!(!sessions.logout(&auth.access_token));
    }

    #[test]
    fn expired_tokens_do_not_resolve() {
        let sessions = SessionRegistry::new(0);
        let auth = sessions.login("kim@example.com", "x").unwrap();

        assert!(sessions.resolve(&auth.access_token).is_none());
    }

    #[test]
    fn expired_sessions_are_swept_on_login() {
        let sessions = SessionRegistry::new(0);

        for _ in 0..100 {
            sessions.login("kim@example.com", "x").unwrap();
        }

        assert_eq!(sessions.inner.read().sessions.len(), 1);
    }

    #[test]
    fn live_sessions_survive_the_sweep() {
        let sessions = SessionRegistry::new(60);
        let first = sessions.login("kim@example.com", "x").unwrap();
        sessions.login("lee@example.com", "y").unwrap();

        assert_eq!(sessions.inner.read().sessions.len(), 2);
        assert!(sessions.resolve(&first.access_token).is_some());
    }

    #[test]
    fn huge_ttl_saturates_instead_of_overflowing() {
        let now = Utc::now();

        let far = expiry_after(now, Duration::from_secs(9_000_000_000_000));
        assert_eq!(far, DateTime::<Utc>::MAX_UTC);

        let sessions = SessionRegistry::new(u64::MAX);
        let auth = sessions.login("kim@example.com", "x").unwrap();
        assert_eq!(auth.expires_at, DateTime::<Utc>::MAX_UTC);
        assert!(sessions.resolve(&auth.access_token).is_some());

        assert_eq!(
            expiry_after(now, Duration::from_secs(60)),
            now + chrono::Duration::seconds(60)
        );
    }

    #[test]
    fn registered_accounts_keep_their_user_id() {
        let sessions = SessionRegistry::new(60);
        let user_id = Uuid::new_v4();
        sessions.register_account("alex@example.com", "Alex Johnson", user_id);

        let auth = sessions.login("ALEX@example.com", "anything").unwrap();

        assert_eq!(auth.user.id, user_id);
        assert_eq!(auth.user.name, "Alex Johnson");
    }
}
