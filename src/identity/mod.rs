//! Identity collaborator
//!
//! Authentication is delegated upstream: the rest of the crate only needs
//! something that turns a request into an opaque verified user identifier.
//! This module is that something: a directory of known user accounts plus
//! opaque session tokens. There is deliberately no credential protocol;
//! issuing a session is assumed to happen after upstream verification.

use crate::config::AuthConfig;
use chrono::{DateTime, Duration, Utc};
use dashmap::DashMap;
use rand::distributions::Alphanumeric;
use rand::{thread_rng, Rng};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, info};
use uuid::Uuid;

/// Opaque verified user identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(Uuid);

impl UserId {
    /// Generate a fresh user id
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for UserId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A known user account (no authorization data; that lives on the profile)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserAccount {
    /// Account identifier
    pub id: UserId,
    /// Display name
    pub name: String,
    /// Email address
    pub email: String,
    /// When the account was registered
    pub created_at: DateTime<Utc>,
}

/// Per-request caller context.
///
/// Carries the session token plus the transport metadata the audit log
/// captures (ip address, user agent).
#[derive(Debug, Clone, Default)]
pub struct RequestContext {
    /// Opaque session token, if the request presented one
    pub session_token: Option<String>,
    /// Client IP address
    pub ip_address: Option<String>,
    /// Client user agent
    pub user_agent: Option<String>,
}

impl RequestContext {
    /// Context for an authenticated session
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            session_token: Some(token.into()),
            ..Default::default()
        }
    }

    /// Context with no credentials at all
    pub fn anonymous() -> Self {
        Self::default()
    }
}

#[derive(Debug, Clone)]
struct Session {
    user_id: UserId,
    expires_at: DateTime<Utc>,
}

/// Directory of user accounts and live sessions
#[derive(Debug)]
pub struct UserDirectory {
    accounts: DashMap<UserId, UserAccount>,
    sessions: DashMap<String, Session>,
    session_ttl: Duration,
}

impl UserDirectory {
    /// Create a directory using the configured session TTL
    pub fn new(config: &AuthConfig) -> Self {
        info!("Initializing user directory");
        Self {
            accounts: DashMap::new(),
            sessions: DashMap::new(),
            session_ttl: Duration::seconds(config.session_ttl as i64),
        }
    }

    /// Register a new account and return it
    pub fn register(&self, name: impl Into<String>, email: impl Into<String>) -> UserAccount {
        let account = UserAccount {
            id: UserId::new(),
            name: name.into(),
            email: email.into(),
            created_at: Utc::now(),
        };
        debug!(user_id = %account.id, "Registered user account");
        self.accounts.insert(account.id, account.clone());
        account
    }

    /// Issue an opaque session token for an already-verified user.
    ///
    /// Returns `None` when the user id is unknown to the directory.
    pub fn issue_session(&self, user_id: UserId) -> Option<String> {
        if !self.accounts.contains_key(&user_id) {
            return None;
        }
        let token: String = thread_rng()
            .sample_iter(&Alphanumeric)
            .take(48)
            .map(char::from)
            .collect();
        self.sessions.insert(
            token.clone(),
            Session {
                user_id,
                expires_at: Utc::now() + self.session_ttl,
            },
        );
        debug!(user_id = %user_id, "Issued session token");
        Some(token)
    }

    /// Invalidate a session token
    pub fn revoke_session(&self, token: &str) {
        self.sessions.remove(token);
    }

    /// Resolve the caller behind a request context to a user id.
    ///
    /// Idempotent within one logical operation; `None` for missing, unknown,
    /// or expired tokens.
    pub fn resolve(&self, ctx: &RequestContext) -> Option<UserId> {
        let token = ctx.session_token.as_deref()?;
        let session = self.sessions.get(token)?;
        if session.expires_at < Utc::now() {
            drop(session);
            self.sessions.remove(token);
            return None;
        }
        Some(session.user_id)
    }

    /// Look up an account by id
    pub fn get(&self, user_id: UserId) -> Option<UserAccount> {
        self.accounts.get(&user_id).map(|a| a.clone())
    }

    /// Snapshot of every registered account
    pub fn all_accounts(&self) -> Vec<UserAccount> {
        self.accounts.iter().map(|a| a.clone()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn directory() -> UserDirectory {
        UserDirectory::new(&AuthConfig::default())
    }

    #[test]
    fn test_register_and_resolve() {
        let dir = directory();
        let account = dir.register("Dana", "dana@example.com");
        let token = dir.issue_session(account.id).unwrap();
        let ctx = RequestContext::with_token(token);
        assert_eq!(dir.resolve(&ctx), Some(account.id));
    }

    #[test]
    fn test_anonymous_does_not_resolve() {
        let dir = directory();
        assert_eq!(dir.resolve(&RequestContext::anonymous()), None);
    }

    #[test]
    fn test_revoked_session_does_not_resolve() {
        let dir = directory();
        let account = dir.register("Dana", "dana@example.com");
        let token = dir.issue_session(account.id).unwrap();
        dir.revoke_session(&token);
        assert_eq!(dir.resolve(&RequestContext::with_token(token)), None);
    }

    #[test]
    fn test_unknown_user_gets_no_session() {
        let dir = directory();
        assert!(dir.issue_session(UserId::new()).is_none());
    }

    #[test]
    fn test_garbage_token_does_not_resolve() {
        let dir = directory();
        dir.register("Dana", "dana@example.com");
        let ctx = RequestContext::with_token("not-a-real-token");
        assert_eq!(dir.resolve(&ctx), None);
    }
}
