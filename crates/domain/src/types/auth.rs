//! Authentication session types

use serde::{Deserialize, Serialize};

/// The authenticated user as exposed by the session provider
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AuthUser {
    pub id: String,
    pub email: String,
    pub name: String,
}

/// An active session issued at sign-in or sign-up
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Session {
    pub user: AuthUser,
    pub access_token: String,
    /// Unix timestamp after which the session is no longer valid
    pub expires_at: i64,
}

/// Session lifecycle notification delivered to subscribers
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum AuthEvent {
    SignedIn(Session),
    SignedOut,
}
