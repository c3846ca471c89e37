//! Port interface for authentication and session lifecycle
//!
//! The session provider is an external collaborator; this trait defines the
//! boundary between core business logic and whatever auth backend is wired
//! in.

use async_trait::async_trait;
use nutriflow_domain::{AuthEvent, Result, Session};
use tokio::sync::broadcast;

/// Trait for account and session management
#[async_trait]
pub trait SessionProvider: Send + Sync {
    /// Register a new account and open a session for it.
    ///
    /// The initial calorie goal seeds the implicitly created profile.
    async fn sign_up(
        &self,
        email: &str,
        password: &str,
        name: &str,
        calorie_goal: u32,
    ) -> Result<Session>;

    /// Authenticate an existing account and open a session.
    async fn sign_in(&self, email: &str, password: &str) -> Result<Session>;

    /// Close the current session, if any.
    async fn sign_out(&self) -> Result<()>;

    /// The currently active session, if one exists.
    fn current_session(&self) -> Option<Session>;

    /// Subscribe to session lifecycle changes (sign-in/sign-out).
    fn subscribe(&self) -> broadcast::Receiver<AuthEvent>;
}
