//! Session provider stub for core tests

use std::sync::Mutex;

use async_trait::async_trait;
use nutriflow_core::auth::ports::SessionProvider;
use nutriflow_domain::{
    AuthEvent, AuthUser, NutriFlowError, Result as DomainResult, Session,
};
use tokio::sync::broadcast;

/// Session provider holding a fixed session (or none).
pub struct StubSessionProvider {
    session: Mutex<Option<Session>>,
    events: broadcast::Sender<AuthEvent>,
}

impl StubSessionProvider {
    /// Provider with an active session for the given user id.
    pub fn signed_in(user_id: &str) -> Self {
        let session = Session {
            user: AuthUser {
                id: user_id.to_string(),
                email: format!("{user_id}@example.com"),
                name: "Test User".to_string(),
            },
            access_token: "test-token".to_string(),
            expires_at: i64::MAX,
        };
        let (events, _) = broadcast::channel(8);
        Self { session: Mutex::new(Some(session)), events }
    }

    /// Provider with no active session.
    pub fn signed_out() -> Self {
        let (events, _) = broadcast::channel(8);
        Self { session: Mutex::new(None), events }
    }
}

#[async_trait]
impl SessionProvider for StubSessionProvider {
    async fn sign_up(
        &self,
        _email: &str,
        _password: &str,
        _name: &str,
        _calorie_goal: u32,
    ) -> DomainResult<Session> {
        Err(NutriFlowError::Auth("stub provider cannot register accounts".into()))
    }

    async fn sign_in(&self, _email: &str, _password: &str) -> DomainResult<Session> {
        self.current_session()
            .ok_or_else(|| NutriFlowError::Auth("stub provider has no account".into()))
    }

    async fn sign_out(&self) -> DomainResult<()> {
        *self.session.lock().expect("session lock poisoned") = None;
        let _ = self.events.send(AuthEvent::SignedOut);
        Ok(())
    }

    fn current_session(&self) -> Option<Session> {
        self.session.lock().expect("session lock poisoned").clone()
    }

    fn subscribe(&self) -> broadcast::Receiver<AuthEvent> {
        self.events.subscribe()
    }
}
