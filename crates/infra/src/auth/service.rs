//! Session provider over the local user table
//!
//! Accounts live in the `users` table with argon2id password hashes; the
//! profile row (carrying the initial calorie goal) is created in the same
//! transaction as the account. Sessions are held in memory and announced on
//! a broadcast channel so the presentation layer can react to sign-in and
//! sign-out.

use std::sync::{Arc, RwLock};

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::Argon2;
use async_trait::async_trait;
use chrono::Utc;
use nutriflow_core::auth::ports::SessionProvider;
use nutriflow_domain::constants::SESSION_TTL_SECS;
use nutriflow_domain::{
    AuthEvent, AuthUser, NutriFlowError, Result as DomainResult, Session,
};
use rusqlite::{params, OptionalExtension};
use tokio::sync::broadcast;
use tokio::task;
use tracing::info;
use uuid::Uuid;

use crate::database::DbManager;

const MIN_PASSWORD_LEN: usize = 6;
const EVENT_CHANNEL_CAPACITY: usize = 16;

/// Session provider backed by the local database.
pub struct LocalSessionProvider {
    db: Arc<DbManager>,
    session: RwLock<Option<Session>>,
    events: broadcast::Sender<AuthEvent>,
}

impl LocalSessionProvider {
    pub fn new(db: Arc<DbManager>) -> Self {
        let (events, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);
        Self { db, session: RwLock::new(None), events }
    }

    fn open_session(&self, user: AuthUser) -> Session {
        let session = Session {
            user,
            access_token: Uuid::new_v4().to_string(),
            expires_at: Utc::now().timestamp() + SESSION_TTL_SECS,
        };

        if let Ok(mut guard) = self.session.write() {
            *guard = Some(session.clone());
        }
        let _ = self.events.send(AuthEvent::SignedIn(session.clone()));

        session
    }
}

#[async_trait]
impl SessionProvider for LocalSessionProvider {
    async fn sign_up(
        &self,
        email: &str,
        password: &str,
        name: &str,
        calorie_goal: u32,
    ) -> DomainResult<Session> {
        let email = normalize_email(email)?;
        let name = name.trim().to_string();
        if name.is_empty() {
            return Err(NutriFlowError::Auth("name is required".into()));
        }
        if password.len() < MIN_PASSWORD_LEN {
            return Err(NutriFlowError::Auth(format!(
                "password must be at least {MIN_PASSWORD_LEN} characters"
            )));
        }

        let db = Arc::clone(&self.db);
        let password = password.to_string();

        let user = task::spawn_blocking(move || -> DomainResult<AuthUser> {
            let mut conn = db.get_connection()?;

            let existing: Option<String> = conn
                .query_row("SELECT id FROM users WHERE email = ?1", params![&email], |row| {
                    row.get(0)
                })
                .optional()
                .map_err(crate::database::map_sql_error)?;
            if existing.is_some() {
                return Err(NutriFlowError::Auth(
                    "an account with this email already exists".into(),
                ));
            }

            let salt = SaltString::generate(&mut OsRng);
            let password_hash = Argon2::default()
                .hash_password(password.as_bytes(), &salt)
                .map_err(|err| NutriFlowError::Internal(format!("password hashing failed: {err}")))?
                .to_string();

            let user_id = Uuid::new_v4().to_string();
            let now = Utc::now().timestamp();

            let tx = conn.transaction().map_err(crate::database::map_sql_error)?;
            tx.execute(
                "INSERT INTO users (id, email, password_hash, name, created_at)
                 VALUES (?1, ?2, ?3, ?4, ?5)",
                params![&user_id, &email, &password_hash, &name, now],
            )
            .map_err(crate::database::map_sql_error)?;
            crate::database::insert_profile(&tx, &user_id, &name, calorie_goal, now)
                .map_err(crate::database::map_sql_error)?;
            tx.commit().map_err(crate::database::map_sql_error)?;

            Ok(AuthUser { id: user_id, email, name })
        })
        .await
        .map_err(|err| NutriFlowError::Internal(format!("Task join error: {err}")))??;

        info!(user_id = %user.id, "account registered");
        Ok(self.open_session(user))
    }

    async fn sign_in(&self, email: &str, password: &str) -> DomainResult<Session> {
        let email = normalize_email(email)?;
        let db = Arc::clone(&self.db);
        let password = password.to_string();

        let user = task::spawn_blocking(move || -> DomainResult<AuthUser> {
            let conn = db.get_connection()?;

            let row: Option<(String, String, String)> = conn
                .query_row(
                    "SELECT id, password_hash, name FROM users WHERE email = ?1",
                    params![&email],
                    |row| Ok((row.get(0)?, row.get(1)?, row.get(2)?)),
                )
                .optional()
                .map_err(crate::database::map_sql_error)?;

            let (user_id, stored_hash, name) =
                row.ok_or_else(invalid_credentials)?;

            let parsed = PasswordHash::new(&stored_hash).map_err(|err| {
                NutriFlowError::Internal(format!("stored password hash is invalid: {err}"))
            })?;
            Argon2::default()
                .verify_password(password.as_bytes(), &parsed)
                .map_err(|_| invalid_credentials())?;

            Ok(AuthUser { id: user_id, email, name })
        })
        .await
        .map_err(|err| NutriFlowError::Internal(format!("Task join error: {err}")))??;

        info!(user_id = %user.id, "signed in");
        Ok(self.open_session(user))
    }

    async fn sign_out(&self) -> DomainResult<()> {
        let had_session = self
            .session
            .write()
            .map(|mut guard| guard.take().is_some())
            .unwrap_or(false);

        if had_session {
            info!("signed out");
            let _ = self.events.send(AuthEvent::SignedOut);
        }
        Ok(())
    }

    fn current_session(&self) -> Option<Session> {
        let guard = self.session.read().ok()?;
        let session = guard.as_ref()?.clone();
        drop(guard);

        if session.expires_at <= Utc::now().timestamp() {
            return None;
        }
        Some(session)
    }

    fn subscribe(&self) -> broadcast::Receiver<AuthEvent> {
        self.events.subscribe()
    }
}

fn normalize_email(email: &str) -> DomainResult<String> {
    let email = email.trim().to_ascii_lowercase();
    if email.is_empty() || !email.contains('@') {
        return Err(NutriFlowError::Auth("invalid email address".into()));
    }
    Ok(email)
}

fn invalid_credentials() -> NutriFlowError {
    NutriFlowError::Auth("invalid email or password".into())
}
