//! Profile and goals service

use std::sync::Arc;

use nutriflow_domain::{DailyGoals, NutriFlowError, Profile, ProfileUpdate, Result};
use tracing::debug;

use super::ports::ProfileRepository;
use crate::auth::ports::SessionProvider;

/// Reads and saves the current user's profile and daily goals.
pub struct ProfileService {
    repository: Arc<dyn ProfileRepository>,
    sessions: Arc<dyn SessionProvider>,
}

impl ProfileService {
    pub fn new(
        repository: Arc<dyn ProfileRepository>,
        sessions: Arc<dyn SessionProvider>,
    ) -> Self {
        Self { repository, sessions }
    }

    /// The user's daily goals, falling back to the defaults when never
    /// customized.
    pub async fn goals(&self) -> Result<DailyGoals> {
        let user_id = self.current_user_id()?;
        Ok(self.repository.read_goals(&user_id).await?.unwrap_or_default())
    }

    pub async fn set_goals(&self, goals: DailyGoals) -> Result<()> {
        let user_id = self.current_user_id()?;

        debug!(calories = goals.calories, "updating daily goals");
        self.repository.write_goals(&user_id, goals).await
    }

    /// The user's profile; created implicitly at sign-up, so absence means
    /// the account is in an inconsistent state.
    pub async fn profile(&self) -> Result<Profile> {
        let user_id = self.current_user_id()?;
        self.repository
            .read_profile(&user_id)
            .await?
            .ok_or_else(|| NutriFlowError::NotFound(format!("profile for user {user_id}")))
    }

    pub async fn save_profile(&self, update: ProfileUpdate) -> Result<Profile> {
        let user_id = self.current_user_id()?;
        self.repository.write_profile(&user_id, update).await
    }

    fn current_user_id(&self) -> Result<String> {
        self.sessions
            .current_session()
            .map(|session| session.user.id)
            .ok_or(NutriFlowError::Unauthenticated)
    }
}
