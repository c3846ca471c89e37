//! Port interface for profile and goal persistence

use async_trait::async_trait;
use nutriflow_domain::{DailyGoals, Profile, ProfileUpdate, Result};

/// Trait for the per-user profile record and its embedded daily goals
#[async_trait]
pub trait ProfileRepository: Send + Sync {
    /// Stored goals, `None` when the user never customized them.
    async fn read_goals(&self, user_id: &str) -> Result<Option<DailyGoals>>;

    /// Replace the stored goals.
    async fn write_goals(&self, user_id: &str, goals: DailyGoals) -> Result<()>;

    /// The user's profile; `None` when no profile row exists.
    async fn read_profile(&self, user_id: &str) -> Result<Option<Profile>>;

    /// Merge a partial update into the profile and return the saved state.
    async fn write_profile(&self, user_id: &str, update: ProfileUpdate) -> Result<Profile>;
}
