//! Favorite template service

use std::sync::Arc;

use nutriflow_domain::{FavoriteItem, NewFavorite, NutriFlowError, Result};
use tracing::debug;

use super::ports::FavoriteRepository;
use crate::auth::ports::SessionProvider;

/// Manages a user's reusable nutrition templates.
///
/// The "is favorited" check matches by name: a food name appears at most
/// once conceptually, even though entries are keyed by identifier.
pub struct FavoriteService {
    repository: Arc<dyn FavoriteRepository>,
    sessions: Arc<dyn SessionProvider>,
}

impl FavoriteService {
    pub fn new(
        repository: Arc<dyn FavoriteRepository>,
        sessions: Arc<dyn SessionProvider>,
    ) -> Self {
        Self { repository, sessions }
    }

    pub async fn list(&self) -> Result<Vec<FavoriteItem>> {
        let user_id = self.current_user_id()?;
        self.repository.list(&user_id).await
    }

    pub async fn add(&self, favorite: NewFavorite) -> Result<FavoriteItem> {
        let user_id = self.current_user_id()?;
        self.repository.add(&user_id, favorite).await
    }

    pub async fn remove(&self, id: &str) -> Result<()> {
        let user_id = self.current_user_id()?;
        self.repository.remove(&user_id, id).await
    }

    /// Whether any stored favorite carries this exact name.
    pub async fn is_favorite(&self, name: &str) -> Result<bool> {
        Ok(self.list().await?.iter().any(|favorite| favorite.name == name))
    }

    /// Add the template when its name is unknown, remove it otherwise.
    ///
    /// Returns the stored favorite when one was added, `None` when removed.
    pub async fn toggle(&self, favorite: NewFavorite) -> Result<Option<FavoriteItem>> {
        let user_id = self.current_user_id()?;
        let existing = self.repository.list(&user_id).await?;

        if let Some(stored) = existing.iter().find(|stored| stored.name == favorite.name) {
            debug!(name = %favorite.name, "removing favorite");
            self.repository.remove(&user_id, &stored.id).await?;
            return Ok(None);
        }

        debug!(name = %favorite.name, "adding favorite");
        self.repository.add(&user_id, favorite).await.map(Some)
    }

    fn current_user_id(&self) -> Result<String> {
        self.sessions
            .current_session()
            .map(|session| session.user.id)
            .ok_or(NutriFlowError::Unauthenticated)
    }
}
