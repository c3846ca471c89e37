//! Port interface for favorite templates

use async_trait::async_trait;
use nutriflow_domain::{FavoriteItem, NewFavorite, Result};

/// Trait for persisting reusable nutrition templates, scoped per user
#[async_trait]
pub trait FavoriteRepository: Send + Sync {
    /// Store a new favorite and return it with its assigned identifier.
    async fn add(&self, user_id: &str, favorite: NewFavorite) -> Result<FavoriteItem>;

    /// Remove a favorite; fails with `NotFound` for unknown ids.
    async fn remove(&self, user_id: &str, id: &str) -> Result<()>;

    /// All favorites in creation order.
    async fn list(&self, user_id: &str) -> Result<Vec<FavoriteItem>>;
}
