//! Port interface for meal persistence
//!
//! This trait defines the boundary between core business logic and the
//! record store holding logged meals.

use async_trait::async_trait;
use chrono::NaiveDate;
use nutriflow_domain::{Meal, MealUpdate, NewMeal, Result};

/// Trait for persisting and querying logged meals, scoped per user
#[async_trait]
pub trait MealRepository: Send + Sync {
    /// Store a new meal and return it with its assigned identifier.
    async fn create(&self, user_id: &str, meal: NewMeal) -> Result<Meal>;

    /// List meals in creation order, optionally restricted to one date.
    async fn list(&self, user_id: &str, date: Option<NaiveDate>) -> Result<Vec<Meal>>;

    /// Apply a partial update; fails with `NotFound` for unknown ids.
    async fn update(&self, user_id: &str, id: &str, update: MealUpdate) -> Result<Meal>;

    /// Delete a meal; fails with `NotFound` for unknown ids.
    async fn delete(&self, user_id: &str, id: &str) -> Result<()>;
}
