//! Meal logging service - core business logic

use std::sync::Arc;

use chrono::{NaiveDate, NaiveTime};
use nutriflow_domain::constants::{MAX_MACRO_GRAMS, MAX_MEAL_CALORIES};
use nutriflow_domain::food_library::FoodItem;
use nutriflow_domain::{
    validate_meal, FavoriteItem, Meal, MealCategory, MealDraft, MealUpdate, NutriFlowError,
    Result, ValidationError,
};
use tracing::debug;

use super::ports::MealRepository;
use crate::auth::ports::SessionProvider;

/// Meal logging service
///
/// Validates candidates before they reach the repository and resolves the
/// owning user from the active session. Holds no mutable state of its own.
pub struct MealService {
    repository: Arc<dyn MealRepository>,
    sessions: Arc<dyn SessionProvider>,
}

impl MealService {
    pub fn new(repository: Arc<dyn MealRepository>, sessions: Arc<dyn SessionProvider>) -> Self {
        Self { repository, sessions }
    }

    /// Validate and store a meal candidate for the current user.
    pub async fn add_meal(&self, draft: MealDraft) -> Result<Meal> {
        let user_id = self.current_user_id()?;
        let meal = validate_meal(draft)?;

        debug!(date = %meal.date, category = %meal.category, "adding meal");
        self.repository.create(&user_id, meal).await
    }

    /// Quick-fill a new meal from a saved favorite.
    pub async fn add_from_favorite(
        &self,
        favorite: &FavoriteItem,
        date: NaiveDate,
        time: NaiveTime,
        category: MealCategory,
    ) -> Result<Meal> {
        let draft = MealDraft {
            name: Some(favorite.name.clone()),
            calories: Some(favorite.calories),
            protein: Some(favorite.protein),
            carbs: Some(favorite.carbs),
            fat: Some(favorite.fat),
            time: Some(time),
            category: Some(category),
            date: Some(date),
            image_ref: None,
        };
        self.add_meal(draft).await
    }

    /// Quick-fill a new meal from a built-in library entry.
    pub async fn add_from_library(
        &self,
        item: &FoodItem,
        date: NaiveDate,
        time: NaiveTime,
        category: MealCategory,
    ) -> Result<Meal> {
        let draft = MealDraft {
            name: Some(item.name.to_string()),
            calories: Some(item.calories),
            protein: Some(item.protein),
            carbs: Some(item.carbs),
            fat: Some(item.fat),
            time: Some(time),
            category: Some(category),
            date: Some(date),
            image_ref: None,
        };
        self.add_meal(draft).await
    }

    /// Meals logged on the given date, in creation order.
    pub async fn meals_for_date(&self, date: NaiveDate) -> Result<Vec<Meal>> {
        let user_id = self.current_user_id()?;
        self.repository.list(&user_id, Some(date)).await
    }

    /// Every meal the user has logged, in creation order.
    pub async fn all_meals(&self) -> Result<Vec<Meal>> {
        let user_id = self.current_user_id()?;
        self.repository.list(&user_id, None).await
    }

    /// Edit any field of an existing meal except its identifier.
    pub async fn edit_meal(&self, id: &str, update: MealUpdate) -> Result<Meal> {
        let user_id = self.current_user_id()?;
        validate_update(&update)?;
        self.repository.update(&user_id, id, update).await
    }

    /// Move a meal to another slot, leaving every other field untouched.
    pub async fn move_to_category(&self, id: &str, category: MealCategory) -> Result<Meal> {
        let user_id = self.current_user_id()?;

        debug!(meal_id = id, category = %category, "moving meal");
        self.repository.update(&user_id, id, MealUpdate::category(category)).await
    }

    /// Delete a meal permanently.
    pub async fn delete_meal(&self, id: &str) -> Result<()> {
        let user_id = self.current_user_id()?;
        self.repository.delete(&user_id, id).await
    }

    fn current_user_id(&self) -> Result<String> {
        self.sessions
            .current_session()
            .map(|session| session.user.id)
            .ok_or(NutriFlowError::Unauthenticated)
    }
}

/// The same field limits as meal creation, applied only to fields present in
/// the update.
fn validate_update(update: &MealUpdate) -> Result<()> {
    if let Some(name) = &update.name {
        if name.trim().is_empty() {
            return Err(ValidationError::MissingField("name".into()).into());
        }
    }
    if let Some(calories) = update.calories {
        if calories > MAX_MEAL_CALORIES {
            return Err(ValidationError::OutOfRange {
                field: "calories".into(),
                value: calories,
                max: MAX_MEAL_CALORIES,
            }
            .into());
        }
    }
    for (field, value) in [
        ("protein", update.protein),
        ("carbs", update.carbs),
        ("fat", update.fat),
    ] {
        if let Some(value) = value {
            if value > MAX_MACRO_GRAMS {
                return Err(ValidationError::OutOfRange {
                    field: field.into(),
                    value,
                    max: MAX_MACRO_GRAMS,
                }
                .into());
            }
        }
    }
    Ok(())
}
