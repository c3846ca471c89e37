//! Mock repository implementations for testing
//!
//! Provides in-memory mocks for the core repository ports, enabling
//! deterministic unit tests without database dependencies.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::NaiveDate;
use nutriflow_core::analysis::ports::MealAnalyzer;
use nutriflow_core::favorites::ports::FavoriteRepository;
use nutriflow_core::meals::ports::MealRepository;
use nutriflow_core::profile::ports::ProfileRepository;
use nutriflow_domain::{
    AiAnalysisResult, DailyGoals, FavoriteItem, Meal, MealUpdate, NewFavorite, NewMeal,
    NutriFlowError, Profile, ProfileUpdate, Result as DomainResult,
};

/// In-memory mock for `MealRepository`.
///
/// Assigns sequential ids and preserves creation order, mirroring the
/// ordering contract of the real store.
#[derive(Default)]
pub struct MockMealRepository {
    meals: Mutex<Vec<(String, Meal)>>,
    next_id: AtomicU64,
}

#[async_trait]
impl MealRepository for MockMealRepository {
    async fn create(&self, user_id: &str, meal: NewMeal) -> DomainResult<Meal> {
        let id = format!("meal-{}", self.next_id.fetch_add(1, Ordering::SeqCst) + 1);
        let stored = meal.with_id(id);
        self.meals
            .lock()
            .expect("meal store poisoned")
            .push((user_id.to_string(), stored.clone()));
        Ok(stored)
    }

    async fn list(&self, user_id: &str, date: Option<NaiveDate>) -> DomainResult<Vec<Meal>> {
        Ok(self
            .meals
            .lock()
            .expect("meal store poisoned")
            .iter()
            .filter(|(owner, meal)| {
                owner == user_id && date.map_or(true, |wanted| meal.date == wanted)
            })
            .map(|(_, meal)| meal.clone())
            .collect())
    }

    async fn update(
        &self,
        user_id: &str,
        id: &str,
        update: MealUpdate,
    ) -> DomainResult<Meal> {
        let mut meals = self.meals.lock().expect("meal store poisoned");
        let entry = meals
            .iter_mut()
            .find(|(owner, meal)| owner == user_id && meal.id == id)
            .ok_or_else(|| NutriFlowError::NotFound(format!("meal {id}")))?;
        entry.1 = update.apply_to(&entry.1);
        Ok(entry.1.clone())
    }

    async fn delete(&self, user_id: &str, id: &str) -> DomainResult<()> {
        let mut meals = self.meals.lock().expect("meal store poisoned");
        let before = meals.len();
        meals.retain(|(owner, meal)| !(owner == user_id && meal.id == id));
        if meals.len() == before {
            return Err(NutriFlowError::NotFound(format!("meal {id}")));
        }
        Ok(())
    }
}

/// In-memory mock for `FavoriteRepository`.
#[derive(Default)]
pub struct MockFavoriteRepository {
    favorites: Mutex<Vec<(String, FavoriteItem)>>,
    next_id: AtomicU64,
}

#[async_trait]
impl FavoriteRepository for MockFavoriteRepository {
    async fn add(&self, user_id: &str, favorite: NewFavorite) -> DomainResult<FavoriteItem> {
        let id = format!("fav-{}", self.next_id.fetch_add(1, Ordering::SeqCst) + 1);
        let stored = favorite.with_id(id);
        self.favorites
            .lock()
            .expect("favorite store poisoned")
            .push((user_id.to_string(), stored.clone()));
        Ok(stored)
    }

    async fn remove(&self, user_id: &str, id: &str) -> DomainResult<()> {
        let mut favorites = self.favorites.lock().expect("favorite store poisoned");
        let before = favorites.len();
        favorites.retain(|(owner, favorite)| !(owner == user_id && favorite.id == id));
        if favorites.len() == before {
            return Err(NutriFlowError::NotFound(format!("favorite {id}")));
        }
        Ok(())
    }

    async fn list(&self, user_id: &str) -> DomainResult<Vec<FavoriteItem>> {
        Ok(self
            .favorites
            .lock()
            .expect("favorite store poisoned")
            .iter()
            .filter(|(owner, _)| owner == user_id)
            .map(|(_, favorite)| favorite.clone())
            .collect())
    }
}

/// In-memory mock for `ProfileRepository`.
#[derive(Default)]
pub struct MockProfileRepository {
    goals: Mutex<Option<DailyGoals>>,
    profile: Mutex<Option<Profile>>,
}

impl MockProfileRepository {
    /// Seed the mock with an existing profile row.
    pub fn with_profile(self, profile: Profile) -> Self {
        *self.profile.lock().expect("profile store poisoned") = Some(profile);
        self
    }
}

#[async_trait]
impl ProfileRepository for MockProfileRepository {
    async fn read_goals(&self, _user_id: &str) -> DomainResult<Option<DailyGoals>> {
        Ok(*self.goals.lock().expect("goal store poisoned"))
    }

    async fn write_goals(&self, _user_id: &str, goals: DailyGoals) -> DomainResult<()> {
        *self.goals.lock().expect("goal store poisoned") = Some(goals);
        Ok(())
    }

    async fn read_profile(&self, _user_id: &str) -> DomainResult<Option<Profile>> {
        Ok(self.profile.lock().expect("profile store poisoned").clone())
    }

    async fn write_profile(
        &self,
        user_id: &str,
        update: ProfileUpdate,
    ) -> DomainResult<Profile> {
        let mut stored = self.profile.lock().expect("profile store poisoned");
        let current = stored
            .clone()
            .unwrap_or_else(|| Profile::new(user_id, "", 0));
        let updated = update.apply_to(&current, current.updated_at + 1);
        *stored = Some(updated.clone());
        Ok(updated)
    }
}

/// Scripted mock for `MealAnalyzer`.
///
/// Returns a fixed result and records every description it was asked to
/// analyze.
pub struct MockAnalyzer {
    result: AiAnalysisResult,
    pub descriptions: Mutex<Vec<String>>,
}

impl MockAnalyzer {
    pub fn returning(result: AiAnalysisResult) -> Self {
        Self { result, descriptions: Mutex::new(Vec::new()) }
    }
}

#[async_trait]
impl MealAnalyzer for MockAnalyzer {
    async fn analyze_text(&self, description: &str) -> DomainResult<AiAnalysisResult> {
        self.descriptions
            .lock()
            .expect("description log poisoned")
            .push(description.to_string());
        Ok(self.result.clone())
    }

    async fn analyze_image(
        &self,
        _image: &[u8],
        _mime_type: &str,
    ) -> DomainResult<AiAnalysisResult> {
        Ok(self.result.clone())
    }
}
