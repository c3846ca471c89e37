//! Favorite nutrition templates

use serde::{Deserialize, Serialize};

/// A named nutrition template a user can reuse to quick-fill a new meal.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FavoriteItem {
    pub id: String,
    pub name: String,
    pub calories: u32,
    pub protein: u32,
    pub carbs: u32,
    pub fat: u32,
}

/// A favorite as handed to the repository; the id is assigned at creation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewFavorite {
    pub name: String,
    pub calories: u32,
    pub protein: u32,
    pub carbs: u32,
    pub fat: u32,
}

impl NewFavorite {
    pub fn with_id(self, id: impl Into<String>) -> FavoriteItem {
        FavoriteItem {
            id: id.into(),
            name: self.name,
            calories: self.calories,
            protein: self.protein,
            carbs: self.carbs,
            fat: self.fat,
        }
    }
}
