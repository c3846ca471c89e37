//! Meal entity and its edit/create shapes
//!
//! A meal is a single logged food entry, bucketed by calendar date for all
//! aggregation.

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::errors::NutriFlowError;

/// Meal slot a logged entry belongs to
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "lowercase")]
pub enum MealCategory {
    Breakfast,
    Lunch,
    Snack,
    Dinner,
}

impl MealCategory {
    /// All categories in display order
    pub const ALL: [Self; 4] = [Self::Breakfast, Self::Lunch, Self::Snack, Self::Dinner];

    /// Stable string form used in storage and serialization
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Breakfast => "breakfast",
            Self::Lunch => "lunch",
            Self::Snack => "snack",
            Self::Dinner => "dinner",
        }
    }
}

impl fmt::Display for MealCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MealCategory {
    type Err = NutriFlowError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "breakfast" => Ok(Self::Breakfast),
            "lunch" => Ok(Self::Lunch),
            "snack" => Ok(Self::Snack),
            "dinner" => Ok(Self::Dinner),
            other => {
                Err(NutriFlowError::InvalidInput(format!("unknown meal category: {other}")))
            }
        }
    }
}

/// A single logged food entry
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Meal {
    /// Opaque identifier assigned by the repository at creation
    pub id: String,
    pub name: String,
    pub calories: u32,
    /// Grams
    pub protein: u32,
    /// Grams
    pub carbs: u32,
    /// Grams
    pub fat: u32,
    /// Time of day, minute precision
    pub time: NaiveTime,
    pub category: MealCategory,
    /// Calendar day the entry belongs to; the bucketing key for aggregation
    pub date: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_ref: Option<String>,
}

/// A meal ready to be persisted; the repository assigns the identifier
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewMeal {
    pub name: String,
    pub calories: u32,
    pub protein: u32,
    pub carbs: u32,
    pub fat: u32,
    pub time: NaiveTime,
    pub category: MealCategory,
    pub date: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_ref: Option<String>,
}

impl NewMeal {
    /// Attach a repository-assigned identifier, producing a stored [`Meal`].
    pub fn with_id(self, id: impl Into<String>) -> Meal {
        Meal {
            id: id.into(),
            name: self.name,
            calories: self.calories,
            protein: self.protein,
            carbs: self.carbs,
            fat: self.fat,
            time: self.time,
            category: self.category,
            date: self.date,
            image_ref: self.image_ref,
        }
    }
}

/// Partial update for an existing meal; `None` fields are left untouched
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MealUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub calories: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub protein: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub carbs: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fat: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<NaiveTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<MealCategory>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_ref: Option<String>,
}

impl MealUpdate {
    /// Update that only moves the meal to another category
    pub fn category(category: MealCategory) -> Self {
        Self { category: Some(category), ..Self::default() }
    }

    /// Apply this update on top of an existing meal.
    pub fn apply_to(&self, meal: &Meal) -> Meal {
        Meal {
            id: meal.id.clone(),
            name: self.name.clone().unwrap_or_else(|| meal.name.clone()),
            calories: self.calories.unwrap_or(meal.calories),
            protein: self.protein.unwrap_or(meal.protein),
            carbs: self.carbs.unwrap_or(meal.carbs),
            fat: self.fat.unwrap_or(meal.fat),
            time: self.time.unwrap_or(meal.time),
            category: self.category.unwrap_or(meal.category),
            date: self.date.unwrap_or(meal.date),
            image_ref: self.image_ref.clone().or_else(|| meal.image_ref.clone()),
        }
    }
}

/// Raw meal candidate prior to validation
///
/// Produced by a form or by the AI analysis flow; numbers and name may be
/// absent. [`crate::validate_meal`] turns a draft into a [`NewMeal`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MealDraft {
    pub name: Option<String>,
    pub calories: Option<u32>,
    pub protein: Option<u32>,
    pub carbs: Option<u32>,
    pub fat: Option<u32>,
    pub time: Option<NaiveTime>,
    pub category: Option<MealCategory>,
    pub date: Option<NaiveDate>,
    pub image_ref: Option<String>,
}
