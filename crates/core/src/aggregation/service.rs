//! Derived nutrition statistics
//!
//! All functions here are pure, deterministic and total: identical input
//! (regardless of ordering) produces identical output, and no input within
//! the domain invariants can make them fail. Sums saturate instead of
//! wrapping.

use std::collections::BTreeMap;

use chrono::{Days, NaiveDate};
use nutriflow_domain::constants::{GOAL_WINDOW_LOWER, GOAL_WINDOW_UPPER};
use nutriflow_domain::{DailyGoals, Meal, MealCategory};
use serde::{Deserialize, Serialize};

/// Summed nutrition values over a set of meals
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct NutritionTotals {
    pub calories: u32,
    pub protein: u32,
    pub carbs: u32,
    pub fat: u32,
}

impl NutritionTotals {
    fn add(&mut self, meal: &Meal) {
        self.calories = self.calories.saturating_add(meal.calories);
        self.protein = self.protein.saturating_add(meal.protein);
        self.carbs = self.carbs.saturating_add(meal.carbs);
        self.fat = self.fat.saturating_add(meal.fat);
    }
}

/// Calories logged on a single calendar day
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct DailyCalories {
    pub date: NaiveDate,
    pub calories: u32,
}

/// Weekly goal-adherence metrics
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct WeeklySummary {
    /// Mean calories over days with at least one logged meal; 0 when none
    pub average_calories: u32,
    /// Days whose calorie total landed inside the goal window
    pub days_on_goal: u32,
    /// Consecutive on-goal days ending at the most recent day
    pub current_streak: u32,
}

/// Relative share of each macro, in percent of total grams
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct MacroDistribution {
    pub protein_pct: u32,
    pub carbs_pct: u32,
    pub fat_pct: u32,
}

/// Sum the nutrition fields of every meal logged on `date`.
///
/// No matching meals yields all-zero totals.
pub fn totals_for_date(meals: &[Meal], date: NaiveDate) -> NutritionTotals {
    let mut totals = NutritionTotals::default();
    for meal in meals.iter().filter(|meal| meal.date == date) {
        totals.add(meal);
    }
    totals
}

/// Per-category totals for a single day.
///
/// Every category is present in the result; categories with no meals map to
/// zero totals.
pub fn totals_by_category(
    meals: &[Meal],
    date: NaiveDate,
) -> BTreeMap<MealCategory, NutritionTotals> {
    let mut by_category: BTreeMap<MealCategory, NutritionTotals> =
        MealCategory::ALL.iter().map(|category| (*category, NutritionTotals::default())).collect();

    for meal in meals.iter().filter(|meal| meal.date == date) {
        if let Some(totals) = by_category.get_mut(&meal.category) {
            totals.add(meal);
        }
    }

    by_category
}

/// Exact per-day calorie sums for the seven days ending at `anchor`.
///
/// Returns exactly seven entries ordered oldest to newest, the anchor date
/// inclusive as the last element. Days with no logged meals carry 0; no
/// values are ever synthesized.
pub fn last_7_day_totals(meals: &[Meal], anchor: NaiveDate) -> Vec<DailyCalories> {
    (0..7u64)
        .map(|offset| {
            let date =
                anchor.checked_sub_days(Days::new(6 - offset)).unwrap_or(NaiveDate::MIN);
            DailyCalories { date, calories: totals_for_date(meals, date).calories }
        })
        .collect()
}

/// Goal-adherence metrics over a run of daily totals ordered oldest to
/// newest.
///
/// A day is on goal when its calorie total is strictly positive and falls
/// inside `[0.8 * goal, 1.2 * goal]`; a day with nothing logged never counts,
/// even when the goal itself is 0. The streak walks backward from the newest
/// day and stops at the first day off goal.
pub fn weekly_summary(daily: &[DailyCalories], goals: &DailyGoals) -> WeeklySummary {
    let logged: Vec<u32> =
        daily.iter().map(|day| day.calories).filter(|calories| *calories > 0).collect();

    let average_calories = if logged.is_empty() {
        0
    } else {
        let sum: u64 = logged.iter().map(|calories| u64::from(*calories)).sum();
        round_div(sum, logged.len() as u64)
    };

    let on_goal = |calories: u32| -> bool {
        let calories = f64::from(calories);
        let goal = f64::from(goals.calories);
        calories > 0.0
            && calories >= GOAL_WINDOW_LOWER * goal
            && calories <= GOAL_WINDOW_UPPER * goal
    };

    let days_on_goal = daily.iter().filter(|day| on_goal(day.calories)).count() as u32;

    let current_streak =
        daily.iter().rev().take_while(|day| on_goal(day.calories)).count() as u32;

    WeeklySummary { average_calories, days_on_goal, current_streak }
}

/// Relative macro shares weighted by grams.
///
/// Returns `None` when all three inputs are zero; percentages are rounded to
/// the nearest integer and sum to 100 modulo rounding.
pub fn macro_distribution(protein: u32, carbs: u32, fat: u32) -> Option<MacroDistribution> {
    let total = u64::from(protein) + u64::from(carbs) + u64::from(fat);
    if total == 0 {
        return None;
    }

    Some(MacroDistribution {
        protein_pct: round_div(u64::from(protein) * 100, total),
        carbs_pct: round_div(u64::from(carbs) * 100, total),
        fat_pct: round_div(u64::from(fat) * 100, total),
    })
}

/// Integer division rounded to nearest.
fn round_div(numerator: u64, denominator: u64) -> u32 {
    ((numerator + denominator / 2) / denominator) as u32
}
