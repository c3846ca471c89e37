//! Field-level validation of meal candidates
//!
//! Pure validation: a [`MealDraft`] either becomes a [`NewMeal`] or fails
//! with the first violated rule. Missing optional macros normalize to zero.

use crate::constants::{MAX_MACRO_GRAMS, MAX_MEAL_CALORIES};
use crate::errors::ValidationError;
use crate::types::meal::{MealDraft, NewMeal};

/// Validate a raw meal candidate.
///
/// # Errors
/// - [`ValidationError::MissingField`] when the name is absent/blank, the
///   calorie count is absent, or no date/time/category was provided.
/// - [`ValidationError::OutOfRange`] when calories exceed 9999 or any macro
///   exceeds 999 grams.
pub fn validate_meal(draft: MealDraft) -> Result<NewMeal, ValidationError> {
    let name = draft
        .name
        .map(|name| name.trim().to_string())
        .filter(|name| !name.is_empty())
        .ok_or_else(|| ValidationError::MissingField("name".into()))?;

    let calories =
        draft.calories.ok_or_else(|| ValidationError::MissingField("calories".into()))?;
    check_range("calories", calories, MAX_MEAL_CALORIES)?;

    let protein = draft.protein.unwrap_or(0);
    let carbs = draft.carbs.unwrap_or(0);
    let fat = draft.fat.unwrap_or(0);
    check_range("protein", protein, MAX_MACRO_GRAMS)?;
    check_range("carbs", carbs, MAX_MACRO_GRAMS)?;
    check_range("fat", fat, MAX_MACRO_GRAMS)?;

    let time = draft.time.ok_or_else(|| ValidationError::MissingField("time".into()))?;
    let category =
        draft.category.ok_or_else(|| ValidationError::MissingField("category".into()))?;
    let date = draft.date.ok_or_else(|| ValidationError::MissingField("date".into()))?;

    Ok(NewMeal {
        name,
        calories,
        protein,
        carbs,
        fat,
        time,
        category,
        date,
        image_ref: draft.image_ref,
    })
}

fn check_range(field: &str, value: u32, max: u32) -> Result<(), ValidationError> {
    if value > max {
        return Err(ValidationError::OutOfRange { field: field.into(), value, max });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, NaiveTime};

    use super::*;
    use crate::types::meal::MealCategory;

    fn base_draft() -> MealDraft {
        MealDraft {
            name: Some("Feijoada".into()),
            calories: Some(650),
            protein: Some(35),
            carbs: Some(70),
            fat: Some(20),
            time: NaiveTime::from_hms_opt(12, 30, 0),
            category: Some(MealCategory::Lunch),
            date: NaiveDate::from_ymd_opt(2024, 3, 10),
            image_ref: None,
        }
    }

    #[test]
    fn valid_draft_passes_through() {
        let meal = validate_meal(base_draft()).expect("valid draft");
        assert_eq!(meal.name, "Feijoada");
        assert_eq!(meal.calories, 650);
        assert_eq!(meal.category, MealCategory::Lunch);
    }

    #[test]
    fn missing_name_is_rejected() {
        let mut draft = base_draft();
        draft.name = None;
        let err = validate_meal(draft).expect_err("name required");
        assert_eq!(err, ValidationError::MissingField("name".into()));
    }

    #[test]
    fn blank_name_counts_as_missing() {
        let mut draft = base_draft();
        draft.name = Some("   ".into());
        let err = validate_meal(draft).expect_err("blank name rejected");
        assert_eq!(err, ValidationError::MissingField("name".into()));
    }

    #[test]
    fn missing_calories_is_rejected() {
        let mut draft = base_draft();
        draft.calories = None;
        let err = validate_meal(draft).expect_err("calories required");
        assert_eq!(err, ValidationError::MissingField("calories".into()));
    }

    #[test]
    fn calories_above_limit_are_rejected() {
        let mut draft = base_draft();
        draft.calories = Some(10_000);
        let err = validate_meal(draft).expect_err("over the calorie cap");
        assert_eq!(
            err,
            ValidationError::OutOfRange { field: "calories".into(), value: 10_000, max: 9999 }
        );
    }

    #[test]
    fn macro_above_limit_is_rejected() {
        let mut draft = base_draft();
        draft.fat = Some(1000);
        let err = validate_meal(draft).expect_err("over the macro cap");
        assert_eq!(
            err,
            ValidationError::OutOfRange { field: "fat".into(), value: 1000, max: 999 }
        );
    }

    #[test]
    fn missing_macros_normalize_to_zero() {
        let mut draft = base_draft();
        draft.protein = None;
        draft.carbs = None;
        draft.fat = None;
        let meal = validate_meal(draft).expect("macros optional");
        assert_eq!((meal.protein, meal.carbs, meal.fat), (0, 0, 0));
    }

    #[test]
    fn name_is_trimmed() {
        let mut draft = base_draft();
        draft.name = Some("  Grilled fish  ".into());
        let meal = validate_meal(draft).expect("valid draft");
        assert_eq!(meal.name, "Grilled fish");
    }
}
