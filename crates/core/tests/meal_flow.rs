//! Integration tests for the meal logging flow over in-memory ports

mod support;

use std::sync::Arc;

use chrono::{NaiveDate, NaiveTime};
use nutriflow_core::{totals_for_date, FavoriteService, MealService};
use nutriflow_domain::{
    MealCategory, MealDraft, NewFavorite, NutriFlowError, ValidationError,
};
use support::repositories::{MockFavoriteRepository, MockMealRepository};
use support::sessions::StubSessionProvider;

fn lunch_draft(date: NaiveDate) -> MealDraft {
    MealDraft {
        name: Some("Feijoada".into()),
        calories: Some(650),
        protein: Some(35),
        carbs: Some(70),
        fat: Some(20),
        time: NaiveTime::from_hms_opt(12, 30, 0),
        category: Some(MealCategory::Lunch),
        date: Some(date),
        image_ref: None,
    }
}

fn service_for(user_id: &str) -> MealService {
    MealService::new(
        Arc::new(MockMealRepository::default()),
        Arc::new(StubSessionProvider::signed_in(user_id)),
    )
}

#[tokio::test]
async fn validated_meal_round_trips_through_the_repository() {
    let date = NaiveDate::from_ymd_opt(2024, 3, 10).unwrap();
    let service = service_for("user-1");

    let stored = service.add_meal(lunch_draft(date)).await.expect("meal stored");
    let fetched = service.meals_for_date(date).await.expect("meals listed");

    // Field-for-field equality modulo the assigned identifier.
    assert_eq!(fetched.len(), 1);
    assert_eq!(fetched[0], stored);
    assert!(!stored.id.is_empty());
    assert_eq!(stored.name, "Feijoada");
    assert_eq!(stored.calories, 650);
}

#[tokio::test]
async fn meals_keep_creation_order() {
    let date = NaiveDate::from_ymd_opt(2024, 3, 10).unwrap();
    let service = service_for("user-1");

    for name in ["A", "B", "C"] {
        let mut draft = lunch_draft(date);
        draft.name = Some(name.into());
        service.add_meal(draft).await.expect("meal stored");
    }

    let names: Vec<String> = service
        .meals_for_date(date)
        .await
        .expect("meals listed")
        .into_iter()
        .map(|meal| meal.name)
        .collect();

    assert_eq!(names, ["A", "B", "C"]);
}

#[tokio::test]
async fn without_session_every_operation_is_unauthenticated() {
    let date = NaiveDate::from_ymd_opt(2024, 3, 10).unwrap();
    let service = MealService::new(
        Arc::new(MockMealRepository::default()),
        Arc::new(StubSessionProvider::signed_out()),
    );

    let add = service.add_meal(lunch_draft(date)).await;
    let list = service.meals_for_date(date).await;
    let delete = service.delete_meal("meal-1").await;

    assert!(matches!(add, Err(NutriFlowError::Unauthenticated)));
    assert!(matches!(list, Err(NutriFlowError::Unauthenticated)));
    assert!(matches!(delete, Err(NutriFlowError::Unauthenticated)));
}

#[tokio::test]
async fn invalid_draft_never_reaches_the_repository() {
    let date = NaiveDate::from_ymd_opt(2024, 3, 10).unwrap();
    let service = service_for("user-1");

    let mut draft = lunch_draft(date);
    draft.calories = Some(10_000);
    let error = service.add_meal(draft).await.expect_err("rejected");

    let expected: NutriFlowError = ValidationError::OutOfRange {
        field: "calories".into(),
        value: 10_000,
        max: 9999,
    }
    .into();
    assert_eq!(error.to_string(), expected.to_string());
    assert!(service.meals_for_date(date).await.expect("listed").is_empty());
}

#[tokio::test]
async fn moving_a_meal_changes_only_its_category() {
    let date = NaiveDate::from_ymd_opt(2024, 3, 10).unwrap();
    let service = service_for("user-1");

    let stored = service.add_meal(lunch_draft(date)).await.expect("meal stored");
    let moved = service
        .move_to_category(&stored.id, MealCategory::Dinner)
        .await
        .expect("meal moved");

    assert_eq!(moved.category, MealCategory::Dinner);
    assert_eq!(moved.name, stored.name);
    assert_eq!(moved.calories, stored.calories);
    assert_eq!(moved.time, stored.time);
}

#[tokio::test]
async fn deleting_unknown_meal_is_not_found() {
    let service = service_for("user-1");
    let result = service.delete_meal("missing").await;
    assert!(matches!(result, Err(NutriFlowError::NotFound(_))));
}

#[tokio::test]
async fn quick_fill_from_favorite_then_aggregate() {
    let date = NaiveDate::from_ymd_opt(2024, 3, 10).unwrap();
    let time = NaiveTime::from_hms_opt(8, 0, 0).unwrap();
    let sessions = Arc::new(StubSessionProvider::signed_in("user-1"));
    let meals = MealService::new(Arc::new(MockMealRepository::default()), sessions.clone());
    let favorites =
        FavoriteService::new(Arc::new(MockFavoriteRepository::default()), sessions);

    let favorite = favorites
        .add(NewFavorite {
            name: "Whey Protein (1 scoop)".into(),
            calories: 120,
            protein: 24,
            carbs: 3,
            fat: 2,
        })
        .await
        .expect("favorite stored");

    meals
        .add_from_favorite(&favorite, date, time, MealCategory::Breakfast)
        .await
        .expect("meal stored");

    let logged = meals.all_meals().await.expect("meals listed");
    let totals = totals_for_date(&logged, date);
    assert_eq!(totals.calories, 120);
    assert_eq!(totals.protein, 24);
}

#[tokio::test]
async fn favorite_toggle_adds_then_removes_by_name() {
    let sessions = Arc::new(StubSessionProvider::signed_in("user-1"));
    let favorites =
        FavoriteService::new(Arc::new(MockFavoriteRepository::default()), sessions);

    let template = NewFavorite {
        name: "Banana Prata".into(),
        calories: 98,
        protein: 1,
        carbs: 26,
        fat: 0,
    };

    let added = favorites.toggle(template.clone()).await.expect("toggled on");
    assert!(added.is_some());
    assert!(favorites.is_favorite("Banana Prata").await.expect("checked"));

    let removed = favorites.toggle(template).await.expect("toggled off");
    assert!(removed.is_none());
    assert!(!favorites.is_favorite("Banana Prata").await.expect("checked"));
}
