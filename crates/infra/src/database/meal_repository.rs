//! Meal repository implementation over pooled SQLite

use std::str::FromStr;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{NaiveDate, NaiveTime, Utc};
use nutriflow_core::meals::ports::MealRepository;
use nutriflow_domain::{
    Meal, MealCategory, MealUpdate, NewMeal, NutriFlowError, Result as DomainResult,
};
use rusqlite::{params, Row};
use tokio::task;
use uuid::Uuid;

use super::manager::{map_sql_error, DbManager};

const MEAL_COLUMNS: &str =
    "id, name, calories, protein, carbs, fat, time, category, date, image_ref";

/// SQLite-backed implementation of `MealRepository`
pub struct SqliteMealRepository {
    db: Arc<DbManager>,
}

impl SqliteMealRepository {
    /// Create a new repository instance
    pub fn new(db: Arc<DbManager>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl MealRepository for SqliteMealRepository {
    async fn create(&self, user_id: &str, meal: NewMeal) -> DomainResult<Meal> {
        let db = Arc::clone(&self.db);
        let user_id = user_id.to_string();

        task::spawn_blocking(move || -> DomainResult<Meal> {
            let conn = db.get_connection()?;
            let stored = meal.with_id(Uuid::new_v4().to_string());

            conn.execute(
                "INSERT INTO meals (id, user_id, name, calories, protein, carbs, fat,
                                    time, category, date, image_ref, created_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12)",
                params![
                    &stored.id,
                    &user_id,
                    &stored.name,
                    stored.calories,
                    stored.protein,
                    stored.carbs,
                    stored.fat,
                    format_time(stored.time),
                    stored.category.as_str(),
                    stored.date.to_string(),
                    &stored.image_ref,
                    Utc::now().timestamp(),
                ],
            )
            .map_err(map_sql_error)?;

            Ok(stored)
        })
        .await
        .map_err(map_join_error)?
    }

    async fn list(&self, user_id: &str, date: Option<NaiveDate>) -> DomainResult<Vec<Meal>> {
        let db = Arc::clone(&self.db);
        let user_id = user_id.to_string();

        task::spawn_blocking(move || -> DomainResult<Vec<Meal>> {
            let conn = db.get_connection()?;

            let collect = |mut stmt: rusqlite::Statement<'_>,
                           bind: &[&dyn rusqlite::ToSql]|
             -> DomainResult<Vec<Meal>> {
                let rows = stmt
                    .query_map(bind, map_meal_row)
                    .map_err(map_sql_error)?
                    .collect::<std::result::Result<Vec<_>, _>>()
                    .map_err(map_sql_error)?;
                rows.into_iter().collect()
            };

            match date {
                Some(date) => {
                    let stmt = conn
                        .prepare(&format!(
                            "SELECT {MEAL_COLUMNS} FROM meals
                             WHERE user_id = ?1 AND date = ?2
                             ORDER BY created_at ASC, rowid ASC"
                        ))
                        .map_err(map_sql_error)?;
                    collect(stmt, &[&user_id, &date.to_string()])
                }
                None => {
                    let stmt = conn
                        .prepare(&format!(
                            "SELECT {MEAL_COLUMNS} FROM meals
                             WHERE user_id = ?1
                             ORDER BY created_at ASC, rowid ASC"
                        ))
                        .map_err(map_sql_error)?;
                    collect(stmt, &[&user_id])
                }
            }
        })
        .await
        .map_err(map_join_error)?
    }

    async fn update(&self, user_id: &str, id: &str, update: MealUpdate) -> DomainResult<Meal> {
        let db = Arc::clone(&self.db);
        let user_id = user_id.to_string();
        let id = id.to_string();

        task::spawn_blocking(move || -> DomainResult<Meal> {
            let conn = db.get_connection()?;

            let current = conn
                .query_row(
                    &format!("SELECT {MEAL_COLUMNS} FROM meals WHERE user_id = ?1 AND id = ?2"),
                    params![&user_id, &id],
                    map_meal_row,
                )
                .map_err(|err| not_found_or(err, &id))??;

            let updated = update.apply_to(&current);

            conn.execute(
                "UPDATE meals SET name = ?1, calories = ?2, protein = ?3, carbs = ?4,
                                  fat = ?5, time = ?6, category = ?7, date = ?8, image_ref = ?9
                 WHERE user_id = ?10 AND id = ?11",
                params![
                    &updated.name,
                    updated.calories,
                    updated.protein,
                    updated.carbs,
                    updated.fat,
                    format_time(updated.time),
                    updated.category.as_str(),
                    updated.date.to_string(),
                    &updated.image_ref,
                    &user_id,
                    &id,
                ],
            )
            .map_err(map_sql_error)?;

            Ok(updated)
        })
        .await
        .map_err(map_join_error)?
    }

    async fn delete(&self, user_id: &str, id: &str) -> DomainResult<()> {
        let db = Arc::clone(&self.db);
        let user_id = user_id.to_string();
        let id = id.to_string();

        task::spawn_blocking(move || -> DomainResult<()> {
            let conn = db.get_connection()?;
            let affected = conn
                .execute("DELETE FROM meals WHERE user_id = ?1 AND id = ?2", params![
                    &user_id, &id
                ])
                .map_err(map_sql_error)?;

            if affected == 0 {
                return Err(NutriFlowError::NotFound(format!("meal {id}")));
            }
            Ok(())
        })
        .await
        .map_err(map_join_error)?
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Map a row to a Meal; date/time/category come back as text columns.
fn map_meal_row(row: &Row<'_>) -> rusqlite::Result<DomainResult<Meal>> {
    let id: String = row.get(0)?;
    let name: String = row.get(1)?;
    let calories: u32 = row.get(2)?;
    let protein: u32 = row.get(3)?;
    let carbs: u32 = row.get(4)?;
    let fat: u32 = row.get(5)?;
    let time: String = row.get(6)?;
    let category: String = row.get(7)?;
    let date: String = row.get(8)?;
    let image_ref: Option<String> = row.get(9)?;

    Ok(build_meal(id, name, calories, protein, carbs, fat, time, category, date, image_ref))
}

#[allow(clippy::too_many_arguments)]
fn build_meal(
    id: String,
    name: String,
    calories: u32,
    protein: u32,
    carbs: u32,
    fat: u32,
    time: String,
    category: String,
    date: String,
    image_ref: Option<String>,
) -> DomainResult<Meal> {
    Ok(Meal {
        id,
        name,
        calories,
        protein,
        carbs,
        fat,
        time: parse_time(&time)?,
        category: MealCategory::from_str(&category)?,
        date: parse_date(&date)?,
        image_ref,
    })
}

pub(crate) fn format_time(time: NaiveTime) -> String {
    time.format("%H:%M").to_string()
}

pub(crate) fn parse_time(value: &str) -> DomainResult<NaiveTime> {
    NaiveTime::parse_from_str(value, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(value, "%H:%M:%S"))
        .map_err(|err| NutriFlowError::Database(format!("invalid time column '{value}': {err}")))
}

pub(crate) fn parse_date(value: &str) -> DomainResult<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|err| NutriFlowError::Database(format!("invalid date column '{value}': {err}")))
}

fn not_found_or(err: rusqlite::Error, id: &str) -> NutriFlowError {
    match err {
        rusqlite::Error::QueryReturnedNoRows => NutriFlowError::NotFound(format!("meal {id}")),
        other => map_sql_error(other),
    }
}

fn map_join_error(err: task::JoinError) -> NutriFlowError {
    NutriFlowError::Internal(format!("Task join error: {err}"))
}

// =============================================================================
// Tests
// =============================================================================
