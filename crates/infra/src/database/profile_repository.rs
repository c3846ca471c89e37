//! Profile and goals repository implementation over pooled SQLite
//!
//! The profile row doubles as the goal record: the four goal columns live on
//! the same table, created implicitly at sign-up.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use nutriflow_core::profile::ports::ProfileRepository;
use nutriflow_domain::{
    ActivityLevel, DailyGoals, Gender, GoalType, NutriFlowError, Profile, ProfileUpdate,
    Result as DomainResult,
};
use rusqlite::{params, Row};
use tokio::task;

use super::manager::{map_sql_error, DbManager};
use super::meal_repository::parse_date;

const PROFILE_COLUMNS: &str = "user_id, name, weight, height, birth_date, gender, \
                               activity_level, goal_type, target_weight, avatar_ref, updated_at";

/// SQLite-backed implementation of `ProfileRepository`
pub struct SqliteProfileRepository {
    db: Arc<DbManager>,
}

impl SqliteProfileRepository {
    /// Create a new repository instance
    pub fn new(db: Arc<DbManager>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProfileRepository for SqliteProfileRepository {
    async fn read_goals(&self, user_id: &str) -> DomainResult<Option<DailyGoals>> {
        let db = Arc::clone(&self.db);
        let user_id = user_id.to_string();

        task::spawn_blocking(move || -> DomainResult<Option<DailyGoals>> {
            let conn = db.get_connection()?;

            let result = conn.query_row(
                "SELECT calories_goal, protein_goal, carbs_goal, fat_goal
                 FROM profiles WHERE user_id = ?1",
                params![&user_id],
                map_goals_row,
            );

            match result {
                Ok(goals) => Ok(goals),
                Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
                Err(err) => Err(map_sql_error(err)),
            }
        })
        .await
        .map_err(map_join_error)?
    }

    async fn write_goals(&self, user_id: &str, goals: DailyGoals) -> DomainResult<()> {
        let db = Arc::clone(&self.db);
        let user_id = user_id.to_string();

        task::spawn_blocking(move || -> DomainResult<()> {
            let conn = db.get_connection()?;

            let affected = conn
                .execute(
                    "UPDATE profiles SET calories_goal = ?1, protein_goal = ?2,
                                         carbs_goal = ?3, fat_goal = ?4, updated_at = ?5
                     WHERE user_id = ?6",
                    params![
                        goals.calories,
                        goals.protein,
                        goals.carbs,
                        goals.fat,
                        Utc::now().timestamp(),
                        &user_id,
                    ],
                )
                .map_err(map_sql_error)?;

            if affected == 0 {
                return Err(NutriFlowError::NotFound(format!("profile for user {user_id}")));
            }
            Ok(())
        })
        .await
        .map_err(map_join_error)?
    }

    async fn read_profile(&self, user_id: &str) -> DomainResult<Option<Profile>> {
        let db = Arc::clone(&self.db);
        let user_id = user_id.to_string();

        task::spawn_blocking(move || -> DomainResult<Option<Profile>> {
            let conn = db.get_connection()?;
            read_profile_row(&conn, &user_id)
        })
        .await
        .map_err(map_join_error)?
    }

    async fn write_profile(
        &self,
        user_id: &str,
        update: ProfileUpdate,
    ) -> DomainResult<Profile> {
        let db = Arc::clone(&self.db);
        let user_id = user_id.to_string();

        task::spawn_blocking(move || -> DomainResult<Profile> {
            let conn = db.get_connection()?;

            let current = read_profile_row(&conn, &user_id)?
                .ok_or_else(|| NutriFlowError::NotFound(format!("profile for user {user_id}")))?;
            let updated = update.apply_to(&current, Utc::now().timestamp());

            conn.execute(
                "UPDATE profiles SET name = ?1, weight = ?2, height = ?3, birth_date = ?4,
                                     gender = ?5, activity_level = ?6, goal_type = ?7,
                                     target_weight = ?8, avatar_ref = ?9, updated_at = ?10
                 WHERE user_id = ?11",
                params![
                    &updated.name,
                    updated.weight,
                    updated.height,
                    updated.birth_date.map(|date| date.to_string()),
                    updated.gender.map(gender_to_str),
                    activity_to_str(updated.activity_level),
                    goal_type_to_str(updated.goal_type),
                    updated.target_weight,
                    &updated.avatar_ref,
                    updated.updated_at,
                    &user_id,
                ],
            )
            .map_err(map_sql_error)?;

            Ok(updated)
        })
        .await
        .map_err(map_join_error)?
    }
}

/// Insert the implicit profile row for a freshly registered user.
///
/// Called by the session provider inside the sign-up transaction; the four
/// goal columns are seeded with the defaults and the requested calorie goal.
pub(crate) fn insert_profile(
    conn: &rusqlite::Connection,
    user_id: &str,
    name: &str,
    calorie_goal: u32,
    now: i64,
) -> rusqlite::Result<()> {
    let goals = DailyGoals { calories: calorie_goal, ..DailyGoals::default() };
    conn.execute(
        "INSERT INTO profiles (user_id, name, activity_level, goal_type,
                               calories_goal, protein_goal, carbs_goal, fat_goal, updated_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
        params![
            user_id,
            name,
            activity_to_str(ActivityLevel::default()),
            goal_type_to_str(GoalType::default()),
            goals.calories,
            goals.protein,
            goals.carbs,
            goals.fat,
            now,
        ],
    )?;
    Ok(())
}

// =============================================================================
// Helper Functions
// =============================================================================

fn read_profile_row(
    conn: &rusqlite::Connection,
    user_id: &str,
) -> DomainResult<Option<Profile>> {
    let result = conn.query_row(
        &format!("SELECT {PROFILE_COLUMNS} FROM profiles WHERE user_id = ?1"),
        params![user_id],
        map_profile_row,
    );

    match result {
        Ok(profile) => Ok(Some(profile?)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(err) => Err(map_sql_error(err)),
    }
}

/// Goals are `None` until every column has been written at least once.
fn map_goals_row(row: &Row<'_>) -> rusqlite::Result<Option<DailyGoals>> {
    let calories: Option<u32> = row.get(0)?;
    let protein: Option<u32> = row.get(1)?;
    let carbs: Option<u32> = row.get(2)?;
    let fat: Option<u32> = row.get(3)?;

    if calories.is_none() && protein.is_none() && carbs.is_none() && fat.is_none() {
        return Ok(None);
    }

    let defaults = DailyGoals::default();
    Ok(Some(DailyGoals {
        calories: calories.unwrap_or(defaults.calories),
        protein: protein.unwrap_or(defaults.protein),
        carbs: carbs.unwrap_or(defaults.carbs),
        fat: fat.unwrap_or(defaults.fat),
    }))
}

fn map_profile_row(row: &Row<'_>) -> rusqlite::Result<DomainResult<Profile>> {
    let user_id: String = row.get(0)?;
    let name: String = row.get(1)?;
    let weight: Option<f64> = row.get(2)?;
    let height: Option<f64> = row.get(3)?;
    let birth_date: Option<String> = row.get(4)?;
    let gender: Option<String> = row.get(5)?;
    let activity_level: String = row.get(6)?;
    let goal_type: String = row.get(7)?;
    let target_weight: Option<f64> = row.get(8)?;
    let avatar_ref: Option<String> = row.get(9)?;
    let updated_at: i64 = row.get(10)?;

    Ok(build_profile(ProfileColumns {
        user_id,
        name,
        weight,
        height,
        birth_date,
        gender,
        activity_level,
        goal_type,
        target_weight,
        avatar_ref,
        updated_at,
    }))
}

struct ProfileColumns {
    user_id: String,
    name: String,
    weight: Option<f64>,
    height: Option<f64>,
    birth_date: Option<String>,
    gender: Option<String>,
    activity_level: String,
    goal_type: String,
    target_weight: Option<f64>,
    avatar_ref: Option<String>,
    updated_at: i64,
}

fn build_profile(columns: ProfileColumns) -> DomainResult<Profile> {
    let birth_date = match columns.birth_date {
        Some(value) => Some(parse_date(&value)?),
        None => None,
    };
    let gender = match columns.gender {
        Some(value) => Some(gender_from_str(&value)?),
        None => None,
    };

    Ok(Profile {
        user_id: columns.user_id,
        name: columns.name,
        weight: columns.weight,
        height: columns.height,
        birth_date,
        gender,
        activity_level: activity_from_str(&columns.activity_level)?,
        goal_type: goal_type_from_str(&columns.goal_type)?,
        target_weight: columns.target_weight,
        avatar_ref: columns.avatar_ref,
        updated_at: columns.updated_at,
    })
}

fn gender_to_str(gender: Gender) -> &'static str {
    match gender {
        Gender::Male => "male",
        Gender::Female => "female",
        Gender::Other => "other",
    }
}

fn gender_from_str(value: &str) -> DomainResult<Gender> {
    match value {
        "male" => Ok(Gender::Male),
        "female" => Ok(Gender::Female),
        "other" => Ok(Gender::Other),
        unknown => Err(NutriFlowError::Database(format!("invalid gender column: {unknown}"))),
    }
}

fn activity_to_str(level: ActivityLevel) -> &'static str {
    match level {
        ActivityLevel::Sedentary => "sedentary",
        ActivityLevel::Light => "light",
        ActivityLevel::Moderate => "moderate",
        ActivityLevel::Active => "active",
        ActivityLevel::Athlete => "athlete",
    }
}

fn activity_from_str(value: &str) -> DomainResult<ActivityLevel> {
    match value {
        "sedentary" => Ok(ActivityLevel::Sedentary),
        "light" => Ok(ActivityLevel::Light),
        "moderate" => Ok(ActivityLevel::Moderate),
        "active" => Ok(ActivityLevel::Active),
        "athlete" => Ok(ActivityLevel::Athlete),
        unknown => {
            Err(NutriFlowError::Database(format!("invalid activity_level column: {unknown}")))
        }
    }
}

fn goal_type_to_str(goal: GoalType) -> &'static str {
    match goal {
        GoalType::Lose => "lose",
        GoalType::Maintain => "maintain",
        GoalType::Gain => "gain",
    }
}

fn goal_type_from_str(value: &str) -> DomainResult<GoalType> {
    match value {
        "lose" => Ok(GoalType::Lose),
        "maintain" => Ok(GoalType::Maintain),
        "gain" => Ok(GoalType::Gain),
        unknown => Err(NutriFlowError::Database(format!("invalid goal_type column: {unknown}"))),
    }
}

fn map_join_error(err: task::JoinError) -> NutriFlowError {
    NutriFlowError::Internal(format!("Task join error: {err}"))
}

// =============================================================================
// Tests
// =============================================================================
