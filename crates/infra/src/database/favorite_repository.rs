//! Favorite template repository implementation over pooled SQLite

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use nutriflow_core::favorites::ports::FavoriteRepository;
use nutriflow_domain::{FavoriteItem, NewFavorite, NutriFlowError, Result as DomainResult};
use rusqlite::{params, Row};
use tokio::task;
use uuid::Uuid;

use super::manager::{map_sql_error, DbManager};

/// SQLite-backed implementation of `FavoriteRepository`
pub struct SqliteFavoriteRepository {
    db: Arc<DbManager>,
}

impl SqliteFavoriteRepository {
    /// Create a new repository instance
    pub fn new(db: Arc<DbManager>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl FavoriteRepository for SqliteFavoriteRepository {
    async fn add(&self, user_id: &str, favorite: NewFavorite) -> DomainResult<FavoriteItem> {
        let db = Arc::clone(&self.db);
        let user_id = user_id.to_string();

        task::spawn_blocking(move || -> DomainResult<FavoriteItem> {
            let conn = db.get_connection()?;
            let stored = favorite.with_id(Uuid::new_v4().to_string());

            conn.execute(
                "INSERT INTO favorites (id, user_id, name, calories, protein, carbs, fat, created_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
                params![
                    &stored.id,
                    &user_id,
                    &stored.name,
                    stored.calories,
                    stored.protein,
                    stored.carbs,
                    stored.fat,
                    Utc::now().timestamp(),
                ],
            )
            .map_err(map_sql_error)?;

            Ok(stored)
        })
        .await
        .map_err(map_join_error)?
    }

    async fn remove(&self, user_id: &str, id: &str) -> DomainResult<()> {
        let db = Arc::clone(&self.db);
        let user_id = user_id.to_string();
        let id = id.to_string();

        task::spawn_blocking(move || -> DomainResult<()> {
            let conn = db.get_connection()?;
            let affected = conn
                .execute(
                    "DELETE FROM favorites WHERE user_id = ?1 AND id = ?2",
                    params![&user_id, &id],
                )
                .map_err(map_sql_error)?;

            if affected == 0 {
                return Err(NutriFlowError::NotFound(format!("favorite {id}")));
            }
            Ok(())
        })
        .await
        .map_err(map_join_error)?
    }

    async fn list(&self, user_id: &str) -> DomainResult<Vec<FavoriteItem>> {
        let db = Arc::clone(&self.db);
        let user_id = user_id.to_string();

        task::spawn_blocking(move || -> DomainResult<Vec<FavoriteItem>> {
            let conn = db.get_connection()?;

            let mut stmt = conn
                .prepare(
                    "SELECT id, name, calories, protein, carbs, fat
                     FROM favorites WHERE user_id = ?1
                     ORDER BY created_at ASC, rowid ASC",
                )
                .map_err(map_sql_error)?;

            let favorites = stmt
                .query_map(params![&user_id], map_favorite_row)
                .map_err(map_sql_error)?
                .collect::<std::result::Result<Vec<_>, _>>()
                .map_err(map_sql_error)?;

            Ok(favorites)
        })
        .await
        .map_err(map_join_error)?
    }
}

fn map_favorite_row(row: &Row<'_>) -> rusqlite::Result<FavoriteItem> {
    Ok(FavoriteItem {
        id: row.get(0)?,
        name: row.get(1)?,
        calories: row.get(2)?,
        protein: row.get(3)?,
        carbs: row.get(4)?,
        fat: row.get(5)?,
    })
}

fn map_join_error(err: task::JoinError) -> NutriFlowError {
    NutriFlowError::Internal(format!("Task join error: {err}"))
}
