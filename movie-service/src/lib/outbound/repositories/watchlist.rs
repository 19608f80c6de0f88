use async_trait::async_trait;
use sqlx::PgPool;
use sqlx::Row;

use crate::domain::movie::models::MovieId;
use crate::domain::user::models::UserId;
use crate::domain::watchlist::errors::WatchlistError;
use crate::domain::watchlist::models::WatchlistEntry;
use crate::domain::watchlist::ports::WatchlistRepository;

pub struct PostgresWatchlistRepository {
    pool: PgPool,
}

impl PostgresWatchlistRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl WatchlistRepository for PostgresWatchlistRepository {
    async fn entries(&self, user_id: UserId) -> Result<Vec<WatchlistEntry>, WatchlistError> {
        let rows = sqlx::query(
            r#"
            SELECT user_id, movie_id, added_at
            FROM watchlist
            WHERE user_id = $1
            ORDER BY added_at, movie_id
            "#,
        )
        .bind(user_id.0)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| WatchlistError::DatabaseError(e.to_string()))?;

        Ok(rows
            .into_iter()
            .map(|r| WatchlistEntry {
                user_id: UserId(r.get("user_id")),
                movie_id: MovieId(r.get("movie_id")),
                added_at: r.get("added_at"),
            })
            .collect())
    }

    async fn add(&self, user_id: UserId, movie_id: MovieId) -> Result<(), WatchlistError> {
        sqlx::query(
            r#"
            INSERT INTO watchlist (user_id, movie_id)
            VALUES ($1, $2)
            ON CONFLICT (user_id, movie_id) DO NOTHING
            "#,
        )
        .bind(user_id.0)
        .bind(movie_id.0)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            if let Some(db_err) = e.as_database_error() {
                // Movie deleted between the existence check and the insert
                if db_err.constraint() == Some("watchlist_movie_id_fkey") {
                    return WatchlistError::MovieNotFound(movie_id.to_string());
                }
            }
            WatchlistError::DatabaseError(e.to_string())
        })?;

        Ok(())
    }

    async fn remove(&self, user_id: UserId, movie_id: MovieId) -> Result<(), WatchlistError> {
        sqlx::query(
            r#"
            DELETE FROM watchlist
            WHERE user_id = $1 AND movie_id = $2
            "#,
        )
        .bind(user_id.0)
        .bind(movie_id.0)
        .execute(&self.pool)
        .await
        .map_err(|e| WatchlistError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}
