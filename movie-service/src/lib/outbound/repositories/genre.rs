use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::PgPool;
use sqlx::Row;

use crate::domain::genre::errors::GenreError;
use crate::domain::genre::models::Genre;
use crate::domain::genre::models::GenreId;
use crate::domain::genre::models::GenreTitle;
use crate::domain::genre::ports::GenreRepository;

pub struct PostgresGenreRepository {
    pool: PgPool,
}

impl PostgresGenreRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn row_to_genre(row: PgRow) -> Result<Genre, GenreError> {
        Ok(Genre {
            id: GenreId(row.get("id")),
            title: GenreTitle::new(row.get("title"))?,
        })
    }

    fn map_write_error(e: sqlx::Error, title: &GenreTitle) -> GenreError {
        if let Some(db_err) = e.as_database_error() {
            if db_err.is_unique_violation() && db_err.constraint() == Some("genres_title_key") {
                return GenreError::TitleAlreadyExists(title.as_str().to_string());
            }
        }
        GenreError::DatabaseError(e.to_string())
    }
}

#[async_trait]
impl GenreRepository for PostgresGenreRepository {
    async fn create(&self, title: GenreTitle) -> Result<Genre, GenreError> {
        let id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO genres (title)
            VALUES ($1)
            RETURNING id
            "#,
        )
        .bind(title.as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| Self::map_write_error(e, &title))?;

        Ok(Genre {
            id: GenreId(id),
            title,
        })
    }

    async fn find_by_id(&self, id: GenreId) -> Result<Option<Genre>, GenreError> {
        let row = sqlx::query(
            r#"
            SELECT id, title
            FROM genres
            WHERE id = $1
            "#,
        )
        .bind(id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| GenreError::DatabaseError(e.to_string()))?;

        row.map(Self::row_to_genre).transpose()
    }

    async fn find_all(&self) -> Result<Vec<Genre>, GenreError> {
        let rows = sqlx::query(
            r#"
            SELECT id, title
            FROM genres
            ORDER BY title
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| GenreError::DatabaseError(e.to_string()))?;

        rows.into_iter().map(Self::row_to_genre).collect()
    }

    async fn find_by_ids(&self, ids: &[GenreId]) -> Result<Vec<Genre>, GenreError> {
        let ids: Vec<i64> = ids.iter().map(|id| id.0).collect();

        let rows = sqlx::query(
            r#"
            SELECT id, title
            FROM genres
            WHERE id = ANY($1)
            ORDER BY id
            "#,
        )
        .bind(&ids)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| GenreError::DatabaseError(e.to_string()))?;

        rows.into_iter().map(Self::row_to_genre).collect()
    }

    async fn update(&self, genre: Genre) -> Result<Genre, GenreError> {
        let result = sqlx::query(
            r#"
            UPDATE genres
            SET title = $2
            WHERE id = $1
            "#,
        )
        .bind(genre.id.0)
        .bind(genre.title.as_str())
        .execute(&self.pool)
        .await
        .map_err(|e| Self::map_write_error(e, &genre.title))?;

        if result.rows_affected() == 0 {
            return Err(GenreError::NotFound(genre.id.to_string()));
        }

        Ok(genre)
    }

    async fn delete(&self, id: GenreId) -> Result<(), GenreError> {
        let result = sqlx::query(
            r#"
            DELETE FROM genres
            WHERE id = $1
            "#,
        )
        .bind(id.0)
        .execute(&self.pool)
        .await
        .map_err(|e| GenreError::DatabaseError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(GenreError::NotFound(id.to_string()));
        }

        Ok(())
    }
}
