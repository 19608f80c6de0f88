use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::PgPool;
use sqlx::Postgres;
use sqlx::QueryBuilder;
use sqlx::Row;
use sqlx::Transaction;

use crate::domain::genre::models::Genre;
use crate::domain::genre::models::GenreId;
use crate::domain::genre::models::GenreTitle;
use crate::domain::movie::errors::MovieError;
use crate::domain::movie::models::Movie;
use crate::domain::movie::models::MovieDetails;
use crate::domain::movie::models::MovieFilters;
use crate::domain::movie::models::MovieId;
use crate::domain::movie::models::MovieSort;
use crate::domain::movie::models::MovieTitle;
use crate::domain::movie::models::Rating;
use crate::domain::movie::models::ReleaseYear;
use crate::domain::movie::ports::MovieRepository;

const SELECT_MOVIES: &str = r#"
    SELECT m.id, m.title, m.description, m.release_year, m.director, m.rating,
           m.is_watched, m.trailer_url, m.poster_url,
           COALESCE(array_agg(g.id ORDER BY g.id) FILTER (WHERE g.id IS NOT NULL), '{}') AS genre_ids,
           COALESCE(array_agg(g.title::TEXT ORDER BY g.id) FILTER (WHERE g.id IS NOT NULL), '{}') AS genre_titles
    FROM movies m
    LEFT JOIN movies_genres mg ON mg.movie_id = m.id
    LEFT JOIN genres g ON g.id = mg.genre_id
"#;

pub struct PostgresMovieRepository {
    pool: PgPool,
}

impl PostgresMovieRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn row_to_movie(row: PgRow) -> Result<Movie, MovieError> {
        let genre_ids: Vec<i64> = row.get("genre_ids");
        let genre_titles: Vec<String> = row.get("genre_titles");
        let genres = genre_ids
            .into_iter()
            .zip(genre_titles)
            .map(|(id, title)| {
                Ok(Genre {
                    id: GenreId(id),
                    title: GenreTitle::new(title)
                        .map_err(|e| MovieError::DatabaseError(e.to_string()))?,
                })
            })
            .collect::<Result<Vec<_>, MovieError>>()?;

        let rating: Option<i16> = row.get("rating");

        Ok(Movie {
            id: MovieId(row.get("id")),
            title: MovieTitle::new(row.get("title"))?,
            description: row.get("description"),
            release_year: ReleaseYear::new(row.get("release_year"))?,
            director: row.get("director"),
            rating: rating.map(|r| Rating::new(i64::from(r))).transpose()?,
            is_watched: row.get("is_watched"),
            trailer_url: row.get("trailer_url"),
            poster_url: row.get("poster_url"),
            genres,
        })
    }

    fn push_order(builder: &mut QueryBuilder<'_, Postgres>, sort: Option<MovieSort>) {
        let order = match sort {
            Some(MovieSort::Title) => " ORDER BY m.title ASC, m.id ASC",
            Some(MovieSort::ReleaseYear) => " ORDER BY m.release_year DESC, m.id ASC",
            Some(MovieSort::Rating) => " ORDER BY m.rating DESC NULLS LAST, m.id ASC",
            None => " ORDER BY m.id ASC",
        };
        builder.push(order);
    }

    async fn link_genres(
        tx: &mut Transaction<'_, Postgres>,
        id: i64,
        genre_ids: &[GenreId],
    ) -> Result<(), MovieError> {
        if genre_ids.is_empty() {
            return Ok(());
        }

        let ids: Vec<i64> = genre_ids.iter().map(|id| id.0).collect();
        sqlx::query(
            r#"
            INSERT INTO movies_genres (movie_id, genre_id)
            SELECT $1, UNNEST($2::BIGINT[])
            "#,
        )
        .bind(id)
        .bind(&ids)
        .execute(&mut **tx)
        .await
        .map_err(|e| {
            if let Some(db_err) = e.as_database_error() {
                if db_err.is_foreign_key_violation() {
                    return MovieError::UnknownGenres(genre_ids.to_vec());
                }
            }
            MovieError::DatabaseError(e.to_string())
        })?;

        Ok(())
    }
}

fn db_error(e: sqlx::Error) -> MovieError {
    MovieError::DatabaseError(e.to_string())
}

/// Escape LIKE wildcards so the search term matches literally.
fn like_pattern(term: &str) -> String {
    let escaped = term
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_");
    format!("%{}%", escaped)
}

#[async_trait]
impl MovieRepository for PostgresMovieRepository {
    async fn create(&self, details: MovieDetails) -> Result<MovieId, MovieError> {
        let mut tx = self.pool.begin().await.map_err(db_error)?;

        let id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO movies (title, description, release_year, director, trailer_url, poster_url)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id
            "#,
        )
        .bind(details.title.as_str())
        .bind(&details.description)
        .bind(details.release_year.value())
        .bind(&details.director)
        .bind(&details.trailer_url)
        .bind(&details.poster_url)
        .fetch_one(&mut *tx)
        .await
        .map_err(db_error)?;

        Self::link_genres(&mut tx, id, &details.genre_ids).await?;

        tx.commit().await.map_err(db_error)?;
        Ok(MovieId(id))
    }

    async fn find_by_id(&self, id: MovieId) -> Result<Option<Movie>, MovieError> {
        let mut builder = QueryBuilder::<Postgres>::new(SELECT_MOVIES);
        builder.push(" WHERE m.id = ").push_bind(id.0);
        builder.push(" GROUP BY m.id");

        let row = builder
            .build()
            .fetch_optional(&self.pool)
            .await
            .map_err(db_error)?;

        row.map(Self::row_to_movie).transpose()
    }

    async fn find_by_ids(&self, ids: &[MovieId]) -> Result<Vec<Movie>, MovieError> {
        let ids: Vec<i64> = ids.iter().map(|id| id.0).collect();

        let mut builder = QueryBuilder::<Postgres>::new(SELECT_MOVIES);
        builder.push(" WHERE m.id = ANY(").push_bind(ids).push(")");
        builder.push(" GROUP BY m.id");

        let rows = builder
            .build()
            .fetch_all(&self.pool)
            .await
            .map_err(db_error)?;

        rows.into_iter().map(Self::row_to_movie).collect()
    }

    async fn find_all(&self, filters: &MovieFilters) -> Result<Vec<Movie>, MovieError> {
        let mut builder = QueryBuilder::<Postgres>::new(SELECT_MOVIES);
        builder.push(" WHERE TRUE");

        if let Some(term) = &filters.search_term {
            builder
                .push(" AND m.title ILIKE ")
                .push_bind(like_pattern(term))
                .push(r" ESCAPE '\'");
        }
        if let Some(genre_id) = filters.genre_id {
            builder
                .push(
                    " AND EXISTS (SELECT 1 FROM movies_genres f WHERE f.movie_id = m.id AND f.genre_id = ",
                )
                .push_bind(genre_id.0)
                .push(")");
        }
        if let Some(is_watched) = filters.is_watched {
            builder.push(" AND m.is_watched = ").push_bind(is_watched);
        }

        builder.push(" GROUP BY m.id");
        Self::push_order(&mut builder, filters.sort);

        let rows = builder
            .build()
            .fetch_all(&self.pool)
            .await
            .map_err(db_error)?;

        rows.into_iter().map(Self::row_to_movie).collect()
    }

    async fn update(&self, id: MovieId, details: MovieDetails) -> Result<(), MovieError> {
        let mut tx = self.pool.begin().await.map_err(db_error)?;

        let result = sqlx::query(
            r#"
            UPDATE movies
            SET title = $2, description = $3, release_year = $4, director = $5,
                trailer_url = $6, poster_url = $7
            WHERE id = $1
            "#,
        )
        .bind(id.0)
        .bind(details.title.as_str())
        .bind(&details.description)
        .bind(details.release_year.value())
        .bind(&details.director)
        .bind(&details.trailer_url)
        .bind(&details.poster_url)
        .execute(&mut *tx)
        .await
        .map_err(db_error)?;

        if result.rows_affected() == 0 {
            return Err(MovieError::NotFound(id.to_string()));
        }

        sqlx::query("DELETE FROM movies_genres WHERE movie_id = $1")
            .bind(id.0)
            .execute(&mut *tx)
            .await
            .map_err(db_error)?;

        Self::link_genres(&mut tx, id.0, &details.genre_ids).await?;

        tx.commit().await.map_err(db_error)?;
        Ok(())
    }

    async fn delete(&self, id: MovieId) -> Result<(), MovieError> {
        let result = sqlx::query(
            r#"
            DELETE FROM movies
            WHERE id = $1
            "#,
        )
        .bind(id.0)
        .execute(&self.pool)
        .await
        .map_err(db_error)?;

        if result.rows_affected() == 0 {
            return Err(MovieError::NotFound(id.to_string()));
        }

        Ok(())
    }

    async fn set_rating(&self, id: MovieId, rating: Rating) -> Result<(), MovieError> {
        let result = sqlx::query("UPDATE movies SET rating = $2 WHERE id = $1")
            .bind(id.0)
            .bind(rating.value())
            .execute(&self.pool)
            .await
            .map_err(db_error)?;

        if result.rows_affected() == 0 {
            return Err(MovieError::NotFound(id.to_string()));
        }

        Ok(())
    }

    async fn set_watched(&self, id: MovieId, is_watched: bool) -> Result<(), MovieError> {
        let result = sqlx::query("UPDATE movies SET is_watched = $2 WHERE id = $1")
            .bind(id.0)
            .bind(is_watched)
            .execute(&self.pool)
            .await
            .map_err(db_error)?;

        if result.rows_affected() == 0 {
            return Err(MovieError::NotFound(id.to_string()));
        }

        Ok(())
    }
}
