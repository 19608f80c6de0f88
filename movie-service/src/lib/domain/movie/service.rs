use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::genre::models::GenreId;
use crate::domain::genre::ports::GenreRepository;
use crate::domain::movie::errors::MovieError;
use crate::domain::movie::models::Movie;
use crate::domain::movie::models::MovieDetails;
use crate::domain::movie::models::MovieFilters;
use crate::domain::movie::models::MovieId;
use crate::domain::movie::models::Rating;
use crate::domain::movie::ports::MovieRepository;
use crate::domain::movie::ports::MovieServicePort;

/// Domain service implementation for movie operations.
///
/// Genre links are checked against the genre store before any write.
pub struct MovieService<MR, GR>
where
    MR: MovieRepository,
    GR: GenreRepository,
{
    movies: Arc<MR>,
    genres: Arc<GR>,
}

impl<MR, GR> MovieService<MR, GR>
where
    MR: MovieRepository,
    GR: GenreRepository,
{
    pub fn new(movies: Arc<MR>, genres: Arc<GR>) -> Self {
        Self { movies, genres }
    }

    /// Deduplicate the requested genre IDs and make sure every one exists.
    async fn with_known_genres(&self, mut details: MovieDetails) -> Result<MovieDetails, MovieError> {
        details.genre_ids.sort();
        details.genre_ids.dedup();

        if details.genre_ids.is_empty() {
            return Ok(details);
        }

        let found = self.genres.find_by_ids(&details.genre_ids).await?;
        let missing: Vec<GenreId> = details
            .genre_ids
            .iter()
            .filter(|id| !found.iter().any(|genre| genre.id == **id))
            .copied()
            .collect();

        if !missing.is_empty() {
            return Err(MovieError::UnknownGenres(missing));
        }

        Ok(details)
    }

    async fn fetch(&self, id: MovieId) -> Result<Movie, MovieError> {
        self.movies
            .find_by_id(id)
            .await?
            .ok_or(MovieError::NotFound(id.to_string()))
    }
}

#[async_trait]
impl<MR, GR> MovieServicePort for MovieService<MR, GR>
where
    MR: MovieRepository,
    GR: GenreRepository,
{
    async fn create_movie(&self, details: MovieDetails) -> Result<Movie, MovieError> {
        let details = self.with_known_genres(details).await?;
        let id = self.movies.create(details).await?;

        tracing::info!(movie_id = %id, "Movie created");
        self.fetch(id).await
    }

    async fn get_movie(&self, id: MovieId) -> Result<Movie, MovieError> {
        self.fetch(id).await
    }

    async fn list_movies(&self, filters: MovieFilters) -> Result<Vec<Movie>, MovieError> {
        self.movies.find_all(&filters).await
    }

    async fn update_movie(
        &self,
        id: MovieId,
        details: MovieDetails,
    ) -> Result<Movie, MovieError> {
        let details = self.with_known_genres(details).await?;
        self.movies.update(id, details).await?;

        tracing::info!(movie_id = %id, "Movie updated");
        self.fetch(id).await
    }

    async fn delete_movie(&self, id: MovieId) -> Result<(), MovieError> {
        self.movies.delete(id).await?;
        tracing::info!(movie_id = %id, "Movie deleted");
        Ok(())
    }

    async fn rate_movie(&self, id: MovieId, rating: Rating) -> Result<(), MovieError> {
        self.movies.set_rating(id, rating).await
    }

    async fn set_watched(&self, id: MovieId, is_watched: bool) -> Result<(), MovieError> {
        self.movies.set_watched(id, is_watched).await
    }
}
