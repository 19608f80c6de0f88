use async_trait::async_trait;

use crate::domain::movie::errors::MovieError;
use crate::domain::movie::models::Movie;
use crate::domain::movie::models::MovieDetails;
use crate::domain::movie::models::MovieFilters;
use crate::domain::movie::models::MovieId;
use crate::domain::movie::models::Rating;

/// Port for movie domain service operations.
#[async_trait]
pub trait MovieServicePort: Send + Sync + 'static {
    /// Create a movie linked to existing genres.
    ///
    /// # Returns
    /// The stored movie with its genres resolved
    ///
    /// # Errors
    /// * `UnknownGenres` - One or more genre IDs do not exist
    /// * `DatabaseError` - Database operation failed
    async fn create_movie(&self, details: MovieDetails) -> Result<Movie, MovieError>;

    /// # Errors
    /// * `NotFound` - Movie does not exist
    async fn get_movie(&self, id: MovieId) -> Result<Movie, MovieError>;

    /// List movies passing `filters`, in the requested order.
    async fn list_movies(&self, filters: MovieFilters) -> Result<Vec<Movie>, MovieError>;

    /// Replace every editable field of a movie, genres included.
    ///
    /// # Errors
    /// * `NotFound` - Movie does not exist
    /// * `UnknownGenres` - One or more genre IDs do not exist
    async fn update_movie(&self, id: MovieId, details: MovieDetails)
        -> Result<Movie, MovieError>;

    /// # Errors
    /// * `NotFound` - Movie does not exist
    async fn delete_movie(&self, id: MovieId) -> Result<(), MovieError>;

    /// # Errors
    /// * `NotFound` - Movie does not exist
    async fn rate_movie(&self, id: MovieId, rating: Rating) -> Result<(), MovieError>;

    /// # Errors
    /// * `NotFound` - Movie does not exist
    async fn set_watched(&self, id: MovieId, is_watched: bool) -> Result<(), MovieError>;
}

/// Persistence operations for movies and their genre links.
#[async_trait]
pub trait MovieRepository: Send + Sync + 'static {
    /// Insert a movie and its genre links atomically.
    async fn create(&self, details: MovieDetails) -> Result<MovieId, MovieError>;

    async fn find_by_id(&self, id: MovieId) -> Result<Option<Movie>, MovieError>;

    /// Retrieve the movies among `ids` that exist, in no particular order.
    async fn find_by_ids(&self, ids: &[MovieId]) -> Result<Vec<Movie>, MovieError>;

    async fn find_all(&self, filters: &MovieFilters) -> Result<Vec<Movie>, MovieError>;

    /// Replace a movie and its genre links atomically.
    ///
    /// # Errors
    /// * `NotFound` - Movie does not exist
    async fn update(&self, id: MovieId, details: MovieDetails) -> Result<(), MovieError>;

    /// # Errors
    /// * `NotFound` - Movie does not exist
    async fn delete(&self, id: MovieId) -> Result<(), MovieError>;

    /// # Errors
    /// * `NotFound` - Movie does not exist
    async fn set_rating(&self, id: MovieId, rating: Rating) -> Result<(), MovieError>;

    /// # Errors
    /// * `NotFound` - Movie does not exist
    async fn set_watched(&self, id: MovieId, is_watched: bool) -> Result<(), MovieError>;
}
