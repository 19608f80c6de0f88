use async_trait::async_trait;

use crate::domain::genre::errors::GenreError;
use crate::domain::genre::models::Genre;
use crate::domain::genre::models::GenreId;
use crate::domain::genre::models::GenreTitle;

/// Port for genre domain service operations.
#[async_trait]
pub trait GenreServicePort: Send + Sync + 'static {
    /// Create a genre.
    ///
    /// # Errors
    /// * `TitleAlreadyExists` - Another genre has this title
    /// * `DatabaseError` - Database operation failed
    async fn create_genre(&self, title: GenreTitle) -> Result<Genre, GenreError>;

    /// # Errors
    /// * `NotFound` - Genre does not exist
    /// * `DatabaseError` - Database operation failed
    async fn get_genre(&self, id: GenreId) -> Result<Genre, GenreError>;

    /// List every genre ordered by title.
    async fn list_genres(&self) -> Result<Vec<Genre>, GenreError>;

    /// Rename a genre.
    ///
    /// # Errors
    /// * `NotFound` - Genre does not exist
    /// * `TitleAlreadyExists` - Another genre has this title
    /// * `DatabaseError` - Database operation failed
    async fn update_genre(&self, id: GenreId, title: GenreTitle) -> Result<Genre, GenreError>;

    /// Delete a genre; movie associations are dropped with it.
    ///
    /// # Errors
    /// * `NotFound` - Genre does not exist
    /// * `DatabaseError` - Database operation failed
    async fn delete_genre(&self, id: GenreId) -> Result<(), GenreError>;
}

/// Persistence operations for genres.
#[async_trait]
pub trait GenreRepository: Send + Sync + 'static {
    /// Insert a genre and return it with its assigned identifier.
    ///
    /// # Errors
    /// * `TitleAlreadyExists` - Another genre has this title
    /// * `DatabaseError` - Database operation failed
    async fn create(&self, title: GenreTitle) -> Result<Genre, GenreError>;

    async fn find_by_id(&self, id: GenreId) -> Result<Option<Genre>, GenreError>;

    async fn find_all(&self) -> Result<Vec<Genre>, GenreError>;

    /// Retrieve the genres among `ids` that exist. Missing IDs are skipped.
    async fn find_by_ids(&self, ids: &[GenreId]) -> Result<Vec<Genre>, GenreError>;

    /// # Errors
    /// * `NotFound` - Genre does not exist
    /// * `TitleAlreadyExists` - Another genre has this title
    async fn update(&self, genre: Genre) -> Result<Genre, GenreError>;

    /// # Errors
    /// * `NotFound` - Genre does not exist
    async fn delete(&self, id: GenreId) -> Result<(), GenreError>;
}
