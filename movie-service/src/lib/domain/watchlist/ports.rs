use async_trait::async_trait;

use crate::domain::movie::models::Movie;
use crate::domain::movie::models::MovieId;
use crate::domain::user::models::UserId;
use crate::domain::watchlist::errors::WatchlistError;
use crate::domain::watchlist::models::WatchlistEntry;

/// Port for watchlist operations. Every call is scoped to one user.
#[async_trait]
pub trait WatchlistServicePort: Send + Sync + 'static {
    /// Movies on the user's watchlist, oldest addition first.
    async fn list_movies(&self, user_id: UserId) -> Result<Vec<Movie>, WatchlistError>;

    /// Add a movie; adding it twice is not an error.
    ///
    /// # Errors
    /// * `MovieNotFound` - Movie does not exist
    /// * `DatabaseError` - Database operation failed
    async fn add_movie(&self, user_id: UserId, movie_id: MovieId) -> Result<(), WatchlistError>;

    /// Remove a movie; removing an absent entry is not an error.
    ///
    /// # Errors
    /// * `MovieNotFound` - Movie does not exist
    /// * `DatabaseError` - Database operation failed
    async fn remove_movie(&self, user_id: UserId, movie_id: MovieId)
        -> Result<(), WatchlistError>;
}

/// Persistence operations for watchlist entries.
#[async_trait]
pub trait WatchlistRepository: Send + Sync + 'static {
    /// Entries of `user_id` ordered by `added_at`.
    async fn entries(&self, user_id: UserId) -> Result<Vec<WatchlistEntry>, WatchlistError>;

    /// Insert an entry unless it already exists.
    async fn add(&self, user_id: UserId, movie_id: MovieId) -> Result<(), WatchlistError>;

    /// Delete an entry if present.
    async fn remove(&self, user_id: UserId, movie_id: MovieId) -> Result<(), WatchlistError>;
}
