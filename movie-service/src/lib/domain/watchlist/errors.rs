use thiserror::Error;

use crate::domain::movie::errors::MovieError;

/// Errors raised by watchlist operations.
#[derive(Debug, Clone, Error)]
pub enum WatchlistError {
    #[error("Movie not found: {0}")]
    MovieNotFound(String),

    #[error("Database error: {0}")]
    DatabaseError(String),
}

impl From<MovieError> for WatchlistError {
    fn from(err: MovieError) -> Self {
        match err {
            MovieError::NotFound(id) => WatchlistError::MovieNotFound(id),
            other => WatchlistError::DatabaseError(other.to_string()),
        }
    }
}
