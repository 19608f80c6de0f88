use thiserror::Error;

use crate::domain::genre::errors::GenreError;
use crate::domain::genre::models::GenreId;

/// Error for MovieId parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum MovieIdError {
    #[error("Invalid movie ID format: {0}")]
    InvalidFormat(String),

    #[error("Movie ID must be positive, got {0}")]
    NotPositive(i64),
}

/// Error for MovieTitle validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum MovieTitleError {
    #[error("Title must not be empty")]
    Empty,

    #[error("Title too long: maximum {max} characters, got {actual}")]
    TooLong { max: usize, actual: usize },
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Release year must be between {min} and {max}, got {actual}")]
pub struct ReleaseYearError {
    pub min: i32,
    pub max: i32,
    pub actual: i32,
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Rating must be between {min} and {max}, got {actual}")]
pub struct RatingError {
    pub min: i16,
    pub max: i16,
    pub actual: i64,
}

/// Top-level error for all movie-related operations
#[derive(Debug, Clone, Error)]
pub enum MovieError {
    #[error("Invalid movie ID: {0}")]
    InvalidMovieId(#[from] MovieIdError),

    #[error("Invalid movie title: {0}")]
    InvalidTitle(#[from] MovieTitleError),

    #[error("Invalid release year: {0}")]
    InvalidReleaseYear(#[from] ReleaseYearError),

    #[error("Invalid rating: {0}")]
    InvalidRating(#[from] RatingError),

    #[error("Invalid sort key: {0}")]
    InvalidSort(String),

    #[error("Unknown genre IDs: {}", format_ids(.0))]
    UnknownGenres(Vec<GenreId>),

    #[error("Movie not found: {0}")]
    NotFound(String),

    #[error("Database error: {0}")]
    DatabaseError(String),
}

fn format_ids(ids: &[GenreId]) -> String {
    ids.iter()
        .map(|id| id.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

impl From<GenreError> for MovieError {
    fn from(err: GenreError) -> Self {
        MovieError::DatabaseError(err.to_string())
    }
}
