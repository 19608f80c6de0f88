use thiserror::Error;

/// Error for GenreId parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GenreIdError {
    #[error("Invalid genre ID format: {0}")]
    InvalidFormat(String),

    #[error("Genre ID must be positive, got {0}")]
    NotPositive(i64),
}

/// Error for GenreTitle validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GenreTitleError {
    #[error("Title must not be empty")]
    Empty,

    #[error("Title too long: maximum {max} characters, got {actual}")]
    TooLong { max: usize, actual: usize },
}

/// Top-level error for all genre-related operations
#[derive(Debug, Clone, Error)]
pub enum GenreError {
    #[error("Invalid genre ID: {0}")]
    InvalidGenreId(#[from] GenreIdError),

    #[error("Invalid genre title: {0}")]
    InvalidTitle(#[from] GenreTitleError),

    #[error("Genre not found: {0}")]
    NotFound(String),

    #[error("Genre title already exists: {0}")]
    TitleAlreadyExists(String),

    #[error("Database error: {0}")]
    DatabaseError(String),
}
