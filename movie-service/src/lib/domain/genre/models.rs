use std::fmt;

use crate::domain::genre::errors::GenreIdError;
use crate::domain::genre::errors::GenreTitleError;

/// Genre entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Genre {
    pub id: GenreId,
    pub title: GenreTitle,
}

/// Genre unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GenreId(pub i64);

impl GenreId {
    /// Parse a genre ID from string.
    ///
    /// # Errors
    /// * `InvalidFormat` - String is not an integer
    /// * `NotPositive` - Identifier is zero or negative
    pub fn from_string(s: &str) -> Result<Self, GenreIdError> {
        let id = s
            .parse::<i64>()
            .map_err(|e| GenreIdError::InvalidFormat(e.to_string()))?;
        if id <= 0 {
            return Err(GenreIdError::NotPositive(id));
        }
        Ok(GenreId(id))
    }
}

impl fmt::Display for GenreId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Genre title, unique across the catalogue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenreTitle(String);

impl GenreTitle {
    const MAX_LENGTH: usize = 100;

    /// # Errors
    /// * `Empty` - Title is blank after trimming
    /// * `TooLong` - Title longer than 100 characters
    pub fn new(title: String) -> Result<Self, GenreTitleError> {
        let trimmed = title.trim();
        let length = trimmed.chars().count();
        if length == 0 {
            Err(GenreTitleError::Empty)
        } else if length > Self::MAX_LENGTH {
            Err(GenreTitleError::TooLong {
                max: Self::MAX_LENGTH,
                actual: length,
            })
        } else {
            Ok(Self(trimmed.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for GenreTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
