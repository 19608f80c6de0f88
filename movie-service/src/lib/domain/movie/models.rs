use std::fmt;
use std::str::FromStr;

use crate::domain::genre::models::Genre;
use crate::domain::genre::models::GenreId;
use crate::domain::movie::errors::MovieError;
use crate::domain::movie::errors::MovieIdError;
use crate::domain::movie::errors::MovieTitleError;
use crate::domain::movie::errors::RatingError;
use crate::domain::movie::errors::ReleaseYearError;

/// Movie aggregate with its resolved genres.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Movie {
    pub id: MovieId,
    pub title: MovieTitle,
    pub description: String,
    pub release_year: ReleaseYear,
    pub director: String,
    pub rating: Option<Rating>,
    pub is_watched: bool,
    pub trailer_url: String,
    pub poster_url: String,
    pub genres: Vec<Genre>,
}

/// Movie unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MovieId(pub i64);

impl MovieId {
    /// Parse a movie ID from string.
    ///
    /// # Errors
    /// * `InvalidFormat` - String is not an integer
    /// * `NotPositive` - Identifier is zero or negative
    pub fn from_string(s: &str) -> Result<Self, MovieIdError> {
        let id = s
            .parse::<i64>()
            .map_err(|e| MovieIdError::InvalidFormat(e.to_string()))?;
        if id <= 0 {
            return Err(MovieIdError::NotPositive(id));
        }
        Ok(MovieId(id))
    }
}

impl fmt::Display for MovieId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Movie title; trimmed, 1 to 255 characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MovieTitle(String);

impl MovieTitle {
    const MAX_LENGTH: usize = 255;

    pub fn new(title: String) -> Result<Self, MovieTitleError> {
        let trimmed = title.trim();
        let length = trimmed.chars().count();
        if length == 0 {
            Err(MovieTitleError::Empty)
        } else if length > Self::MAX_LENGTH {
            Err(MovieTitleError::TooLong {
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

impl fmt::Display for MovieTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Year of first release, from the first motion picture onwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct ReleaseYear(i32);

impl ReleaseYear {
    pub const MIN: i32 = 1888;
    pub const MAX: i32 = 2100;

    pub fn new(year: i32) -> Result<Self, ReleaseYearError> {
        if (Self::MIN..=Self::MAX).contains(&year) {
            Ok(Self(year))
        } else {
            Err(ReleaseYearError {
                min: Self::MIN,
                max: Self::MAX,
                actual: year,
            })
        }
    }

    pub fn value(&self) -> i32 {
        self.0
    }
}

/// User rating on a 1 to 5 scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Rating(i16);

impl Rating {
    pub const MIN: i16 = 1;
    pub const MAX: i16 = 5;

    pub fn new(rating: i64) -> Result<Self, RatingError> {
        if (i64::from(Self::MIN)..=i64::from(Self::MAX)).contains(&rating) {
            Ok(Self(rating as i16))
        } else {
            Err(RatingError {
                min: Self::MIN,
                max: Self::MAX,
                actual: rating,
            })
        }
    }

    pub fn value(&self) -> i16 {
        self.0
    }
}

/// Validated movie fields shared by create and full update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MovieDetails {
    pub title: MovieTitle,
    pub description: String,
    pub release_year: ReleaseYear,
    pub director: String,
    pub trailer_url: String,
    pub poster_url: String,
    pub genre_ids: Vec<GenreId>,
}

/// Ordering applied to movie listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MovieSort {
    /// Alphabetical.
    Title,
    /// Newest first.
    ReleaseYear,
    /// Highest rated first, unrated last.
    Rating,
}

impl FromStr for MovieSort {
    type Err = MovieError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "title" => Ok(MovieSort::Title),
            "releaseYear" => Ok(MovieSort::ReleaseYear),
            "rating" => Ok(MovieSort::Rating),
            other => Err(MovieError::InvalidSort(other.to_string())),
        }
    }
}

/// Optional listing filters; all present filters must match.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MovieFilters {
    /// Case-insensitive substring of the title.
    pub search_term: Option<String>,
    pub genre_id: Option<GenreId>,
    pub is_watched: Option<bool>,
    pub sort: Option<MovieSort>,
}

impl MovieFilters {
    /// Whether `movie` passes every filter. Sorting is not considered.
    pub fn matches(&self, movie: &Movie) -> bool {
        let title_matches = self.search_term.as_ref().map_or(true, |term| {
            movie
                .title
                .as_str()
                .to_lowercase()
                .contains(&term.to_lowercase())
        });
        let genre_matches = self
            .genre_id
            .map_or(true, |id| movie.genres.iter().any(|genre| genre.id == id));
        let watched_matches = self
            .is_watched
            .map_or(true, |watched| movie.is_watched == watched);

        title_matches && genre_matches && watched_matches
    }
}
