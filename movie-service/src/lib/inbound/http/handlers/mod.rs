pub mod auth;
pub mod genres;
pub mod images;
pub mod movies;
pub mod users;
pub mod watchlist;

use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use serde::Serialize;

use crate::domain::genre::errors::GenreError;
use crate::domain::genre::models::Genre;
use crate::domain::movie::errors::MovieError;
use crate::domain::movie::models::Movie;
use crate::domain::session::errors::SessionError;
use crate::domain::user::models::User;
use crate::domain::watchlist::errors::WatchlistError;
use crate::user::errors::UserError;

const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

/// Successful JSON response with an explicit status.
#[derive(Debug, Clone)]
pub struct ApiSuccess<T: Serialize>(StatusCode, Json<T>);

impl<T: Serialize> ApiSuccess<T> {
    pub fn new(status: StatusCode, data: T) -> Self {
        ApiSuccess(status, Json(data))
    }
}

impl<T: Serialize> IntoResponse for ApiSuccess<T> {
    fn into_response(self) -> Response {
        (self.0, self.1).into_response()
    }
}

/// Every failure answered by the HTTP layer.
///
/// Rendered as `{"error": message}`. Internal errors keep their detail for
/// the log and answer a fixed message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    BadRequest(String),
    Unauthorized(String),
    NotFound(String),
    Conflict(String),
    InternalServerError(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::Conflict(msg) => (StatusCode::CONFLICT, msg),
            ApiError::InternalServerError(detail) => {
                tracing::error!(error = %detail, "Request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    INTERNAL_ERROR_MESSAGE.to_string(),
                )
            }
        };

        let body = Json(serde_json::json!({
            "error": message
        }));

        (status, body).into_response()
    }
}

impl From<UserError> for ApiError {
    fn from(err: UserError) -> Self {
        match err {
            UserError::NotFound(_) => ApiError::NotFound(err.to_string()),
            UserError::EmailAlreadyExists(_) => ApiError::Conflict(err.to_string()),
            UserError::InvalidUserId(_)
            | UserError::InvalidName(_)
            | UserError::InvalidEmail(_)
            | UserError::InvalidPassword(_) => ApiError::BadRequest(err.to_string()),
            UserError::PasswordHashing(_) | UserError::DatabaseError(_) => {
                ApiError::InternalServerError(err.to_string())
            }
        }
    }
}

impl From<SessionError> for ApiError {
    fn from(err: SessionError) -> Self {
        match err {
            SessionError::InvalidCredentials => ApiError::Unauthorized(err.to_string()),
            SessionError::IdentityNotFound(_)
            | SessionError::TokenIssuance(_)
            | SessionError::PasswordVerification(_)
            | SessionError::DatabaseError(_) => ApiError::InternalServerError(err.to_string()),
        }
    }
}

impl From<GenreError> for ApiError {
    fn from(err: GenreError) -> Self {
        match err {
            GenreError::NotFound(_) => ApiError::NotFound(err.to_string()),
            GenreError::TitleAlreadyExists(_) => ApiError::Conflict(err.to_string()),
            GenreError::InvalidGenreId(_) | GenreError::InvalidTitle(_) => {
                ApiError::BadRequest(err.to_string())
            }
            GenreError::DatabaseError(_) => ApiError::InternalServerError(err.to_string()),
        }
    }
}

impl From<MovieError> for ApiError {
    fn from(err: MovieError) -> Self {
        match err {
            MovieError::NotFound(_) => ApiError::NotFound(err.to_string()),
            MovieError::InvalidMovieId(_)
            | MovieError::InvalidTitle(_)
            | MovieError::InvalidReleaseYear(_)
            | MovieError::InvalidRating(_)
            | MovieError::InvalidSort(_)
            | MovieError::UnknownGenres(_) => ApiError::BadRequest(err.to_string()),
            MovieError::DatabaseError(_) => ApiError::InternalServerError(err.to_string()),
        }
    }
}

impl From<WatchlistError> for ApiError {
    fn from(err: WatchlistError) -> Self {
        match err {
            WatchlistError::MovieNotFound(_) => ApiError::NotFound(err.to_string()),
            WatchlistError::DatabaseError(_) => ApiError::InternalServerError(err.to_string()),
        }
    }
}

/// Identifier assigned to a newly created resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreatedResponseData {
    pub id: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserResponseData {
    pub id: i64,
    pub name: String,
    pub email: String,
}

impl From<&User> for UserResponseData {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.0,
            name: user.name.as_str().to_string(),
            email: user.email.as_str().to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenreResponseData {
    pub id: i64,
    pub title: String,
}

impl From<&Genre> for GenreResponseData {
    fn from(genre: &Genre) -> Self {
        Self {
            id: genre.id.0,
            title: genre.title.as_str().to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MovieResponseData {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub release_year: i32,
    pub director: String,
    pub rating: Option<i16>,
    pub is_watched: bool,
    pub trailer_url: String,
    pub poster_url: String,
    pub genres: Vec<GenreResponseData>,
}

impl From<&Movie> for MovieResponseData {
    fn from(movie: &Movie) -> Self {
        Self {
            id: movie.id.0,
            title: movie.title.as_str().to_string(),
            description: movie.description.clone(),
            release_year: movie.release_year.value(),
            director: movie.director.clone(),
            rating: movie.rating.map(|rating| rating.value()),
            is_watched: movie.is_watched,
            trailer_url: movie.trailer_url.clone(),
            poster_url: movie.poster_url.clone(),
            genres: movie.genres.iter().map(GenreResponseData::from).collect(),
        }
    }
}
