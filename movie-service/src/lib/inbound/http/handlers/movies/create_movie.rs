use axum::extract::State;
use axum::http::StatusCode;
use serde::Deserialize;

use crate::domain::genre::models::GenreId;
use crate::domain::movie::errors::MovieError;
use crate::domain::movie::models::MovieDetails;
use crate::domain::movie::models::MovieTitle;
use crate::domain::movie::models::ReleaseYear;
use crate::domain::movie::ports::MovieServicePort;
use crate::inbound::http::extract::ApiJson;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::CreatedResponseData;
use crate::inbound::http::router::AppState;

pub async fn create_movie(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<MovieRequestBody>,
) -> Result<ApiSuccess<CreatedResponseData>, ApiError> {
    state
        .movie_service
        .create_movie(body.try_into_details()?)
        .await
        .map_err(ApiError::from)
        .map(|movie| ApiSuccess::new(StatusCode::OK, CreatedResponseData { id: movie.id.0 }))
}

/// Body shared by movie create and full update. Every field is required.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct MovieRequestBody {
    title: String,
    description: String,
    release_year: i32,
    director: String,
    trailer_url: String,
    poster_url: String,
    genre_ids: Vec<i64>,
}

impl MovieRequestBody {
    pub fn try_into_details(self) -> Result<MovieDetails, MovieError> {
        Ok(MovieDetails {
            title: MovieTitle::new(self.title)?,
            description: self.description,
            release_year: ReleaseYear::new(self.release_year)?,
            director: self.director,
            trailer_url: self.trailer_url,
            poster_url: self.poster_url,
            genre_ids: self.genre_ids.into_iter().map(GenreId).collect(),
        })
    }
}
