use axum::extract::State;
use axum::http::StatusCode;
use serde::Deserialize;

use crate::domain::genre::errors::GenreError;
use crate::domain::genre::models::GenreTitle;
use crate::domain::genre::ports::GenreServicePort;
use crate::inbound::http::extract::ApiJson;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::CreatedResponseData;
use crate::inbound::http::router::AppState;

pub async fn create_genre(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<GenreRequestBody>,
) -> Result<ApiSuccess<CreatedResponseData>, ApiError> {
    state
        .genre_service
        .create_genre(body.try_into_title()?)
        .await
        .map_err(ApiError::from)
        .map(|genre| ApiSuccess::new(StatusCode::OK, CreatedResponseData { id: genre.id.0 }))
}

/// Body shared by genre create and update.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GenreRequestBody {
    title: String,
}

impl GenreRequestBody {
    pub fn try_into_title(self) -> Result<GenreTitle, GenreError> {
        Ok(GenreTitle::new(self.title)?)
    }
}
