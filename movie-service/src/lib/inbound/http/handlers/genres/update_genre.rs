use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;

use super::parse_genre_id;
use super::GenreRequestBody;
use crate::domain::genre::ports::GenreServicePort;
use crate::inbound::http::extract::ApiJson;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::GenreResponseData;
use crate::inbound::http::router::AppState;

pub async fn update_genre(
    State(state): State<AppState>,
    Path(genre_id): Path<String>,
    ApiJson(body): ApiJson<GenreRequestBody>,
) -> Result<ApiSuccess<GenreResponseData>, ApiError> {
    let genre_id = parse_genre_id(&genre_id)?;

    state
        .genre_service
        .update_genre(genre_id, body.try_into_title()?)
        .await
        .map_err(ApiError::from)
        .map(|ref genre| ApiSuccess::new(StatusCode::OK, genre.into()))
}
