use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;

use super::parse_movie_id;
use super::MovieRequestBody;
use crate::domain::movie::ports::MovieServicePort;
use crate::inbound::http::extract::ApiJson;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::MovieResponseData;
use crate::inbound::http::router::AppState;

pub async fn update_movie(
    State(state): State<AppState>,
    Path(movie_id): Path<String>,
    ApiJson(body): ApiJson<MovieRequestBody>,
) -> Result<ApiSuccess<MovieResponseData>, ApiError> {
    let movie_id = parse_movie_id(&movie_id)?;

    state
        .movie_service
        .update_movie(movie_id, body.try_into_details()?)
        .await
        .map_err(ApiError::from)
        .map(|ref movie| ApiSuccess::new(StatusCode::OK, movie.into()))
}
