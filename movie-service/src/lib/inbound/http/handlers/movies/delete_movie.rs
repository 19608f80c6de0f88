use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;

use super::parse_movie_id;
use crate::domain::movie::ports::MovieServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::router::AppState;

pub async fn delete_movie(
    State(state): State<AppState>,
    Path(movie_id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let movie_id = parse_movie_id(&movie_id)?;

    state
        .movie_service
        .delete_movie(movie_id)
        .await
        .map_err(ApiError::from)?;

    Ok(StatusCode::NO_CONTENT)
}
