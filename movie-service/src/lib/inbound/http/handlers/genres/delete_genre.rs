use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;

use super::parse_genre_id;
use crate::domain::genre::ports::GenreServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::router::AppState;

pub async fn delete_genre(
    State(state): State<AppState>,
    Path(genre_id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let genre_id = parse_genre_id(&genre_id)?;

    state
        .genre_service
        .delete_genre(genre_id)
        .await
        .map_err(ApiError::from)?;

    Ok(StatusCode::NO_CONTENT)
}
