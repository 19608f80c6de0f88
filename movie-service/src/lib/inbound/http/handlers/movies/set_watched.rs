use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use serde::Deserialize;

use super::parse_movie_id;
use crate::domain::movie::ports::MovieServicePort;
use crate::inbound::http::extract::ApiQuery;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::router::AppState;

pub async fn set_watched(
    State(state): State<AppState>,
    Path(movie_id): Path<String>,
    ApiQuery(query): ApiQuery<SetWatchedQuery>,
) -> Result<StatusCode, ApiError> {
    let movie_id = parse_movie_id(&movie_id)?;

    state
        .movie_service
        .set_watched(movie_id, query.is_watched)
        .await
        .map_err(ApiError::from)?;

    Ok(StatusCode::OK)
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetWatchedQuery {
    is_watched: bool,
}
