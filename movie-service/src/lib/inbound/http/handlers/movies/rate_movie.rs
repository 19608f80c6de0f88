use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use serde::Deserialize;

use super::parse_movie_id;
use crate::domain::movie::errors::MovieError;
use crate::domain::movie::models::Rating;
use crate::domain::movie::ports::MovieServicePort;
use crate::inbound::http::extract::ApiQuery;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::router::AppState;

pub async fn rate_movie(
    State(state): State<AppState>,
    Path(movie_id): Path<String>,
    ApiQuery(query): ApiQuery<RateMovieQuery>,
) -> Result<StatusCode, ApiError> {
    let movie_id = parse_movie_id(&movie_id)?;
    let rating = Rating::new(query.rating).map_err(MovieError::from)?;

    state
        .movie_service
        .rate_movie(movie_id, rating)
        .await
        .map_err(ApiError::from)?;

    Ok(StatusCode::OK)
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RateMovieQuery {
    rating: i64,
}
