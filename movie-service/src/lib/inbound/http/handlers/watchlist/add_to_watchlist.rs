use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;

use crate::domain::movie::models::MovieId;
use crate::domain::watchlist::ports::WatchlistServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

pub async fn add_to_watchlist(
    State(state): State<AppState>,
    Extension(authenticated): Extension<AuthenticatedUser>,
    Path(movie_id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let movie_id =
        MovieId::from_string(&movie_id).map_err(|e| ApiError::BadRequest(e.to_string()))?;

    state
        .watchlist_service
        .add_movie(authenticated.user_id, movie_id)
        .await
        .map_err(ApiError::from)?;

    Ok(StatusCode::OK)
}
