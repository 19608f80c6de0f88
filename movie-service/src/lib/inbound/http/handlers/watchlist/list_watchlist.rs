use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;

use crate::domain::watchlist::ports::WatchlistServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::MovieResponseData;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

pub async fn list_watchlist(
    State(state): State<AppState>,
    Extension(authenticated): Extension<AuthenticatedUser>,
) -> Result<ApiSuccess<Vec<MovieResponseData>>, ApiError> {
    state
        .watchlist_service
        .list_movies(authenticated.user_id)
        .await
        .map_err(ApiError::from)
        .map(|movies| {
            ApiSuccess::new(
                StatusCode::OK,
                movies.iter().map(MovieResponseData::from).collect(),
            )
        })
}
