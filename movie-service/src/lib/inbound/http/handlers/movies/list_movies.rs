use axum::extract::State;
use axum::http::StatusCode;
use serde::Deserialize;

use crate::domain::genre::models::GenreId;
use crate::domain::movie::errors::MovieError;
use crate::domain::movie::models::MovieFilters;
use crate::domain::movie::ports::MovieServicePort;
use crate::inbound::http::extract::ApiQuery;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::MovieResponseData;
use crate::inbound::http::router::AppState;

pub async fn list_movies(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<ListMoviesQuery>,
) -> Result<ApiSuccess<Vec<MovieResponseData>>, ApiError> {
    state
        .movie_service
        .list_movies(query.try_into_filters()?)
        .await
        .map_err(ApiError::from)
        .map(|movies| {
            ApiSuccess::new(
                StatusCode::OK,
                movies.iter().map(MovieResponseData::from).collect(),
            )
        })
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListMoviesQuery {
    search_term: Option<String>,
    genre_id: Option<i64>,
    is_watched: Option<bool>,
    sort: Option<String>,
}

impl ListMoviesQuery {
    fn try_into_filters(self) -> Result<MovieFilters, MovieError> {
        let sort = match self.sort.as_deref() {
            None | Some("") => None,
            Some(key) => Some(key.parse()?),
        };

        Ok(MovieFilters {
            search_term: self
                .search_term
                .map(|term| term.trim().to_string())
                .filter(|term| !term.is_empty()),
            genre_id: self.genre_id.map(GenreId),
            is_watched: self.is_watched,
            sort,
        })
    }
}
