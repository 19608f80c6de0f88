use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use auth::Authenticator;
use axum::body::Body;
use axum::http::Request;
use axum::http::Response;
use axum::middleware;
use axum::routing::get;
use axum::routing::patch;
use axum::routing::post;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::auth as session;
use super::handlers::genres;
use super::handlers::images;
use super::handlers::movies;
use super::handlers::users;
use super::handlers::watchlist;
use super::middleware::authenticate;
use crate::domain::genre::ports::GenreServicePort;
use crate::domain::movie::ports::MovieServicePort;
use crate::domain::session::ports::SessionServicePort;
use crate::domain::user::ports::UserServicePort;
use crate::domain::watchlist::ports::WatchlistServicePort;

/// Shared state handed to every handler. Services are held behind their ports.
#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<dyn UserServicePort>,
    pub session_service: Arc<dyn SessionServicePort>,
    pub genre_service: Arc<dyn GenreServicePort>,
    pub movie_service: Arc<dyn MovieServicePort>,
    pub watchlist_service: Arc<dyn WatchlistServicePort>,
    pub authenticator: Arc<Authenticator>,
    pub images_directory: PathBuf,
}

pub fn create_router(state: AppState) -> Router {
    let public_routes = Router::new()
        .route("/auth/signIn", post(session::sign_in))
        .route("/auth/signOut", post(session::sign_out))
        .route("/auth/signUp", post(session::sign_up))
        .route("/images/:image_id", get(images::get_image));

    let protected_routes = Router::new()
        .route("/auth/userInfo", get(session::user_info))
        .route("/users", get(users::list_users).post(users::create_user))
        .route(
            "/users/:user_id",
            get(users::get_user)
                .put(users::update_user)
                .delete(users::delete_user),
        )
        .route(
            "/users/:user_id/changePassword",
            patch(users::change_password),
        )
        .route("/genres", get(genres::list_genres).post(genres::create_genre))
        .route(
            "/genres/:genre_id",
            get(genres::get_genre)
                .put(genres::update_genre)
                .delete(genres::delete_genre),
        )
        .route("/movies", get(movies::list_movies).post(movies::create_movie))
        .route(
            "/movies/:movie_id",
            get(movies::get_movie)
                .put(movies::update_movie)
                .delete(movies::delete_movie),
        )
        .route("/movies/:movie_id/rate", patch(movies::rate_movie))
        .route("/movies/:movie_id/setWatched", patch(movies::set_watched))
        .route("/watchlist", get(watchlist::list_watchlist))
        .route(
            "/watchlist/:movie_id",
            post(watchlist::add_to_watchlist).delete(watchlist::remove_from_watchlist),
        )
        .route_layer(middleware::from_fn_with_state(
            state.authenticator.clone(),
            authenticate,
        ));

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version(),
            )
        })
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::info!(
                method = %request.method(),
                uri = %request.uri(),
                "Request started"
            );
        })
        .on_response(
            |response: &Response<Body>, latency: Duration, _span: &Span| {
                tracing::info!(
                    status = response.status().as_u16(),
                    latency_ms = latency.as_millis(),
                    "Request completed"
                );
            },
        );

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .layer(trace_layer)
        .layer(CorsLayer::permissive())
        .with_state(state)
}
