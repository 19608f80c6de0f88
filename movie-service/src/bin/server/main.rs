use std::sync::Arc;

use anyhow::Error;
use auth::Authenticator;
use movie_service::config::Config;
use movie_service::domain::genre::service::GenreService;
use movie_service::domain::movie::service::MovieService;
use movie_service::domain::session::service::SessionService;
use movie_service::domain::user::service::UserService;
use movie_service::domain::watchlist::service::WatchlistService;
use movie_service::inbound::http::router::create_router;
use movie_service::inbound::http::router::AppState;
use movie_service::outbound::repositories::PostgresGenreRepository;
use movie_service::outbound::repositories::PostgresMovieRepository;
use movie_service::outbound::repositories::PostgresUserRepository;
use movie_service::outbound::repositories::PostgresWatchlistRepository;
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "movie_service=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        service = "movie-service",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    let config = Config::load()?;

    tracing::info!(
        http_address = %config.server.http_address(),
        max_connections = config.database.max_connections,
        token_ttl_minutes = config.jwt.expiration_minutes,
        images_directory = %config.images.directory.display(),
        "Configuration loaded"
    );

    let pg_pool = PgPoolOptions::new()
        .max_connections(config.database.max_connections)
        .connect(&config.database.url)
        .await?;
    tracing::info!(
        max_connections = config.database.max_connections,
        database = "postgresql",
        "Database connection pool created"
    );

    sqlx::migrate!("./migrations").run(&pg_pool).await?;
    tracing::info!(database = "postgresql", "Database migrations completed");

    let authenticator = Arc::new(Authenticator::new(
        config.jwt.secret.as_bytes(),
        config.jwt.token_ttl()?,
    )?);

    let user_repository = Arc::new(PostgresUserRepository::new(pg_pool.clone()));
    let genre_repository = Arc::new(PostgresGenreRepository::new(pg_pool.clone()));
    let movie_repository = Arc::new(PostgresMovieRepository::new(pg_pool.clone()));
    let watchlist_repository = Arc::new(PostgresWatchlistRepository::new(pg_pool));

    let state = AppState {
        user_service: Arc::new(UserService::new(Arc::clone(&user_repository))),
        session_service: Arc::new(SessionService::new(
            user_repository,
            Arc::clone(&authenticator),
        )),
        genre_service: Arc::new(GenreService::new(Arc::clone(&genre_repository))),
        movie_service: Arc::new(MovieService::new(
            Arc::clone(&movie_repository),
            genre_repository,
        )),
        watchlist_service: Arc::new(WatchlistService::new(
            watchlist_repository,
            movie_repository,
        )),
        authenticator,
        images_directory: config.images.directory.clone(),
    };

    let http_address = config.server.http_address();
    let listener = tokio::net::TcpListener::bind(&http_address).await?;
    tracing::info!(address = %http_address, "Server Listening");

    axum::serve(listener, create_router(state)).await?;

    Ok(())
}
