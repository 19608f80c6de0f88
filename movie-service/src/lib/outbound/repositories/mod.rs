pub mod genre;
pub mod movie;
pub mod user;
pub mod watchlist;

pub use genre::PostgresGenreRepository;
pub use movie::PostgresMovieRepository;
pub use user::PostgresUserRepository;
pub use watchlist::PostgresWatchlistRepository;
