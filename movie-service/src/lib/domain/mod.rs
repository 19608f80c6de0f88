pub mod genre;
pub mod movie;
pub mod session;
pub mod user;
pub mod watchlist;
