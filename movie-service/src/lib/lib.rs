pub mod config;
pub mod domain;
pub mod inbound;
pub mod outbound;

// Re-export commonly used types
pub use domain::genre;
pub use domain::movie;
pub use domain::session;
pub use domain::user;
pub use domain::watchlist;
pub use outbound::repositories;
