pub mod add_to_watchlist;
pub mod list_watchlist;
pub mod remove_from_watchlist;

pub use add_to_watchlist::add_to_watchlist;
pub use list_watchlist::list_watchlist;
pub use remove_from_watchlist::remove_from_watchlist;
