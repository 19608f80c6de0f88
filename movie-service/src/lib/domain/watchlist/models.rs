use chrono::DateTime;
use chrono::Utc;

use crate::domain::movie::models::MovieId;
use crate::domain::user::models::UserId;

/// One movie on one user's watchlist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WatchlistEntry {
    pub user_id: UserId,
    pub movie_id: MovieId,
    pub added_at: DateTime<Utc>,
}
