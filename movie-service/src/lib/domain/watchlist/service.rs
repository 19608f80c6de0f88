use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::movie::models::Movie;
use crate::domain::movie::models::MovieId;
use crate::domain::movie::ports::MovieRepository;
use crate::domain::user::models::UserId;
use crate::domain::watchlist::errors::WatchlistError;
use crate::domain::watchlist::ports::WatchlistRepository;
use crate::domain::watchlist::ports::WatchlistServicePort;

/// Domain service implementation for watchlist operations.
pub struct WatchlistService<WR, MR>
where
    WR: WatchlistRepository,
    MR: MovieRepository,
{
    watchlist: Arc<WR>,
    movies: Arc<MR>,
}

impl<WR, MR> WatchlistService<WR, MR>
where
    WR: WatchlistRepository,
    MR: MovieRepository,
{
    pub fn new(watchlist: Arc<WR>, movies: Arc<MR>) -> Self {
        Self { watchlist, movies }
    }

    async fn ensure_movie_exists(&self, movie_id: MovieId) -> Result<(), WatchlistError> {
        match self.movies.find_by_id(movie_id).await? {
            Some(_) => Ok(()),
            None => Err(WatchlistError::MovieNotFound(movie_id.to_string())),
        }
    }
}

#[async_trait]
impl<WR, MR> WatchlistServicePort for WatchlistService<WR, MR>
where
    WR: WatchlistRepository,
    MR: MovieRepository,
{
    async fn list_movies(&self, user_id: UserId) -> Result<Vec<Movie>, WatchlistError> {
        let entries = self.watchlist.entries(user_id).await?;
        if entries.is_empty() {
            return Ok(Vec::new());
        }

        let ids: Vec<MovieId> = entries.iter().map(|entry| entry.movie_id).collect();
        let mut movies = self.movies.find_by_ids(&ids).await?;

        // Keep watchlist order
        let mut ordered = Vec::with_capacity(movies.len());
        for id in ids {
            if let Some(position) = movies.iter().position(|movie| movie.id == id) {
                ordered.push(movies.swap_remove(position));
            }
        }
        Ok(ordered)
    }

    async fn add_movie(&self, user_id: UserId, movie_id: MovieId) -> Result<(), WatchlistError> {
        self.ensure_movie_exists(movie_id).await?;
        self.watchlist.add(user_id, movie_id).await?;

        tracing::info!(user_id = %user_id, movie_id = %movie_id, "Movie added to watchlist");
        Ok(())
    }

    async fn remove_movie(
        &self,
        user_id: UserId,
        movie_id: MovieId,
    ) -> Result<(), WatchlistError> {
        self.ensure_movie_exists(movie_id).await?;
        self.watchlist.remove(user_id, movie_id).await?;

        tracing::info!(user_id = %user_id, movie_id = %movie_id, "Movie removed from watchlist");
        Ok(())
    }
}
