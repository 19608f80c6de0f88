use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::genre::errors::GenreError;
use crate::domain::genre::models::Genre;
use crate::domain::genre::models::GenreId;
use crate::domain::genre::models::GenreTitle;
use crate::domain::genre::ports::GenreRepository;
use crate::domain::genre::ports::GenreServicePort;

/// Domain service implementation for genre operations.
pub struct GenreService<GR>
where
    GR: GenreRepository,
{
    repository: Arc<GR>,
}

impl<GR> GenreService<GR>
where
    GR: GenreRepository,
{
    pub fn new(repository: Arc<GR>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<GR> GenreServicePort for GenreService<GR>
where
    GR: GenreRepository,
{
    async fn create_genre(&self, title: GenreTitle) -> Result<Genre, GenreError> {
        let genre = self.repository.create(title).await?;
        tracing::info!(genre_id = %genre.id, title = %genre.title, "Genre created");
        Ok(genre)
    }

    async fn get_genre(&self, id: GenreId) -> Result<Genre, GenreError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(GenreError::NotFound(id.to_string()))
    }

    async fn list_genres(&self) -> Result<Vec<Genre>, GenreError> {
        self.repository.find_all().await
    }

    async fn update_genre(&self, id: GenreId, title: GenreTitle) -> Result<Genre, GenreError> {
        self.repository.update(Genre { id, title }).await
    }

    async fn delete_genre(&self, id: GenreId) -> Result<(), GenreError> {
        self.repository.delete(id).await?;
        tracing::info!(genre_id = %id, "Genre deleted");
        Ok(())
    }
}
