pub mod create_genre;
pub mod delete_genre;
pub mod get_genre;
pub mod list_genres;
pub mod update_genre;

pub use create_genre::create_genre;
pub use create_genre::GenreRequestBody;
pub use delete_genre::delete_genre;
pub use get_genre::get_genre;
pub use list_genres::list_genres;
pub use update_genre::update_genre;

use crate::domain::genre::errors::GenreError;
use crate::domain::genre::models::GenreId;

fn parse_genre_id(raw: &str) -> Result<GenreId, GenreError> {
    Ok(GenreId::from_string(raw)?)
}
