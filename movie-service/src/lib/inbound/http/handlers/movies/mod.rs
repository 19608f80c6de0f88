pub mod create_movie;
pub mod delete_movie;
pub mod get_movie;
pub mod list_movies;
pub mod rate_movie;
pub mod set_watched;
pub mod update_movie;

pub use create_movie::create_movie;
pub use create_movie::MovieRequestBody;
pub use delete_movie::delete_movie;
pub use get_movie::get_movie;
pub use list_movies::list_movies;
pub use rate_movie::rate_movie;
pub use set_watched::set_watched;
pub use update_movie::update_movie;

use crate::domain::movie::errors::MovieError;
use crate::domain::movie::models::MovieId;

fn parse_movie_id(raw: &str) -> Result<MovieId, MovieError> {
    Ok(MovieId::from_string(raw)?)
}
