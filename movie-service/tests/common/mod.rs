#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::Arc;
use std::sync::Mutex;

use async_trait::async_trait;
use auth::Authenticator;
use chrono::Duration;
use chrono::Utc;
use movie_service::domain::genre::errors::GenreError;
use movie_service::domain::genre::models::Genre;
use movie_service::domain::genre::models::GenreId;
use movie_service::domain::genre::models::GenreTitle;
use movie_service::domain::genre::ports::GenreRepository;
use movie_service::domain::genre::service::GenreService;
use movie_service::domain::movie::errors::MovieError;
use movie_service::domain::movie::models::Movie;
use movie_service::domain::movie::models::MovieDetails;
use movie_service::domain::movie::models::MovieFilters;
use movie_service::domain::movie::models::MovieId;
use movie_service::domain::movie::models::MovieSort;
use movie_service::domain::movie::models::Rating;
use movie_service::domain::movie::ports::MovieRepository;
use movie_service::domain::movie::service::MovieService;
use movie_service::domain::session::service::SessionService;
use movie_service::domain::user::errors::UserError;
use movie_service::domain::user::models::NewUser;
use movie_service::domain::user::models::User;
use movie_service::domain::user::models::UserId;
use movie_service::domain::user::ports::UserRepository;
use movie_service::domain::user::service::UserService;
use movie_service::domain::watchlist::errors::WatchlistError;
use movie_service::domain::watchlist::models::WatchlistEntry;
use movie_service::domain::watchlist::ports::WatchlistRepository;
use movie_service::domain::watchlist::service::WatchlistService;
use movie_service::inbound::http::router::create_router;
use movie_service::inbound::http::router::AppState;
use serde_json::json;

pub const JWT_SECRET: &[u8] = b"test-secret-key-for-jwt-signing-at-least-32-bytes";

/// Test application that spawns a real server over in-memory storage
pub struct TestApp {
    pub address: String,
    pub api_client: reqwest::Client,
    pub authenticator: Arc<Authenticator>,
    pub store: Arc<InMemoryStore>,
    pub images_directory: PathBuf,
}

impl TestApp {
    /// Spawn the application in a background task and return TestApp
    pub async fn spawn() -> Self {
        // Use random port (0 = OS assigns)
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind random port");
        let port = listener.local_addr().unwrap().port();
        let address = format!("http://127.0.0.1:{}", port);

        let images_directory =
            std::env::temp_dir().join(format!("movie_service_images_{}", uuid::Uuid::new_v4()));
        std::fs::create_dir_all(&images_directory).expect("Failed to create images directory");

        let store = Arc::new(InMemoryStore::default());
        let authenticator = Arc::new(
            Authenticator::new(JWT_SECRET, Duration::minutes(60))
                .expect("Failed to create authenticator"),
        );

        let state = AppState {
            user_service: Arc::new(UserService::new(Arc::clone(&store))),
            session_service: Arc::new(SessionService::new(
                Arc::clone(&store),
                Arc::clone(&authenticator),
            )),
            genre_service: Arc::new(GenreService::new(Arc::clone(&store))),
            movie_service: Arc::new(MovieService::new(Arc::clone(&store), Arc::clone(&store))),
            watchlist_service: Arc::new(WatchlistService::new(
                Arc::clone(&store),
                Arc::clone(&store),
            )),
            authenticator: Arc::clone(&authenticator),
            images_directory: images_directory.clone(),
        };

        let router = create_router(state);

        // Spawn server in background
        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("Server error");
        });

        Self {
            address,
            api_client: reqwest::Client::new(),
            authenticator,
            store,
            images_directory,
        }
    }

    pub fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.get(format!("{}{}", self.address, path))
    }

    pub fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.post(format!("{}{}", self.address, path))
    }

    pub fn get_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.get(path).bearer_auth(token)
    }

    pub fn post_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.post(path).bearer_auth(token)
    }

    pub fn put_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.api_client
            .put(format!("{}{}", self.address, path))
            .bearer_auth(token)
    }

    pub fn patch_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.api_client
            .patch(format!("{}{}", self.address, path))
            .bearer_auth(token)
    }

    pub fn delete_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.api_client
            .delete(format!("{}{}", self.address, path))
            .bearer_auth(token)
    }

    /// Register through the public endpoint and return the new user id
    pub async fn sign_up(&self, name: &str, email: &str, password: &str) -> i64 {
        let response = self
            .post("/auth/signUp")
            .json(&json!({ "name": name, "email": email, "password": password }))
            .send()
            .await
            .expect("Failed to execute request");
        assert_eq!(response.status(), reqwest::StatusCode::OK);

        let body: serde_json::Value = response.json().await.expect("Failed to parse response");
        body["id"].as_i64().expect("id is an integer")
    }

    /// Sign in and return the bearer token
    pub async fn sign_in(&self, email: &str, password: &str) -> String {
        let response = self
            .post("/auth/signIn")
            .json(&json!({ "email": email, "password": password }))
            .send()
            .await
            .expect("Failed to execute request");
        assert_eq!(response.status(), reqwest::StatusCode::OK);

        let body: serde_json::Value = response.json().await.expect("Failed to parse response");
        body["token"].as_str().expect("token is a string").to_string()
    }

    /// Register a fresh user and return `(id, token)`
    pub async fn signed_in_user(&self) -> (i64, String) {
        let email = format!("user-{}@example.com", uuid::Uuid::new_v4());
        let id = self.sign_up("Test User", &email, "pass_word!").await;
        let token = self.sign_in(&email, "pass_word!").await;
        (id, token)
    }

    pub async fn create_genre(&self, token: &str, title: &str) -> i64 {
        let response = self
            .post_authenticated("/genres", token)
            .json(&json!({ "title": title }))
            .send()
            .await
            .expect("Failed to execute request");
        assert_eq!(response.status(), reqwest::StatusCode::OK);

        let body: serde_json::Value = response.json().await.expect("Failed to parse response");
        body["id"].as_i64().expect("id is an integer")
    }

    pub async fn create_movie(&self, token: &str, body: serde_json::Value) -> i64 {
        let response = self
            .post_authenticated("/movies", token)
            .json(&body)
            .send()
            .await
            .expect("Failed to execute request");
        assert_eq!(response.status(), reqwest::StatusCode::OK);

        let body: serde_json::Value = response.json().await.expect("Failed to parse response");
        body["id"].as_i64().expect("id is an integer")
    }
}

impl Drop for TestApp {
    fn drop(&mut self) {
        let _ = std::fs::remove_dir_all(&self.images_directory);
    }
}

/// Complete movie body with the given title, year and genres
pub fn movie_body(title: &str, release_year: i32, genre_ids: &[i64]) -> serde_json::Value {
    json!({
        "title": title,
        "description": format!("About {}", title),
        "releaseYear": release_year,
        "director": "Some Director",
        "trailerUrl": "https://example.com/trailer",
        "posterUrl": "https://example.com/poster.jpg",
        "genreIds": genre_ids,
    })
}

#[derive(Debug, Clone)]
struct StoredMovie {
    id: MovieId,
    details: MovieDetails,
    rating: Option<Rating>,
    is_watched: bool,
}

#[derive(Default)]
struct Tables {
    last_user_id: i64,
    users: Vec<User>,
    last_genre_id: i64,
    genres: Vec<Genre>,
    last_movie_id: i64,
    movies: Vec<StoredMovie>,
    watchlist: Vec<WatchlistEntry>,
}

impl Tables {
    fn resolve(&self, stored: &StoredMovie) -> Movie {
        let mut genres: Vec<Genre> = self
            .genres
            .iter()
            .filter(|genre| stored.details.genre_ids.contains(&genre.id))
            .cloned()
            .collect();
        genres.sort_by_key(|genre| genre.id);

        Movie {
            id: stored.id,
            title: stored.details.title.clone(),
            description: stored.details.description.clone(),
            release_year: stored.details.release_year,
            director: stored.details.director.clone(),
            rating: stored.rating,
            is_watched: stored.is_watched,
            trailer_url: stored.details.trailer_url.clone(),
            poster_url: stored.details.poster_url.clone(),
            genres,
        }
    }

    fn movie_mut(&mut self, id: MovieId) -> Result<&mut StoredMovie, MovieError> {
        self.movies
            .iter_mut()
            .find(|movie| movie.id == id)
            .ok_or(MovieError::NotFound(id.to_string()))
    }
}

/// Storage double with the same constraints as the Postgres schema:
/// unique emails and genre titles, cascading deletes.
#[derive(Default)]
pub struct InMemoryStore {
    tables: Mutex<Tables>,
}

impl InMemoryStore {
    /// Replace a user's stored hash, e.g. with a legacy bcrypt hash
    pub fn set_password_hash(&self, id: i64, password_hash: String) {
        let mut tables = self.tables.lock().unwrap();
        if let Some(user) = tables.users.iter_mut().find(|user| user.id == UserId(id)) {
            user.password_hash = password_hash;
        }
    }
}

#[async_trait]
impl UserRepository for InMemoryStore {
    async fn create(&self, user: NewUser) -> Result<User, UserError> {
        let mut tables = self.tables.lock().unwrap();
        if tables.users.iter().any(|u| u.email == user.email) {
            return Err(UserError::EmailAlreadyExists(user.email.as_str().to_string()));
        }

        tables.last_user_id += 1;
        let created = User {
            id: UserId(tables.last_user_id),
            name: user.name,
            email: user.email,
            password_hash: user.password_hash,
        };
        tables.users.push(created.clone());
        Ok(created)
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserError> {
        let tables = self.tables.lock().unwrap();
        Ok(tables.users.iter().find(|user| user.id == *id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserError> {
        let tables = self.tables.lock().unwrap();
        Ok(tables
            .users
            .iter()
            .find(|user| user.email.as_str() == email)
            .cloned())
    }

    async fn list_all(&self) -> Result<Vec<User>, UserError> {
        Ok(self.tables.lock().unwrap().users.clone())
    }

    async fn update(&self, user: User) -> Result<User, UserError> {
        let mut tables = self.tables.lock().unwrap();
        if tables
            .users
            .iter()
            .any(|u| u.email == user.email && u.id != user.id)
        {
            return Err(UserError::EmailAlreadyExists(user.email.as_str().to_string()));
        }

        let stored = tables
            .users
            .iter_mut()
            .find(|u| u.id == user.id)
            .ok_or(UserError::NotFound(user.id.to_string()))?;
        *stored = user.clone();
        Ok(user)
    }

    async fn update_password_hash(
        &self,
        id: &UserId,
        password_hash: String,
    ) -> Result<(), UserError> {
        let mut tables = self.tables.lock().unwrap();
        let stored = tables
            .users
            .iter_mut()
            .find(|u| u.id == *id)
            .ok_or(UserError::NotFound(id.to_string()))?;
        stored.password_hash = password_hash;
        Ok(())
    }

    async fn delete(&self, id: &UserId) -> Result<(), UserError> {
        let mut tables = self.tables.lock().unwrap();
        let before = tables.users.len();
        tables.users.retain(|user| user.id != *id);
        if tables.users.len() == before {
            return Err(UserError::NotFound(id.to_string()));
        }
        tables.watchlist.retain(|entry| entry.user_id != *id);
        Ok(())
    }
}

#[async_trait]
impl GenreRepository for InMemoryStore {
    async fn create(&self, title: GenreTitle) -> Result<Genre, GenreError> {
        let mut tables = self.tables.lock().unwrap();
        if tables.genres.iter().any(|genre| genre.title == title) {
            return Err(GenreError::TitleAlreadyExists(title.as_str().to_string()));
        }

        tables.last_genre_id += 1;
        let genre = Genre {
            id: GenreId(tables.last_genre_id),
            title,
        };
        tables.genres.push(genre.clone());
        Ok(genre)
    }

    async fn find_by_id(&self, id: GenreId) -> Result<Option<Genre>, GenreError> {
        let tables = self.tables.lock().unwrap();
        Ok(tables.genres.iter().find(|genre| genre.id == id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Genre>, GenreError> {
        let mut genres = self.tables.lock().unwrap().genres.clone();
        genres.sort_by(|a, b| a.title.as_str().cmp(b.title.as_str()));
        Ok(genres)
    }

    async fn find_by_ids(&self, ids: &[GenreId]) -> Result<Vec<Genre>, GenreError> {
        let tables = self.tables.lock().unwrap();
        Ok(tables
            .genres
            .iter()
            .filter(|genre| ids.contains(&genre.id))
            .cloned()
            .collect())
    }

    async fn update(&self, genre: Genre) -> Result<Genre, GenreError> {
        let mut tables = self.tables.lock().unwrap();
        if tables
            .genres
            .iter()
            .any(|g| g.title == genre.title && g.id != genre.id)
        {
            return Err(GenreError::TitleAlreadyExists(
                genre.title.as_str().to_string(),
            ));
        }

        let stored = tables
            .genres
            .iter_mut()
            .find(|g| g.id == genre.id)
            .ok_or(GenreError::NotFound(genre.id.to_string()))?;
        *stored = genre.clone();
        Ok(genre)
    }

    async fn delete(&self, id: GenreId) -> Result<(), GenreError> {
        let mut tables = self.tables.lock().unwrap();
        let before = tables.genres.len();
        tables.genres.retain(|genre| genre.id != id);
        if tables.genres.len() == before {
            return Err(GenreError::NotFound(id.to_string()));
        }
        for movie in tables.movies.iter_mut() {
            movie.details.genre_ids.retain(|genre_id| *genre_id != id);
        }
        Ok(())
    }
}

#[async_trait]
impl MovieRepository for InMemoryStore {
    async fn create(&self, details: MovieDetails) -> Result<MovieId, MovieError> {
        let mut tables = self.tables.lock().unwrap();
        tables.last_movie_id += 1;
        let id = MovieId(tables.last_movie_id);
        tables.movies.push(StoredMovie {
            id,
            details,
            rating: None,
            is_watched: false,
        });
        Ok(id)
    }

    async fn find_by_id(&self, id: MovieId) -> Result<Option<Movie>, MovieError> {
        let tables = self.tables.lock().unwrap();
        Ok(tables
            .movies
            .iter()
            .find(|movie| movie.id == id)
            .map(|movie| tables.resolve(movie)))
    }

    async fn find_by_ids(&self, ids: &[MovieId]) -> Result<Vec<Movie>, MovieError> {
        let tables = self.tables.lock().unwrap();
        Ok(tables
            .movies
            .iter()
            .filter(|movie| ids.contains(&movie.id))
            .map(|movie| tables.resolve(movie))
            .collect())
    }

    async fn find_all(&self, filters: &MovieFilters) -> Result<Vec<Movie>, MovieError> {
        let tables = self.tables.lock().unwrap();
        let mut movies: Vec<Movie> = tables
            .movies
            .iter()
            .map(|movie| tables.resolve(movie))
            .filter(|movie| filters.matches(movie))
            .collect();

        movies.sort_by_key(|movie| movie.id);
        match filters.sort {
            Some(MovieSort::Title) => {
                movies.sort_by(|a, b| a.title.as_str().cmp(b.title.as_str()))
            }
            Some(MovieSort::ReleaseYear) => {
                movies.sort_by(|a, b| b.release_year.cmp(&a.release_year))
            }
            // None sorts below Some, so reversing puts unrated movies last
            Some(MovieSort::Rating) => movies.sort_by(|a, b| b.rating.cmp(&a.rating)),
            None => {}
        }
        Ok(movies)
    }

    async fn update(&self, id: MovieId, details: MovieDetails) -> Result<(), MovieError> {
        let mut tables = self.tables.lock().unwrap();
        tables.movie_mut(id)?.details = details;
        Ok(())
    }

    async fn delete(&self, id: MovieId) -> Result<(), MovieError> {
        let mut tables = self.tables.lock().unwrap();
        let before = tables.movies.len();
        tables.movies.retain(|movie| movie.id != id);
        if tables.movies.len() == before {
            return Err(MovieError::NotFound(id.to_string()));
        }
        tables.watchlist.retain(|entry| entry.movie_id != id);
        Ok(())
    }

    async fn set_rating(&self, id: MovieId, rating: Rating) -> Result<(), MovieError> {
        let mut tables = self.tables.lock().unwrap();
        tables.movie_mut(id)?.rating = Some(rating);
        Ok(())
    }

    async fn set_watched(&self, id: MovieId, is_watched: bool) -> Result<(), MovieError> {
        let mut tables = self.tables.lock().unwrap();
        tables.movie_mut(id)?.is_watched = is_watched;
        Ok(())
    }
}

#[async_trait]
impl WatchlistRepository for InMemoryStore {
    async fn entries(&self, user_id: UserId) -> Result<Vec<WatchlistEntry>, WatchlistError> {
        let tables = self.tables.lock().unwrap();
        Ok(tables
            .watchlist
            .iter()
            .filter(|entry| entry.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn add(&self, user_id: UserId, movie_id: MovieId) -> Result<(), WatchlistError> {
        let mut tables = self.tables.lock().unwrap();
        let exists = tables
            .watchlist
            .iter()
            .any(|entry| entry.user_id == user_id && entry.movie_id == movie_id);
        if !exists {
            tables.watchlist.push(WatchlistEntry {
                user_id,
                movie_id,
                added_at: Utc::now(),
            });
        }
        Ok(())
    }

    async fn remove(&self, user_id: UserId, movie_id: MovieId) -> Result<(), WatchlistError> {
        let mut tables = self.tables.lock().unwrap();
        tables
            .watchlist
            .retain(|entry| !(entry.user_id == user_id && entry.movie_id == movie_id));
        Ok(())
    }
}
