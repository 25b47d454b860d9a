#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{header::CONTENT_TYPE, Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use movie_catalog::app::create_app;
use movie_catalog::infrastructure::db::error::{StoreError, StoreResult};
use movie_catalog::modules::genre::model::Genre;
use movie_catalog::modules::genre::repository::GenreRepository;
use movie_catalog::modules::language::model::Language;
use movie_catalog::modules::language::repository::LanguageRepository;
use movie_catalog::modules::movie::model::{Movie, MovieChanges, MovieDetails, NewMovie};
use movie_catalog::modules::movie::repository::MovieRepository;
use movie_catalog::state::AppState;

#[derive(Default)]
struct Tables {
    genres: Vec<Genre>,
    languages: Vec<Language>,
    movies: Vec<Movie>,
    next_id: i32,
    failing: bool,
}

/// In-memory catalog implementing every repository trait, with the same
/// case-insensitive title uniqueness the database index enforces.
#[derive(Clone, Default)]
pub struct InMemoryCatalog {
    tables: Arc<Mutex<Tables>>,
}

impl InMemoryCatalog {
    /// Seeded with a handful of genres and languages.
    pub fn seeded() -> Self {
        let catalog = Self::default();
        {
            let mut tables = catalog.tables.lock().unwrap();
            tables.genres = ["Action", "Drama", "Science Fiction"]
                .iter()
                .enumerate()
                .map(|(i, name)| Genre { id: i as i32 + 1, name: name.to_string() })
                .collect();
            tables.languages = ["English", "Portuguese"]
                .iter()
                .enumerate()
                .map(|(i, name)| Language { id: i as i32 + 1, name: name.to_string() })
                .collect();
            tables.next_id = 1;
        }
        catalog
    }

    /// Makes every subsequent store call fail.
    pub fn fail_all(&self) {
        self.tables.lock().unwrap().failing = true;
    }

    pub fn movie_count(&self) -> usize {
        self.tables.lock().unwrap().movies.len()
    }

    pub fn movie(&self, id: i32) -> Option<Movie> {
        self.tables
            .lock()
            .unwrap()
            .movies
            .iter()
            .find(|m| m.id == id)
            .cloned()
    }

    pub fn app(&self) -> Router {
        let state = AppState::new(
            Arc::new(self.clone()),
            Arc::new(self.clone()),
            Arc::new(self.clone()),
        );
        create_app(state)
    }

    fn check(tables: &Tables) -> StoreResult<()> {
        if tables.failing {
            return Err(StoreError::Unavailable("connection refused".to_string()));
        }
        Ok(())
    }

    fn details(tables: &Tables, movie: &Movie) -> StoreResult<MovieDetails> {
        let genre = tables.genres.iter().find(|g| g.id == movie.genre_id);
        let language = tables.languages.iter().find(|l| l.id == movie.language_id);
        match (genre, language) {
            (Some(genre), Some(language)) => Ok(MovieDetails {
                movie: movie.clone(),
                genres: genre.clone(),
                languages: language.clone(),
            }),
            _ => Err(StoreError::Unavailable("dangling foreign key".to_string())),
        }
    }

    fn title_taken(tables: &Tables, title: &str, except: Option<i32>) -> bool {
        tables
            .movies
            .iter()
            .any(|m| Some(m.id) != except && m.title.to_lowercase() == title.to_lowercase())
    }

    fn sorted_details(tables: &Tables, movies: Vec<&Movie>) -> StoreResult<Vec<MovieDetails>> {
        let mut movies = movies;
        movies.sort_by(|a, b| a.title.cmp(&b.title));
        movies.into_iter().map(|m| Self::details(tables, m)).collect()
    }
}

fn unique_violation() -> StoreError {
    StoreError::UniqueViolation {
        constraint: "uq_movies_title_lower".to_string(),
    }
}

/// Same partial-update semantics as the COALESCE update in PostgreSQL.
fn apply_changes(movie: &mut Movie, changes: &MovieChanges) {
    if let Some(title) = &changes.title {
        movie.title = title.clone();
    }
    if let Some(genre_id) = changes.genre_id {
        movie.genre_id = genre_id;
    }
    if let Some(language_id) = changes.language_id {
        movie.language_id = language_id;
    }
    if let Some(oscar_count) = changes.oscar_count {
        movie.oscar_count = oscar_count;
    }
    if let Some(release_date) = changes.release_date {
        movie.release_date = release_date;
    }
}

#[async_trait]
impl MovieRepository for InMemoryCatalog {
    async fn list(&self) -> StoreResult<Vec<MovieDetails>> {
        let tables = self.tables.lock().unwrap();
        Self::check(&tables)?;
        Self::sorted_details(&tables, tables.movies.iter().collect())
    }

    async fn list_by_genre_name(&self, genre_name: &str) -> StoreResult<Vec<MovieDetails>> {
        let tables = self.tables.lock().unwrap();
        Self::check(&tables)?;
        let genre_ids: Vec<i32> = tables
            .genres
            .iter()
            .filter(|g| g.name.to_lowercase() == genre_name.to_lowercase())
            .map(|g| g.id)
            .collect();
        let movies = tables
            .movies
            .iter()
            .filter(|m| genre_ids.contains(&m.genre_id))
            .collect();
        Self::sorted_details(&tables, movies)
    }

    async fn find_details(&self, id: i32) -> StoreResult<Option<MovieDetails>> {
        let tables = self.tables.lock().unwrap();
        Self::check(&tables)?;
        tables
            .movies
            .iter()
            .find(|m| m.id == id)
            .map(|m| Self::details(&tables, m))
            .transpose()
    }

    async fn find_by_id(&self, id: i32) -> StoreResult<Option<Movie>> {
        let tables = self.tables.lock().unwrap();
        Self::check(&tables)?;
        Ok(tables.movies.iter().find(|m| m.id == id).cloned())
    }

    async fn find_by_title(&self, title: &str) -> StoreResult<Option<Movie>> {
        let tables = self.tables.lock().unwrap();
        Self::check(&tables)?;
        Ok(tables
            .movies
            .iter()
            .find(|m| m.title.to_lowercase() == title.to_lowercase())
            .cloned())
    }

    async fn create(&self, movie: &NewMovie) -> StoreResult<Movie> {
        let mut tables = self.tables.lock().unwrap();
        Self::check(&tables)?;
        if Self::title_taken(&tables, &movie.title, None) {
            return Err(unique_violation());
        }
        let created = Movie {
            id: tables.next_id,
            title: movie.title.clone(),
            genre_id: movie.genre_id,
            language_id: movie.language_id,
            oscar_count: movie.oscar_count,
            release_date: movie.release_date,
        };
        tables.next_id += 1;
        tables.movies.push(created.clone());
        Ok(created)
    }

    async fn update(&self, id: i32, changes: &MovieChanges) -> StoreResult<Option<Movie>> {
        let mut tables = self.tables.lock().unwrap();
        Self::check(&tables)?;
        if let Some(title) = &changes.title {
            if Self::title_taken(&tables, title, Some(id)) {
                return Err(unique_violation());
            }
        }
        Ok(tables.movies.iter_mut().find(|m| m.id == id).map(|movie| {
            apply_changes(movie, changes);
            movie.clone()
        }))
    }

    async fn delete(&self, id: i32) -> StoreResult<bool> {
        let mut tables = self.tables.lock().unwrap();
        Self::check(&tables)?;
        let before = tables.movies.len();
        tables.movies.retain(|m| m.id != id);
        Ok(tables.movies.len() < before)
    }
}

#[async_trait]
impl GenreRepository for InMemoryCatalog {
    async fn find_all(&self) -> StoreResult<Vec<Genre>> {
        let tables = self.tables.lock().unwrap();
        Self::check(&tables)?;
        let mut genres = tables.genres.clone();
        genres.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(genres)
    }
}

#[async_trait]
impl LanguageRepository for InMemoryCatalog {
    async fn find_all(&self) -> StoreResult<Vec<Language>> {
        let tables = self.tables.lock().unwrap();
        Self::check(&tables)?;
        let mut languages = tables.languages.clone();
        languages.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(languages)
    }
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn send(app: Router, method: Method, uri: &str, body: Option<serde_json::Value>) -> Response {
    let request = match body {
        Some(json) => Request::builder()
            .method(method)
            .uri(uri)
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    };
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response {
    send(app, Method::GET, uri, None).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    send(app, Method::POST, uri, Some(body)).await
}

pub async fn put_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    send(app, Method::PUT, uri, Some(body)).await
}

pub async fn delete(app: Router, uri: &str) -> Response {
    send(app, Method::DELETE, uri, None).await
}

pub async fn body_bytes(response: Response) -> Vec<u8> {
    response.into_body().collect().await.unwrap().to_bytes().to_vec()
}

pub async fn body_json(response: Response) -> serde_json::Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

pub fn inception() -> serde_json::Value {
    serde_json::json!({
        "title": "Inception",
        "genre_id": 3,
        "language_id": 1,
        "oscar_count": 4,
        "release_date": "2010-07-16"
    })
}
