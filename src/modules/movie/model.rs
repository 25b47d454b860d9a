use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use time::Date;
use utoipa::ToSchema;

use crate::modules::genre::model::Genre;
use crate::modules::language::model::Language;

time::serde::format_description!(iso_date, Date, "[year]-[month]-[day]");

#[derive(Debug, Serialize, Deserialize, FromRow, Clone, PartialEq, Eq, ToSchema)]
pub struct Movie {
    pub id: i32,
    pub title: String,
    pub genre_id: i32,
    pub language_id: i32,
    pub oscar_count: i32,
    #[serde(with = "iso_date")]
    #[schema(value_type = String, format = Date, example = "2010-07-16")]
    pub release_date: Date,
}

/// A movie together with the genre and language it references.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, ToSchema)]
pub struct MovieDetails {
    #[serde(flatten)]
    pub movie: Movie,
    pub genres: Genre,
    pub languages: Language,
}

// Flat shape of the movies/genres/languages join.
#[derive(Debug, FromRow)]
pub struct MovieDetailsRow {
    pub id: i32,
    pub title: String,
    pub genre_id: i32,
    pub language_id: i32,
    pub oscar_count: i32,
    pub release_date: Date,
    pub genre_name: String,
    pub language_name: String,
}

impl From<MovieDetailsRow> for MovieDetails {
    fn from(row: MovieDetailsRow) -> Self {
        Self {
            movie: Movie {
                id: row.id,
                title: row.title,
                genre_id: row.genre_id,
                language_id: row.language_id,
                oscar_count: row.oscar_count,
                release_date: row.release_date,
            },
            genres: Genre {
                id: row.genre_id,
                name: row.genre_name,
            },
            languages: Language {
                id: row.language_id,
                name: row.language_name,
            },
        }
    }
}

#[derive(Debug, Clone)]
pub struct NewMovie {
    pub title: String,
    pub genre_id: i32,
    pub language_id: i32,
    pub oscar_count: i32,
    pub release_date: Date,
}

/// Partial update; `None` leaves the stored value untouched.
#[derive(Debug, Clone, Default)]
pub struct MovieChanges {
    pub title: Option<String>,
    pub genre_id: Option<i32>,
    pub language_id: Option<i32>,
    pub oscar_count: Option<i32>,
    pub release_date: Option<Date>,
}
