use serde::Deserialize;
use time::format_description::well_known::Rfc3339;
use time::macros::format_description;
use time::{Date, OffsetDateTime, UtcOffset};
use utoipa::ToSchema;

use super::error::MovieError;
use super::model::{MovieChanges, NewMovie};

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateMovieRequest {
    pub title: String,
    pub genre_id: i32,
    pub language_id: i32,
    #[serde(default)]
    pub oscar_count: i32,
    /// `YYYY-MM-DD` or an RFC 3339 timestamp.
    #[schema(example = "2010-07-16")]
    pub release_date: String,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateMovieRequest {
    pub title: Option<String>,
    pub genre_id: Option<i32>,
    pub language_id: Option<i32>,
    pub oscar_count: Option<i32>,
    #[schema(example = "2010-07-16")]
    pub release_date: Option<String>,
}

impl TryFrom<CreateMovieRequest> for NewMovie {
    type Error = MovieError;

    fn try_from(req: CreateMovieRequest) -> Result<Self, Self::Error> {
        Ok(Self {
            release_date: parse_release_date(&req.release_date)?,
            title: req.title,
            genre_id: req.genre_id,
            language_id: req.language_id,
            oscar_count: req.oscar_count,
        })
    }
}

impl TryFrom<UpdateMovieRequest> for MovieChanges {
    type Error = MovieError;

    fn try_from(req: UpdateMovieRequest) -> Result<Self, Self::Error> {
        // A blank date leaves the stored one untouched.
        let release_date = req
            .release_date
            .as_deref()
            .filter(|date| !date.trim().is_empty())
            .map(parse_release_date)
            .transpose()?;

        Ok(Self {
            title: req.title,
            genre_id: req.genre_id,
            language_id: req.language_id,
            oscar_count: req.oscar_count,
            release_date,
        })
    }
}

/// Accepts a calendar date or a full timestamp, keeping the UTC date of the latter.
pub fn parse_release_date(input: &str) -> Result<Date, MovieError> {
    let input = input.trim();

    if let Ok(date) = Date::parse(input, format_description!("[year]-[month]-[day]")) {
        return Ok(date);
    }

    OffsetDateTime::parse(input, &Rfc3339)
        .map(|dt| dt.to_offset(UtcOffset::UTC).date())
        .map_err(|_| MovieError::InvalidReleaseDate(input.to_string()))
}
