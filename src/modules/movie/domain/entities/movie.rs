use crate::shared::errors::{AppError, AppResult};
use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// A movie record as returned by the metadata API.
///
/// The typed fields are the ones the app reads; every other upstream key is
/// kept in `extra`. Values are stored as received, so serializing a movie
/// yields the upstream record again. The story service receives that record.
///
/// Detail-only keys (`budget`, `belongs_to_collection`, `genres`,
/// `production_companies`) are `None` when the upstream payload did not carry
/// them and are then left out on serialization. `belongs_to_collection` keeps
/// an explicit `null` as `Some(None)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub id: u32,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub overview: String,
    /// Raw `YYYY-MM-DD`; TMDB sends `""` when the date is unknown
    #[serde(default)]
    pub release_date: Option<String>,
    /// 0 upstream means unknown; kept as sent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub budget: Option<u64>,
    #[serde(default)]
    pub backdrop_path: Option<String>,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    pub belongs_to_collection: Option<Option<MovieCollection>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub genres: Option<Vec<Genre>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub production_companies: Option<Vec<ProductionCompany>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieCollection {
    pub id: u32,
    pub name: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Genre {
    pub id: u32,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductionCompany {
    pub id: u32,
    pub name: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

// A key that is present (even as null) deserializes to Some
fn present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}

impl Movie {
    /// Title for display: falls back to `original_title` when the localized
    /// title is blank. The record itself is not touched.
    pub fn display_title(&self) -> &str {
        if !self.title.trim().is_empty() {
            return &self.title;
        }
        self.extra
            .get("original_title")
            .and_then(Value::as_str)
            .unwrap_or(&self.title)
    }

    /// Parsed release date, `None` for missing, empty or malformed values
    pub fn released_on(&self) -> Option<NaiveDate> {
        self.release_date
            .as_deref()
            .filter(|raw| !raw.is_empty())
            .and_then(|raw| NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok())
    }

    pub fn collection_name(&self) -> Option<&str> {
        self.belongs_to_collection
            .as_ref()
            .and_then(Option::as_ref)
            .map(|c| c.name.as_str())
    }

    pub fn genre_names(&self) -> Vec<String> {
        self.genres
            .iter()
            .flatten()
            .map(|g| g.name.clone())
            .collect()
    }

    pub fn production_company_names(&self) -> Vec<String> {
        self.production_companies
            .iter()
            .flatten()
            .map(|c| c.name.clone())
            .collect()
    }
}

/// Parse a route parameter into a TMDB movie id.
pub fn parse_movie_id(raw: &str) -> AppResult<u32> {
    let trimmed = raw.trim();
    let id: u32 = trimmed
        .parse()
        .map_err(|_| AppError::InvalidInput(format!("Invalid movie ID: '{}'", raw)))?;

    if id == 0 {
        return Err(AppError::InvalidInput("Movie ID must be positive".to_string()));
    }

    Ok(id)
}
