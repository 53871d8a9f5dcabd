use crate::modules::movie::domain::entities::Movie;
use serde::{Deserialize, Serialize};

// Envelope of /movie/popular, /movie/{id}/similar and /search/movie.
// Items are kept as full upstream records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TmdbMovieListResponse {
    #[serde(default)]
    pub page: u32,
    #[serde(default)]
    pub results: Vec<Movie>,
    #[serde(default)]
    pub total_pages: u32,
    #[serde(default)]
    pub total_results: u32,
}
