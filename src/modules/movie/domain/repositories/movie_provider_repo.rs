use crate::modules::movie::domain::entities::Movie;
use crate::shared::errors::AppResult;
use async_trait::async_trait;

/// Repository interface for reading movie metadata from an external provider
///
/// Implementations hide provider-specific URLs, authentication and DTOs; the
/// application layer only sees domain [`Movie`] values.
#[async_trait]
pub trait MovieProviderRepository: Send + Sync {
    /// Full details for one movie
    async fn get_movie(&self, id: u32) -> AppResult<Movie>;

    /// Movies the provider considers similar to `id` (first page)
    async fn get_similar_movies(&self, id: u32) -> AppResult<Vec<Movie>>;

    /// Currently popular movies (first page)
    async fn get_popular_movies(&self) -> AppResult<Vec<Movie>>;

    /// Title search (first page)
    async fn search_movies(&self, query: &str) -> AppResult<Vec<Movie>>;
}
