use crate::modules::movie::domain::{entities::Movie, repositories::MovieProviderRepository};
use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::LogContext;
use std::sync::Arc;

/// Listing and search pages
pub struct MovieCatalogService {
    movies: Arc<dyn MovieProviderRepository>,
}

impl MovieCatalogService {
    pub fn new(movies: Arc<dyn MovieProviderRepository>) -> Self {
        Self { movies }
    }

    pub async fn popular(&self) -> AppResult<Vec<Movie>> {
        self.movies.get_popular_movies().await
    }

    pub async fn search(&self, query: &str) -> AppResult<Vec<Movie>> {
        let query = query.trim();
        if query.is_empty() {
            return Err(AppError::InvalidInput(
                "Search query cannot be empty".to_string(),
            ));
        }

        LogContext::search_operation(query, None);
        let results = self.movies.search_movies(query).await?;
        LogContext::search_operation(query, Some(results.len()));

        Ok(results)
    }
}
