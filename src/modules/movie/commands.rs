use super::application::MovieCatalogService;
use super::domain::Movie;
use crate::shared::{errors::AppResult, SessionScope};
use crate::{log_debug, log_error};

pub async fn list_popular_movies(scope: &SessionScope) -> AppResult<Vec<Movie>> {
    log_debug!("list_popular_movies command called");

    let catalog = scope.state::<MovieCatalogService>()?;
    catalog.popular().await.map_err(|e| {
        log_error!("Failed to list popular movies: {}", e);
        e
    })
}

pub async fn search_movies(scope: &SessionScope, query: &str) -> AppResult<Vec<Movie>> {
    log_debug!("search_movies command called - query: '{}'", query);

    let catalog = scope.state::<MovieCatalogService>()?;
    catalog.search(query).await
}
