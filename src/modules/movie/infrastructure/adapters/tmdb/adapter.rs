use super::models::TmdbMovieListResponse;
use crate::{
    modules::movie::domain::{entities::Movie, repositories::MovieProviderRepository},
    shared::{
        config::DEFAULT_TMDB_BASE_URL,
        errors::{AppError, AppResult},
        infrastructure::RateLimitClient,
    },
};
use async_trait::async_trait;

/// TMDB (The Movie Database) adapter over the v3 REST API
pub struct TmdbAdapter {
    http_client: RateLimitClient,
    base_url: String,
    api_key: Option<String>,
}

impl TmdbAdapter {
    pub fn new(api_key: Option<String>) -> Self {
        Self::with_base_url(DEFAULT_TMDB_BASE_URL, api_key)
    }

    pub fn with_base_url(base_url: &str, api_key: Option<String>) -> Self {
        Self::with_client(RateLimitClient::for_tmdb(), base_url, api_key)
    }

    /// Create adapter with custom HTTP client (for testing)
    pub fn with_client(http_client: RateLimitClient, base_url: &str, api_key: Option<String>) -> Self {
        Self {
            http_client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
        }
    }

    /// Check if a request can be made immediately (for testing and monitoring)
    pub fn can_make_request_now(&self) -> bool {
        self.http_client.can_make_request_now()
    }

    /// The key is resolved on every request: a missing key fails the load
    /// instead of sending an unauthenticated request.
    fn api_key(&self) -> AppResult<&str> {
        self.api_key
            .as_deref()
            .filter(|key| !key.is_empty())
            .ok_or_else(|| {
                AppError::MissingConfiguration(
                    "TMDB_API_KEY is not set; movie data cannot be loaded".to_string(),
                )
            })
    }

    /// Build URL with API key parameter
    pub(crate) fn build_url(&self, endpoint: &str) -> AppResult<String> {
        Ok(format!(
            "{}{}?api_key={}",
            self.base_url,
            endpoint,
            urlencoding::encode(self.api_key()?)
        ))
    }

    /// Build URL with API key and additional query parameters
    pub(crate) fn build_url_with_params(
        &self,
        endpoint: &str,
        params: &[(&str, &str)],
    ) -> AppResult<String> {
        let mut url = self.build_url(endpoint)?;
        for (key, value) in params {
            if *key != "api_key" {
                url.push_str(&format!("&{}={}", key, urlencoding::encode(value)));
            }
        }
        Ok(url)
    }
}

#[async_trait]
impl MovieProviderRepository for TmdbAdapter {
    async fn get_movie(&self, id: u32) -> AppResult<Movie> {
        let url = self.build_url(&format!("/movie/{}", id))?;

        log::info!("TMDB: Getting movie for ID '{}'", id);

        let movie: Movie = match self.http_client.get(&url).await {
            Ok(response) => response,
            Err(AppError::NotFound(_)) => {
                log::info!("TMDB: No movie found for ID '{}'", id);
                return Err(AppError::NotFound(format!("Movie {} not found", id)));
            }
            Err(e) => return Err(e),
        };

        log::info!("TMDB: Retrieved '{}' for ID '{}'", movie.title, id);
        Ok(movie)
    }

    async fn get_similar_movies(&self, id: u32) -> AppResult<Vec<Movie>> {
        let url = self.build_url(&format!("/movie/{}/similar", id))?;

        log::info!("TMDB: Getting similar movies for ID '{}'", id);

        let response: TmdbMovieListResponse = self.http_client.get(&url).await?;
        let movies = response.results;

        log::info!("TMDB: Found {} similar movies for ID '{}'", movies.len(), id);
        Ok(movies)
    }

    async fn get_popular_movies(&self) -> AppResult<Vec<Movie>> {
        let url = self.build_url_with_params("/movie/popular", &[("page", "1")])?;

        log::info!("TMDB: Getting popular movies");

        let response: TmdbMovieListResponse = self.http_client.get(&url).await?;
        Ok(response.results)
    }

    async fn search_movies(&self, query: &str) -> AppResult<Vec<Movie>> {
        let url = self.build_url_with_params(
            "/search/movie",
            &[("query", query), ("page", "1"), ("include_adult", "false")],
        )?;

        log::info!("TMDB: Searching for '{}'", query);

        let response: TmdbMovieListResponse = self.http_client.get(&url).await?;
        let movies = response.results;

        log::info!("TMDB: Found {} results for '{}'", movies.len(), query);
        Ok(movies)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_authenticated_urls() {
        let adapter = TmdbAdapter::with_base_url("http://tmdb.local/3/", Some("k3y".to_string()));
        assert_eq!(
            adapter.build_url("/movie/603").unwrap(),
            "http://tmdb.local/3/movie/603?api_key=k3y"
        );
    }

    #[test]
    fn encodes_query_params_and_ignores_api_key_override() {
        let adapter = TmdbAdapter::new(Some("k3y".to_string()));
        let url = adapter
            .build_url_with_params("/search/movie", &[("query", "the matrix"), ("api_key", "evil")])
            .unwrap();
        assert_eq!(
            url,
            "https://api.themoviedb.org/3/search/movie?api_key=k3y&query=the%20matrix"
        );
    }

    #[tokio::test]
    async fn missing_key_fails_before_any_request() {
        let adapter = TmdbAdapter::new(None);

        let err = adapter.get_movie(603).await.unwrap_err();
        assert!(matches!(err, AppError::MissingConfiguration(_)));

        let err = adapter.get_similar_movies(603).await.unwrap_err();
        assert!(matches!(err, AppError::MissingConfiguration(_)));

        // No quota was spent on the rejected calls
        assert!(adapter.can_make_request_now());
    }

    #[tokio::test]
    async fn blank_key_counts_as_missing() {
        let adapter = TmdbAdapter::new(Some(String::new()));
        let err = adapter.search_movies("alien").await.unwrap_err();
        assert!(matches!(err, AppError::MissingConfiguration(_)));
    }
}
