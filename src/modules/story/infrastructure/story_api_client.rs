use crate::modules::movie::domain::Movie;
use crate::modules::story::domain::StoryGenerator;
use crate::shared::{
    config::DEFAULT_STORY_API_URL,
    errors::{AppError, AppResult},
    infrastructure::RateLimitClient,
};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateStoryRequest<'a> {
    pub movie_details: &'a Movie,
}

#[derive(Debug, Deserialize)]
pub struct GenerateStoryResponse {
    pub data: Option<String>,
}

impl GenerateStoryResponse {
    /// A missing or blank `data` field is a failed generation.
    pub fn into_story(self, movie_id: u32) -> AppResult<String> {
        match self.data {
            Some(story) if !story.trim().is_empty() => Ok(story),
            _ => Err(AppError::NetworkFailure(format!(
                "Story service returned no story for movie {}",
                movie_id
            ))),
        }
    }
}

/// Client for the `POST /generate-story` endpoint
pub struct StoryApiClient {
    http_client: RateLimitClient,
    base_url: String,
}

impl Default for StoryApiClient {
    fn default() -> Self {
        Self::new(DEFAULT_STORY_API_URL)
    }
}

impl StoryApiClient {
    pub fn new(base_url: &str) -> Self {
        Self::with_client(RateLimitClient::for_story_api(), base_url)
    }

    pub fn with_client(http_client: RateLimitClient, base_url: &str) -> Self {
        Self {
            http_client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn endpoint(&self) -> String {
        format!("{}/generate-story", self.base_url)
    }
}

#[async_trait]
impl StoryGenerator for StoryApiClient {
    async fn generate_story(&self, movie: &Movie) -> AppResult<String> {
        log::info!("StoryAPI: Generating story for '{}' ({})", movie.title, movie.id);

        let body = GenerateStoryRequest { movie_details: movie };
        let response: GenerateStoryResponse =
            self.http_client.post_json(&self.endpoint(), &body).await?;

        let story = response.into_story(movie.id)?;
        log::info!(
            "StoryAPI: Received {} characters for movie {}",
            story.chars().count(),
            movie.id
        );
        Ok(story)
    }
}
