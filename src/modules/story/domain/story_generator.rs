use crate::modules::movie::domain::Movie;
use crate::shared::errors::AppResult;
use async_trait::async_trait;

/// Remote service turning movie metadata into a narrative
#[async_trait]
pub trait StoryGenerator: Send + Sync {
    /// Generate a story from the full movie record
    async fn generate_story(&self, movie: &Movie) -> AppResult<String>;
}
