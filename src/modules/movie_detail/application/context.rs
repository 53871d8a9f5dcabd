use crate::modules::movie::domain::{ImageUrlBuilder, MovieProviderRepository};
use crate::modules::movie_detail::domain::ObjectUrlRegistry;
use crate::modules::story::StoryGenerator;
use crate::shared::Config;
use std::sync::Arc;

/// Collaborators shared by every detail page of a session
pub struct MovieDetailContext {
    pub movies: Arc<dyn MovieProviderRepository>,
    pub stories: Arc<dyn StoryGenerator>,
    pub object_urls: Arc<ObjectUrlRegistry>,
    pub images: ImageUrlBuilder,
    pub share_base_url: String,
}

impl MovieDetailContext {
    pub fn new(
        movies: Arc<dyn MovieProviderRepository>,
        stories: Arc<dyn StoryGenerator>,
        config: &Config,
    ) -> Self {
        Self {
            movies,
            stories,
            object_urls: Arc::new(ObjectUrlRegistry::new()),
            images: ImageUrlBuilder::new(config.tmdb_image_base_url.clone()),
            share_base_url: config.share_base_url.clone(),
        }
    }
}
