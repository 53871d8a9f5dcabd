pub mod commands;
pub mod modules;
pub mod shared;

use modules::{
    favorites::provide_favorites,
    movie::{MovieCatalogService, MovieProviderRepository, TmdbAdapter},
    movie_detail::MovieDetailContext,
    story::{StoryApiClient, StoryGenerator},
};
use shared::{Config, SessionScope};
use std::sync::Arc;

/// Build the session scope with the real TMDB and story API clients
pub fn bootstrap(config: &Config) -> Arc<SessionScope> {
    let movies: Arc<dyn MovieProviderRepository> = Arc::new(TmdbAdapter::with_base_url(
        &config.tmdb_base_url,
        config.tmdb_api_key.clone(),
    ));
    let stories: Arc<dyn StoryGenerator> = Arc::new(StoryApiClient::new(&config.story_api_url));

    bootstrap_with(config, movies, stories)
}

/// Build the session scope around arbitrary providers
pub fn bootstrap_with(
    config: &Config,
    movies: Arc<dyn MovieProviderRepository>,
    stories: Arc<dyn StoryGenerator>,
) -> Arc<SessionScope> {
    let scope = SessionScope::new();

    // Manage state so commands can reach services through the scope
    scope.manage(MovieCatalogService::new(Arc::clone(&movies)));
    scope.manage(MovieDetailContext::new(movies, stories, config));
    provide_favorites(&scope);

    log::info!("Session {} initialized", scope.id());
    scope
}
