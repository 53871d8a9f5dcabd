/// Test doubles and session builders
use async_trait::async_trait;
use cinestory_lib::bootstrap_with;
use cinestory_lib::modules::{
    movie::{Movie, MovieProviderRepository},
    movie_detail::{domain::DownloadSink, domain::DownloadTrigger, MovieDetailContext},
    story::StoryGenerator,
};
use cinestory_lib::shared::{errors::AppError, AppResult, Config, SessionScope};
use mockall::mock;
use std::sync::{Arc, Mutex};
use tokio::sync::watch;

mock! {
    pub MovieProvider {}

    #[async_trait]
    impl MovieProviderRepository for MovieProvider {
        async fn get_movie(&self, id: u32) -> AppResult<Movie>;
        async fn get_similar_movies(&self, id: u32) -> AppResult<Vec<Movie>>;
        async fn get_popular_movies(&self) -> AppResult<Vec<Movie>>;
        async fn search_movies(&self, query: &str) -> AppResult<Vec<Movie>>;
    }
}

mock! {
    pub Storyteller {}

    #[async_trait]
    impl StoryGenerator for Storyteller {
        async fn generate_story(&self, movie: &Movie) -> AppResult<String>;
    }
}

/// Provider serving a fixed set of movies, each with the same similar list
pub fn provider_with(movies: Vec<Movie>, similar: Vec<Movie>) -> MockMovieProvider {
    let mut provider = MockMovieProvider::new();
    provider.expect_get_movie().returning(move |id| {
        movies
            .iter()
            .find(|m| m.id == id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("movie {}", id)))
    });
    provider
        .expect_get_similar_movies()
        .returning(move |_| Ok(similar.clone()));
    provider
}

/// Story generator that holds every request until the gate opens
pub struct GatedStoryteller {
    gate: watch::Receiver<bool>,
    calls: Mutex<Vec<u32>>,
}

impl GatedStoryteller {
    pub fn new() -> (Arc<Self>, watch::Sender<bool>) {
        let (open, gate) = watch::channel(false);
        let storyteller = Arc::new(Self {
            gate,
            calls: Mutex::new(Vec::new()),
        });
        (storyteller, open)
    }

    pub fn calls(&self) -> Vec<u32> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl StoryGenerator for GatedStoryteller {
    async fn generate_story(&self, movie: &Movie) -> AppResult<String> {
        self.calls.lock().unwrap().push(movie.id);
        let mut gate = self.gate.clone();
        gate.wait_for(|open| *open)
            .await
            .map_err(|_| AppError::Cancelled("gate dropped".to_string()))?;
        Ok(format!("The story of {}", movie.title))
    }
}

/// Sink that remembers what it was asked to save
#[derive(Default)]
pub struct RecordingSink {
    pub downloads: Mutex<Vec<(String, String, Vec<u8>)>>,
    pub fail: bool,
}

impl RecordingSink {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn count(&self) -> usize {
        self.downloads.lock().unwrap().len()
    }
}

impl DownloadSink for RecordingSink {
    fn download(&self, trigger: &DownloadTrigger) -> AppResult<()> {
        self.downloads.lock().unwrap().push((
            trigger.href.clone(),
            trigger.filename.clone(),
            trigger.clip.bytes().to_vec(),
        ));
        if self.fail {
            return Err(AppError::IoError("disk full".to_string()));
        }
        Ok(())
    }
}

pub fn test_config() -> Config {
    Config::default().with_tmdb_api_key("test-key")
}

/// Session wired to the given doubles
pub fn build_test_scope(
    movies: impl MovieProviderRepository + 'static,
    stories: Arc<dyn StoryGenerator>,
) -> Arc<SessionScope> {
    bootstrap_with(&test_config(), Arc::new(movies), stories)
}

pub fn detail_context(scope: &SessionScope) -> Arc<MovieDetailContext> {
    scope.state::<MovieDetailContext>().unwrap()
}
