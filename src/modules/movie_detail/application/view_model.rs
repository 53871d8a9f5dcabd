use super::{
    context::MovieDetailContext,
    loader::{MovieDetailLoader, MovieDetailProps},
    story_loader::StoryLoader,
};
use crate::modules::movie::domain::Movie;
use crate::modules::movie_detail::domain::{
    build_share_link, AudioClip, DetailView, DownloadSink, DownloadTrigger, ObjectUrlGuard,
    ShareModalState,
};
use crate::modules::story::StoryState;
use crate::shared::errors::AppResult;
use crate::{log_debug, log_info};
use std::sync::Arc;
use tokio::sync::watch;

/// State and actions of one movie detail page
pub struct MovieDetailViewModel {
    route_id: String,
    props: Option<MovieDetailProps>,
    story: StoryLoader,
    share: ShareModalState,
    audio_url: Option<String>,
    context: Arc<MovieDetailContext>,
}

impl MovieDetailViewModel {
    /// A page that has a route id but no data yet
    pub fn new(route_id: impl Into<String>, context: Arc<MovieDetailContext>) -> Self {
        Self {
            route_id: route_id.into(),
            props: None,
            story: StoryLoader::new(Arc::clone(&context.stories)),
            share: ShareModalState::default(),
            audio_url: None,
            context,
        }
    }

    /// Load the primary data for `route_id`, then mount the page (which
    /// starts the story request in the background).
    pub async fn open(route_id: &str, context: Arc<MovieDetailContext>) -> AppResult<Self> {
        let props = MovieDetailLoader::new(Arc::clone(&context.movies))
            .load_primary_data(route_id)
            .await?;

        let mut view_model = Self::new(route_id, context);
        view_model.receive_props(props);
        Ok(view_model)
    }

    /// Accept freshly loaded data. A movie becoming available (or changing)
    /// triggers the story request for it.
    pub fn receive_props(&mut self, props: MovieDetailProps) {
        log_debug!(
            "Detail page {} received movie {} with {} similar movies",
            self.route_id,
            props.movie.id,
            props.similar_movies.len()
        );
        self.story.request(&props.movie);
        self.props = Some(props);
    }

    /// Client-side navigation to another movie.
    ///
    /// The previous story request is cancelled, the share modal and any audio
    /// are reset. On failure the page keeps showing the previous movie.
    pub async fn navigate(&mut self, route_id: &str) -> AppResult<()> {
        let props = MovieDetailLoader::new(Arc::clone(&self.context.movies))
            .load_primary_data(route_id)
            .await?;

        log_info!("Navigating from {} to {}", self.route_id, route_id);
        self.route_id = route_id.to_string();
        self.share = ShareModalState::default();
        self.release_audio();
        self.receive_props(props);
        Ok(())
    }

    pub fn route_id(&self) -> &str {
        &self.route_id
    }

    pub fn props(&self) -> Option<&MovieDetailProps> {
        self.props.as_ref()
    }

    pub fn movie(&self) -> Option<&Movie> {
        self.props.as_ref().map(|p| &p.movie)
    }

    pub fn similar_movies(&self) -> &[Movie] {
        self.props
            .as_ref()
            .map(|p| p.similar_movies.as_slice())
            .unwrap_or_default()
    }

    pub fn story_state(&self) -> StoryState {
        self.story.state()
    }

    pub fn subscribe_story(&self) -> watch::Receiver<StoryState> {
        self.story.subscribe()
    }

    /// Resolves once the story for the current movie is ready or has failed
    pub async fn wait_for_story(&self) -> AppResult<StoryState> {
        self.story.wait_settled().await
    }

    /// Show the share modal with a link rebuilt from the current route id
    pub fn open_share(&mut self) -> &str {
        let link = build_share_link(&self.context.share_base_url, &self.route_id);
        log_debug!("Opening share modal with {}", link);
        self.share.open(link);
        self.share.link().unwrap_or_default()
    }

    pub fn close_share(&mut self) {
        self.share.close();
    }

    pub fn share_modal(&self) -> &ShareModalState {
        &self.share
    }

    /// Register narrated audio for this page; replaces (and revokes) any
    /// previous clip.
    pub fn attach_audio_base64(&mut self, encoded: &str) -> AppResult<&str> {
        let clip = AudioClip::from_base64(encoded)?;
        self.release_audio();
        let url = self.context.object_urls.create_object_url(clip);
        Ok(self.audio_url.insert(url).as_str())
    }

    pub fn audio_url(&self) -> Option<&str> {
        self.audio_url.as_deref()
    }

    /// Hand the audio to `sink` as a download named after the movie.
    ///
    /// No-op without audio. The temporary URL is revoked afterwards whether
    /// or not the sink succeeded.
    pub fn download_audio(&mut self, sink: &dyn DownloadSink) -> AppResult<()> {
        let Some(url) = self.audio_url.take() else {
            return Ok(());
        };
        let guard = ObjectUrlGuard::new(&self.context.object_urls, url);

        let Some(clip) = self.context.object_urls.resolve(guard.url()) else {
            return Ok(());
        };

        let trigger = DownloadTrigger {
            href: guard.url().to_string(),
            filename: self
                .movie()
                .map(|m| m.title.clone())
                .unwrap_or_else(|| self.route_id.clone()),
            clip,
        };

        sink.download(&trigger)
    }

    fn release_audio(&mut self) {
        if let Some(url) = self.audio_url.take() {
            self.context.object_urls.revoke(&url);
        }
    }

    /// Snapshot of everything the page renders
    pub fn view(&self) -> DetailView {
        DetailView::build(
            self.movie(),
            self.similar_movies(),
            &self.story.state(),
            &self.share,
            &self.context.images,
        )
    }
}

impl Drop for MovieDetailViewModel {
    fn drop(&mut self) {
        self.release_audio();
    }
}
