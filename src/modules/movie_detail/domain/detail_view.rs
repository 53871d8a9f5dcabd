use super::share::ShareModalState;
use crate::modules::movie::domain::{ImageSize, ImageUrlBuilder, Movie};
use crate::modules::story::StoryState;
use chrono::NaiveDate;
use serde::Serialize;

/// What the detail page shows at a point in time
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DetailView {
    /// No movie yet: full-page loading indicator
    Loading,
    Loaded(Box<MovieDetailView>),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MovieDetailView {
    pub movie_id: u32,
    pub title: String,
    pub backdrop_url: Option<String>,
    pub collection_name: Option<String>,
    pub budget: Option<u64>,
    pub release_date: Option<NaiveDate>,
    pub overview: String,
    pub genres: Vec<String>,
    pub production_companies: Vec<String>,
    pub story: StoryPanel,
    pub share: ShareModalState,
    pub similar: Vec<SimilarCard>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "value", rename_all = "snake_case")]
pub enum StoryPanel {
    Loading,
    Text(String),
    Unavailable(String),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimilarCard {
    pub id: u32,
    pub title: String,
    pub image_url: Option<String>,
    pub release_date: Option<NaiveDate>,
}

impl StoryPanel {
    /// A story state belonging to another movie renders as still loading.
    pub fn for_movie(state: &StoryState, movie_id: u32) -> Self {
        if state.movie_id() != Some(movie_id) {
            return StoryPanel::Loading;
        }
        match state {
            StoryState::Ready { story, .. } => StoryPanel::Text(story.clone()),
            StoryState::Failed { reason, .. } => StoryPanel::Unavailable(reason.clone()),
            StoryState::Empty | StoryState::Pending { .. } => StoryPanel::Loading,
        }
    }
}

impl DetailView {
    pub fn build(
        movie: Option<&Movie>,
        similar_movies: &[Movie],
        story: &StoryState,
        share: &ShareModalState,
        images: &ImageUrlBuilder,
    ) -> Self {
        let Some(movie) = movie else {
            return DetailView::Loading;
        };

        DetailView::Loaded(Box::new(MovieDetailView {
            movie_id: movie.id,
            title: movie.display_title().to_string(),
            backdrop_url: images.build_optional(movie.backdrop_path.as_deref(), ImageSize::Original),
            collection_name: movie.collection_name().map(str::to_string),
            budget: movie.budget,
            release_date: movie.released_on(),
            overview: movie.overview.clone(),
            genres: movie.genre_names(),
            production_companies: movie.production_company_names(),
            story: StoryPanel::for_movie(story, movie.id),
            share: share.clone(),
            similar: similar_movies
                .iter()
                .map(|m| SimilarCard {
                    id: m.id,
                    title: m.display_title().to_string(),
                    image_url: images.build_optional(m.backdrop_path.as_deref(), ImageSize::W500),
                    release_date: m.released_on(),
                })
                .collect(),
        }))
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, DetailView::Loading)
    }
}
