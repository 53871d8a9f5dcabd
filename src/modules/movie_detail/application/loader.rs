use crate::modules::movie::domain::{parse_movie_id, Movie, MovieProviderRepository};
use crate::shared::errors::AppResult;
use crate::shared::utils::TimedOperation;
use serde::Serialize;
use std::sync::Arc;

/// Everything the detail page needs before its first render
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MovieDetailProps {
    pub movie: Movie,
    pub similar_movies: Vec<Movie>,
}

pub struct MovieDetailLoader {
    movies: Arc<dyn MovieProviderRepository>,
}

impl MovieDetailLoader {
    pub fn new(movies: Arc<dyn MovieProviderRepository>) -> Self {
        Self { movies }
    }

    /// Fetch the movie and its similar movies concurrently.
    ///
    /// Both must succeed; the first failure fails the whole load.
    pub async fn load_primary_data(&self, route_id: &str) -> AppResult<MovieDetailProps> {
        let id = parse_movie_id(route_id)?;
        let timer = TimedOperation::new(&format!("load movie detail {}", id));

        let (movie, similar_movies) = tokio::try_join!(
            self.movies.get_movie(id),
            self.movies.get_similar_movies(id)
        )?;

        timer.finish_with_info(&format!("{} similar", similar_movies.len()));

        Ok(MovieDetailProps {
            movie,
            similar_movies,
        })
    }
}
