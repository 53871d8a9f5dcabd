use super::application::{MovieDetailContext, MovieDetailLoader, MovieDetailProps, MovieDetailViewModel};
use super::domain::build_share_link;
use crate::modules::movie::domain::parse_movie_id;
use crate::shared::{errors::AppResult, SessionScope};
use crate::{log_debug, log_error};
use std::sync::Arc;

/// Pre-render step: movie plus similar movies
pub async fn load_movie_detail(scope: &SessionScope, route_id: &str) -> AppResult<MovieDetailProps> {
    log_debug!("load_movie_detail command called - id: {}", route_id);

    let context = scope.state::<MovieDetailContext>()?;
    MovieDetailLoader::new(Arc::clone(&context.movies))
        .load_primary_data(route_id)
        .await
        .map_err(|e| {
            log_error!("Failed to load movie {}: {}", route_id, e);
            e
        })
}

/// Load and mount a detail page; the story request is already running when
/// this returns
pub async fn open_movie_detail(
    scope: &SessionScope,
    route_id: &str,
) -> AppResult<MovieDetailViewModel> {
    log_debug!("open_movie_detail command called - id: {}", route_id);

    let context = scope.state::<MovieDetailContext>()?;
    MovieDetailViewModel::open(route_id, context).await
}

/// Share link for a movie without opening its page
pub fn get_share_link(scope: &SessionScope, route_id: &str) -> AppResult<String> {
    parse_movie_id(route_id)?;
    let context = scope.state::<MovieDetailContext>()?;
    Ok(build_share_link(&context.share_base_url, route_id))
}
