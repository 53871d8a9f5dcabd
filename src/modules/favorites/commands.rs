use super::application::use_favorite_movies;
use crate::log_debug;
use crate::shared::{errors::AppResult, SessionScope};

pub fn get_favorite_movies(scope: &SessionScope) -> AppResult<Vec<String>> {
    Ok(use_favorite_movies(scope)?.get_favorites())
}

pub fn add_favorite_movie(scope: &SessionScope, title: &str) -> AppResult<Vec<String>> {
    log_debug!("add_favorite_movie command called - title: '{}'", title);

    let store = use_favorite_movies(scope)?;
    store.add_favorite(title);
    Ok(store.get_favorites())
}

pub fn remove_favorite_movie(scope: &SessionScope, title: &str) -> AppResult<Vec<String>> {
    log_debug!("remove_favorite_movie command called - title: '{}'", title);

    let store = use_favorite_movies(scope)?;
    store.remove_favorite(title);
    Ok(store.get_favorites())
}

/// Flip a title in or out of the favorites; returns whether it is now a favorite
pub fn toggle_favorite_movie(scope: &SessionScope, title: &str) -> AppResult<bool> {
    let store = use_favorite_movies(scope)?;
    if store.is_favorite(title) {
        store.remove_favorite(title);
        Ok(false)
    } else {
        store.add_favorite(title);
        Ok(true)
    }
}
