use crate::modules::favorites::domain::FavoriteMovieSet;
use crate::shared::errors::AppResult;
use crate::shared::utils::LogContext;
use crate::shared::SessionScope;
use std::sync::Arc;
use tokio::sync::watch;

/// Session-wide favorites.
///
/// The watch channel holds the single copy of the set: reads borrow it,
/// mutations go through `send_modify`/`send_if_modified`, so a change is
/// visible to every holder of the store as soon as the call returns and
/// subscribers are woken.
pub struct FavoritesStore {
    state: watch::Sender<FavoriteMovieSet>,
}

impl Default for FavoritesStore {
    fn default() -> Self {
        Self::new()
    }
}

impl FavoritesStore {
    pub fn new() -> Self {
        let (state, _) = watch::channel(FavoriteMovieSet::new());
        Self { state }
    }

    pub fn get_favorites(&self) -> Vec<String> {
        self.state.borrow().titles().to_vec()
    }

    pub fn is_favorite(&self, title: &str) -> bool {
        self.state.borrow().contains(title)
    }

    pub fn add_favorite(&self, title: impl Into<String>) {
        let title = title.into();
        let mut total = 0;
        self.state.send_modify(|set| {
            set.add(title.clone());
            total = set.len();
        });
        LogContext::favorites_change("added", &title, total);
    }

    pub fn remove_favorite(&self, title: &str) {
        let mut total = 0;
        let changed = self.state.send_if_modified(|set| {
            let removed = set.remove(title);
            total = set.len();
            removed > 0
        });
        if changed {
            LogContext::favorites_change("removed", title, total);
        }
    }

    /// Receiver that is marked changed after every effective mutation
    pub fn subscribe(&self) -> watch::Receiver<FavoriteMovieSet> {
        self.state.subscribe()
    }
}

/// Install a fresh, empty store in `scope`.
///
/// If the scope (or an ancestor) already provides one, that instance is
/// returned unchanged. Racing callers all get the store the scope holds.
pub fn provide_favorites(scope: &SessionScope) -> Arc<FavoritesStore> {
    if let Some(existing) = scope.try_state::<FavoritesStore>() {
        return existing;
    }
    scope.provide_arc(Arc::new(FavoritesStore::new()))
}

/// Resolve the favorites store for a consumer.
///
/// Fails with `ContextUnavailable` when no enclosing scope provides one;
/// never hands out a detached empty store.
pub fn use_favorite_movies(scope: &SessionScope) -> AppResult<Arc<FavoritesStore>> {
    scope.state::<FavoritesStore>()
}
