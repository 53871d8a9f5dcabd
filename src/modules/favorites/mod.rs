pub mod application;
pub mod commands;
pub mod domain;

// Re-exports for easy external access
pub use application::{provide_favorites, use_favorite_movies, FavoritesStore};
pub use domain::FavoriteMovieSet;
