pub mod store;

pub use store::{provide_favorites, use_favorite_movies, FavoritesStore};
