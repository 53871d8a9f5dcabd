pub mod application;
pub mod commands;
pub mod domain;
pub mod infrastructure;

// Re-exports for easy external access
pub use application::MovieCatalogService;
pub use domain::{parse_movie_id, ImageSize, ImageUrlBuilder, Movie, MovieProviderRepository};
pub use infrastructure::TmdbAdapter;
