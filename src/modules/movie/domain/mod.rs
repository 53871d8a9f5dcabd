pub mod entities;
pub mod repositories;
pub mod value_objects;

pub use entities::{parse_movie_id, Genre, Movie, MovieCollection, ProductionCompany};
pub use repositories::MovieProviderRepository;
pub use value_objects::{ImageSize, ImageUrlBuilder};
