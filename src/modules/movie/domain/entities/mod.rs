pub mod movie;

pub use movie::{parse_movie_id, Genre, Movie, MovieCollection, ProductionCompany};
