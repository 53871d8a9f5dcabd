pub mod favorite_movies;

pub use favorite_movies::FavoriteMovieSet;
