pub mod favorites;
pub mod movie;
pub mod movie_detail;
pub mod story;
