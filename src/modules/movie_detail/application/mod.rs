pub mod context;
pub mod loader;
pub mod story_loader;
pub mod view_model;

pub use context::MovieDetailContext;
pub use loader::{MovieDetailLoader, MovieDetailProps};
pub use story_loader::StoryLoader;
pub use view_model::MovieDetailViewModel;
