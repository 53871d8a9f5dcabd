pub mod application;
pub mod commands;
pub mod domain;

// Re-exports for easy external access
pub use application::{MovieDetailContext, MovieDetailLoader, MovieDetailProps, MovieDetailViewModel};
pub use domain::{DetailView, ShareModalState, StoryPanel};
