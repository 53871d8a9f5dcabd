pub mod domain;
pub mod infrastructure;

// Re-exports for easy external access
pub use domain::{StoryGenerator, StoryState};
pub use infrastructure::StoryApiClient;
