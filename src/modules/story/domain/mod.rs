pub mod story_generator;
pub mod story_state;

pub use story_generator::StoryGenerator;
pub use story_state::StoryState;
