pub mod story_api_client;

pub use story_api_client::StoryApiClient;
