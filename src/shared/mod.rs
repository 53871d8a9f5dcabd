// Shared kernel: cross-module errors, configuration and infrastructure

pub mod config; // Environment-driven configuration
pub mod errors; // Shared error types
pub mod infrastructure; // HTTP client, session scope
pub mod utils; // Logging helpers

// Re-exports for convenience
pub use config::Config;
pub use errors::{AppError, AppResult};
pub use infrastructure::SessionScope;
