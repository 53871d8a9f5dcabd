/// Shared infrastructure concerns
///
/// Implementations used by more than one module: the outbound HTTP client and
/// the session scope that owns per-session services.
pub mod http_client;
pub mod session_scope;

// Re-exports for convenience
pub use http_client::RateLimitClient;
pub use session_scope::SessionScope;
