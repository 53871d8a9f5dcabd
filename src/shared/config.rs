//! Runtime configuration.
//!
//! Everything is read from environment variables; a `.env` file is honoured
//! for local development. The TMDB API key is optional here; its
//! absence is reported by the metadata adapter when a load is attempted.

/// A custom error type for configuration loading failures.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid value for the environment variable {0}: {1}")]
    InvalidValue(String, String),
}

pub const DEFAULT_TMDB_BASE_URL: &str = "https://api.themoviedb.org/3";
pub const DEFAULT_TMDB_IMAGE_BASE_URL: &str = "https://image.tmdb.org/t/p";
pub const DEFAULT_STORY_API_URL: &str = "https://video-app-api-sigma.vercel.app";
pub const DEFAULT_SHARE_BASE_URL: &str = "https://assessment-video.vercel.app";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub tmdb_api_key: Option<String>,
    pub tmdb_base_url: String,
    pub tmdb_image_base_url: String,
    pub story_api_url: String,
    pub share_base_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tmdb_api_key: None,
            tmdb_base_url: DEFAULT_TMDB_BASE_URL.to_string(),
            tmdb_image_base_url: DEFAULT_TMDB_IMAGE_BASE_URL.to_string(),
            story_api_url: DEFAULT_STORY_API_URL.to_string(),
            share_base_url: DEFAULT_SHARE_BASE_URL.to_string(),
        }
    }
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// The `.env` file is skipped in test builds so tests stay hermetic.
    pub fn from_env() -> Result<Self, ConfigError> {
        if !cfg!(test) {
            dotenvy::dotenv().ok();
        }

        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds a configuration from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let tmdb_api_key = lookup("TMDB_API_KEY")
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty());

        Ok(Self {
            tmdb_api_key,
            tmdb_base_url: url_var(&lookup, "TMDB_BASE_URL", DEFAULT_TMDB_BASE_URL)?,
            tmdb_image_base_url: url_var(
                &lookup,
                "TMDB_IMAGE_BASE_URL",
                DEFAULT_TMDB_IMAGE_BASE_URL,
            )?,
            story_api_url: url_var(&lookup, "STORY_API_URL", DEFAULT_STORY_API_URL)?,
            share_base_url: url_var(&lookup, "SHARE_BASE_URL", DEFAULT_SHARE_BASE_URL)?,
        })
    }

    pub fn with_tmdb_api_key(mut self, key: impl Into<String>) -> Self {
        self.tmdb_api_key = Some(key.into());
        self
    }
}

fn url_var<F>(lookup: &F, name: &str, default: &str) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(name) {
        None => Ok(default.to_string()),
        Some(value) => {
            let value = value.trim().trim_end_matches('/');
            if !(value.starts_with("http://") || value.starts_with("https://")) {
                return Err(ConfigError::InvalidValue(
                    name.to_string(),
                    format!("expected an http(s) URL, got '{}'", value),
                ));
            }
            Ok(value.to_string())
        }
    }
}
