use crate::shared::config::DEFAULT_TMDB_IMAGE_BASE_URL;

/// Image sizes served by the TMDB image CDN that the UI uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageSize {
    Original,
    W500,
    W300,
}

impl ImageSize {
    pub fn as_str(&self) -> &'static str {
        match self {
            ImageSize::Original => "original",
            ImageSize::W500 => "w500",
            ImageSize::W300 => "w300",
        }
    }
}

/// Builds absolute image URLs from the relative paths returned by TMDB.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageUrlBuilder {
    base_url: String,
}

impl Default for ImageUrlBuilder {
    fn default() -> Self {
        Self::new(DEFAULT_TMDB_IMAGE_BASE_URL)
    }
}

impl ImageUrlBuilder {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn build(&self, file_path: &str, size: ImageSize) -> String {
        format!("{}/{}{}", self.base_url, size.as_str(), file_path)
    }

    /// `None` when the movie has no image at all.
    pub fn build_optional(&self, file_path: Option<&str>, size: ImageSize) -> Option<String> {
        file_path
            .filter(|p| !p.is_empty())
            .map(|p| self.build(p, size))
    }
}
