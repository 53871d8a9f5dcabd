use serde::Serialize;

/// Public link to a movie's detail page: `{base}/movies/{id}`
pub fn build_share_link(base_url: &str, route_id: &str) -> String {
    format!(
        "{}/movies/{}",
        base_url.trim_end_matches('/'),
        urlencoding::encode(route_id.trim())
    )
}

/// Visibility of the share modal and the link it last displayed
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ShareModalState {
    is_open: bool,
    link: Option<String>,
}

impl ShareModalState {
    pub fn open(&mut self, link: String) {
        self.link = Some(link);
        self.is_open = true;
    }

    /// Hides the modal; the last link stays available.
    pub fn close(&mut self) {
        self.is_open = false;
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn link(&self) -> Option<&str> {
        self.link.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn link_puts_id_after_movies_segment() {
        assert_eq!(
            build_share_link("https://assessment-video.vercel.app", "603"),
            "https://assessment-video.vercel.app/movies/603"
        );
        assert_eq!(
            build_share_link("http://localhost:3000/", " 603 "),
            "http://localhost:3000/movies/603"
        );
    }

    #[test]
    fn route_ids_are_encoded() {
        assert_eq!(build_share_link("http://x", "a b/c"), "http://x/movies/a%20b%2Fc");
    }

    #[test]
    fn close_keeps_last_link() {
        let mut modal = ShareModalState::default();
        assert!(!modal.is_open());
        assert_eq!(modal.link(), None);

        modal.open("http://x/movies/603".to_string());
        assert!(modal.is_open());

        modal.close();
        assert!(!modal.is_open());
        assert_eq!(modal.link(), Some("http://x/movies/603"));
    }
}
