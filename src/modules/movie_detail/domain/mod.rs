pub mod audio;
pub mod detail_view;
pub mod share;

pub use audio::{
    AudioClip, DownloadSink, DownloadTrigger, FileDownloadSink, ObjectUrlGuard, ObjectUrlRegistry,
};
pub use detail_view::{DetailView, MovieDetailView, SimilarCard, StoryPanel};
pub use share::{build_share_link, ShareModalState};
