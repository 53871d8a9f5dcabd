use crate::shared::errors::AppResult;
use serde::Serialize;

/// Loading state of the generated story for one detail view.
///
/// `Empty → Pending → Ready | Failed`. Each non-empty state is keyed by the
/// movie it belongs to; a new movie restarts the machine at `Pending`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum StoryState {
    #[default]
    Empty,
    Pending { movie_id: u32 },
    Ready { movie_id: u32, story: String },
    Failed { movie_id: u32, reason: String },
}

impl StoryState {
    pub fn begin(movie_id: u32) -> Self {
        StoryState::Pending { movie_id }
    }

    /// Settle a pending request.
    ///
    /// Returns `None` unless `self` is `Pending` for the same movie, so a
    /// late or foreign result can never produce `Ready` out of order.
    pub fn resolve(&self, movie_id: u32, outcome: AppResult<String>) -> Option<StoryState> {
        match self {
            StoryState::Pending { movie_id: pending } if *pending == movie_id => {
                Some(match outcome {
                    Ok(story) => StoryState::Ready { movie_id, story },
                    Err(e) => StoryState::Failed {
                        movie_id,
                        reason: e.to_string(),
                    },
                })
            }
            _ => None,
        }
    }

    pub fn movie_id(&self) -> Option<u32> {
        match self {
            StoryState::Empty => None,
            StoryState::Pending { movie_id }
            | StoryState::Ready { movie_id, .. }
            | StoryState::Failed { movie_id, .. } => Some(*movie_id),
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, StoryState::Pending { .. })
    }

    pub fn is_settled(&self) -> bool {
        matches!(self, StoryState::Ready { .. } | StoryState::Failed { .. })
    }

    pub fn story(&self) -> Option<&str> {
        match self {
            StoryState::Ready { story, .. } => Some(story),
            _ => None,
        }
    }
}
