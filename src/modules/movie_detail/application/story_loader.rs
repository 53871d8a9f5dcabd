use crate::modules::movie::domain::Movie;
use crate::modules::story::{StoryGenerator, StoryState};
use crate::shared::errors::{AppError, AppResult};
use crate::{log_debug, log_error, log_warn};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError};
use tokio::sync::watch;
use tokio_util::sync::CancellationToken;

struct InFlight {
    movie_id: u32,
    token: CancellationToken,
}

/// Background story fetch for one detail view.
///
/// At most one request is live at a time, keyed by movie id. Asking for a
/// different movie cancels the previous task and bumps the epoch; a result is
/// only applied while its epoch is still current, so a slow response for an
/// earlier movie can never land on the current one.
pub struct StoryLoader {
    generator: Arc<dyn StoryGenerator>,
    state: Arc<watch::Sender<StoryState>>,
    epoch: Arc<AtomicU64>,
    in_flight: Mutex<Option<InFlight>>,
}

impl StoryLoader {
    pub fn new(generator: Arc<dyn StoryGenerator>) -> Self {
        let (state, _) = watch::channel(StoryState::Empty);
        Self {
            generator,
            state: Arc::new(state),
            epoch: Arc::new(AtomicU64::new(0)),
            in_flight: Mutex::new(None),
        }
    }

    pub fn state(&self) -> StoryState {
        self.state.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<StoryState> {
        self.state.subscribe()
    }

    /// Start generating a story for `movie` unless one was already requested
    /// for the same movie.
    pub fn request(&self, movie: &Movie) {
        let mut in_flight = self.in_flight.lock().unwrap_or_else(PoisonError::into_inner);

        if in_flight.as_ref().map(|f| f.movie_id) == Some(movie.id) {
            log_debug!("Story for movie {} already requested", movie.id);
            return;
        }

        if let Some(previous) = in_flight.take() {
            previous.token.cancel();
            log_debug!(
                "Cancelled story request for movie {} in favour of {}",
                previous.movie_id,
                movie.id
            );
        }

        let epoch = self.epoch.fetch_add(1, Ordering::SeqCst) + 1;
        let token = CancellationToken::new();
        self.state.send_replace(StoryState::begin(movie.id));

        let runtime = match tokio::runtime::Handle::try_current() {
            Ok(handle) => handle,
            Err(e) => {
                log_error!("Cannot request story outside of a Tokio runtime: {}", e);
                settle(
                    &self.state,
                    &self.epoch,
                    epoch,
                    movie.id,
                    Err(AppError::Cancelled(format!("no async runtime: {}", e))),
                );
                return;
            }
        };

        // Only a spawned task counts as in flight; a failed start may be retried
        *in_flight = Some(InFlight {
            movie_id: movie.id,
            token: token.clone(),
        });

        let generator = Arc::clone(&self.generator);
        let state = Arc::clone(&self.state);
        let epochs = Arc::clone(&self.epoch);
        let movie = movie.clone();

        runtime.spawn(async move {
            tokio::select! {
                _ = token.cancelled() => {
                    log_debug!("Story request for movie {} cancelled", movie.id);
                }
                outcome = generator.generate_story(&movie) => {
                    if let Err(e) = &outcome {
                        if e.is_fatal() {
                            log_error!("Story generation failed for movie {}: {}", movie.id, e);
                        } else {
                            log_warn!("Story generation failed for movie {}: {}", movie.id, e);
                        }
                    }
                    settle(&state, &epochs, epoch, movie.id, outcome);
                }
            }
        });
    }

    /// Wait until the current request settles (`Ready` or `Failed`).
    ///
    /// Returns immediately with `Empty` when nothing was ever requested.
    pub async fn wait_settled(&self) -> AppResult<StoryState> {
        let mut rx = self.state.subscribe();
        let settled = rx
            .wait_for(|state| state.is_settled() || *state == StoryState::Empty)
            .await
            .map_err(|_| AppError::Cancelled("story loader dropped".to_string()))?;
        Ok(settled.clone())
    }

    /// Cancel whatever is in flight without touching the visible state
    pub fn cancel(&self) {
        let mut in_flight = self.in_flight.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(previous) = in_flight.take() {
            previous.token.cancel();
            self.epoch.fetch_add(1, Ordering::SeqCst);
        }
    }
}

impl Drop for StoryLoader {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// Apply an outcome if `epoch` is still current. Returns whether the state changed.
fn settle(
    state: &watch::Sender<StoryState>,
    epochs: &AtomicU64,
    epoch: u64,
    movie_id: u32,
    outcome: AppResult<String>,
) -> bool {
    state.send_if_modified(|current| {
        if epochs.load(Ordering::SeqCst) != epoch {
            log_debug!("Discarding stale story result for movie {}", movie_id);
            return false;
        }
        match current.resolve(movie_id, outcome) {
            Some(next) => {
                *current = next;
                true
            }
            None => false,
        }
    })
}
