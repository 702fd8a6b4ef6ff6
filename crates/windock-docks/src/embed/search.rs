//! Bounded search for a window that is not open yet.

use tracing::{debug, info};
use windock_platform::WindowSystem;

use super::{EmbedState, EmbeddingController};

/// Result of one search poll.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchOutcome {
    /// The window was found and attached.
    Found,
    /// Not found yet; `attempts` failed polls so far.
    Pending { attempts: u32 },
    /// The budget ran out and the dock stays on its placeholder.
    Exhausted,
    /// No search was in progress.
    Inactive,
}

impl SearchOutcome {
    /// Whether the timer driving the search should stop.
    pub fn is_finished(self) -> bool {
        !matches!(self, SearchOutcome::Pending { .. })
    }
}

impl EmbeddingController {
    /// Enter `SearchPending` with a budget of `max_attempts` polls.
    ///
    /// Ignored while a window is attached.
    pub fn begin_search(&mut self, max_attempts: u32) {
        if self.is_attached() {
            return;
        }
        self.state = EmbedState::SearchPending {
            attempts: 0,
            max_attempts: max_attempts.max(1),
        };
    }

    pub fn is_searching(&self) -> bool {
        matches!(self.state, EmbedState::SearchPending { .. })
    }

    /// Run one poll of the search.
    pub fn poll_search(&mut self, ws: &dyn WindowSystem) -> SearchOutcome {
        let EmbedState::SearchPending {
            attempts,
            max_attempts,
        } = self.state
        else {
            return SearchOutcome::Inactive;
        };

        if let Some(window) = self.lookup(ws) {
            self.attach(ws, window);
            return SearchOutcome::Found;
        }

        let attempts = attempts + 1;
        if attempts >= max_attempts {
            info!(
                title = %self.target_title,
                attempts,
                "window not found, giving up search"
            );
            self.state = EmbedState::Unattached;
            SearchOutcome::Exhausted
        } else {
            debug!(title = %self.target_title, attempt = attempts, "window not found yet");
            self.state = EmbedState::SearchPending {
                attempts,
                max_attempts,
            };
            SearchOutcome::Pending { attempts }
        }
    }
}
