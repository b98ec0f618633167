//! Screen load state.
//!
//! A screen starts a load, and the result arrives later. If the user has
//! navigated away or started a newer load in the meantime, the late result
//! is dropped instead of overwriting fresher state. Nothing retries on its
//! own; a retry is just another `begin`.

use serde::Serialize;

use super::UserNotice;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", content = "data", rename_all = "snake_case")]
pub enum ViewState<T> {
    Loading,
    Ready(T),
    Failed(UserNotice),
}

impl<T> ViewState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, ViewState::Loading)
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            ViewState::Ready(value) => Some(value),
            _ => None,
        }
    }

    pub fn notice(&self) -> Option<&UserNotice> {
        match self {
            ViewState::Failed(notice) => Some(notice),
            _ => None,
        }
    }
}

/// Identifies one load started by [`ScreenLoader::begin`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket(u64);

/// Holds a screen's [`ViewState`] and discards stale load results.
#[derive(Debug)]
pub struct ScreenLoader<T> {
    state: ViewState<T>,
    latest: u64,
    mounted: bool,
}

impl<T> ScreenLoader<T> {
    pub fn new() -> Self {
        Self {
            state: ViewState::Loading,
            latest: 0,
            mounted: true,
        }
    }

    /// Starts a load; any earlier ticket becomes stale.
    pub fn begin(&mut self) -> LoadTicket {
        self.latest += 1;
        self.state = ViewState::Loading;
        LoadTicket(self.latest)
    }

    /// Delivers a load result. Returns false if it was discarded.
    pub fn complete(&mut self, ticket: LoadTicket, result: Result<T, UserNotice>) -> bool {
        if !self.mounted {
            tracing::debug!(ticket = ticket.0, "Discarding load result after unmount");
            return false;
        }
        if ticket.0 != self.latest {
            tracing::debug!(
                ticket = ticket.0,
                latest = self.latest,
                "Discarding stale load result"
            );
            return false;
        }
        self.state = match result {
            Ok(value) => ViewState::Ready(value),
            Err(notice) => ViewState::Failed(notice),
        };
        true
    }

    /// The screen went away; later results are ignored.
    pub fn unmount(&mut self) {
        self.mounted = false;
    }

    pub fn state(&self) -> &ViewState<T> {
        &self.state
    }

    pub fn into_state(self) -> ViewState<T> {
        self.state
    }
}

impl<T> Default for ScreenLoader<T> {
    fn default() -> Self {
        Self::new()
    }
}
