//! Load gate for remote resources.
//!
//! Each remote resource of a screen owns one `LoadState`; the screen renders
//! according to their combination.

/// What a fetch that reached the server resolved to.
#[derive(Debug, Clone, PartialEq)]
pub enum RemoteOutcome<T> {
    Ready(T),
    /// The competition has not opened yet.
    NotStarted,
}

impl<T> RemoteOutcome<T> {
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> RemoteOutcome<U> {
        match self {
            RemoteOutcome::Ready(value) => RemoteOutcome::Ready(f(value)),
            RemoteOutcome::NotStarted => RemoteOutcome::NotStarted,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LoadState {
    #[default]
    Pending,
    NotStarted,
    Ready,
}

impl LoadState {
    /// Transition on a resolved fetch. `NotStarted` is terminal.
    pub fn resolve<T>(self, outcome: &RemoteOutcome<T>) -> LoadState {
        match (self, outcome) {
            (LoadState::NotStarted, _) => LoadState::NotStarted,
            (_, RemoteOutcome::NotStarted) => LoadState::NotStarted,
            (_, RemoteOutcome::Ready(_)) => LoadState::Ready,
        }
    }

    /// Screen-level state of two resources: not-started wins, then pending.
    pub fn combine(self, other: LoadState) -> LoadState {
        match (self, other) {
            (LoadState::NotStarted, _) | (_, LoadState::NotStarted) => LoadState::NotStarted,
            (LoadState::Pending, _) | (_, LoadState::Pending) => LoadState::Pending,
            (LoadState::Ready, LoadState::Ready) => LoadState::Ready,
        }
    }

    pub fn is_ready(self) -> bool {
        self == LoadState::Ready
    }
}
