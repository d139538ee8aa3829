// src/batch/state.rs

/// Progress of a batch run.
///
/// `Idle -> AwaitingDecode` when a file is loaded, `AwaitingDecode -> Advancing`
/// when its result (text or error) arrives, then back to `AwaitingDecode` while
/// files remain or on to `Done`, which is when the output gets written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BatchState {
    Idle,
    AwaitingDecode,
    Advancing,
    Done,
}

impl BatchState {
    /// Moves past `Idle` or `Advancing`: load the next file if there is one, else finish.
    pub fn advance(self, files_remaining: bool) -> BatchState {
        let next = match self {
            BatchState::Idle | BatchState::Advancing if files_remaining => {
                BatchState::AwaitingDecode
            }
            BatchState::Idle | BatchState::Advancing => BatchState::Done,
            other => {
                tracing::warn!("Ignoring advance while in {:?}", other);
                other
            }
        };
        tracing::trace!("Batch state {:?} -> {:?}", self, next);
        next
    }

    /// The current file's result arrived, success or failure alike.
    pub fn decoded(self) -> BatchState {
        match self {
            BatchState::AwaitingDecode => {
                tracing::trace!("Batch state AwaitingDecode -> Advancing");
                BatchState::Advancing
            }
            other => {
                tracing::warn!("Ignoring decode completion while in {:?}", other);
                other
            }
        }
    }
}
