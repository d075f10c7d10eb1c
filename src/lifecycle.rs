//! Scan lifecycle state machine.
//!
//! Owned by the collaborator that drives scanning, fed by the room model's
//! outputs (typically `stop` is gated on [`crate::RoomModel::is_complete`] or
//! a progress/time heuristic). Completed and Failed are terminal until an
//! explicit reset.

/// Lifecycle state of one scanning session.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ScanState {
    /// No scan has been started.
    #[default]
    NotStarted,
    /// Observations are being ingested.
    Scanning,
    /// Scanning was stopped; the model holds its final contents.
    Completed,
    /// The tracking subsystem reported a failure. The reason is opaque to
    /// this core and carried through for display.
    Failed(String),
}

impl ScanState {
    /// Whether this state requires a reset before scanning can restart.
    pub fn is_terminal(&self) -> bool {
        matches!(self, ScanState::Completed | ScanState::Failed(_))
    }
}

/// Scan session driving the [`ScanState`] machine.
///
/// Invalid transitions are ignored with a warning, never a panic: the
/// tracking collaborator's callbacks can arrive in surprising orders around
/// session teardown.
#[derive(Debug, Clone, Default)]
pub struct ScanSession {
    state: ScanState,
}

impl ScanSession {
    /// Create a session in [`ScanState::NotStarted`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Current lifecycle state.
    pub fn state(&self) -> &ScanState {
        &self.state
    }

    /// Begin scanning. Valid only from NotStarted.
    pub fn start(&mut self) {
        match self.state {
            ScanState::NotStarted => self.state = ScanState::Scanning,
            ref other => log::warn!("ignoring start from {:?}", other),
        }
    }

    /// Stop scanning. Valid only from Scanning.
    pub fn complete(&mut self) {
        match self.state {
            ScanState::Scanning => self.state = ScanState::Completed,
            ref other => log::warn!("ignoring complete from {:?}", other),
        }
    }

    /// Record an externally reported tracking failure. Valid from any state
    /// except an existing failure (the first reason wins).
    pub fn fail(&mut self, reason: impl Into<String>) {
        match self.state {
            ScanState::Failed(_) => log::warn!("ignoring fail: already failed"),
            _ => self.state = ScanState::Failed(reason.into()),
        }
    }

    /// Return to NotStarted from any state.
    pub fn reset(&mut self) {
        self.state = ScanState::NotStarted;
    }
}
