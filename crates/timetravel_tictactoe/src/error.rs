//! Engine error types.

use derive_more::{Display, Error};
use tracing::instrument;

/// What went wrong.
///
/// Every kind is an invalid argument: the caller asked for a cell or step
/// that does not exist, or handed in a state that breaks the timeline
/// invariants. Occupied cells and moves after a win are not errors; the
/// engine ignores them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum EngineErrorKind {
    /// Cell index outside 0-8.
    #[display("cell index {index} is out of range (must be 0-8)")]
    CellOutOfRange {
        /// The rejected index.
        index: usize,
    },
    /// Step outside the recorded history.
    #[display("step {step} is out of range (history has {len} entries)")]
    StepOutOfRange {
        /// The rejected step.
        step: usize,
        /// History length at the time of the request.
        len: usize,
    },
    /// Deserialized state breaks timeline invariants.
    #[display("game state violates {violations} timeline invariant(s)")]
    MalformedState {
        /// Number of violated invariants.
        violations: usize,
    },
}

/// Engine error with location tracking.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Invalid argument: {} at {}:{}", kind, file, line)]
pub struct EngineError {
    /// Error kind.
    pub kind: EngineErrorKind,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl EngineError {
    /// Creates a new engine error with caller location tracking.
    #[track_caller]
    #[instrument]
    pub fn new(kind: EngineErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }

    /// Every engine error is an invalid argument.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(
            self.kind,
            EngineErrorKind::CellOutOfRange { .. }
                | EngineErrorKind::StepOutOfRange { .. }
                | EngineErrorKind::MalformedState { .. }
        )
    }
}

impl From<EngineErrorKind> for EngineError {
    #[track_caller]
    fn from(kind: EngineErrorKind) -> Self {
        Self::new(kind)
    }
}
