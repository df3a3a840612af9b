use std::time::Duration;

use thiserror::Error;

/// Every failure the engine can report. All of these are recoverable: the
/// operation is rejected and the caller's state is left at its last valid
/// checkpoint.
#[derive(Debug, Error)]
pub enum EngineError {
    /// The move is not in the legal set for the current position.
    #[error("illegal move for the current position")]
    IllegalMove,
    /// Undo was requested at the initial position.
    #[error("no move history to undo")]
    NoHistory,
    /// A position encoding violated the FEN grammar or a board invariant.
    #[error("malformed position: {reason}")]
    MalformedPosition { reason: String },
    /// An automated move-selection policy exceeded its time budget.
    #[error("move selection policy exceeded its budget of {budget:?}")]
    PolicyTimeout { budget: Duration },
}

impl EngineError {
    pub(crate) fn malformed(reason: impl Into<String>) -> Self {
        EngineError::MalformedPosition {
            reason: reason.into(),
        }
    }
}
