//! Session controller: one synchronous entry point per turn.
//!
//! The controller never chooses a move itself. Human callers submit a
//! candidate through [`SessionController::request_move`]; automated sides
//! go through [`SessionController::request_automated_move`], which runs
//! the injected policy, re-validates its selection and applies it. All
//! mutation happens on the calling thread; a slow policy runs on a worker
//! and is simply abandoned on timeout, so the game state can never be
//! corrupted by a stuck selection.

use std::sync::mpsc;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use chess_rules::{Color, EngineError, Move, MovePolicy, MoveRecord, Position};
use tracing::warn;

use crate::game::{GameState, GameStatus, HistoryEntry};

/// Which sides are driven by the injected policy. Mirrors the game modes
/// a driver typically offers: two local humans, human against the
/// machine, or machine self-play.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    HumanVsHuman,
    HumanVsAuto { automated: Color },
    AutoVsAuto,
}

impl GameMode {
    pub fn is_automated(&self, color: Color) -> bool {
        match *self {
            GameMode::HumanVsHuman => false,
            GameMode::HumanVsAuto { automated } => color == automated,
            GameMode::AutoVsAuto => true,
        }
    }
}

/// Public state reported to the caller after every successful move.
#[derive(Debug, Clone)]
pub struct TurnReport {
    pub record: MoveRecord,
    pub fen: String,
    pub status: GameStatus,
    pub in_check: bool,
}

pub struct SessionController {
    game: GameState,
    mode: GameMode,
    policy: Option<Arc<dyn MovePolicy>>,
    policy_budget: Option<Duration>,
}

impl SessionController {
    pub fn new(mode: GameMode) -> Self {
        Self {
            game: GameState::new(),
            mode,
            policy: None,
            policy_budget: None,
        }
    }

    /// Start from an arbitrary position, e.g. a practice setup.
    pub fn from_fen(fen: &str, mode: GameMode) -> Result<Self, EngineError> {
        Ok(Self {
            game: GameState::from_fen(fen)?,
            mode,
            policy: None,
            policy_budget: None,
        })
    }

    /// Inject the automated mover. Required before any
    /// `request_automated_move` call can succeed.
    pub fn with_policy(mut self, policy: Arc<dyn MovePolicy>) -> Self {
        self.policy = Some(policy);
        self
    }

    /// Cap how long a policy may take to select. Without a budget the
    /// controller waits indefinitely on the calling thread.
    pub fn with_policy_budget(mut self, budget: Duration) -> Self {
        self.policy_budget = Some(budget);
        self
    }

    /// Reset to this session's initial position, keeping mode and policy.
    pub fn new_game(&mut self) {
        self.game.reset();
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    pub fn current_status(&self) -> GameStatus {
        self.game.status()
    }

    pub fn to_fen(&self) -> String {
        self.game.to_fen()
    }

    pub fn history(&self) -> &[HistoryEntry] {
        self.game.history()
    }

    pub fn last_move(&self) -> Option<&MoveRecord> {
        self.game.last_move()
    }

    pub fn in_check(&self) -> bool {
        self.game.in_check()
    }

    pub fn position(&self) -> &Position {
        self.game.position()
    }

    pub fn legal_moves(&self) -> Vec<Move> {
        self.game.legal_moves()
    }

    pub fn legal_moves_from(&self, from: u8) -> Vec<Move> {
        self.game.legal_moves_from(from)
    }

    pub fn is_automated_turn(&self) -> bool {
        self.mode.is_automated(self.game.position().side_to_move)
    }

    /// Submit a move on behalf of a human-controlled side.
    pub fn request_move(&mut self, candidate: Move) -> Result<TurnReport, EngineError> {
        let side = self.game.position().side_to_move;
        if self.mode.is_automated(side) {
            warn!(?side, "rejected manual move for an automated side");
            return Err(EngineError::IllegalMove);
        }
        self.apply_and_report(candidate)
    }

    /// Let the injected policy move for the automated side to move.
    pub fn request_automated_move(&mut self) -> Result<TurnReport, EngineError> {
        let side = self.game.position().side_to_move;
        if !self.mode.is_automated(side) {
            warn!(?side, "rejected automated move: side is human-controlled");
            return Err(EngineError::IllegalMove);
        }
        if self.game.status().is_terminal() {
            warn!(status = ?self.game.status(), "rejected automated move: game is over");
            return Err(EngineError::IllegalMove);
        }
        let policy = match &self.policy {
            Some(p) => Arc::clone(p),
            None => {
                warn!("rejected automated move: no policy configured");
                return Err(EngineError::IllegalMove);
            }
        };

        let legal = self.game.legal_moves();
        let name = policy.name().to_string();
        let selected = match self.run_policy(policy, &legal)? {
            Some(mv) => mv,
            None => {
                warn!(policy = %name, "policy declined to select from a non-empty set");
                return Err(EngineError::IllegalMove);
            }
        };
        if !legal.contains(&selected) {
            warn!(policy = %name, ?selected, "policy selected a move outside the legal set");
            return Err(EngineError::IllegalMove);
        }
        self.apply_and_report(selected)
    }

    /// Undo the last ply. In human-vs-auto, when the popped ply hands the
    /// turn to the machine, the automated reply is popped too so the human
    /// is to move again.
    pub fn undo(&mut self) -> Result<(), EngineError> {
        self.game.undo()?;
        if let GameMode::HumanVsAuto { automated } = self.mode {
            if self.game.position().side_to_move == automated && self.game.ply_count() > 0 {
                self.game.undo()?;
            }
        }
        Ok(())
    }

    fn apply_and_report(&mut self, mv: Move) -> Result<TurnReport, EngineError> {
        let record = self.game.apply_move(mv)?;
        Ok(TurnReport {
            record,
            fen: self.game.to_fen(),
            status: self.game.status(),
            in_check: self.game.in_check(),
        })
    }

    // Run the policy, on a worker thread when a budget is set. The worker
    // gets clones only; on timeout its eventual result is discarded along
    // with the channel, leaving the game untouched.
    fn run_policy(
        &self,
        policy: Arc<dyn MovePolicy>,
        legal: &[Move],
    ) -> Result<Option<Move>, EngineError> {
        match self.policy_budget {
            None => Ok(policy.select_move(self.game.position(), legal)),
            Some(budget) => {
                let (tx, rx) = mpsc::channel();
                let position = self.game.position().clone();
                let moves = legal.to_vec();
                thread::spawn(move || {
                    let _ = tx.send(policy.select_move(&position, &moves));
                });
                match rx.recv_timeout(budget) {
                    Ok(selected) => Ok(selected),
                    Err(_) => {
                        warn!(?budget, "policy timed out; abandoning the pending selection");
                        Err(EngineError::PolicyTimeout { budget })
                    }
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod session_tests;
