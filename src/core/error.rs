//! Error taxonomy.
//!
//! The engine performs no I/O, so every failure is logical:
//! - `FormatError`: a color string that isn't `#RGB` / `#RRGGBB`
//! - `ContractError`: the presentation layer sent an event the current
//!   session can't accept (unknown candidate, wrong phase, no selection)
//! - `ConfigError`: a mode configuration outside supported bounds
//! - `RoundError`: candidates and target that don't form a round
//! - `CheckpointError`: a decoded session that play could not produce
//!
//! `EngineError` is what controller-level calls return.

use thiserror::Error;

use super::color::{ColorId, HexColor};

/// A malformed hex color string.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum FormatError {
    #[error("expected 3 or 6 hex digits, found {0}")]
    Length(usize),
    #[error("invalid hex digit {digit:?} in {input:?}")]
    Digit { input: String, digit: char },
}

/// The caller broke the engine's call contract.
///
/// These indicate a presentation-layer bug, not a recoverable condition.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ContractError {
    #[error("candidate {id} is not part of round {round}")]
    UnknownCandidate { id: ColorId, round: u32 },
    #[error("submit requires a selected candidate")]
    NoSelection,
    #[error("event {event} is not valid while {phase}")]
    InvalidTransition {
        event: &'static str,
        phase: &'static str,
    },
}

/// A mode configuration the engine refuses to run.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("candidate count must be in 1..={max}, got {count}")]
    CandidateCount { count: usize, max: usize },
    #[error("round-count mode needs at least one round")]
    ZeroRounds,
    #[error("life-based mode needs at least one life")]
    ZeroLives,
}

/// Candidates and target that don't form a valid round.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum RoundError {
    #[error("Round needs at least one candidate")]
    Empty,
    #[error("Candidate ids must be 0..len, found {found} at position {position}")]
    IdOrder { position: usize, found: ColorId },
    #[error("Duplicate candidate {0}")]
    Duplicate(HexColor),
    #[error("Target must be a candidate, got {target} of {len}")]
    Target { target: ColorId, len: usize },
}

/// A decoded session that breaks an invariant the state machine keeps.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum CheckpointError {
    #[error(transparent)]
    Mode(#[from] ConfigError),
    #[error("session {phase} without a round")]
    MissingRound { phase: &'static str },
    #[error("session not started but holds a round")]
    UnexpectedRound,
    #[error("round has {len} candidates, mode expects {expected}")]
    RoundSize { len: usize, expected: usize },
    #[error("selected {id} is not part of the round")]
    Selection { id: ColorId },
    #[error("lives {lives:?} don't match the termination policy")]
    Lives { lives: Option<u32> },
}

/// Any error surfaced by the engine.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error(transparent)]
    Format(#[from] FormatError),
    #[error(transparent)]
    Contract(#[from] ContractError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("invalid checkpoint: {0}")]
    Checkpoint(#[from] CheckpointError),
    #[error("checkpoint codec failed: {0}")]
    Codec(#[from] bincode::Error),
}

impl EngineError {
    /// The contract violation, if this is one.
    #[must_use]
    pub fn as_contract(&self) -> Option<&ContractError> {
        match self {
            EngineError::Contract(err) => Some(err),
            _ => None,
        }
    }
}

/// Engine result alias.
pub type Result<T, E = EngineError> = std::result::Result<T, E>;
