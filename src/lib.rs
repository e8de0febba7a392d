//! # truecolor
//!
//! Round engine for a guess-the-hex-color quiz.
//!
//! The player sees a hex code such as `#A1B2C3` and has to pick the
//! matching swatch out of a few generated candidates, over a fixed number
//! of rounds or until their lives run out.
//!
//! ## Design Principles
//!
//! 1. **Sessions are values**: every transition is a pure
//!    `(Session, Event) -> Session`. A rejected event leaves the old value
//!    in place.
//!
//! 2. **Configuration Over Convention**: candidate count, termination and
//!    skip penalty come from `ModeConfig`, not from per-screen copies.
//!
//! 3. **Deterministic**: all randomness flows from a seeded `GameRng`, so a
//!    game can be replayed or checkpointed.
//!
//! 4. **No I/O**: the host persists high scores and theme; the engine only
//!    parses what it is given and reports what should be written.
//!
//! ## Modules
//!
//! - `core`: Colors, RNG, mode configuration, errors
//! - `round`: Rounds and rejection-sampling round generation
//! - `session`: Session state machine and the host-facing controller
//! - `profile`: High-score table and theme preference

pub mod core;
pub mod profile;
pub mod round;
pub mod session;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{
    inverse_hex_color, CheckpointError, Color, ColorId, ConfigError, ContractError, Difficulty,
    EngineError, FormatError, GameRng, GameRngState, HexColor, ModeConfig, RoundError,
    Termination, MAX_CANDIDATES,
};

pub use crate::round::{generate_round, Round};

pub use crate::session::{
    transition, Effect, Event, Feedback, GameController, Outcome, Phase, RoundRecord, Session,
    Snapshot, MAX_CHECKPOINT_BYTES,
};

pub use crate::profile::{HighScoreTable, ResultSummary, Theme};
