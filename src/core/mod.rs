//! Core engine types: colors, RNG, mode configuration, errors.
//!
//! Everything else in the crate is built from these. None of them know
//! about sessions or phases.

pub mod color;
pub mod config;
pub mod error;
pub mod rng;

pub use color::{inverse_hex_color, Color, ColorId, HexColor};
pub use config::{Difficulty, ModeConfig, Termination, DEFAULT_ROUNDS, MAX_CANDIDATES};
pub use error::{
    CheckpointError, ConfigError, ContractError, EngineError, FormatError, Result, RoundError,
};
pub use rng::{GameRng, GameRngState};
