//! Rounds and round generation.
//!
//! A `Round` is one question: `k` distinct candidate swatches, one of
//! which is the target the player has to find. `generate_round` builds one
//! from a `GameRng`.

pub mod generator;

pub use generator::{draw_hex_color, generate_round};

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{Color, ColorId, HexColor, RoundError};

/// Candidate storage. Challenge mode's 6 swatches fit without allocating.
pub type Candidates = SmallVec<[Color; 6]>;

/// One question instance.
///
/// Decoding goes through `Round::try_new`, so a deserialized round holds
/// the same invariants as a generated one.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawRound")]
pub struct Round {
    candidates: Candidates,
    target: ColorId,
}

/// Wire shape of `Round` before validation.
///
/// Candidates decode into a `Vec` so a forged length can't make the
/// decoder preallocate a huge buffer.
#[derive(Deserialize)]
struct RawRound {
    candidates: Vec<Color>,
    target: ColorId,
}

impl TryFrom<RawRound> for Round {
    type Error = RoundError;

    fn try_from(raw: RawRound) -> Result<Self, Self::Error> {
        Round::try_new(raw.candidates.into_iter().collect(), raw.target)
    }
}

impl Round {
    /// Build a round from candidates and a target.
    ///
    /// Panics if the candidates aren't pairwise distinct, if their ids
    /// aren't `0..len` in order, or if `target` isn't one of them.
    #[must_use]
    pub fn new(candidates: Candidates, target: ColorId) -> Self {
        match Self::try_new(candidates, target) {
            Ok(round) => round,
            Err(err) => panic!("{}", err),
        }
    }

    /// Fallible form of `new`.
    pub fn try_new(candidates: Candidates, target: ColorId) -> Result<Self, RoundError> {
        if candidates.is_empty() {
            return Err(RoundError::Empty);
        }
        for (position, color) in candidates.iter().enumerate() {
            if color.id.index() != position {
                return Err(RoundError::IdOrder {
                    position,
                    found: color.id,
                });
            }
            if candidates[..position].iter().any(|c| c.hex == color.hex) {
                return Err(RoundError::Duplicate(color.hex));
            }
        }
        if target.index() >= candidates.len() {
            return Err(RoundError::Target {
                target,
                len: candidates.len(),
            });
        }

        Ok(Self { candidates, target })
    }

    /// All candidates in id order.
    #[must_use]
    pub fn candidates(&self) -> &[Color] {
        &self.candidates
    }

    /// Number of candidates.
    #[must_use]
    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    /// The target's id.
    #[must_use]
    pub fn target_id(&self) -> ColorId {
        self.target
    }

    /// The target swatch.
    #[must_use]
    pub fn target(&self) -> &Color {
        &self.candidates[self.target.index()]
    }

    /// The hex code shown to the player.
    #[must_use]
    pub fn prompt(&self) -> HexColor {
        self.target().hex
    }

    /// Look up a candidate by id.
    #[must_use]
    pub fn get(&self, id: ColorId) -> Option<&Color> {
        self.candidates.get(id.index())
    }

    #[must_use]
    pub fn contains(&self, id: ColorId) -> bool {
        id.index() < self.candidates.len()
    }

    /// Whether `id` is the target.
    #[must_use]
    pub fn is_target(&self, id: ColorId) -> bool {
        id == self.target
    }
}
