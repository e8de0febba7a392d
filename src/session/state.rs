//! Session value object.
//!
//! A `Session` is the whole mutable state of one playthrough. It is a
//! plain value: the state machine takes `&Session` and returns a new one,
//! and the history uses `im::Vector` so those copies stay cheap.

use im::Vector;
use serde::{Deserialize, Deserializer, Serialize};

use crate::core::{CheckpointError, ColorId, HexColor, ModeConfig, Termination};
use crate::round::Round;

/// Result of judging a submission.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Feedback {
    Correct,
    Wrong,
}

impl Feedback {
    #[must_use]
    pub const fn is_correct(self) -> bool {
        matches!(self, Feedback::Correct)
    }
}

impl std::fmt::Display for Feedback {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Feedback::Correct => "Correct",
            Feedback::Wrong => "Wrong",
        })
    }
}

/// Where the session is in its lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Mode picked, game not started.
    NotStarted,
    /// A round is on screen, waiting for Select/Submit/Skip.
    InRound,
    /// The round was judged, waiting for Next.
    Answered(Feedback),
    /// Terminal condition met.
    GameOver,
}

impl Phase {
    /// Stable name for logs and error messages.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Phase::NotStarted => "not started",
            Phase::InRound => "in round",
            Phase::Answered(_) => "answered",
            Phase::GameOver => "game over",
        }
    }
}

/// How a finished round ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    Correct,
    Wrong,
    Skipped,
}

impl From<Feedback> for Outcome {
    fn from(feedback: Feedback) -> Self {
        match feedback {
            Feedback::Correct => Outcome::Correct,
            Feedback::Wrong => Outcome::Wrong,
        }
    }
}

/// One finished round, kept for the results screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundRecord {
    /// 1-based round index.
    pub index: u32,
    /// The color the player had to find.
    pub target: HexColor,
    pub outcome: Outcome,
}

/// State of one playthrough.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub(crate) mode: ModeConfig,
    pub(crate) phase: Phase,
    /// 1-based; 0 before the game starts.
    pub(crate) round_index: u32,
    pub(crate) score: u32,
    /// `None` in round-count mode.
    pub(crate) lives: Option<u32>,
    pub(crate) round: Option<Round>,
    pub(crate) selected: Option<ColorId>,
    pub(crate) feedback: Option<Feedback>,
    /// Last revealed target, painted behind the board.
    pub(crate) backdrop: HexColor,
    #[serde(deserialize_with = "deserialize_history")]
    pub(crate) history: Vector<RoundRecord>,
}

/// Decode through `Vec`, whose preallocation is capped, instead of
/// trusting the encoded length.
fn deserialize_history<'de, D>(deserializer: D) -> Result<Vector<RoundRecord>, D::Error>
where
    D: Deserializer<'de>,
{
    Vec::<RoundRecord>::deserialize(deserializer).map(Vector::from)
}

impl Session {
    /// Fresh session in `NotStarted` for the given mode.
    #[must_use]
    pub fn new(mode: ModeConfig) -> Self {
        Self {
            mode,
            phase: Phase::NotStarted,
            round_index: 0,
            score: 0,
            lives: None,
            round: None,
            selected: None,
            feedback: None,
            backdrop: HexColor::WHITE,
            history: Vector::new(),
        }
    }

    #[must_use]
    pub fn mode(&self) -> &ModeConfig {
        &self.mode
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn round_index(&self) -> u32 {
        self.round_index
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Remaining lives; `None` in round-count mode.
    #[must_use]
    pub fn lives(&self) -> Option<u32> {
        self.lives
    }

    /// The round on screen, if any.
    #[must_use]
    pub fn round(&self) -> Option<&Round> {
        self.round.as_ref()
    }

    #[must_use]
    pub fn selected(&self) -> Option<ColorId> {
        self.selected
    }

    /// Feedback for the last submission.
    #[must_use]
    pub fn feedback(&self) -> Option<Feedback> {
        self.feedback
    }

    #[must_use]
    pub fn backdrop(&self) -> HexColor {
        self.backdrop
    }

    /// Finished rounds, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<RoundRecord> {
        &self.history
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    /// Whether the session must end instead of advancing.
    ///
    /// Round-count mode: the current round is the last one.
    /// Life-based mode: no lives left.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        match self.mode.termination {
            Termination::Rounds { total } => self.round_index >= total,
            Termination::Lives { .. } => self.lives == Some(0),
        }
    }

    /// Check a session that didn't come from `transition`.
    ///
    /// Every phase but `NotStarted` needs a round of the mode's size, the
    /// selection has to be one of its candidates, and lives must match
    /// the termination policy.
    pub fn validate(&self) -> Result<(), CheckpointError> {
        match (self.phase, &self.round) {
            (Phase::NotStarted, Some(_)) => return Err(CheckpointError::UnexpectedRound),
            (Phase::NotStarted, None) => {}
            (phase, None) => {
                return Err(CheckpointError::MissingRound {
                    phase: phase.name(),
                })
            }
            (_, Some(round)) => {
                self.mode.validate()?;
                if round.len() != self.mode.candidate_count {
                    return Err(CheckpointError::RoundSize {
                        len: round.len(),
                        expected: self.mode.candidate_count,
                    });
                }
                if let Some(id) = self.selected.filter(|&id| !round.contains(id)) {
                    return Err(CheckpointError::Selection { id });
                }
            }
        }

        let lives_match = match self.mode.termination {
            Termination::Rounds { .. } => self.lives.is_none(),
            Termination::Lives { .. } => self.lives.is_some() || self.phase == Phase::NotStarted,
        };
        if !lives_match {
            return Err(CheckpointError::Lives { lives: self.lives });
        }
        Ok(())
    }

    /// Count of history entries with the given outcome.
    #[must_use]
    pub fn count(&self, outcome: Outcome) -> usize {
        self.history.iter().filter(|r| r.outcome == outcome).count()
    }
}
