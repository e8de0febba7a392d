//! Mode configuration.
//!
//! A mode bundles everything the engine needs to run a session:
//! - `Difficulty`: which high-score slot the session counts toward
//! - `candidate_count`: swatches per round
//! - `Termination`: fixed round count, or lives with an optional skip penalty
//!
//! Hosts pick a preset or build one, then call `validate()` (the session
//! state machine does this on `Start`).

use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// Largest supported candidate count.
///
/// Rejection sampling slows down as `k` approaches the 2^24 color space;
/// anything past a few dozen swatches is a misconfiguration.
pub const MAX_CANDIDATES: usize = 64;

/// Rounds in a round-count game.
pub const DEFAULT_ROUNDS: u32 = 10;

/// Difficulty tier. Each tier keeps its own high score.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    #[default]
    Normal,
    Challenge,
}

impl Difficulty {
    /// Candidate count the tier uses unless overridden.
    #[must_use]
    pub const fn candidate_count(self) -> usize {
        match self {
            Difficulty::Normal => 3,
            Difficulty::Challenge => 6,
        }
    }

    /// Starting lives for the life-based variant of this tier.
    #[must_use]
    pub const fn initial_lives(self) -> u32 {
        match self {
            Difficulty::Normal => 6,
            Difficulty::Challenge => 3,
        }
    }

    /// Key under which the host persists this tier's high score.
    #[must_use]
    pub const fn storage_key(self) -> &'static str {
        match self {
            Difficulty::Normal => "easy-highscore",
            Difficulty::Challenge => "hard-highscore",
        }
    }

    /// The other tier.
    #[must_use]
    pub const fn alternate(self) -> Self {
        match self {
            Difficulty::Normal => Difficulty::Challenge,
            Difficulty::Challenge => Difficulty::Normal,
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Difficulty::Normal => "Normal",
            Difficulty::Challenge => "Challenge",
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// When a session ends and what a miss costs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Termination {
    /// Play exactly `total` rounds. Misses and skips cost nothing.
    Rounds { total: u32 },
    /// Play until lives run out. A wrong answer always costs one life;
    /// a skip costs one only when `skip_costs_life` is set.
    Lives { initial: u32, skip_costs_life: bool },
}

impl Termination {
    /// Total rounds, if this is a round-count game.
    #[must_use]
    pub const fn total_rounds(self) -> Option<u32> {
        match self {
            Termination::Rounds { total } => Some(total),
            Termination::Lives { .. } => None,
        }
    }

    /// Starting lives, if this is a life-based game.
    #[must_use]
    pub const fn initial_lives(self) -> Option<u32> {
        match self {
            Termination::Rounds { .. } => None,
            Termination::Lives { initial, .. } => Some(initial),
        }
    }
}

/// Complete mode configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModeConfig {
    /// High-score slot.
    pub difficulty: Difficulty,

    /// Swatches per round (`1..=MAX_CANDIDATES`).
    pub candidate_count: usize,

    /// End condition and penalty policy.
    pub termination: Termination,
}

impl ModeConfig {
    /// Round-count mode for a tier with its default candidate count.
    #[must_use]
    pub const fn new(difficulty: Difficulty) -> Self {
        Self {
            difficulty,
            candidate_count: difficulty.candidate_count(),
            termination: Termination::Rounds {
                total: DEFAULT_ROUNDS,
            },
        }
    }

    /// 3 swatches, 10 rounds.
    #[must_use]
    pub const fn normal() -> Self {
        Self::new(Difficulty::Normal)
    }

    /// 6 swatches, 10 rounds.
    #[must_use]
    pub const fn challenge() -> Self {
        Self::new(Difficulty::Challenge)
    }

    /// 3 swatches, 6 lives, skips cost a life.
    #[must_use]
    pub const fn normal_lives() -> Self {
        Self::new(Difficulty::Normal).with_default_lives()
    }

    /// 6 swatches, 3 lives, skips cost a life.
    #[must_use]
    pub const fn challenge_lives() -> Self {
        Self::new(Difficulty::Challenge).with_default_lives()
    }

    /// Switch to life-based termination with the tier's default lives.
    #[must_use]
    pub const fn with_default_lives(self) -> Self {
        self.with_lives(self.difficulty.initial_lives(), true)
    }

    /// Switch to life-based termination.
    #[must_use]
    pub const fn with_lives(mut self, initial: u32, skip_costs_life: bool) -> Self {
        self.termination = Termination::Lives {
            initial,
            skip_costs_life,
        };
        self
    }

    /// Switch to round-count termination.
    #[must_use]
    pub const fn with_rounds(mut self, total: u32) -> Self {
        self.termination = Termination::Rounds { total };
        self
    }

    /// Override the candidate count.
    #[must_use]
    pub const fn with_candidate_count(mut self, count: usize) -> Self {
        self.candidate_count = count;
        self
    }

    /// Check the configuration against engine bounds.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.candidate_count == 0 || self.candidate_count > MAX_CANDIDATES {
            return Err(ConfigError::CandidateCount {
                count: self.candidate_count,
                max: MAX_CANDIDATES,
            });
        }

        match self.termination {
            Termination::Rounds { total: 0 } => Err(ConfigError::ZeroRounds),
            Termination::Lives { initial: 0, .. } => Err(ConfigError::ZeroLives),
            _ => Ok(()),
        }
    }
}

impl Default for ModeConfig {
    fn default() -> Self {
        Self::normal()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets() {
        let normal = ModeConfig::normal();
        assert_eq!(normal.candidate_count, 3);
        assert_eq!(normal.termination, Termination::Rounds { total: 10 });

        let challenge = ModeConfig::challenge();
        assert_eq!(challenge.candidate_count, 6);
        assert_eq!(challenge.termination.total_rounds(), Some(10));

        let normal_lives = ModeConfig::normal_lives();
        assert_eq!(normal_lives.candidate_count, 3);
        assert_eq!(
            normal_lives.termination,
            Termination::Lives {
                initial: 6,
                skip_costs_life: true
            }
        );

        let challenge_lives = ModeConfig::challenge_lives();
        assert_eq!(challenge_lives.candidate_count, 6);
        assert_eq!(challenge_lives.termination.initial_lives(), Some(3));
        assert_eq!(challenge_lives.termination.total_rounds(), None);
    }

    #[test]
    fn test_builder() {
        let mode = ModeConfig::new(Difficulty::Challenge)
            .with_candidate_count(9)
            .with_lives(2, false);

        assert_eq!(mode.difficulty, Difficulty::Challenge);
        assert_eq!(mode.candidate_count, 9);
        assert_eq!(
            mode.termination,
            Termination::Lives {
                initial: 2,
                skip_costs_life: false
            }
        );

        let back = mode.with_rounds(5);
        assert_eq!(back.termination.total_rounds(), Some(5));
    }

    #[test]
    fn test_validate() {
        assert!(ModeConfig::normal().validate().is_ok());
        assert!(ModeConfig::challenge_lives().validate().is_ok());

        assert_eq!(
            ModeConfig::normal().with_candidate_count(0).validate(),
            Err(ConfigError::CandidateCount {
                count: 0,
                max: MAX_CANDIDATES
            })
        );
        assert!(ModeConfig::normal()
            .with_candidate_count(MAX_CANDIDATES + 1)
            .validate()
            .is_err());
        assert!(ModeConfig::normal()
            .with_candidate_count(MAX_CANDIDATES)
            .validate()
            .is_ok());
        assert_eq!(
            ModeConfig::normal().with_rounds(0).validate(),
            Err(ConfigError::ZeroRounds)
        );
        assert_eq!(
            ModeConfig::normal().with_lives(0, true).validate(),
            Err(ConfigError::ZeroLives)
        );
    }

    #[test]
    fn test_difficulty_keys() {
        assert_eq!(Difficulty::Normal.storage_key(), "easy-highscore");
        assert_eq!(Difficulty::Challenge.storage_key(), "hard-highscore");
        assert_eq!(Difficulty::Normal.alternate(), Difficulty::Challenge);
        assert_eq!(format!("{}", Difficulty::Challenge), "Challenge");
    }

    #[test]
    fn test_mode_serde() {
        let json = r#"{
            "difficulty": "challenge",
            "candidate_count": 6,
            "termination": { "lives": { "initial": 3, "skip_costs_life": true } }
        }"#;
        let mode: ModeConfig = serde_json::from_str(json).unwrap();
        assert_eq!(mode, ModeConfig::challenge_lives());

        let json = serde_json::to_string(&ModeConfig::normal()).unwrap();
        let back: ModeConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ModeConfig::normal());
    }
}
