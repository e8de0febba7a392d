//! Per-difficulty high scores.
//!
//! The host owns persistence. It hands the stored strings to
//! `HighScoreTable::from_stored` when a game starts, and writes back
//! whatever `record` reports as changed when a game ends.

use serde::{Deserialize, Serialize};

use crate::core::Difficulty;

/// Best score per difficulty. `None` means nothing stored yet.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighScoreTable {
    normal: Option<u32>,
    challenge: Option<u32>,
}

/// What the results screen shows after a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultSummary {
    pub difficulty: Difficulty,
    /// Score of the finished session.
    pub score: u32,
    /// Previous best for this difficulty (0 when none was stored).
    pub old_high: u32,
    /// Best after this session.
    pub new_high: u32,
    /// Whether the stored value has to be written.
    pub changed: bool,
    /// Best for the other difficulty (0 when none was stored).
    pub alternate_high: u32,
}

impl HighScoreTable {
    /// Empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from the host's stored strings.
    ///
    /// Values that don't parse as a non-negative integer are dropped.
    #[must_use]
    pub fn from_stored(normal: Option<&str>, challenge: Option<&str>) -> Self {
        Self {
            normal: normal.and_then(|raw| parse_stored(Difficulty::Normal, raw)),
            challenge: challenge.and_then(|raw| parse_stored(Difficulty::Challenge, raw)),
        }
    }

    /// Stored best for a difficulty.
    #[must_use]
    pub fn get(&self, difficulty: Difficulty) -> Option<u32> {
        match difficulty {
            Difficulty::Normal => self.normal,
            Difficulty::Challenge => self.challenge,
        }
    }

    /// Overwrite the stored best for a difficulty.
    pub fn set(&mut self, difficulty: Difficulty, score: u32) {
        *self.slot(difficulty) = Some(score);
    }

    /// Fold a finished session's score into the table.
    ///
    /// The first score recorded for a difficulty is always stored, even 0.
    /// After that only a strictly higher score replaces it.
    pub fn record(&mut self, difficulty: Difficulty, score: u32) -> ResultSummary {
        let previous = self.get(difficulty);
        let changed = previous.map_or(true, |best| score > best);
        if changed {
            self.set(difficulty, score);
        }

        let old_high = previous.unwrap_or(0);
        let new_high = if changed { score } else { old_high };

        ResultSummary {
            difficulty,
            score,
            old_high,
            new_high,
            changed,
            alternate_high: self.get(difficulty.alternate()).unwrap_or(0),
        }
    }

    fn slot(&mut self, difficulty: Difficulty) -> &mut Option<u32> {
        match difficulty {
            Difficulty::Normal => &mut self.normal,
            Difficulty::Challenge => &mut self.challenge,
        }
    }
}

fn parse_stored(difficulty: Difficulty, raw: &str) -> Option<u32> {
    match raw.trim().parse::<u32>() {
        Ok(score) => Some(score),
        Err(err) => {
            log::warn!(
                "ignoring stored {} value {:?}: {}",
                difficulty.storage_key(),
                raw,
                err
            );
            None
        }
    }
}
