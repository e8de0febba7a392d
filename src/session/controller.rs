//! Game controller: the presentation layer's entry point.
//!
//! `GameController` owns one `Session`, the RNG stream that feeds it, and
//! the host's profile values. Every inbound call goes through `dispatch`,
//! which runs the state machine and reports the side effects the host has
//! to carry out (persisting a new high score or theme).
//!
//! ```
//! use truecolor::core::ModeConfig;
//! use truecolor::session::GameController;
//!
//! let mut game = GameController::new(ModeConfig::normal(), 42);
//! game.start_game(ModeConfig::normal()).unwrap();
//!
//! let target = game.session().round().unwrap().target_id();
//! game.select_candidate(target).unwrap();
//! game.submit_answer().unwrap();
//! assert_eq!(game.snapshot().score, 1);
//! ```

use bincode::Options;
use serde::{Deserialize, Serialize};

use crate::core::{
    Color, ColorId, Difficulty, EngineError, GameRng, GameRngState, HexColor, ModeConfig, Result,
};
use crate::profile::{HighScoreTable, ResultSummary, Theme};

use super::event::Event;
use super::machine::transition;
use super::state::{Feedback, Phase, Session};

/// Something the host must do after an event.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub enum Effect {
    /// The session just ended.
    GameOver(ResultSummary),
    /// Write `score` under `key`.
    PersistHighScore {
        difficulty: Difficulty,
        key: &'static str,
        score: u32,
    },
    /// Write the theme under `Theme::STORAGE_KEY`.
    PersistTheme(Theme),
}

/// Read-only view of everything the presentation layer draws.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Snapshot {
    pub phase: Phase,
    pub difficulty: Difficulty,
    pub round_index: u32,
    /// `None` in life-based mode.
    pub total_rounds: Option<u32>,
    pub score: u32,
    /// `None` in round-count mode.
    pub lives: Option<u32>,
    /// Hex code the player has to find.
    pub prompt: Option<HexColor>,
    pub candidates: Vec<Color>,
    pub selected: Option<ColorId>,
    pub feedback: Option<Feedback>,
    pub backdrop: HexColor,
    /// Black or white, whichever reads on the backdrop.
    pub text_color: HexColor,
    pub game_over: bool,
    pub theme: Theme,
}

/// Largest checkpoint `checkpoint` writes or `restore` reads.
pub const MAX_CHECKPOINT_BYTES: u64 = 4 << 20;

#[derive(Serialize, Deserialize)]
struct Checkpoint {
    session: Session,
    rng: GameRngState,
    scores: HighScoreTable,
    theme: Theme,
}

/// Owns a session and drives it from player actions.
#[derive(Clone, Debug)]
pub struct GameController {
    session: Session,
    rng: GameRng,
    scores: HighScoreTable,
    theme: Theme,
}

impl GameController {
    /// Controller with a seeded RNG and empty profile.
    #[must_use]
    pub fn new(mode: ModeConfig, seed: u64) -> Self {
        Self::with_rng(mode, GameRng::new(seed))
    }

    #[must_use]
    pub fn with_rng(mode: ModeConfig, rng: GameRng) -> Self {
        Self {
            session: Session::new(mode),
            rng,
            scores: HighScoreTable::new(),
            theme: Theme::default(),
        }
    }

    /// Use the host's stored high scores.
    #[must_use]
    pub fn with_scores(mut self, scores: HighScoreTable) -> Self {
        self.scores = scores;
        self
    }

    /// Use the host's stored theme.
    #[must_use]
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    #[must_use]
    pub fn session(&self) -> &Session {
        &self.session
    }

    #[must_use]
    pub fn scores(&self) -> &HighScoreTable {
        &self.scores
    }

    #[must_use]
    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Run one event through the state machine.
    ///
    /// On error the session is left untouched and the error is returned;
    /// contract violations are also logged since they point at a UI bug.
    pub fn dispatch(&mut self, event: Event) -> Result<Vec<Effect>> {
        let next = match transition(&self.session, &event, &mut self.rng) {
            Ok(next) => next,
            Err(err) => {
                if let EngineError::Contract(contract) = &err {
                    log::warn!("rejected {}: {}", event.name(), contract);
                }
                return Err(err);
            }
        };

        let was_over = self.session.is_game_over();
        self.session = next;

        let mut effects = Vec::new();
        match event {
            Event::Start { mode } => log::info!(
                "started {} game ({} candidates, {:?})",
                mode.difficulty,
                mode.candidate_count,
                mode.termination
            ),
            _ if !was_over && self.session.is_game_over() => self.finish(&mut effects),
            _ => {}
        }
        Ok(effects)
    }

    fn finish(&mut self, effects: &mut Vec<Effect>) {
        let difficulty = self.session.mode().difficulty;
        let summary = self.scores.record(difficulty, self.session.score());

        log::info!(
            "{} game over after {} rounds: score {} (best {})",
            difficulty,
            self.session.round_index(),
            summary.score,
            summary.new_high
        );

        effects.push(Effect::GameOver(summary));
        if summary.changed {
            effects.push(Effect::PersistHighScore {
                difficulty,
                key: difficulty.storage_key(),
                score: summary.new_high,
            });
        }
    }

    // === Inbound contract ===

    pub fn start_game(&mut self, mode: ModeConfig) -> Result<Vec<Effect>> {
        self.dispatch(Event::Start { mode })
    }

    pub fn select_candidate(&mut self, id: ColorId) -> Result<Vec<Effect>> {
        self.dispatch(Event::Select { id })
    }

    pub fn submit_answer(&mut self) -> Result<Vec<Effect>> {
        self.dispatch(Event::Submit)
    }

    pub fn skip_round(&mut self) -> Result<Vec<Effect>> {
        self.dispatch(Event::Skip)
    }

    pub fn advance_round(&mut self) -> Result<Vec<Effect>> {
        self.dispatch(Event::Next)
    }

    pub fn reset_session(&mut self) -> Result<Vec<Effect>> {
        self.dispatch(Event::Reset)
    }

    /// Flip the theme and ask the host to store it.
    pub fn toggle_theme(&mut self) -> Effect {
        self.theme = self.theme.toggle();
        Effect::PersistTheme(self.theme)
    }

    // === Outbound view ===

    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        let session = &self.session;
        let round = session.round();

        Snapshot {
            phase: session.phase(),
            difficulty: session.mode().difficulty,
            round_index: session.round_index(),
            total_rounds: session.mode().termination.total_rounds(),
            score: session.score(),
            lives: session.lives(),
            prompt: round.map(|r| r.prompt()),
            candidates: round.map(|r| r.candidates().to_vec()).unwrap_or_default(),
            selected: session.selected(),
            feedback: session.feedback(),
            backdrop: session.backdrop(),
            text_color: session.backdrop().contrast(),
            game_over: session.is_game_over(),
            theme: self.theme,
        }
    }

    // === Checkpoints ===

    /// Serialize session, RNG position and profile.
    ///
    /// Fails with `EngineError::Codec` past `MAX_CHECKPOINT_BYTES`.
    pub fn checkpoint(&self) -> Result<Vec<u8>> {
        let checkpoint = Checkpoint {
            session: self.session.clone(),
            rng: self.rng.state(),
            scores: self.scores,
            theme: self.theme,
        };
        Ok(codec().serialize(&checkpoint)?)
    }

    /// Rebuild a controller from `checkpoint` output.
    ///
    /// Bytes that don't decode, or decode to a session play can't reach,
    /// are rejected.
    pub fn restore(bytes: &[u8]) -> Result<Self> {
        let checkpoint: Checkpoint = codec().deserialize(bytes)?;
        checkpoint.session.validate()?;
        log::debug!(
            "restored {} session at round {}",
            checkpoint.session.phase().name(),
            checkpoint.session.round_index()
        );
        Ok(Self {
            session: checkpoint.session,
            rng: GameRng::from_state(&checkpoint.rng),
            scores: checkpoint.scores,
            theme: checkpoint.theme,
        })
    }
}

fn codec() -> impl Options {
    bincode::DefaultOptions::new()
        .with_fixint_encoding()
        .with_limit(MAX_CHECKPOINT_BYTES)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::CheckpointError;

    fn position(haystack: &[u8], needle: &[u8]) -> usize {
        haystack
            .windows(needle.len())
            .position(|window| window == needle)
            .expect("needle not in checkpoint")
    }

    fn encode(session: Session) -> Vec<u8> {
        let checkpoint = Checkpoint {
            session,
            rng: GameRng::new(1).state(),
            scores: HighScoreTable::new(),
            theme: Theme::default(),
        };
        codec().serialize(&checkpoint).unwrap()
    }

    fn play_round(game: &mut GameController, correct: bool) -> Vec<Effect> {
        let round = game.session().round().unwrap().clone();
        let id = if correct {
            round.target_id()
        } else {
            round
                .candidates()
                .iter()
                .map(|c| c.id)
                .find(|&id| id != round.target_id())
                .unwrap()
        };
        game.select_candidate(id).unwrap();
        game.submit_answer().unwrap()
    }

    #[test]
    fn test_snapshot_before_start() {
        let game = GameController::new(ModeConfig::normal(), 1);
        let snap = game.snapshot();

        assert_eq!(snap.phase, Phase::NotStarted);
        assert_eq!(snap.round_index, 0);
        assert_eq!(snap.total_rounds, Some(10));
        assert!(snap.prompt.is_none());
        assert!(snap.candidates.is_empty());
        assert_eq!(snap.backdrop, HexColor::WHITE);
        assert_eq!(snap.text_color, HexColor::BLACK);
        assert!(!snap.game_over);
    }

    #[test]
    fn test_snapshot_in_round() {
        let mut game = GameController::new(ModeConfig::challenge_lives(), 2);
        game.start_game(ModeConfig::challenge_lives()).unwrap();
        let snap = game.snapshot();

        assert_eq!(snap.phase, Phase::InRound);
        assert_eq!(snap.candidates.len(), 6);
        assert_eq!(snap.lives, Some(3));
        assert_eq!(snap.total_rounds, None);
        assert_eq!(snap.prompt, Some(game.session().round().unwrap().prompt()));
    }

    #[test]
    fn test_game_over_emits_effects() {
        let mut game = GameController::new(ModeConfig::normal().with_rounds(1), 3);
        game.start_game(ModeConfig::normal().with_rounds(1)).unwrap();

        assert!(play_round(&mut game, true).is_empty());
        let effects = game.advance_round().unwrap();

        assert_eq!(effects.len(), 2);
        match &effects[0] {
            Effect::GameOver(summary) => {
                assert_eq!(summary.score, 1);
                assert!(summary.changed);
            }
            other => panic!("unexpected effect {:?}", other),
        }
        assert_eq!(
            effects[1],
            Effect::PersistHighScore {
                difficulty: Difficulty::Normal,
                key: "easy-highscore",
                score: 1
            }
        );
    }

    #[test]
    fn test_no_persist_without_new_best() {
        let mode = ModeConfig::normal().with_rounds(1);
        let mut game = GameController::new(mode, 4)
            .with_scores(HighScoreTable::from_stored(Some("5"), None));
        game.start_game(mode).unwrap();
        play_round(&mut game, true);

        let effects = game.advance_round().unwrap();
        assert_eq!(effects.len(), 1);
        assert!(matches!(effects[0], Effect::GameOver(ResultSummary { changed: false, .. })));
        assert_eq!(game.scores().get(Difficulty::Normal), Some(5));
    }

    #[test]
    fn test_rejected_event_keeps_session() {
        let mut game = GameController::new(ModeConfig::normal(), 5);
        game.start_game(ModeConfig::normal()).unwrap();
        let before = game.session().clone();

        assert!(game.advance_round().is_err());
        assert!(game.select_candidate(ColorId::new(42)).is_err());
        assert_eq!(game.session(), &before);
    }

    #[test]
    fn test_reset_after_game_over_emits_nothing() {
        let mode = ModeConfig::challenge().with_lives(1, true);
        let mut game = GameController::new(mode, 6);
        game.start_game(mode).unwrap();

        let effects = game.skip_round().unwrap();
        assert!(game.session().is_game_over());
        assert!(matches!(effects[0], Effect::GameOver(_)));

        assert!(game.reset_session().unwrap().is_empty());
        assert_eq!(game.session().phase(), Phase::NotStarted);
    }

    #[test]
    fn test_toggle_theme() {
        let mut game = GameController::new(ModeConfig::normal(), 7).with_theme(Theme::Light);
        assert_eq!(game.toggle_theme(), Effect::PersistTheme(Theme::Dark));
        assert_eq!(game.snapshot().theme, Theme::Dark);
    }

    #[test]
    fn test_checkpoint_restore_continues_identically() {
        let mut game = GameController::new(ModeConfig::challenge(), 8)
            .with_scores(HighScoreTable::from_stored(Some("3"), Some("4")));
        game.start_game(ModeConfig::challenge()).unwrap();
        play_round(&mut game, false);

        let bytes = game.checkpoint().unwrap();
        let mut restored = GameController::restore(&bytes).unwrap();

        assert_eq!(restored.session(), game.session());
        assert_eq!(restored.scores(), game.scores());

        game.advance_round().unwrap();
        restored.advance_round().unwrap();
        assert_eq!(restored.session().round(), game.session().round());
    }

    #[test]
    fn test_restore_rejects_garbage() {
        let err = GameController::restore(&[0xFF, 0x01]).unwrap_err();
        assert!(matches!(err, EngineError::Codec(_)));
    }

    #[test]
    fn test_restore_rejects_foreign_target() {
        let mut game = GameController::new(ModeConfig::normal(), 9);
        game.start_game(ModeConfig::normal()).unwrap();
        let mut bytes = game.checkpoint().unwrap();

        // The target id is the byte right after the last candidate's hex.
        let last = game.session().round().unwrap().candidates()[2].hex.to_string();
        let at = position(&bytes, last.as_bytes()) + last.len();
        assert_eq!(bytes[at], game.session().round().unwrap().target_id().raw());
        bytes[at] = 200;

        let err = GameController::restore(&bytes).unwrap_err();
        assert!(matches!(err, EngineError::Codec(_)));
    }

    #[test]
    fn test_restore_rejects_round_missing_in_play() {
        let mut session = Session::new(ModeConfig::normal());
        session.phase = Phase::InRound;
        session.round_index = 1;

        let err = GameController::restore(&encode(session)).unwrap_err();
        assert!(matches!(
            err,
            EngineError::Checkpoint(CheckpointError::MissingRound { .. })
        ));
    }

    #[test]
    fn test_restore_rejects_oversized_length() {
        let mut game = GameController::new(ModeConfig::challenge(), 10);
        game.start_game(ModeConfig::challenge()).unwrap();
        let mut bytes = game.checkpoint().unwrap();

        // High half of the first candidate's string length prefix.
        let first = game.session().round().unwrap().candidates()[0].hex.to_string();
        let at = position(&bytes, first.as_bytes()) - 4;
        bytes[at] = 200;

        let err = GameController::restore(&bytes).unwrap_err();
        assert!(matches!(err, EngineError::Codec(_)));
    }

    #[test]
    fn test_restore_survives_any_corrupt_byte() {
        let mode = ModeConfig::challenge_lives();
        let mut game = GameController::new(mode, 11)
            .with_scores(HighScoreTable::from_stored(Some("2"), Some("3")));
        game.start_game(mode).unwrap();
        play_round(&mut game, true);
        game.advance_round().unwrap();
        play_round(&mut game, false);
        let bytes = game.checkpoint().unwrap();

        for i in 0..bytes.len() {
            let mut corrupt = bytes.clone();
            corrupt[i] = 200;
            if let Ok(mut restored) = GameController::restore(&corrupt) {
                let _ = restored.snapshot();
                let _ = restored.advance_round();
                let _ = restored.skip_round();
                let _ = restored.snapshot();
            }
        }
    }
}
