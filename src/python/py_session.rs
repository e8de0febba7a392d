//! Session bindings for Python.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::core::{inverse_hex_color, ColorId, Difficulty, EngineError, ModeConfig};
use crate::profile::{HighScoreTable, Theme};
use crate::session::{Effect, GameController, Phase};

fn to_py_err(err: EngineError) -> PyErr {
    PyErr::new::<PyValueError, _>(format!("{}", err))
}

fn mode_from_args(difficulty: &str, lives: bool) -> PyResult<ModeConfig> {
    let difficulty = match difficulty {
        "normal" | "easy" => Difficulty::Normal,
        "challenge" | "hard" => Difficulty::Challenge,
        other => {
            return Err(PyErr::new::<PyValueError, _>(format!(
                "unknown difficulty {:?}",
                other
            )))
        }
    };
    let mode = ModeConfig::new(difficulty);
    Ok(if lives { mode.with_default_lives() } else { mode })
}

/// Flatten effects into `(kind, key, value)` tuples for Python callers.
fn effects_to_py(effects: Vec<Effect>) -> Vec<(String, String, String)> {
    effects
        .into_iter()
        .map(|effect| match effect {
            Effect::GameOver(summary) => (
                "game_over".to_string(),
                summary.difficulty.storage_key().to_string(),
                summary.score.to_string(),
            ),
            Effect::PersistHighScore { key, score, .. } => {
                ("persist".to_string(), key.to_string(), score.to_string())
            }
            Effect::PersistTheme(theme) => (
                "persist".to_string(),
                Theme::STORAGE_KEY.to_string(),
                theme.as_str().to_string(),
            ),
        })
        .collect()
}

/// Python wrapper for GameController.
#[pyclass(name = "Game")]
pub struct PyGame {
    inner: GameController,
}

#[pymethods]
impl PyGame {
    /// Create a new game.
    ///
    /// # Arguments
    /// - difficulty: "normal" or "challenge"
    /// - lives: Use life-based termination instead of 10 rounds
    /// - seed: RNG seed for deterministic games
    /// - easy_highscore / hard_highscore: Stored high scores, if any
    /// - theme: Stored theme, if any
    #[new]
    #[pyo3(signature = (
        difficulty = "normal",
        lives = false,
        seed = 42,
        easy_highscore = None,
        hard_highscore = None,
        theme = None
    ))]
    fn new(
        difficulty: &str,
        lives: bool,
        seed: u64,
        easy_highscore: Option<&str>,
        hard_highscore: Option<&str>,
        theme: Option<&str>,
    ) -> PyResult<Self> {
        let mode = mode_from_args(difficulty, lives)?;
        let inner = GameController::new(mode, seed)
            .with_scores(HighScoreTable::from_stored(easy_highscore, hard_highscore))
            .with_theme(Theme::from_stored(theme));
        Ok(Self { inner })
    }

    /// Start with the mode given at construction.
    fn start(&mut self) -> PyResult<Vec<(String, String, String)>> {
        let mode = *self.inner.session().mode();
        self.inner.start_game(mode).map(effects_to_py).map_err(to_py_err)
    }

    fn select(&mut self, id: u8) -> PyResult<Vec<(String, String, String)>> {
        self.inner
            .select_candidate(ColorId::new(id))
            .map(effects_to_py)
            .map_err(to_py_err)
    }

    fn submit(&mut self) -> PyResult<Vec<(String, String, String)>> {
        self.inner.submit_answer().map(effects_to_py).map_err(to_py_err)
    }

    fn skip(&mut self) -> PyResult<Vec<(String, String, String)>> {
        self.inner.skip_round().map(effects_to_py).map_err(to_py_err)
    }

    fn next(&mut self) -> PyResult<Vec<(String, String, String)>> {
        self.inner.advance_round().map(effects_to_py).map_err(to_py_err)
    }

    fn reset(&mut self) -> PyResult<Vec<(String, String, String)>> {
        self.inner.reset_session().map(effects_to_py).map_err(to_py_err)
    }

    /// Flip the theme. Returns the new theme name.
    fn toggle_theme(&mut self) -> String {
        self.inner.toggle_theme();
        self.inner.theme().as_str().to_string()
    }

    #[getter]
    fn phase(&self) -> &'static str {
        self.inner.session().phase().name()
    }

    #[getter]
    fn round_index(&self) -> u32 {
        self.inner.session().round_index()
    }

    #[getter]
    fn score(&self) -> u32 {
        self.inner.session().score()
    }

    #[getter]
    fn lives(&self) -> Option<u32> {
        self.inner.session().lives()
    }

    /// Hex code to find, e.g. "#A1B2C3".
    #[getter]
    fn prompt(&self) -> Option<String> {
        self.inner.session().round().map(|r| r.prompt().to_string())
    }

    /// Candidate hex codes in id order.
    #[getter]
    fn candidates(&self) -> Vec<String> {
        self.inner
            .session()
            .round()
            .map(|r| r.candidates().iter().map(|c| c.hex.to_string()).collect())
            .unwrap_or_default()
    }

    #[getter]
    fn selected(&self) -> Option<u8> {
        self.inner.session().selected().map(ColorId::raw)
    }

    #[getter]
    fn backdrop(&self) -> String {
        self.inner.session().backdrop().to_string()
    }

    #[getter]
    fn game_over(&self) -> bool {
        self.inner.session().phase() == Phase::GameOver
    }

    /// Serialize the game to bytes.
    fn checkpoint(&self) -> PyResult<Vec<u8>> {
        self.inner.checkpoint().map_err(to_py_err)
    }

    /// Rebuild a game from `checkpoint` output.
    #[staticmethod]
    fn restore(bytes: Vec<u8>) -> PyResult<Self> {
        let inner = GameController::restore(&bytes).map_err(to_py_err)?;
        Ok(Self { inner })
    }

    fn __repr__(&self) -> String {
        let session = self.inner.session();
        format!(
            "Game(phase={}, round={}, score={}, lives={:?})",
            session.phase().name(),
            session.round_index(),
            session.score(),
            session.lives()
        )
    }
}

/// Text color for drawing on top of `color`.
#[pyfunction]
#[pyo3(signature = (color, bw = true))]
pub fn inverse_color(color: &str, bw: bool) -> PyResult<String> {
    inverse_hex_color(color, bw)
        .map(|c| c.to_string())
        .map_err(|e| to_py_err(e.into()))
}
