//! Python bindings for the truecolor round engine.
//!
//! Lets a Python host (a UI prototype, a bot, a test harness) drive
//! the same controller the presentation layer uses.
//!
//! # Quick Start
//!
//! ```python
//! import truecolor
//!
//! game = truecolor.Game(difficulty="challenge", lives=True, seed=7)
//! game.start()
//! print(game.prompt, game.candidates)
//!
//! game.select(0)
//! effects = game.submit()
//! ```

use pyo3::prelude::*;

mod py_session;

pub use py_session::*;

/// truecolor: guess-the-hex-color round engine.
#[pymodule]
fn truecolor(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyGame>()?;
    m.add_function(wrap_pyfunction!(inverse_color, m)?)?;
    Ok(())
}
