//! Player profile values the host persists: high scores and theme.
//!
//! The engine never touches storage. These types parse what the host
//! read and say what the host should write.

pub mod highscore;
pub mod theme;

pub use highscore::{HighScoreTable, ResultSummary};
pub use theme::Theme;
