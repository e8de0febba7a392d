//! Session lifecycle: value object, events, state machine, controller.
//!
//! ## Layers
//!
//! - `Session`: plain state of one playthrough
//! - `Event`: closed set of player actions
//! - `transition`: pure `(Session, Event) -> Session`
//! - `GameController`: owns the session and RNG, turns transitions into
//!   host-facing effects and snapshots

pub mod controller;
pub mod event;
pub mod machine;
pub mod state;

pub use controller::{Effect, GameController, Snapshot, MAX_CHECKPOINT_BYTES};
pub use event::Event;
pub use machine::transition;
pub use state::{Feedback, Outcome, Phase, RoundRecord, Session};
