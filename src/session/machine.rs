//! Session state machine.
//!
//! ```text
//! NotStarted --Start--> InRound --Submit--> Answered --Next--> InRound
//!                          |                   |
//!                          +------Skip---------+--(terminal)--> GameOver
//!                                                                  |
//! NotStarted <------------------------Reset------------------------+
//! ```
//!
//! `transition` never mutates its input. A rejected event returns an error
//! and draws nothing from the RNG, so the caller's session and stream are
//! exactly as they were.

use crate::core::{ColorId, ContractError, GameRng, ModeConfig, Result, Termination};
use crate::round::{generate_round, Round};

use super::event::Event;
use super::state::{Feedback, Outcome, Phase, RoundRecord, Session};

/// Apply `event` to `session`, returning the next session.
pub fn transition(session: &Session, event: &Event, rng: &mut GameRng) -> Result<Session> {
    let next = match (*event, session.phase) {
        (Event::Reset, _) => Session::new(session.mode),
        (Event::Start { mode }, Phase::NotStarted) => start(mode, rng)?,
        (Event::Select { id }, Phase::InRound) => select(session, id)?,
        (Event::Submit, Phase::InRound) => submit(session)?,
        (Event::Skip, Phase::InRound) => skip(session, rng),
        (Event::Next, Phase::Answered(_)) => next_round(session, rng),
        (event, phase) => {
            return Err(ContractError::InvalidTransition {
                event: event.name(),
                phase: phase.name(),
            }
            .into())
        }
    };

    log::debug!(
        "{}: {} -> {} (round {}, score {}, lives {:?})",
        event.name(),
        session.phase.name(),
        next.phase.name(),
        next.round_index,
        next.score,
        next.lives
    );

    Ok(next)
}

fn start(mode: ModeConfig, rng: &mut GameRng) -> Result<Session> {
    mode.validate()?;

    let mut session = Session::new(mode);
    session.lives = mode.termination.initial_lives();
    advance(&mut session, rng);
    Ok(session)
}

fn select(session: &Session, id: ColorId) -> Result<Session> {
    let round = current_round(session);
    if !round.contains(id) {
        return Err(ContractError::UnknownCandidate {
            id,
            round: session.round_index,
        }
        .into());
    }

    let mut next = session.clone();
    next.selected = Some(id);
    Ok(next)
}

fn submit(session: &Session) -> Result<Session> {
    let selected = session.selected.ok_or(ContractError::NoSelection)?;
    let round = current_round(session);

    let feedback = if round.is_target(selected) {
        Feedback::Correct
    } else {
        Feedback::Wrong
    };

    let mut next = session.clone();
    match feedback {
        Feedback::Correct => next.score += 1,
        Feedback::Wrong => lose_life(&mut next),
    }

    // Reveal the answer.
    next.selected = Some(round.target_id());
    next.feedback = Some(feedback);
    finish_round(&mut next, Outcome::from(feedback));

    next.phase = if next.lives == Some(0) {
        Phase::GameOver
    } else {
        Phase::Answered(feedback)
    };
    Ok(next)
}

fn skip(session: &Session, rng: &mut GameRng) -> Session {
    let mut next = session.clone();
    if let Termination::Lives {
        skip_costs_life: true,
        ..
    } = next.mode.termination
    {
        lose_life(&mut next);
    }
    finish_round(&mut next, Outcome::Skipped);

    if next.is_terminal() {
        next.phase = Phase::GameOver;
    } else {
        advance(&mut next, rng);
    }
    next
}

fn next_round(session: &Session, rng: &mut GameRng) -> Session {
    let mut next = session.clone();
    if next.is_terminal() {
        next.phase = Phase::GameOver;
    } else {
        advance(&mut next, rng);
    }
    next
}

/// Move to a freshly generated round.
fn advance(session: &mut Session, rng: &mut GameRng) {
    session.round_index += 1;
    session.selected = None;
    session.feedback = None;
    session.round = Some(generate_round(session.mode.candidate_count, rng));
    session.phase = Phase::InRound;
}

/// Record the round on screen and show its target behind the board.
fn finish_round(session: &mut Session, outcome: Outcome) {
    let target = current_round(session).prompt();
    session.backdrop = target;
    session.history.push_back(RoundRecord {
        index: session.round_index,
        target,
        outcome,
    });
}

fn lose_life(session: &mut Session) {
    if let Some(lives) = session.lives.as_mut() {
        *lives = lives.saturating_sub(1);
    }
}

fn current_round(session: &Session) -> &Round {
    // InRound always carries a round; only NotStarted lacks one.
    match session.round.as_ref() {
        Some(round) => round,
        None => unreachable!("session in {} without a round", session.phase.name()),
    }
}
