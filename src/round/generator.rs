//! Round generation by rejection sampling.
//!
//! Each candidate is six hex digits drawn uniformly from `0-9A-F`. A draw
//! that repeats an earlier candidate is thrown away and redrawn, so a round
//! of `k` swatches always holds `k` distinct colors. The target is then a
//! uniform pick among them.

use rustc_hash::FxHashSet;

use super::{Candidates, Round};
use crate::core::config::MAX_CANDIDATES;
use crate::core::{Color, ColorId, GameRng, HexColor};

/// Draw one uniformly random color, one hex digit at a time.
pub fn draw_hex_color(rng: &mut GameRng) -> HexColor {
    let packed = (0..6).fold(0u32, |acc, _| (acc << 4) | u32::from(rng.hex_digit()));
    HexColor::from_u32(packed)
}

/// Generate a round of `k` distinct candidates with a random target.
///
/// Panics unless `1 <= k <= MAX_CANDIDATES`. `ModeConfig::validate`
/// rejects such counts before a session ever gets here.
pub fn generate_round(k: usize, rng: &mut GameRng) -> Round {
    assert!(
        (1..=MAX_CANDIDATES).contains(&k),
        "Candidate count must be 1-{}",
        MAX_CANDIDATES
    );

    let mut seen = FxHashSet::default();
    let mut candidates = Candidates::new();
    let mut draws = 0usize;

    while candidates.len() < k {
        let hex = draw_hex_color(rng);
        draws += 1;
        if seen.insert(hex) {
            candidates.push(Color::new(ColorId::new(candidates.len() as u8), hex));
        }
    }

    if draws > k {
        log::trace!("round of {} needed {} draws", k, draws);
    }

    let target = ColorId::new(rng.gen_index(k) as u8);
    Round::new(candidates, target)
}
