//! Round generation integration tests.
//!
//! These tests check the generator's guarantees over many draws:
//! distinct candidates, a member target, canonical hex strings.

use proptest::prelude::*;

use truecolor::core::{inverse_hex_color, GameRng, HexColor, MAX_CANDIDATES};
use truecolor::round::{draw_hex_color, generate_round};

fn is_canonical(hex: &str) -> bool {
    hex.len() == 7
        && hex.starts_with('#')
        && hex[1..]
            .chars()
            .all(|c| c.is_ascii_digit() || ('A'..='F').contains(&c))
}

// =============================================================================
// Generator Guarantees
// =============================================================================

/// 1000 rounds per supported size: k distinct members, target among them.
#[test]
fn test_thousand_rounds_are_well_formed() {
    let mut rng = GameRng::new(2024);

    for k in [3usize, 6] {
        for _ in 0..1000 {
            let round = generate_round(k, &mut rng);
            assert_eq!(round.len(), k);

            let mut hexes: Vec<String> =
                round.candidates().iter().map(|c| c.hex.to_string()).collect();
            hexes.sort();
            hexes.dedup();
            assert_eq!(hexes.len(), k, "candidates must be distinct");

            let ids: Vec<_> = round.candidates().iter().map(|c| c.id).collect();
            assert!(ids.contains(&round.target_id()));
            assert_eq!(round.target().id, round.target_id());
        }
    }
}

/// Every generated color renders as `#` plus six uppercase hex digits.
#[test]
fn test_generated_colors_are_canonical() {
    let mut rng = GameRng::new(7);

    for _ in 0..1000 {
        let round = generate_round(6, &mut rng);
        for color in round.candidates() {
            let hex = color.hex.to_string();
            assert!(is_canonical(&hex), "{} is not canonical", hex);
        }
    }
}

/// Leading zeros survive formatting, so short values still have six digits.
#[test]
fn test_draws_reach_low_values() {
    let mut rng = GameRng::new(99);
    let low = (0..5000)
        .map(|_| draw_hex_color(&mut rng))
        .any(|c| c.to_u32() < 0x10_0000);

    assert!(low, "first digit 0 should appear in 5000 draws");
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    #[test]
    fn prop_round_is_well_formed(seed in any::<u64>(), k in 1usize..=MAX_CANDIDATES) {
        let mut rng = GameRng::new(seed);
        let round = generate_round(k, &mut rng);

        prop_assert_eq!(round.len(), k);
        prop_assert!(round.contains(round.target_id()));
        for (i, color) in round.candidates().iter().enumerate() {
            prop_assert_eq!(color.id.index(), i);
            prop_assert!(round.candidates()[..i].iter().all(|c| c.hex != color.hex));
        }
    }

    #[test]
    fn prop_hex_parse_display_agree(value in 0u32..=0xFF_FFFF) {
        let color = HexColor::from_u32(value);
        let text = color.to_string();

        prop_assert!(is_canonical(&text));
        prop_assert_eq!(text.parse::<HexColor>().unwrap(), color);
        prop_assert_eq!(text.to_lowercase().parse::<HexColor>().unwrap(), color);
    }

    #[test]
    fn prop_inverse_is_involution(value in 0u32..=0xFF_FFFF) {
        let text = HexColor::from_u32(value).to_string();
        let once = inverse_hex_color(&text, false).unwrap();
        let twice = inverse_hex_color(&once.to_string(), false).unwrap();

        prop_assert_eq!(twice.to_u32(), value);
    }

    #[test]
    fn prop_bw_is_black_or_white(value in 0u32..=0xFF_FFFF) {
        let text = HexColor::from_u32(value).to_string();
        let bw = inverse_hex_color(&text, true).unwrap();

        prop_assert!(bw == HexColor::BLACK || bw == HexColor::WHITE);
    }
}

// =============================================================================
// Contrast Utility
// =============================================================================

#[test]
fn test_inverse_reference_values() {
    assert_eq!(inverse_hex_color("#FFFFFF", true).unwrap().to_string(), "#000000");
    assert_eq!(inverse_hex_color("#000000", true).unwrap().to_string(), "#FFFFFF");
    assert_eq!(inverse_hex_color("#808080", false).unwrap().to_string(), "#7F7F7F");
}

#[test]
fn test_inverse_rejects_bad_input() {
    assert!(inverse_hex_color("#1234", true).is_err());
    assert!(inverse_hex_color("#12345G", false).is_err());
}
