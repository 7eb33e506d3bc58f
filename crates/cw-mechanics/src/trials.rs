//! Batch trials over the draw mechanics.
//!
//! Used by the `stats` command to show the odds the rules produce.

use rand::rngs::StdRng;

use crate::error::DrawResult;
use crate::token::TokenBag;
use crate::weather::{DECK_SIZE, WeatherCard, build_deck};

/// Histogram of the storm's position over freshly built decks.
///
/// Index `i` counts decks where the storm was card `i + 1`.
pub fn storm_positions(trials: u32, rng: &mut StdRng) -> [u32; DECK_SIZE] {
    let mut counts = [0; DECK_SIZE];
    for _ in 0..trials {
        let deck = build_deck(rng);
        if let Some(pos) = deck.iter().position(WeatherCard::is_storm) {
            counts[pos] += 1;
        }
    }
    counts
}

/// Fraction of wood draws of the given size that turn up the snake.
pub fn snake_rate(declared: u32, trials: u32, bag: &TokenBag, rng: &mut StdRng) -> DrawResult<f64> {
    if trials == 0 {
        return Ok(0.0);
    }
    let mut bitten = 0u32;
    for _ in 0..trials {
        if bag.draw_for_wood(declared, rng)?.contains_black {
            bitten += 1;
        }
    }
    Ok(f64::from(bitten) / f64::from(trials))
}

/// Mean fish per food draw over `trials` draws.
pub fn mean_fish(trials: u32, bag: &TokenBag, rng: &mut StdRng) -> f64 {
    if trials == 0 {
        return 0.0;
    }
    let total: u64 = (0..trials)
        .map(|_| u64::from(bag.draw_for_food(rng).fish))
        .sum();
    total as f64 / f64::from(trials)
}
