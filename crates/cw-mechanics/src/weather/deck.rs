//! Weather deck construction and drawing.

use std::collections::VecDeque;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

use super::{DECK_SIZE, DeckZone, TOP_HALF_SIZE, WeatherCard};

/// Build one generation of the weather deck.
///
/// The eleven ordinary cards are shuffled and split: five go into a bottom
/// pile together with the storm, which is shuffled on its own, and the
/// other six form the top half. The deck is the top half followed by the
/// bottom pile, so the storm sits somewhere in positions 7-12.
pub fn build_deck(rng: &mut StdRng) -> Vec<WeatherCard> {
    let mut ordinary = WeatherCard::ordinary_set();
    ordinary.shuffle(rng);

    let mut top_half = ordinary.split_off(DECK_SIZE - 1 - TOP_HALF_SIZE);
    for card in &mut top_half {
        card.zone = DeckZone::Top;
    }

    let mut bottom_pile = ordinary;
    bottom_pile.push(WeatherCard::storm());
    bottom_pile.shuffle(rng);

    top_half.extend(bottom_pile);
    top_half
}

/// Whether the deck has cards left.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeckState {
    /// At least one card remains.
    Stocked,
    /// No cards remain; the next draw rebuilds.
    Empty,
}

/// The result of drawing a weather card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeatherDraw {
    /// The card drawn.
    pub card: WeatherCard,
    /// Whether the card is the storm.
    pub is_storm: bool,
    /// Cards left in the deck after this draw.
    pub remaining: usize,
    /// Whether the deck had to be rebuilt before drawing.
    pub rebuilt: bool,
}

/// The weather deck, drawn from the front.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherDeck {
    cards: VecDeque<WeatherCard>,
    generation: u32,
}

impl WeatherDeck {
    /// Build a fresh deck.
    pub fn new(rng: &mut StdRng) -> Self {
        let mut deck = Self::empty();
        deck.rebuild(rng);
        deck
    }

    /// A deck with no cards. The first draw builds it.
    pub fn empty() -> Self {
        Self {
            cards: VecDeque::new(),
            generation: 0,
        }
    }

    /// Replace the contents with a newly built generation.
    pub fn rebuild(&mut self, rng: &mut StdRng) {
        self.cards = build_deck(rng).into();
        self.generation += 1;
        log::debug!("weather deck built (generation {})", self.generation);
    }

    /// Draw the front card, rebuilding first if the deck is empty.
    pub fn draw(&mut self, rng: &mut StdRng) -> WeatherDraw {
        let rebuilt = self.cards.is_empty();
        if rebuilt {
            self.rebuild(rng);
        }

        let card = match self.cards.pop_front() {
            Some(card) => card,
            // A rebuilt deck always holds DECK_SIZE cards.
            None => unreachable!("weather deck empty after rebuild"),
        };
        let is_storm = card.is_storm();
        log::debug!(
            "weather draw: {card} ({} remaining{})",
            self.cards.len(),
            if is_storm { ", storm" } else { "" }
        );

        WeatherDraw {
            card,
            is_storm,
            remaining: self.cards.len(),
            rebuilt,
        }
    }

    /// Cards left to draw.
    pub fn remaining(&self) -> usize {
        self.cards.len()
    }

    /// Whether no cards remain.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Current state of the deck.
    pub fn state(&self) -> DeckState {
        if self.cards.is_empty() {
            DeckState::Empty
        } else {
            DeckState::Stocked
        }
    }

    /// How many times the deck has been built.
    pub fn generation(&self) -> u32 {
        self.generation
    }

    /// Remaining cards, front first.
    pub fn cards(&self) -> impl Iterator<Item = &WeatherCard> {
        self.cards.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    fn storm_position(deck: &[WeatherCard]) -> Option<usize> {
        deck.iter().position(WeatherCard::is_storm).map(|i| i + 1)
    }

    #[test]
    fn built_deck_shape() {
        let mut rng = StdRng::seed_from_u64(42);
        let deck = build_deck(&mut rng);
        assert_eq!(deck.len(), DECK_SIZE);
        assert_eq!(deck.iter().filter(|c| c.is_storm()).count(), 1);
        let pos = storm_position(&deck).unwrap();
        assert!((7..=12).contains(&pos), "storm at {pos}");
    }

    #[test]
    fn built_deck_keeps_card_population() {
        let mut rng = StdRng::seed_from_u64(1);
        let deck = build_deck(&mut rng);
        let ordinary: Vec<u8> = deck
            .iter()
            .filter(|c| !c.is_storm())
            .map(|c| c.value)
            .collect();
        let count = |v: u8| ordinary.iter().filter(|x| **x == v).count();
        assert_eq!(count(0), 4);
        assert_eq!(count(1), 3);
        assert_eq!(count(2), 3);
        assert_eq!(count(3), 1);
    }

    #[test]
    fn zones_mark_halves() {
        let mut rng = StdRng::seed_from_u64(2);
        let deck = build_deck(&mut rng);
        assert!(deck[..TOP_HALF_SIZE].iter().all(WeatherCard::is_safe));
        assert!(deck[TOP_HALF_SIZE..].iter().all(|c| !c.is_safe()));
    }

    #[test]
    fn storm_never_in_first_half_over_many_builds() {
        let mut rng = StdRng::seed_from_u64(2024);
        for _ in 0..1000 {
            let deck = build_deck(&mut rng);
            let pos = storm_position(&deck).unwrap();
            assert!(pos > TOP_HALF_SIZE);
        }
    }

    #[test]
    fn new_deck_is_stocked() {
        let mut rng = StdRng::seed_from_u64(3);
        let deck = WeatherDeck::new(&mut rng);
        assert_eq!(deck.remaining(), DECK_SIZE);
        assert_eq!(deck.state(), DeckState::Stocked);
        assert_eq!(deck.generation(), 1);
        assert_eq!(deck.cards().count(), DECK_SIZE);
    }

    #[test]
    fn empty_deck_state() {
        let deck = WeatherDeck::empty();
        assert!(deck.is_empty());
        assert_eq!(deck.state(), DeckState::Empty);
        assert_eq!(deck.generation(), 0);
    }

    #[test]
    fn twelve_draws_exhaust_deck_with_one_storm() {
        let mut rng = StdRng::seed_from_u64(4);
        let mut deck = WeatherDeck::new(&mut rng);
        let draws: Vec<WeatherDraw> = (0..DECK_SIZE).map(|_| deck.draw(&mut rng)).collect();

        assert_eq!(draws.iter().filter(|d| d.is_storm).count(), 1);
        assert!(draws.iter().all(|d| !d.rebuilt));
        assert!(draws[..TOP_HALF_SIZE].iter().all(|d| !d.is_storm));
        for (i, draw) in draws.iter().enumerate() {
            assert_eq!(draw.remaining, DECK_SIZE - i - 1);
        }
        assert_eq!(deck.state(), DeckState::Empty);
    }

    #[test]
    fn draws_follow_deck_order() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut deck = WeatherDeck::new(&mut rng);
        let expected: Vec<WeatherCard> = deck.cards().cloned().collect();
        let drawn: Vec<WeatherCard> = (0..DECK_SIZE).map(|_| deck.draw(&mut rng).card).collect();
        assert_eq!(drawn, expected);
    }

    #[test]
    fn draw_from_empty_rebuilds_once() {
        let mut rng = StdRng::seed_from_u64(6);
        let mut deck = WeatherDeck::new(&mut rng);
        for _ in 0..DECK_SIZE {
            deck.draw(&mut rng);
        }

        let draw = deck.draw(&mut rng);
        assert!(draw.rebuilt);
        assert_eq!(draw.remaining, DECK_SIZE - 1);
        assert_eq!(deck.generation(), 2);
        assert!(!draw.is_storm);

        let next = deck.draw(&mut rng);
        assert!(!next.rebuilt);
        assert_eq!(deck.generation(), 2);
    }

    #[test]
    fn empty_deck_builds_on_first_draw() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut deck = WeatherDeck::empty();
        let draw = deck.draw(&mut rng);
        assert!(draw.rebuilt);
        assert_eq!(deck.generation(), 1);
        assert_eq!(deck.remaining(), DECK_SIZE - 1);
    }

    #[test]
    fn build_deterministic_with_seed() {
        let mut rng1 = StdRng::seed_from_u64(99);
        let mut rng2 = StdRng::seed_from_u64(99);
        assert_eq!(build_deck(&mut rng1), build_deck(&mut rng2));
    }
}
