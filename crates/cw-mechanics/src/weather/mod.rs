//! Weather cards and the weather deck.
//!
//! Each card shows a rainfall value from 0 to 3. One card, the storm,
//! ends the game when drawn. The deck is built so that the storm can only
//! turn up in its second half.

pub mod deck;

pub use deck::{DeckState, WeatherDeck, WeatherDraw, build_deck};

use serde::{Deserialize, Serialize};

/// Label carried by the storm card, and only by it.
pub const STORM_LABEL: &str = "Rainfall 2 (storm)";

/// Rainfall value of the storm card.
pub const STORM_VALUE: u8 = 2;

/// Number of cards in one deck generation.
pub const DECK_SIZE: usize = 12;

/// Number of storm-free cards dealt to the front of each deck.
pub const TOP_HALF_SIZE: usize = 6;

/// How many ordinary cards of each rainfall value go into a deck.
pub const ORDINARY_CARDS: [(u8, usize); 4] = [(0, 4), (1, 3), (2, 3), (3, 1)];

/// Which half of the deck a card was dealt into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DeckZone {
    /// The first six cards. The storm is never here.
    Top,
    /// The last six cards, one of which is the storm.
    Bottom,
}

/// A single weather card.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WeatherCard {
    /// Display label. Also identifies the storm card.
    pub label: String,
    /// Rainfall value (0-3).
    pub value: u8,
    /// The half of the deck this card was dealt into.
    pub zone: DeckZone,
}

impl WeatherCard {
    /// An ordinary card with the given rainfall value.
    ///
    /// Cards start out in the bottom zone until the deck deals them.
    pub fn ordinary(value: u8) -> Self {
        Self {
            label: format!("Rainfall {value}"),
            value,
            zone: DeckZone::Bottom,
        }
    }

    /// The storm card.
    pub fn storm() -> Self {
        Self {
            label: STORM_LABEL.to_string(),
            value: STORM_VALUE,
            zone: DeckZone::Bottom,
        }
    }

    /// The eleven non-storm cards of one generation, unshuffled.
    pub fn ordinary_set() -> Vec<Self> {
        ORDINARY_CARDS
            .iter()
            .flat_map(|&(value, count)| std::iter::repeat_n(Self::ordinary(value), count))
            .collect()
    }

    /// Whether this is the storm card.
    pub fn is_storm(&self) -> bool {
        self.label == STORM_LABEL
    }

    /// Whether the card was dealt into the storm-free top half.
    pub fn is_safe(&self) -> bool {
        self.zone == DeckZone::Top
    }
}

impl std::fmt::Display for WeatherCard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordinary_set_population() {
        let cards = WeatherCard::ordinary_set();
        assert_eq!(cards.len(), DECK_SIZE - 1);
        let count = |v: u8| cards.iter().filter(|c| c.value == v).count();
        assert_eq!(count(0), 4);
        assert_eq!(count(1), 3);
        assert_eq!(count(2), 3);
        assert_eq!(count(3), 1);
        assert!(cards.iter().all(|c| !c.is_storm()));
    }

    #[test]
    fn storm_is_distinguished_by_label() {
        let storm = WeatherCard::storm();
        let plain_two = WeatherCard::ordinary(2);
        assert!(storm.is_storm());
        assert!(!plain_two.is_storm());
        assert_eq!(storm.value, plain_two.value);
    }

    #[test]
    fn display_uses_label() {
        assert_eq!(WeatherCard::ordinary(3).to_string(), "Rainfall 3");
        assert_eq!(WeatherCard::storm().to_string(), STORM_LABEL);
    }

    #[test]
    fn safety_follows_zone() {
        let mut card = WeatherCard::ordinary(1);
        assert!(!card.is_safe());
        card.zone = DeckZone::Top;
        assert!(card.is_safe());
    }
}
