//! Journal entry types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use cw_mechanics::Token;

/// A single entry in the session journal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum JournalEntry {
    /// A token drawn for food.
    FoodDraw {
        /// The token drawn.
        token: Token,
        /// When the draw was made.
        timestamp: DateTime<Utc>,
    },
    /// Tokens drawn for wood.
    WoodDraw {
        /// Number of tokens declared.
        declared: u32,
        /// The tokens drawn.
        tokens: Vec<Token>,
        /// Whether the snake token came up.
        snake: bool,
        /// When the draw was made.
        timestamp: DateTime<Utc>,
    },
    /// A weather card drawn at the start of a round.
    WeatherDraw {
        /// Round number the card opened.
        round: u32,
        /// Card label.
        label: String,
        /// Rainfall value.
        value: u8,
        /// Whether it was the storm.
        storm: bool,
        /// Cards left after the draw.
        remaining: usize,
        /// When the card was drawn.
        timestamp: DateTime<Utc>,
    },
    /// A new weather deck was built.
    DeckBuilt {
        /// Generation number of the new deck.
        generation: u32,
        /// When the deck was built.
        timestamp: DateTime<Utc>,
    },
    /// A resource counter was changed by hand.
    ResourceAdjusted {
        /// Resource name.
        resource: String,
        /// Amount requested.
        delta: i64,
        /// Value after the change.
        value: u32,
        /// When the change was made.
        timestamp: DateTime<Utc>,
    },
}

impl JournalEntry {
    /// When the entry was recorded.
    pub fn timestamp(&self) -> DateTime<Utc> {
        match self {
            Self::FoodDraw { timestamp, .. }
            | Self::WoodDraw { timestamp, .. }
            | Self::WeatherDraw { timestamp, .. }
            | Self::DeckBuilt { timestamp, .. }
            | Self::ResourceAdjusted { timestamp, .. } => *timestamp,
        }
    }

    /// Short label for the kind of entry.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::FoodDraw { .. } => "Food",
            Self::WoodDraw { .. } => "Wood",
            Self::WeatherDraw { .. } => "Weather",
            Self::DeckBuilt { .. } => "Deck",
            Self::ResourceAdjusted { .. } => "Resource",
        }
    }

    /// One-line description of what happened.
    pub fn describe(&self) -> String {
        match self {
            Self::FoodDraw { token, .. } => {
                format!("drew {token}, caught {} fish", token.fish)
            }
            Self::WoodDraw {
                declared,
                tokens,
                snake,
                ..
            } => {
                let drawn: Vec<String> = tokens.iter().map(|t| t.to_string()).collect();
                let result = if *snake {
                    "snake bite, no wood".to_string()
                } else {
                    format!("+{declared} wood")
                };
                format!("declared {declared}, drew {} ({result})", drawn.join(", "))
            }
            Self::WeatherDraw {
                round,
                label,
                storm,
                remaining,
                ..
            } => {
                let storm = if *storm { " - STORM" } else { "" };
                format!("round {round}: {label}{storm} ({remaining} left)")
            }
            Self::DeckBuilt { generation, .. } => {
                format!("built weather deck #{generation}")
            }
            Self::ResourceAdjusted {
                resource,
                delta,
                value,
                ..
            } => format!("{resource} {delta:+} -> {value}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn describe_food() {
        let e = JournalEntry::FoodDraw {
            token: Token::white(2),
            timestamp: Utc::now(),
        };
        assert_eq!(e.kind(), "Food");
        assert_eq!(e.describe(), "drew {white, 2}, caught 2 fish");
    }

    #[test]
    fn describe_wood() {
        let safe = JournalEntry::WoodDraw {
            declared: 2,
            tokens: vec![Token::white(1), Token::white(2)],
            snake: false,
            timestamp: Utc::now(),
        };
        assert!(safe.describe().contains("+2 wood"));

        let bitten = JournalEntry::WoodDraw {
            declared: 1,
            tokens: vec![Token::black(3)],
            snake: true,
            timestamp: Utc::now(),
        };
        assert!(bitten.describe().contains("snake bite"));
    }

    #[test]
    fn describe_weather_and_adjustment() {
        let storm = JournalEntry::WeatherDraw {
            round: 9,
            label: "Rainfall 2 (storm)".to_string(),
            value: 2,
            storm: true,
            remaining: 3,
            timestamp: Utc::now(),
        };
        assert_eq!(
            storm.describe(),
            "round 9: Rainfall 2 (storm) - STORM (3 left)"
        );

        let adj = JournalEntry::ResourceAdjusted {
            resource: "water".to_string(),
            delta: -1,
            value: 0,
            timestamp: Utc::now(),
        };
        assert_eq!(adj.describe(), "water -1 -> 0");
    }
}
