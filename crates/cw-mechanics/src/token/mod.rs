//! Tokens and the draw bag.
//!
//! The bag holds six tokens: three white worth one fish, two white worth
//! two fish, and a single black token worth three. Food draws look at one
//! token; wood draws pull several at once and fail on the black one.

pub mod bag;

pub use bag::{TokenBag, WoodDraw};

use serde::{Deserialize, Serialize};

/// The color of a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenColor {
    /// A safe token.
    White,
    /// The snake token. Spoils a wood draw.
    Black,
}

impl std::fmt::Display for TokenColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::White => write!(f, "white"),
            Self::Black => write!(f, "black"),
        }
    }
}

/// A single token in the bag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Token {
    /// The token's color.
    pub color: TokenColor,
    /// Food gained when this token is drawn for fishing.
    pub fish: u32,
}

impl Token {
    /// Create a white token with the given fish value.
    pub const fn white(fish: u32) -> Self {
        Self {
            color: TokenColor::White,
            fish,
        }
    }

    /// Create a black token with the given fish value.
    pub const fn black(fish: u32) -> Self {
        Self {
            color: TokenColor::Black,
            fish,
        }
    }

    /// Whether this is the black token.
    pub fn is_black(&self) -> bool {
        self.color == TokenColor::Black
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{{}, {}}}", self.color, self.fish)
    }
}
