//! The token bag and its two kinds of draw.

use rand::Rng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

use super::Token;
use crate::error::{DrawError, DrawResult};

/// Smallest number of tokens a player may declare for a wood draw.
pub const MIN_WOOD_DECLARATION: u32 = 1;

/// Largest number of tokens a player may declare for a wood draw.
pub const MAX_WOOD_DECLARATION: u32 = 5;

/// A fixed population of tokens.
///
/// Draws never remove tokens: every call samples the full population.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenBag {
    tokens: Vec<Token>,
}

impl TokenBag {
    /// The standard bag: 3×(white, 1), 2×(white, 2), 1×(black, 3).
    pub fn standard() -> Self {
        let mut tokens = Vec::with_capacity(6);
        tokens.extend(std::iter::repeat_n(Token::white(1), 3));
        tokens.extend(std::iter::repeat_n(Token::white(2), 2));
        tokens.push(Token::black(3));
        Self { tokens }
    }

    /// All tokens in the bag.
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Number of tokens in the bag.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Always false for the standard bag.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Draw one token for fishing. The token goes straight back in.
    pub fn draw_for_food(&self, rng: &mut StdRng) -> Token {
        let index = rng.random_range(0..self.tokens.len());
        let token = self.tokens[index];
        log::debug!("food draw: {token}");
        token
    }

    /// Draw `declared` tokens for wood gathering.
    ///
    /// The declaration must lie in 1-5; nothing is drawn otherwise.
    pub fn draw_for_wood(&self, declared: u32, rng: &mut StdRng) -> DrawResult<WoodDraw> {
        if !(MIN_WOOD_DECLARATION..=MAX_WOOD_DECLARATION).contains(&declared) {
            return Err(DrawError::InvalidDeclaration(declared));
        }
        let tokens = self.draw_tokens(declared as usize, rng)?;
        let draw = WoodDraw::new(declared, tokens);
        log::debug!(
            "wood draw of {declared}: {} (snake: {})",
            draw.describe_tokens(),
            draw.contains_black
        );
        Ok(draw)
    }

    /// Sample `count` distinct tokens without replacement.
    ///
    /// Unlike [`draw_for_wood`](Self::draw_for_wood) this ignores the
    /// declaration cap and is only bounded by the bag size.
    pub fn draw_tokens(&self, count: usize, rng: &mut StdRng) -> DrawResult<Vec<Token>> {
        if count > self.tokens.len() {
            return Err(DrawError::NotEnoughTokens {
                requested: count,
                available: self.tokens.len(),
            });
        }
        Ok(rand::seq::index::sample(rng, self.tokens.len(), count)
            .into_iter()
            .map(|i| self.tokens[i])
            .collect())
    }
}

impl Default for TokenBag {
    fn default() -> Self {
        Self::standard()
    }
}

/// The outcome of a wood draw.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WoodDraw {
    /// How many tokens the player declared.
    pub declared: u32,
    /// The tokens pulled from the bag, in draw order.
    pub tokens: Vec<Token>,
    /// Whether the black token was among them.
    pub contains_black: bool,
}

impl WoodDraw {
    fn new(declared: u32, tokens: Vec<Token>) -> Self {
        let contains_black = tokens.iter().any(Token::is_black);
        Self {
            declared,
            tokens,
            contains_black,
        }
    }

    /// Wood gained: the declaration if no snake appeared, otherwise nothing.
    pub fn wood_gained(&self) -> u32 {
        if self.contains_black { 0 } else { self.declared }
    }

    /// The drawn tokens as a comma-separated list.
    pub fn describe_tokens(&self) -> String {
        let parts: Vec<String> = self.tokens.iter().map(Token::to_string).collect();
        parts.join(", ")
    }
}
