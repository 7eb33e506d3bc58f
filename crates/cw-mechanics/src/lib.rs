//! Random-resolution mechanics for the Castaway survival game.
//!
//! Provides the token bag used for food and wood gathering, the weather
//! deck that paces the rounds and hides the storm, and batch trials over
//! both for checking the odds.

pub mod error;
pub mod token;
pub mod trials;
pub mod weather;

pub use error::{DrawError, DrawResult};
pub use token::{Token, TokenBag, TokenColor, WoodDraw};
pub use weather::{DeckState, DeckZone, WeatherCard, WeatherDeck, WeatherDraw};
