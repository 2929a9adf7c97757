//! Core engine types: cards, RNG, errors.
//!
//! These are the fundamental building blocks the pile and engine modules
//! are assembled from.

pub mod card;
pub mod error;
pub mod rng;

pub use card::{Card, Color, Rank, Suit};
pub use error::EngineError;
pub use rng::{GameRng, GameRngState};
