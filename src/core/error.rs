//! Engine error kinds.
//!
//! Every error is locally recoverable: a rejected operation leaves the
//! engine exactly as it was. An illegal *drop* is not an error at all -
//! the held run returns to its source and the outcome reports it.

use serde::{Deserialize, Serialize};

/// Errors returned by engine operations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum EngineError {
    /// The requested pickup is illegal: a face-down or absent card, an
    /// out-of-range pile or index, a multi-card pick from a source that
    /// only yields single cards, or an operation that needs the hand to
    /// be empty (or full) when it is not.
    InvalidSelection,
    /// Drawing from an empty stock.
    EmptyStock,
    /// Recycling is only legal when the stock is empty and the waste is
    /// not.
    IllegalRecycle,
    /// The game has been won; no further moves are processed.
    GameOver,
}

impl std::fmt::Display for EngineError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EngineError::InvalidSelection => write!(f, "invalid selection"),
            EngineError::EmptyStock => write!(f, "stock is empty"),
            EngineError::IllegalRecycle => {
                write!(f, "recycle requires an empty stock and a non-empty waste")
            }
            EngineError::GameOver => write!(f, "game is already won"),
        }
    }
}

impl std::error::Error for EngineError {}
