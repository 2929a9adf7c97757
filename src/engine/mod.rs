//! Game orchestration: deal, move resolution, win detection.

pub mod game;

pub use game::{
    FoundationView, GameBuilder, GameEngine, MoveOutcome, PileRef, Selector, FOUNDATION_PILES,
    TABLEAU_PILES,
};
