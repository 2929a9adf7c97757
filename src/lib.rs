//! # klondike-engine
//!
//! A Klondike Solitaire rules engine: pile composition, legal move
//! validation, card movement, and win detection. Rendering and input
//! handling live elsewhere; a presentation layer drives the engine with
//! user intents and re-reads the pile views to redraw.
//!
//! ## Design Principles
//!
//! 1. **Rules only**: no pixels, fonts, or event loops. The engine
//!    answers "is this move legal?" and applies it, nothing more.
//!
//! 2. **Deterministic randomness**: every shuffle goes through a seeded
//!    RNG injected at construction, so a seed fully determines a game
//!    and tests can pin exact layouts (or supply a deck outright).
//!
//! 3. **Illegal states unrepresentable**: the held run lives in a
//!    private `Idle`/`Holding` state machine; you cannot drop what you
//!    never picked up, and a failed drop always restores the source
//!    pile exactly.
//!
//! ## Example
//!
//! ```
//! use klondike_engine::{GameEngine, PileRef, Selector};
//!
//! let mut game = GameEngine::new(42);
//! assert_eq!(game.stock_count(), 24);
//!
//! game.draw_from_stock().unwrap();
//! if game.pick_up(PileRef::Waste, Selector::Top).is_ok() {
//!     // Try the foundations first, then every tableau pile.
//!     let targets: Vec<PileRef> = (0..4usize)
//!         .map(PileRef::Foundation)
//!         .chain((0..7usize).map(PileRef::Tableau))
//!         .collect();
//!     game.drop_held(&targets).unwrap();
//! }
//! ```
//!
//! ## Modules
//!
//! - `core`: cards, seeded RNG, error kinds
//! - `piles`: stock/waste, tableau piles, foundation piles
//! - `engine`: deal, the pick-up/drop state machine, win detection

pub mod core;
pub mod engine;
pub mod piles;

// Re-export commonly used types
pub use crate::core::{Card, Color, EngineError, GameRng, GameRngState, Rank, Suit};

pub use crate::piles::{CardRun, FoundationPile, Pile, StockWaste, TableauPile};

pub use crate::engine::{
    FoundationView, GameBuilder, GameEngine, MoveOutcome, PileRef, Selector, FOUNDATION_PILES,
    TABLEAU_PILES,
};
