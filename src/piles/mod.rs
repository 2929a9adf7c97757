//! Pile system: the stock/waste pair, tableau piles, and foundation piles.
//!
//! Tableau and foundation piles share the [`Pile`] contract so the engine's
//! drop resolution can ask any candidate target the same two questions:
//! "would you accept this run?" and "take it". The stock/waste pair is not
//! a drop target and has its own surface.

use smallvec::SmallVec;

use crate::core::Card;

pub mod foundation;
pub mod stock;
pub mod tableau;

pub use foundation::FoundationPile;
pub use stock::StockWaste;
pub use tableau::TableauPile;

/// A contiguous run of cards being moved, ordered bottom-to-top.
///
/// A run never exceeds 13 cards, so it lives inline.
pub type CardRun = SmallVec<[Card; 13]>;

/// Shared contract for piles that can receive a dropped run.
///
/// Top of pile = last element. Empty piles are valid states.
pub trait Pile {
    /// All cards in the pile, bottom first.
    fn cards(&self) -> &[Card];

    /// Whether this pile accepts the candidate run.
    ///
    /// The candidate is always a contiguous face-up run taken from the top
    /// of some pile; callers guarantee that shape, piles judge only their
    /// own placement rule.
    fn can_accept(&self, run: &[Card]) -> bool;

    /// Append the run to the pile. The caller guarantees `can_accept`
    /// returned true, or that the run is being restored to the pile it
    /// came from.
    fn place(&mut self, run: CardRun);

    /// The top card, if any.
    fn top(&self) -> Option<&Card> {
        self.cards().last()
    }

    fn len(&self) -> usize {
        self.cards().len()
    }

    fn is_empty(&self) -> bool {
        self.cards().is_empty()
    }
}
