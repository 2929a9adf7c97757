//! Foundation piles: the four suit-ascending goal piles.
//!
//! A foundation's suit is not preassigned. The first card placed (always
//! an Ace) binds the suit, and the bind is permanent: taking cards back
//! out, even emptying the pile, never clears it. An empty pile accepts
//! any Ace regardless of a previous bind, matching observed behavior of
//! the reference game.

use serde::{Deserialize, Serialize};

use super::{CardRun, Pile};
use crate::core::{Card, EngineError, Rank, Suit};

/// One of the four goal piles.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FoundationPile {
    cards: Vec<Card>,
    bound_suit: Option<Suit>,
}

impl FoundationPile {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The suit bound to this pile, if any card has ever been placed.
    #[must_use]
    pub fn bound_suit(&self) -> Option<Suit> {
        self.bound_suit
    }

    /// Remove and return the top card.
    ///
    /// Foundation cards may be moved back out (mistake recovery). The
    /// bound suit is kept even if this empties the pile.
    pub fn take_top(&mut self) -> Result<Card, EngineError> {
        self.cards.pop().ok_or(EngineError::InvalidSelection)
    }
}

impl Pile for FoundationPile {
    fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Single cards only. An empty pile accepts any Ace; a non-empty pile
    /// requires the bound suit and the next value up.
    fn can_accept(&self, run: &[Card]) -> bool {
        let [card] = run else {
            return false;
        };

        match self.cards.last() {
            None => card.rank() == Rank::Ace,
            Some(top) => {
                Some(card.suit()) == self.bound_suit && card.value() == top.value() + 1
            }
        }
    }

    fn place(&mut self, run: CardRun) {
        if self.bound_suit.is_none() {
            if let Some(card) = run.first() {
                self.bound_suit = Some(card.suit());
            }
        }
        self.cards.extend(run);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use smallvec::smallvec;

    fn face_up(rank: Rank, suit: Suit) -> Card {
        let mut card = Card::new(rank, suit);
        card.flip_face_up();
        card
    }

    #[test]
    fn test_empty_accepts_only_aces() {
        let pile = FoundationPile::new();

        assert!(pile.can_accept(&[face_up(Rank::Ace, Suit::Hearts)]));
        assert!(pile.can_accept(&[face_up(Rank::Ace, Suit::Spades)]));
        assert!(!pile.can_accept(&[face_up(Rank::Two, Suit::Hearts)]));
    }

    #[test]
    fn test_rejects_multi_card_runs() {
        let pile = FoundationPile::new();
        let run = [
            face_up(Rank::Ace, Suit::Hearts),
            face_up(Rank::Two, Suit::Hearts),
        ];
        assert!(!pile.can_accept(&run));
        assert!(!pile.can_accept(&[]));
    }

    #[test]
    fn test_first_placement_binds_suit() {
        let mut pile = FoundationPile::new();
        assert_eq!(pile.bound_suit(), None);

        pile.place(smallvec![face_up(Rank::Ace, Suit::Hearts)]);
        assert_eq!(pile.bound_suit(), Some(Suit::Hearts));

        // Only hearts of increasing rank from here.
        assert!(pile.can_accept(&[face_up(Rank::Two, Suit::Hearts)]));
        assert!(!pile.can_accept(&[face_up(Rank::Two, Suit::Diamonds)]));
        assert!(!pile.can_accept(&[face_up(Rank::Three, Suit::Hearts)]));

        pile.place(smallvec![face_up(Rank::Two, Suit::Hearts)]);
        assert!(pile.can_accept(&[face_up(Rank::Three, Suit::Hearts)]));
    }

    #[test]
    fn test_take_top_keeps_bound_suit() {
        let mut pile = FoundationPile::new();
        pile.place(smallvec![face_up(Rank::Ace, Suit::Spades)]);

        let card = pile.take_top().unwrap();
        assert_eq!(card.identity(), (Rank::Ace, Suit::Spades));
        assert!(pile.is_empty());
        assert_eq!(pile.bound_suit(), Some(Suit::Spades));
    }

    #[test]
    fn test_empty_but_bound_still_accepts_any_ace() {
        // Observed quirk of the reference game, reproduced on purpose:
        // emptying a bound pile leaves the bind in place, yet the empty
        // pile falls back to the any-Ace rule.
        let mut pile = FoundationPile::new();
        pile.place(smallvec![face_up(Rank::Ace, Suit::Spades)]);
        pile.take_top().unwrap();

        assert!(pile.can_accept(&[face_up(Rank::Ace, Suit::Hearts)]));

        // The original bind survives a foreign Ace.
        pile.place(smallvec![face_up(Rank::Ace, Suit::Hearts)]);
        assert_eq!(pile.bound_suit(), Some(Suit::Spades));
    }

    #[test]
    fn test_take_top_empty_fails() {
        let mut pile = FoundationPile::new();
        assert_eq!(pile.take_top(), Err(EngineError::InvalidSelection));
    }
}
