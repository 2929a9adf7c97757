//! Tableau piles: the seven cascading piles.
//!
//! A tableau pile is a face-down prefix under a face-up suffix. Invariant:
//! face-down cards always sit below every face-up card in the pile. The
//! face-up suffix built through play forms descending, alternating-color
//! runs.

use serde::{Deserialize, Serialize};

use super::{CardRun, Pile};
use crate::core::{Card, EngineError, Rank};

/// One of the seven cascading piles.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableauPile {
    cards: Vec<Card>,
}

impl TableauPile {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a card during the deal, bypassing acceptance rules.
    pub(crate) fn deal(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Remove and return the contiguous suffix starting at `index`.
    ///
    /// Fails with `InvalidSelection` if `index` is out of range or the
    /// card there is face-down; face-down cards are never movable. By the
    /// pile invariant, everything above a face-up card is also face-up.
    pub fn take_from(&mut self, index: usize) -> Result<CardRun, EngineError> {
        let card = self.cards.get(index).ok_or(EngineError::InvalidSelection)?;
        if !card.is_face_up() {
            return Err(EngineError::InvalidSelection);
        }
        Ok(self.cards.drain(index..).collect())
    }

    /// Flip the top card face-up if a removal exposed a face-down card.
    pub fn reveal_top_if_needed(&mut self) {
        if let Some(top) = self.cards.last_mut() {
            if !top.is_face_up() {
                top.flip_face_up();
            }
        }
    }

    /// Number of face-up cards at the top of the pile.
    #[must_use]
    pub fn face_up_count(&self) -> usize {
        self.cards.iter().rev().take_while(|c| c.is_face_up()).count()
    }
}

impl Pile for TableauPile {
    fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// An empty pile accepts only a King-bottomed run; otherwise the
    /// run's bottom card must alternate color with the pile top and be
    /// exactly one rank lower.
    fn can_accept(&self, run: &[Card]) -> bool {
        let Some(bottom) = run.first() else {
            return false;
        };

        match self.cards.last() {
            None => bottom.rank() == Rank::King,
            Some(top) => {
                bottom.color() != top.color() && bottom.value() == top.value() - 1
            }
        }
    }

    fn place(&mut self, run: CardRun) {
        self.cards.extend(run);
    }
}
