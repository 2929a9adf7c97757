//! The stock (face-down draw pile) and its waste.
//!
//! Drawing and recycling only ever touch these two containers; tableau and
//! foundation piles are unaffected. The top of each container is the last
//! element, and the stock is drawn from the back.

use serde::{Deserialize, Serialize};

use crate::core::{Card, EngineError, GameRng};

/// The stock/waste pair.
///
/// The stock holds face-down cards; the waste holds face-up cards fed by
/// draws. Only the top waste card is eligible as a move source, but the
/// top three are conventionally fanned for display.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockWaste {
    stock: Vec<Card>,
    waste: Vec<Card>,
}

impl StockWaste {
    /// Create the pair from an already-shuffled stock.
    ///
    /// Cards are forced face-down on the way in.
    #[must_use]
    pub fn new(mut stock: Vec<Card>) -> Self {
        for card in &mut stock {
            card.turn_face_down();
        }
        Self {
            stock,
            waste: Vec::new(),
        }
    }

    /// Move the top stock card to the waste, face-up.
    pub fn draw(&mut self) -> Result<(), EngineError> {
        let mut card = self.stock.pop().ok_or(EngineError::EmptyStock)?;
        card.flip_face_up();
        self.waste.push(card);
        Ok(())
    }

    /// Recycle the waste back into the stock.
    ///
    /// Legal only when the stock is empty and the waste is not. The waste
    /// returns in reverse order, face-down, and the stock is reshuffled
    /// with the injected RNG.
    pub fn recycle(&mut self, rng: &mut GameRng) -> Result<(), EngineError> {
        if !self.stock.is_empty() || self.waste.is_empty() {
            return Err(EngineError::IllegalRecycle);
        }

        while let Some(mut card) = self.waste.pop() {
            card.turn_face_down();
            self.stock.push(card);
        }
        rng.shuffle(&mut self.stock);

        Ok(())
    }

    /// The top waste card - the only one a move can start from.
    #[must_use]
    pub fn waste_top(&self) -> Option<&Card> {
        self.waste.last()
    }

    /// Remove and return the top waste card.
    pub fn take_waste_top(&mut self) -> Result<Card, EngineError> {
        self.waste.pop().ok_or(EngineError::InvalidSelection)
    }

    /// Return a card to the top of the waste (a failed drop).
    pub(crate) fn return_to_waste(&mut self, card: Card) {
        self.waste.push(card);
    }

    /// The top `n` waste cards (clamped to 3 and to the waste size),
    /// bottom first.
    #[must_use]
    pub fn waste_fan(&self, n: usize) -> &[Card] {
        let n = n.min(3).min(self.waste.len());
        &self.waste[self.waste.len() - n..]
    }

    #[must_use]
    pub fn stock_len(&self) -> usize {
        self.stock.len()
    }

    #[must_use]
    pub fn waste_len(&self) -> usize {
        self.waste.len()
    }

    /// All cards in both containers, for integrity checks.
    pub fn all_cards(&self) -> impl Iterator<Item = &Card> {
        self.stock.iter().chain(self.waste.iter())
    }
}
