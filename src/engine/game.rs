//! The game engine: deal, the pick-up/drop state machine, and win
//! detection.
//!
//! The engine is the only component with cross-pile knowledge. A
//! presentation layer drives it with user intents ("pick up this run",
//! "drop on these piles") and re-reads the views to redraw; it never
//! mutates piles directly.

use std::collections::HashSet;
use std::mem;

use serde::{Deserialize, Serialize};
use smallvec::smallvec;

use crate::core::{Card, EngineError, GameRng, Suit};
use crate::piles::{CardRun, FoundationPile, Pile, StockWaste, TableauPile};

/// Number of tableau piles.
pub const TABLEAU_PILES: usize = 7;

/// Number of foundation piles.
pub const FOUNDATION_PILES: usize = 4;

/// Reference to a pile a move can start from or land on.
///
/// The stock is not addressable here; it is only reachable through
/// [`GameEngine::draw_from_stock`] and [`GameEngine::recycle_waste`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PileRef {
    Waste,
    Tableau(usize),
    Foundation(usize),
}

/// Which card(s) of a source pile to pick up.
///
/// `Run(index)` is only meaningful on tableau piles; waste and foundation
/// piles yield single cards from the top.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Selector {
    /// The top card (for a tableau pile, a run of one).
    Top,
    /// The face-up run starting at this index within a tableau pile.
    Run(usize),
}

/// How a drop resolved.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveOutcome {
    /// The held run was placed on this pile.
    Placed(PileRef),
    /// No candidate accepted; the run went back to its source unchanged.
    ReturnedToSource,
}

/// Snapshot of a foundation pile for rendering.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FoundationView {
    pub top: Option<Card>,
    pub bound_suit: Option<Suit>,
}

/// Held-run state. Private so a drop without a pickup is unrepresentable
/// from the outside.
#[derive(Clone, Debug)]
enum Hand {
    Idle,
    Holding { cards: CardRun, source: PileRef },
}

/// Builder for a game.
///
/// `seed` drives the deal shuffle and any later recycle shuffles. A
/// caller-supplied `deck` bypasses the deal shuffle entirely, which is
/// how tests pin exact layouts; the back of the deck is dealt first.
#[derive(Default)]
pub struct GameBuilder {
    seed: u64,
    deck: Option<Vec<Card>>,
}

impl GameBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Use this exact 52-card deck instead of shuffling.
    ///
    /// Panics at `build` if the deck is not 52 distinct cards.
    #[must_use]
    pub fn deck(mut self, deck: Vec<Card>) -> Self {
        self.deck = Some(deck);
        self
    }

    /// Build the engine and run the deal.
    ///
    /// The deal is triangular: pile `i` receives `i + 1` cards face-down,
    /// one per pile per round, then each tableau top is flipped face-up.
    /// The remaining 24 cards form the stock.
    #[must_use]
    pub fn build(self) -> GameEngine {
        let mut rng = GameRng::new(self.seed);

        let mut deck = match self.deck {
            Some(deck) => deck,
            None => {
                let mut deck = Card::standard_deck();
                rng.shuffle(&mut deck);
                deck
            }
        };

        assert_eq!(deck.len(), 52, "deck must contain exactly 52 cards");
        let identities: HashSet<_> = deck.iter().map(|c| c.identity()).collect();
        assert_eq!(identities.len(), 52, "deck must not contain duplicate cards");

        for card in &mut deck {
            card.turn_face_down();
        }

        let mut tableau: [TableauPile; TABLEAU_PILES] =
            std::array::from_fn(|_| TableauPile::new());

        for round in 0..TABLEAU_PILES {
            for pile in tableau.iter_mut().skip(round) {
                pile.deal(deck.pop().expect("52 cards always cover the 28-card deal"));
            }
        }
        for pile in &mut tableau {
            pile.reveal_top_if_needed();
        }

        GameEngine {
            stock_waste: StockWaste::new(deck),
            tableau,
            foundations: std::array::from_fn(|_| FoundationPile::new()),
            hand: Hand::Idle,
            rng,
            won: false,
        }
    }
}

/// A Klondike game in progress.
#[derive(Clone, Debug)]
pub struct GameEngine {
    stock_waste: StockWaste,
    tableau: [TableauPile; TABLEAU_PILES],
    foundations: [FoundationPile; FOUNDATION_PILES],
    hand: Hand,
    rng: GameRng,
    won: bool,
}

impl GameEngine {
    /// Shuffle a fresh deck with `seed` and deal.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        GameBuilder::new().seed(seed).build()
    }

    // === Moves ===

    /// Pick up a card or run, entering the holding state.
    ///
    /// Returns a snapshot of the held run. Fails with `InvalidSelection`
    /// (leaving the engine untouched) on a face-down or absent card, an
    /// out-of-range pile, a `Run` selector outside the tableau, or when
    /// a run is already held.
    pub fn pick_up(&mut self, source: PileRef, selector: Selector) -> Result<CardRun, EngineError> {
        if self.won {
            return Err(EngineError::GameOver);
        }
        if !matches!(self.hand, Hand::Idle) {
            return Err(EngineError::InvalidSelection);
        }

        let cards: CardRun = match (source, selector) {
            (PileRef::Waste, Selector::Top) => {
                smallvec![self.stock_waste.take_waste_top()?]
            }
            (PileRef::Foundation(i), Selector::Top) => {
                let pile = self
                    .foundations
                    .get_mut(i)
                    .ok_or(EngineError::InvalidSelection)?;
                smallvec![pile.take_top()?]
            }
            (PileRef::Tableau(i), selector) => {
                let pile = self
                    .tableau
                    .get_mut(i)
                    .ok_or(EngineError::InvalidSelection)?;
                let index = match selector {
                    Selector::Top => {
                        pile.len().checked_sub(1).ok_or(EngineError::InvalidSelection)?
                    }
                    Selector::Run(index) => index,
                };
                pile.take_from(index)?
            }
            // Multi-card picks from waste or foundation piles.
            _ => return Err(EngineError::InvalidSelection),
        };

        self.hand = Hand::Holding {
            cards: cards.clone(),
            source,
        };
        Ok(cards)
    }

    /// Drop the held run on the first accepting candidate target.
    ///
    /// Foundations are tried before tableau piles regardless of their
    /// order in `targets` (within each class the caller's order holds).
    /// If no candidate accepts, the run returns unmodified to its source
    /// and the outcome says so; that is not an error. Either way the
    /// engine settles back to idle, never partially applied.
    pub fn drop_held(&mut self, targets: &[PileRef]) -> Result<MoveOutcome, EngineError> {
        if self.won {
            return Err(EngineError::GameOver);
        }

        let (cards, source) = match mem::replace(&mut self.hand, Hand::Idle) {
            Hand::Holding { cards, source } => (cards, source),
            Hand::Idle => return Err(EngineError::InvalidSelection),
        };

        let accepted = targets
            .iter()
            .copied()
            .filter(|t| matches!(t, PileRef::Foundation(_)))
            .chain(
                targets
                    .iter()
                    .copied()
                    .filter(|t| matches!(t, PileRef::Tableau(_))),
            )
            .find(|&t| self.target_pile(t).map_or(false, |p| p.can_accept(&cards)));

        match accepted {
            Some(target) => {
                if let Some(pile) = self.target_pile_mut(target) {
                    pile.place(cards);
                }
                if let PileRef::Tableau(i) = source {
                    self.tableau[i].reveal_top_if_needed();
                }
                if self.foundation_total() == 52 {
                    self.won = true;
                }
                Ok(MoveOutcome::Placed(target))
            }
            None => {
                match source {
                    // A waste pickup is always a single card.
                    PileRef::Waste => {
                        for card in cards {
                            self.stock_waste.return_to_waste(card);
                        }
                    }
                    PileRef::Tableau(i) => self.tableau[i].place(cards),
                    PileRef::Foundation(i) => self.foundations[i].place(cards),
                }
                Ok(MoveOutcome::ReturnedToSource)
            }
        }
    }

    /// Move the top stock card to the waste, face-up.
    ///
    /// Requires the idle state; the stock cannot be manipulated while a
    /// run is held.
    pub fn draw_from_stock(&mut self) -> Result<(), EngineError> {
        if self.won {
            return Err(EngineError::GameOver);
        }
        if !matches!(self.hand, Hand::Idle) {
            return Err(EngineError::InvalidSelection);
        }
        self.stock_waste.draw()
    }

    /// Recycle the exhausted stock from the waste.
    ///
    /// Legal only when the stock is empty and the waste is not. The
    /// refilled stock is reshuffled with the engine's seeded RNG.
    pub fn recycle_waste(&mut self) -> Result<(), EngineError> {
        if self.won {
            return Err(EngineError::GameOver);
        }
        if !matches!(self.hand, Hand::Idle) {
            return Err(EngineError::InvalidSelection);
        }
        self.stock_waste.recycle(&mut self.rng)
    }

    // === Views ===

    #[must_use]
    pub fn stock_count(&self) -> usize {
        self.stock_waste.stock_len()
    }

    #[must_use]
    pub fn waste_count(&self) -> usize {
        self.stock_waste.waste_len()
    }

    /// The top waste card, the only one eligible as a move source.
    #[must_use]
    pub fn waste_top(&self) -> Option<&Card> {
        self.stock_waste.waste_top()
    }

    /// The top `n` (≤ 3) waste cards for display, bottom first.
    #[must_use]
    pub fn waste_fan(&self, n: usize) -> &[Card] {
        self.stock_waste.waste_fan(n)
    }

    /// Ordered contents of tableau pile `i`, bottom first. Each card
    /// carries its own face-up flag.
    #[must_use]
    pub fn tableau_view(&self, i: usize) -> &[Card] {
        self.tableau.get(i).map_or(&[], |p| p.cards())
    }

    /// Top card and bound suit of foundation pile `i`.
    #[must_use]
    pub fn foundation_view(&self, i: usize) -> FoundationView {
        let pile = self.foundations.get(i);
        FoundationView {
            top: pile.and_then(|p| p.top().copied()),
            bound_suit: pile.and_then(FoundationPile::bound_suit),
        }
    }

    /// Total cards across the four foundations.
    #[must_use]
    pub fn foundation_total(&self) -> usize {
        self.foundations.iter().map(|p| p.len()).sum()
    }

    /// The run currently held, if any (for rendering a drag).
    #[must_use]
    pub fn held(&self) -> Option<&[Card]> {
        match &self.hand {
            Hand::Idle => None,
            Hand::Holding { cards, .. } => Some(cards),
        }
    }

    #[must_use]
    pub fn is_won(&self) -> bool {
        self.won
    }

    /// Every card the engine owns, including a held run.
    ///
    /// Debugging and integrity-check aid: the result is always a
    /// permutation of the standard 52-card deck.
    #[must_use]
    pub fn all_cards(&self) -> Vec<Card> {
        let mut cards: Vec<Card> = self.stock_waste.all_cards().copied().collect();
        for pile in &self.tableau {
            cards.extend_from_slice(pile.cards());
        }
        for pile in &self.foundations {
            cards.extend_from_slice(pile.cards());
        }
        if let Some(held) = self.held() {
            cards.extend_from_slice(held);
        }
        cards
    }

    // === Internals ===

    /// Candidate drop targets behind the shared pile contract. The waste
    /// is never a drop target.
    fn target_pile(&self, target: PileRef) -> Option<&dyn Pile> {
        match target {
            PileRef::Tableau(i) => self.tableau.get(i).map(|p| p as &dyn Pile),
            PileRef::Foundation(i) => self.foundations.get(i).map(|p| p as &dyn Pile),
            PileRef::Waste => None,
        }
    }

    fn target_pile_mut(&mut self, target: PileRef) -> Option<&mut dyn Pile> {
        match target {
            PileRef::Tableau(i) => self.tableau.get_mut(i).map(|p| p as &mut dyn Pile),
            PileRef::Foundation(i) => self.foundations.get_mut(i).map(|p| p as &mut dyn Pile),
            PileRef::Waste => None,
        }
    }
}
