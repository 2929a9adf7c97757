//! The card model: ranks, suits, colors, and the 52-card deck.
//!
//! A `Card` has an immutable identity (rank + suit) and a single mutable
//! flag: whether it is face-up. Gameplay only ever turns cards face-up;
//! turning cards back face-down is an engine-internal operation used when
//! the waste is recycled into the stock.

use serde::{Deserialize, Serialize};

/// Card rank, Ace low.
///
/// Discriminants are the Klondike ordinal values (Ace = 1 .. King = 13),
/// so foundation and tableau adjacency checks are plain arithmetic on
/// `value()`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Rank {
    Ace = 1,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
}

impl Rank {
    /// All ranks in ascending order.
    pub const ALL: [Rank; 13] = [
        Rank::Ace,
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
    ];

    /// Ordinal value, 1 (Ace) through 13 (King).
    #[must_use]
    pub const fn value(self) -> u8 {
        self as u8
    }
}

/// Card color, derived from the suit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    Black,
    Red,
}

/// Card suit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Suit {
    Spades,
    Clubs,
    Hearts,
    Diamonds,
}

impl Suit {
    /// All four suits.
    pub const ALL: [Suit; 4] = [Suit::Spades, Suit::Clubs, Suit::Hearts, Suit::Diamonds];

    /// Spades and clubs are black, hearts and diamonds are red.
    #[must_use]
    pub const fn color(self) -> Color {
        match self {
            Suit::Spades | Suit::Clubs => Color::Black,
            Suit::Hearts | Suit::Diamonds => Color::Red,
        }
    }

    /// Unicode symbol for display.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Suit::Spades => '\u{2660}',
            Suit::Clubs => '\u{2663}',
            Suit::Hearts => '\u{2665}',
            Suit::Diamonds => '\u{2666}',
        }
    }
}

/// A playing card.
///
/// Rank and suit never change after construction. `face_up` is the only
/// mutable state, and it is flipped by engine policy, never by the card
/// spontaneously. Equality includes the face-up flag, so restoring a pile
/// to its exact prior state can be asserted with `==`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    rank: Rank,
    suit: Suit,
    face_up: bool,
}

impl Card {
    /// Create a face-down card.
    #[must_use]
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self {
            rank,
            suit,
            face_up: false,
        }
    }

    /// Build the standard 52-card deck, face-down, in suit-then-rank order.
    ///
    /// Exactly one card exists per (rank, suit) pair. Shuffling is the
    /// caller's concern.
    #[must_use]
    pub fn standard_deck() -> Vec<Card> {
        let mut deck = Vec::with_capacity(52);
        for suit in Suit::ALL {
            for rank in Rank::ALL {
                deck.push(Card::new(rank, suit));
            }
        }
        deck
    }

    #[must_use]
    pub const fn rank(self) -> Rank {
        self.rank
    }

    #[must_use]
    pub const fn suit(self) -> Suit {
        self.suit
    }

    #[must_use]
    pub const fn color(self) -> Color {
        self.suit.color()
    }

    /// Ordinal value of the rank, 1..=13.
    #[must_use]
    pub const fn value(self) -> u8 {
        self.rank.value()
    }

    #[must_use]
    pub const fn is_face_up(self) -> bool {
        self.face_up
    }

    /// Turn the card face-up. One-way for gameplay.
    pub fn flip_face_up(&mut self) {
        self.face_up = true;
    }

    /// Turn the card face-down. Only the recycle path needs this, so it
    /// stays crate-private.
    pub(crate) fn turn_face_down(&mut self) {
        self.face_up = false;
    }

    /// Identity without the face-up flag, for multiset comparisons.
    #[must_use]
    pub const fn identity(self) -> (Rank, Suit) {
        (self.rank, self.suit)
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let rank = match self.rank {
            Rank::Ace => "A",
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
        };
        write!(f, "{}{}", rank, self.suit.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_standard_deck_is_52_distinct() {
        let deck = Card::standard_deck();
        assert_eq!(deck.len(), 52);

        let identities: HashSet<_> = deck.iter().map(|c| c.identity()).collect();
        assert_eq!(identities.len(), 52);

        assert!(deck.iter().all(|c| !c.is_face_up()));
    }

    #[test]
    fn test_suit_colors() {
        assert_eq!(Suit::Spades.color(), Color::Black);
        assert_eq!(Suit::Clubs.color(), Color::Black);
        assert_eq!(Suit::Hearts.color(), Color::Red);
        assert_eq!(Suit::Diamonds.color(), Color::Red);
    }

    #[test]
    fn test_rank_values() {
        assert_eq!(Rank::Ace.value(), 1);
        assert_eq!(Rank::Ten.value(), 10);
        assert_eq!(Rank::Jack.value(), 11);
        assert_eq!(Rank::Queen.value(), 12);
        assert_eq!(Rank::King.value(), 13);
    }

    #[test]
    fn test_flip_is_one_way_for_gameplay() {
        let mut card = Card::new(Rank::Seven, Suit::Hearts);
        assert!(!card.is_face_up());

        card.flip_face_up();
        assert!(card.is_face_up());

        // Flipping again is a no-op.
        card.flip_face_up();
        assert!(card.is_face_up());
    }

    #[test]
    fn test_display() {
        let card = Card::new(Rank::Queen, Suit::Diamonds);
        assert_eq!(card.to_string(), "Q\u{2666}");

        let card = Card::new(Rank::Ten, Suit::Spades);
        assert_eq!(card.to_string(), "10\u{2660}");
    }

    #[test]
    fn test_serde_round_trip() {
        let mut card = Card::new(Rank::Ace, Suit::Clubs);
        card.flip_face_up();

        let json = serde_json::to_string(&card).unwrap();
        let back: Card = serde_json::from_str(&json).unwrap();
        assert_eq!(card, back);
    }
}
