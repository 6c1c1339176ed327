//! Card types and their human-readable identity.

use core::fmt;

use crate::error::CardError;

/// Card suit.
///
/// The declaration order is the canonical suit order used when generating and
/// sorting decks. [`Suit::Joker`] always comes last.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Suit {
    /// Spades.
    Spade,
    /// Diamonds.
    Diamond,
    /// Clubs.
    Club,
    /// Hearts.
    Heart,
    /// The joker pseudo-suit.
    Joker,
}

impl Suit {
    /// The four suits of a standard deck, in canonical order.
    pub const STANDARD: [Self; 4] = [Self::Spade, Self::Diamond, Self::Club, Self::Heart];

    /// Position of the suit in the canonical order (Spade = 0, Joker = 4).
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    const fn name(self) -> &'static str {
        match self {
            Self::Spade => "Spade",
            Self::Diamond => "Diamond",
            Self::Club => "Club",
            Self::Heart => "Heart",
            Self::Joker => "Joker",
        }
    }
}

impl TryFrom<u8> for Suit {
    type Error = CardError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Spade),
            1 => Ok(Self::Diamond),
            2 => Ok(Self::Club),
            3 => Ok(Self::Heart),
            4 => Ok(Self::Joker),
            _ => Err(CardError::InvalidSuit(value)),
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Card rank, from Ace (1) to King (13).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[repr(u8)]
pub enum Rank {
    /// Ace.
    #[default]
    Ace = 1,
    /// Two.
    Two,
    /// Three.
    Three,
    /// Four.
    Four,
    /// Five.
    Five,
    /// Six.
    Six,
    /// Seven.
    Seven,
    /// Eight.
    Eight,
    /// Nine.
    Nine,
    /// Ten.
    Ten,
    /// Jack.
    Jack,
    /// Queen.
    Queen,
    /// King.
    King,
}

impl Rank {
    /// All ranks in ascending order.
    pub const ALL: [Self; 13] = [
        Self::Ace,
        Self::Two,
        Self::Three,
        Self::Four,
        Self::Five,
        Self::Six,
        Self::Seven,
        Self::Eight,
        Self::Nine,
        Self::Ten,
        Self::Jack,
        Self::Queen,
        Self::King,
    ];

    /// Ordinal value of the rank (Ace = 1, King = 13).
    #[must_use]
    pub const fn value(self) -> u8 {
        self as u8
    }

    const fn name(self) -> &'static str {
        match self {
            Self::Ace => "Ace",
            Self::Two => "Two",
            Self::Three => "Three",
            Self::Four => "Four",
            Self::Five => "Five",
            Self::Six => "Six",
            Self::Seven => "Seven",
            Self::Eight => "Eight",
            Self::Nine => "Nine",
            Self::Ten => "Ten",
            Self::Jack => "Jack",
            Self::Queen => "Queen",
            Self::King => "King",
        }
    }
}

impl TryFrom<u8> for Rank {
    type Error = CardError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1..=13 => Ok(Self::ALL[value as usize - 1]),
            _ => Err(CardError::InvalidRank(value)),
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A playing card.
///
/// Jokers carry a sequence number in `joker` so that several jokers in one
/// deck stay distinguishable. For jokers the rank is ignored. Suited cards
/// must keep `joker` at zero: the field takes part in equality, so a suited
/// card with a non-zero `joker` renders and sorts like its plain counterpart
/// but never compares equal to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    /// The suit of the card.
    pub suit: Suit,
    /// The rank of the card.
    pub rank: Rank,
    /// Joker sequence number.
    pub joker: u8,
}

impl Card {
    /// Creates a new card.
    ///
    /// Note: This function does not check the suit. Passing [`Suit::Joker`]
    /// yields joker number zero; prefer [`Card::joker`]. Suited cards built
    /// here always have `joker == 0`.
    #[must_use]
    pub const fn new(suit: Suit, rank: Rank) -> Self {
        Self {
            suit,
            rank,
            joker: 0,
        }
    }

    /// Creates the joker with the given sequence number.
    #[must_use]
    pub const fn joker(index: u8) -> Self {
        Self {
            suit: Suit::Joker,
            rank: Rank::Ace,
            joker: index,
        }
    }

    /// Creates a card from raw suit and rank ordinals.
    ///
    /// Suits are numbered in canonical order starting at 0, ranks from 1
    /// (Ace) to 13 (King). The rank is ignored for jokers.
    ///
    /// # Errors
    ///
    /// Returns an error if the suit or rank is out of range.
    ///
    /// # Example
    ///
    /// ```
    /// use carddeck::{Card, CardError, Rank, Suit};
    ///
    /// assert_eq!(Card::try_new(3, 1), Ok(Card::new(Suit::Heart, Rank::Ace)));
    /// assert_eq!(Card::try_new(0, 14), Err(CardError::InvalidRank(14)));
    /// ```
    pub fn try_new(suit: u8, rank: u8) -> Result<Self, CardError> {
        match Suit::try_from(suit)? {
            Suit::Joker => Ok(Self::joker(0)),
            suit => Ok(Self::new(suit, Rank::try_from(rank)?)),
        }
    }

    /// Returns whether this card is a joker.
    #[must_use]
    pub fn is_joker(&self) -> bool {
        self.suit == Suit::Joker
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_joker() {
            return write!(f, "{}", self.suit);
        }
        write!(f, "{} of {}s", self.rank, self.suit)
    }
}

/// Number of ranks in each standard suit.
pub const RANKS_PER_SUIT: usize = 13;

/// Number of cards per deck.
pub const DECK_SIZE: usize = 52;
