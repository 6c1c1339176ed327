//! Base deck generation and the deck construction entry point.

use alloc::vec::Vec;

use crate::card::{Card, DECK_SIZE, Rank, Suit};
use crate::pipeline::{self, Stage};

/// Creates the standard 52-card deck in canonical order.
///
/// Suits follow [`Suit::STANDARD`] and each suit runs from Ace to King.
#[must_use]
pub fn standard() -> Vec<Card> {
    let mut cards = Vec::with_capacity(DECK_SIZE);

    for suit in Suit::STANDARD {
        for rank in Rank::ALL {
            cards.push(Card::new(suit, rank));
        }
    }

    cards
}

/// Generates the standard deck and runs it through `stages` in order.
///
/// # Example
///
/// ```
/// use carddeck::{Card, Rank, Suit, deck, shuffle, sort, transform};
///
/// let cards = deck::new(&mut [&mut transform::replicate(2), &mut sort::default_sort]);
/// assert_eq!(cards.len(), 104);
/// assert_eq!(cards[0], Card::new(Suit::Spade, Rank::Ace));
/// assert_eq!(cards[1], Card::new(Suit::Spade, Rank::Ace));
///
/// let shuffled = deck::new(&mut [&mut shuffle::shuffle]);
/// assert_eq!(shuffled.len(), 52);
/// ```
pub fn new(stages: &mut [&mut dyn Stage]) -> Vec<Card> {
    pipeline::run(stages, standard())
}
