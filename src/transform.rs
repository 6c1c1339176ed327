//! Ready-made pipeline stages.

use alloc::vec::Vec;

use crate::card::Card;

/// Returns a stage that appends `n` jokers numbered `0..n`.
///
/// Existing cards are left untouched and in place.
///
/// # Example
///
/// ```
/// use carddeck::{Card, deck, transform};
///
/// let cards = deck::new(&mut [&mut transform::jokers(2)]);
/// assert_eq!(cards.len(), 54);
/// assert_eq!(cards[52..], [Card::joker(0), Card::joker(1)]);
/// ```
pub fn jokers(n: u8) -> impl FnMut(Vec<Card>) -> Vec<Card> {
    move |mut cards: Vec<Card>| {
        cards.extend((0..n).map(Card::joker));
        cards
    }
}

/// Returns a stage that removes every card matching `predicate`.
///
/// Surviving cards keep their order and multiplicity.
pub fn exclude<P>(mut predicate: P) -> impl FnMut(Vec<Card>) -> Vec<Card>
where
    P: FnMut(&Card) -> bool,
{
    move |mut cards: Vec<Card>| {
        cards.retain(|card| !predicate(card));
        cards
    }
}

/// Returns a stage that keeps only the cards matching `predicate`.
///
/// This is the complement of [`exclude`].
pub fn retain<P>(mut predicate: P) -> impl FnMut(Vec<Card>) -> Vec<Card>
where
    P: FnMut(&Card) -> bool,
{
    exclude(move |card| !predicate(card))
}

/// Returns a stage that concatenates `n` copies of the sequence.
///
/// `replicate(0)` yields an empty deck and `replicate(1)` leaves the
/// sequence unchanged.
pub fn replicate(n: usize) -> impl FnMut(Vec<Card>) -> Vec<Card> {
    move |cards: Vec<Card>| cards.repeat(n)
}
