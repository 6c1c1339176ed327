//! Deterministic card ordering.
//!
//! Cards are ordered by suit in canonical order, then by ascending rank.
//! Jokers come after every suited card, ordered by their sequence number.

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::cmp::Ordering;

use crate::card::{Card, RANKS_PER_SUIT, Suit};

/// A less-than predicate over two positions of a card sequence.
pub type Less<'a> = Box<dyn Fn(usize, usize) -> bool + 'a>;

/// Returns the composite order key of a card.
///
/// The key is `suit_index * 13 + rank`, so Ace of Spades is 1 and King of
/// Hearts is 52. Jokers are keyed one past their sequence number on top of
/// `4 * 13`, which keeps them strictly after every suited card.
#[must_use]
pub fn order(card: &Card) -> usize {
    let base = card.suit.index() * RANKS_PER_SUIT;
    match card.suit {
        Suit::Joker => base + usize::from(card.joker) + 1,
        _ => base + usize::from(card.rank.value()),
    }
}

/// The default comparator factory: compares positions by [`order`].
#[must_use]
pub fn less(cards: &[Card]) -> Less<'_> {
    Box::new(move |i, j| order(&cards[i]) < order(&cards[j]))
}

/// Sorts cards by [`order`].
///
/// The sort is stable: equal cards keep their relative order.
#[must_use]
pub fn default_sort(mut cards: Vec<Card>) -> Vec<Card> {
    cards.sort_by_key(order);
    cards
}

/// Returns a stage that sorts cards with a comparator built by `factory`.
///
/// The factory receives the whole sequence as it was before sorting and
/// returns a less-than predicate over positions in that sequence. This lets a
/// comparator consult neighbouring cards or break ties by position. Positions
/// the predicate considers equal keep their input order. The predicate must
/// describe a strict weak order.
///
/// # Example
///
/// ```
/// use carddeck::{Card, Rank, Suit, deck, sort};
/// use carddeck::sort::Less;
///
/// fn by_rank(cards: &[Card]) -> Less<'_> {
///     Box::new(move |i, j| cards[i].rank < cards[j].rank)
/// }
///
/// let cards = deck::new(&mut [&mut sort::sort_by(by_rank)]);
/// assert_eq!(cards[0], Card::new(Suit::Spade, Rank::Ace));
/// assert_eq!(cards[1], Card::new(Suit::Diamond, Rank::Ace));
/// ```
pub fn sort_by<F>(factory: F) -> impl FnMut(Vec<Card>) -> Vec<Card>
where
    F: for<'a> Fn(&'a [Card]) -> Less<'a>,
{
    move |cards: Vec<Card>| sorted_with(&cards, &factory)
}

fn sorted_with<F>(cards: &[Card], factory: &F) -> Vec<Card>
where
    F: for<'a> Fn(&'a [Card]) -> Less<'a>,
{
    let less = factory(cards);
    let mut positions: Vec<usize> = (0..cards.len()).collect();
    positions.sort_by(|&i, &j| {
        if less(i, j) {
            Ordering::Less
        } else if less(j, i) {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    });
    positions.into_iter().map(|i| cards[i]).collect()
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use super::*;
    use crate::card::{DECK_SIZE, Rank};
    use crate::deck;

    fn ace_of_spades() -> Card {
        Card::new(Suit::Spade, Rank::Ace)
    }

    #[test]
    fn order_is_suit_major_rank_minor() {
        assert_eq!(order(&ace_of_spades()), 1);
        assert_eq!(order(&Card::new(Suit::Spade, Rank::King)), 13);
        assert_eq!(order(&Card::new(Suit::Diamond, Rank::Ace)), 14);
        assert_eq!(order(&Card::new(Suit::Heart, Rank::King)), 52);
        assert_eq!(order(&Card::joker(0)), 53);
        assert_eq!(order(&Card::joker(2)), 55);
    }

    #[test]
    fn standard_deck_is_already_sorted() {
        let cards = deck::standard();
        assert_eq!(default_sort(cards.clone()), cards);
        assert!(cards.windows(2).all(|w| order(&w[0]) < order(&w[1])));
    }

    #[test]
    fn default_sort_restores_reversed_deck() {
        let mut cards = deck::standard();
        cards.reverse();
        let sorted = default_sort(cards);
        assert_eq!(sorted[0], ace_of_spades());
        assert_eq!(sorted, deck::standard());
    }

    #[test]
    fn jokers_sort_after_suited_cards() {
        let cards = vec![
            Card::joker(1),
            Card::joker(0),
            Card::new(Suit::Heart, Rank::King),
            Card::new(Suit::Club, Rank::Two),
        ];
        assert_eq!(
            default_sort(cards),
            vec![
                Card::new(Suit::Club, Rank::Two),
                Card::new(Suit::Heart, Rank::King),
                Card::joker(0),
                Card::joker(1),
            ]
        );
    }

    #[test]
    fn default_sort_handles_empty_input() {
        assert!(default_sort(Vec::new()).is_empty());
    }

    #[test]
    fn sort_by_default_factory_matches_default_sort() {
        let mut cards = deck::standard();
        cards.rotate_left(17);
        let mut stage = sort_by(less);
        assert_eq!(stage(cards.clone()), default_sort(cards));
    }

    fn king_high(cards: &[Card]) -> Less<'_> {
        Box::new(move |i, j| {
            let rank = |c: &Card| (c.rank.value() + 11) % 13;
            (rank(&cards[i]), cards[i].suit) < (rank(&cards[j]), cards[j].suit)
        })
    }

    #[test]
    fn sort_by_uses_custom_comparator() {
        let sorted = sort_by(king_high)(deck::standard());
        assert_eq!(sorted.len(), DECK_SIZE);
        assert_eq!(sorted[0], Card::new(Suit::Spade, Rank::Two));
        assert_eq!(sorted[DECK_SIZE - 1], Card::new(Suit::Heart, Rank::Ace));
    }

    fn later_first(_: &[Card]) -> Less<'_> {
        Box::new(|i, j| i > j)
    }

    #[test]
    fn comparator_sees_input_positions() {
        let cards = vec![
            Card::new(Suit::Club, Rank::Four),
            Card::new(Suit::Spade, Rank::Nine),
            Card::joker(0),
        ];
        let mut expected = cards.clone();
        expected.reverse();
        assert_eq!(sort_by(later_first)(cards), expected);
    }

    #[test]
    fn sort_by_is_stable_for_equal_keys() {
        let by_suit = |cards: Vec<Card>| {
            fn suit_only(cards: &[Card]) -> Less<'_> {
                Box::new(move |i, j| cards[i].suit < cards[j].suit)
            }
            sort_by(suit_only)(cards)
        };
        let mut cards = deck::standard();
        cards.reverse();
        let sorted = by_suit(cards);
        assert_eq!(sorted[0], Card::new(Suit::Spade, Rank::King));
        assert_eq!(sorted[12], ace_of_spades());
    }
}
