//! Declarative deck recipes.

use alloc::vec::Vec;

use crate::card::{Card, Rank};
use crate::pipeline::Pipeline;
use crate::shuffle::Shuffler;
use crate::{sort, transform};

/// Configuration for building a deck from the standard library stages.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use carddeck::{DeckOptions, Rank};
///
/// let cards = DeckOptions::default()
///     .with_decks(2)
///     .with_jokers(4)
///     .with_excluded_ranks(&[Rank::Two])
///     .with_shuffle_seed(Some(42))
///     .build();
/// assert_eq!(cards.len(), 48 * 2 + 4);
/// ```
///
/// Stages run in a fixed order: rank exclusion, replication, jokers, sorting
/// and finally shuffling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeckOptions {
    /// Number of standard decks.
    pub decks: usize,
    /// Number of jokers added after replication.
    pub jokers: u8,
    /// Ranks removed from every suit.
    pub excluded_ranks: Vec<Rank>,
    /// Whether the deck is sorted into canonical order.
    pub sorted: bool,
    /// Seed for shuffling. `None` leaves the deck unshuffled.
    pub shuffle_seed: Option<u64>,
}

impl Default for DeckOptions {
    fn default() -> Self {
        Self {
            decks: 1,
            jokers: 0,
            excluded_ranks: Vec::new(),
            sorted: false,
            shuffle_seed: None,
        }
    }
}

impl DeckOptions {
    /// Sets the number of decks.
    ///
    /// # Example
    ///
    /// ```
    /// use carddeck::DeckOptions;
    ///
    /// let options = DeckOptions::default().with_decks(6);
    /// assert_eq!(options.decks, 6);
    /// ```
    #[must_use]
    pub const fn with_decks(mut self, decks: usize) -> Self {
        self.decks = decks;
        self
    }

    /// Sets the number of jokers.
    #[must_use]
    pub const fn with_jokers(mut self, jokers: u8) -> Self {
        self.jokers = jokers;
        self
    }

    /// Sets the ranks removed from the deck.
    ///
    /// # Example
    ///
    /// ```
    /// use carddeck::{DeckOptions, Rank};
    ///
    /// let options = DeckOptions::default().with_excluded_ranks(&[Rank::Two, Rank::Three]);
    /// assert_eq!(options.excluded_ranks, [Rank::Two, Rank::Three]);
    /// ```
    #[must_use]
    pub fn with_excluded_ranks(mut self, ranks: &[Rank]) -> Self {
        self.excluded_ranks = ranks.to_vec();
        self
    }

    /// Sets whether the deck is sorted.
    #[must_use]
    pub const fn with_sorted(mut self, sorted: bool) -> Self {
        self.sorted = sorted;
        self
    }

    /// Sets the shuffle seed.
    #[must_use]
    pub const fn with_shuffle_seed(mut self, seed: Option<u64>) -> Self {
        self.shuffle_seed = seed;
        self
    }

    /// Translates the options into a pipeline.
    #[must_use]
    pub fn pipeline(&self) -> Pipeline {
        let mut pipeline = Pipeline::new();

        if !self.excluded_ranks.is_empty() {
            let ranks = self.excluded_ranks.clone();
            pipeline = pipeline.stage(transform::exclude(move |card: &Card| {
                !card.is_joker() && ranks.contains(&card.rank)
            }));
        }
        if self.decks != 1 {
            pipeline = pipeline.stage(transform::replicate(self.decks));
        }
        if self.jokers > 0 {
            pipeline = pipeline.stage(transform::jokers(self.jokers));
        }
        if self.sorted {
            pipeline = pipeline.stage(sort::default_sort);
        }
        if let Some(seed) = self.shuffle_seed {
            let mut shuffler = Shuffler::new(seed);
            pipeline = pipeline.stage(move |cards: Vec<Card>| shuffler.shuffle(&cards));
        }

        pipeline
    }

    /// Builds a deck according to the options.
    #[must_use]
    pub fn build(&self) -> Vec<Card> {
        self.pipeline().build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::{DECK_SIZE, Suit};
    use crate::deck;

    #[test]
    fn default_options_build_standard_deck() {
        let options = DeckOptions::default();
        assert!(options.pipeline().is_empty());
        assert_eq!(options.build(), deck::standard());
    }

    #[test]
    fn builder_sets_fields() {
        let options = DeckOptions::default()
            .with_decks(3)
            .with_jokers(2)
            .with_excluded_ranks(&[Rank::Ace])
            .with_sorted(true)
            .with_shuffle_seed(Some(9));

        assert_eq!(options.decks, 3);
        assert_eq!(options.jokers, 2);
        assert_eq!(options.excluded_ranks, [Rank::Ace]);
        assert!(options.sorted);
        assert_eq!(options.shuffle_seed, Some(9));
        assert_eq!(options.pipeline().len(), 5);
    }

    #[test]
    fn sorted_multi_deck_groups_duplicates() {
        let cards = DeckOptions::default()
            .with_decks(2)
            .with_jokers(1)
            .with_sorted(true)
            .build();
        assert_eq!(cards.len(), DECK_SIZE * 2 + 1);
        assert_eq!(cards[0], Card::new(Suit::Spade, Rank::Ace));
        assert_eq!(cards[1], Card::new(Suit::Spade, Rank::Ace));
        assert_eq!(cards[DECK_SIZE * 2], Card::joker(0));
    }

    #[test]
    fn excluded_ranks_never_remove_jokers() {
        let cards = DeckOptions::default()
            .with_jokers(2)
            .with_excluded_ranks(&[Rank::Ace])
            .build();
        assert_eq!(cards.len(), DECK_SIZE - 4 + 2);
        assert!(cards.iter().all(|c| c.is_joker() || c.rank != Rank::Ace));
    }

    #[test]
    fn seeded_builds_are_reproducible() {
        let options = DeckOptions::default().with_shuffle_seed(Some(123));
        let first = options.build();
        assert_eq!(first, options.build());
        assert_eq!(first, Shuffler::new(123).shuffle(&deck::standard()));
        assert_ne!(first, deck::standard());
    }

    #[test]
    fn zero_decks_leaves_only_jokers() {
        let cards = DeckOptions::default().with_decks(0).with_jokers(3).build();
        assert_eq!(cards, [Card::joker(0), Card::joker(1), Card::joker(2)]);
    }
}
