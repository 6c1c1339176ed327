//! Composition of deck transformation stages.

use alloc::boxed::Box;
use alloc::vec::Vec;

use crate::card::Card;
use crate::deck;

/// A single step of deck construction.
///
/// A stage consumes a whole card sequence and returns the next one. It may
/// grow, shrink, reorder or replace the cards. Any
/// `FnMut(Vec<Card>) -> Vec<Card>` is a stage, so plain functions such as
/// [`crate::sort::default_sort`] and the closures returned by
/// [`crate::transform`] can be passed directly.
pub trait Stage {
    /// Transforms `cards` into the next sequence.
    fn apply(&mut self, cards: Vec<Card>) -> Vec<Card>;
}

impl<F> Stage for F
where
    F: FnMut(Vec<Card>) -> Vec<Card>,
{
    fn apply(&mut self, cards: Vec<Card>) -> Vec<Card> {
        self(cards)
    }
}

/// Runs `stages` over `cards` from left to right.
pub(crate) fn run(stages: &mut [&mut dyn Stage], mut cards: Vec<Card>) -> Vec<Card> {
    let count = stages.len();
    for (i, stage) in stages.iter_mut().enumerate() {
        cards = stage.apply(cards);
        log::trace!("stage {}/{count} produced {} cards", i + 1, cards.len());
    }
    log::debug!("applied {count} stages, deck has {} cards", cards.len());
    cards
}

/// An ordered, reusable list of stages.
///
/// Use the builder methods to add stages, then call [`Pipeline::build`] to
/// generate a fresh deck and run it through every stage:
///
/// ```
/// use carddeck::{Pipeline, Rank, sort, transform};
///
/// let mut pipeline = Pipeline::new()
///     .stage(transform::exclude(|card| card.rank == Rank::Two))
///     .stage(transform::jokers(2))
///     .stage(sort::default_sort);
///
/// let cards = pipeline.build();
/// assert_eq!(cards.len(), 48 + 2);
/// ```
#[derive(Default)]
pub struct Pipeline {
    stages: Vec<Box<dyn Stage>>,
}

impl Pipeline {
    /// Creates an empty pipeline.
    #[must_use]
    pub const fn new() -> Self {
        Self { stages: Vec::new() }
    }

    /// Appends a stage.
    #[must_use]
    pub fn stage(mut self, stage: impl Stage + 'static) -> Self {
        self.stages.push(Box::new(stage));
        self
    }

    /// Returns the number of stages.
    #[must_use]
    pub fn len(&self) -> usize {
        self.stages.len()
    }

    /// Returns whether the pipeline has no stages.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    /// Runs `cards` through every stage in order.
    pub fn apply(&mut self, cards: Vec<Card>) -> Vec<Card> {
        let mut stages: Vec<&mut dyn Stage> = self
            .stages
            .iter_mut()
            .map(|stage| &mut **stage as &mut dyn Stage)
            .collect();
        run(&mut stages, cards)
    }

    /// Generates the standard deck and runs it through every stage.
    pub fn build(&mut self) -> Vec<Card> {
        self.apply(deck::standard())
    }
}

impl Stage for Pipeline {
    fn apply(&mut self, cards: Vec<Card>) -> Vec<Card> {
        Self::apply(self, cards)
    }
}
