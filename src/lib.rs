//! Composable playing-card deck construction with optional `no_std` support.
//!
//! A deck starts as the standard 52 cards in canonical order and is then
//! passed through an ordered list of [`Stage`]s. Stages are plain functions
//! or closures over `Vec<Card>`; the crate ships stages for sorting
//! ([`sort`]), shuffling ([`shuffle`]) and common edits ([`transform`]).
//!
//! # Example
//!
//! ```
//! use carddeck::{Rank, deck, shuffle::Shuffler, sort, transform};
//!
//! let mut shuffler = Shuffler::new(42);
//! let cards = deck::new(&mut [
//!     &mut transform::exclude(|card| card.rank == Rank::Two),
//!     &mut transform::replicate(2),
//!     &mut transform::jokers(2),
//!     &mut sort::default_sort,
//!     &mut shuffler.stage(),
//! ]);
//! assert_eq!(cards.len(), 48 * 2 + 2);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod options;
pub mod pipeline;
pub mod shuffle;
pub mod sort;
mod sync;
pub mod transform;

// Re-export main types
pub use card::{Card, DECK_SIZE, RANKS_PER_SUIT, Rank, Suit};
pub use error::CardError;
pub use options::DeckOptions;
pub use pipeline::{Pipeline, Stage};
