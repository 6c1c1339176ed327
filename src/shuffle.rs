//! Uniform card shuffling.
//!
//! [`permute`] is the algorithm; it draws a uniform random permutation of
//! positions and gathers the cards into a new sequence. The random source is
//! always explicit: either a [`Shuffler`] owned by the caller, any
//! [`rand::Rng`] handed to [`shuffle_with`], or the lock-guarded process-wide
//! source behind [`shuffle`] and [`reseed`].

use alloc::vec::Vec;

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::card::Card;
use crate::sync::Mutex;

/// Returns the cards in a uniformly random order, leaving the input as is.
pub fn permute<R: Rng + ?Sized>(cards: &[Card], rng: &mut R) -> Vec<Card> {
    let mut positions: Vec<usize> = (0..cards.len()).collect();
    positions.shuffle(rng);
    positions.into_iter().map(|i| cards[i]).collect()
}

/// A seeded shuffling source.
///
/// Two shufflers created with the same seed produce the same sequence of
/// permutations.
///
/// # Example
///
/// ```
/// use carddeck::{deck, shuffle::Shuffler};
///
/// let mut a = Shuffler::new(7);
/// let mut b = Shuffler::new(7);
/// let cards = deck::standard();
/// assert_eq!(a.shuffle(&cards), b.shuffle(&cards));
/// ```
#[derive(Debug, Clone)]
pub struct Shuffler {
    rng: ChaCha8Rng,
}

impl Shuffler {
    /// Creates a shuffler with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Restarts the permutation sequence from `seed`.
    pub fn reseed(&mut self, seed: u64) {
        self.rng = ChaCha8Rng::seed_from_u64(seed);
    }

    /// Returns a shuffled copy of `cards`.
    pub fn shuffle(&mut self, cards: &[Card]) -> Vec<Card> {
        permute(cards, &mut self.rng)
    }

    /// Returns a pipeline stage that draws from this shuffler.
    pub fn stage(&mut self) -> impl FnMut(Vec<Card>) -> Vec<Card> + '_ {
        move |cards: Vec<Card>| self.shuffle(&cards)
    }
}

/// Returns a stage that shuffles with the given random source.
pub fn shuffle_with<R: Rng>(mut rng: R) -> impl FnMut(Vec<Card>) -> Vec<Card> {
    move |cards: Vec<Card>| permute(&cards, &mut rng)
}

static SOURCE: Mutex<Option<ChaCha8Rng>> = Mutex::new(None);

#[cfg(feature = "std")]
fn startup_seed() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map_or(0, |elapsed| elapsed.as_secs())
}

#[cfg(not(feature = "std"))]
const fn startup_seed() -> u64 {
    0x5EED
}

/// Reseeds the process-wide source used by [`shuffle`].
///
/// Shuffling the same input after reseeding with the same value yields the
/// same output.
pub fn reseed(seed: u64) {
    log::debug!("reseeding shared shuffle source with {seed}");
    SOURCE.with(|rng| *rng = Some(ChaCha8Rng::seed_from_u64(seed)));
}

/// Shuffles cards with the process-wide source.
///
/// The source is seeded from the clock on first use unless [`reseed`] was
/// called before. Without the `std` feature a fixed seed is used instead.
#[must_use]
#[expect(clippy::needless_pass_by_value, reason = "stage signature")]
pub fn shuffle(cards: Vec<Card>) -> Vec<Card> {
    SOURCE.with(|rng| {
        let rng = rng.get_or_insert_with(|| {
            let seed = startup_seed();
            log::debug!("seeding shared shuffle source with {seed}");
            ChaCha8Rng::seed_from_u64(seed)
        });
        permute(&cards, rng)
    })
}
