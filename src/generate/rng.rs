use log::debug;
use rand::SeedableRng;
use std::cell::RefCell;

/// The pseudo-random generator used throughout the crate: xoshiro256++.
pub type SeqRng = rand_xoshiro::Xoshiro256PlusPlus;

thread_local! {
    static SHARED_RNG: RefCell<SeqRng> = RefCell::new(entropy_rng());
}

/// Creates a generator with a fixed `seed`. Two generators created from the
/// same seed produce the same stream.
#[inline]
#[must_use]
pub fn seeded_rng(seed: u64) -> SeqRng {
    SeqRng::seed_from_u64(seed)
}

/// Creates a generator seeded from the thread-local OS entropy source.
#[inline]
#[must_use]
pub fn entropy_rng() -> SeqRng {
    SeqRng::from_rng(&mut rand::rng())
}

/// Reseeds the shared generator of the current thread. Subsequent calls to
/// [`random_nucleotides`] on this thread are then reproducible.
///
/// ```
/// # use seqdraw::prelude::*;
/// seed_shared_rng(2024);
/// let first = random_nucleotides(3, 8);
///
/// seed_shared_rng(2024);
/// assert_eq!(first, random_nucleotides(3, 8));
/// ```
///
/// [`random_nucleotides`]: super::random_nucleotides
pub fn seed_shared_rng(seed: u64) {
    debug!("Reseeding the shared generator with {seed}");
    SHARED_RNG.with_borrow_mut(|rng| *rng = seeded_rng(seed));
}

/// Runs `f` with exclusive access to the shared generator of the current
/// thread. The generator starts from OS entropy unless [`seed_shared_rng`]
/// was called.
///
/// ## Panics
///
/// `f` must not itself call [`with_shared_rng`], [`seed_shared_rng`], or
/// [`random_nucleotides`].
///
/// [`random_nucleotides`]: super::random_nucleotides
pub fn with_shared_rng<F, T>(f: F) -> T
where
    F: FnOnce(&mut SeqRng) -> T, {
    SHARED_RNG.with_borrow_mut(f)
}
