//! ## Random sequence generation.
//!
//! Sequences can be drawn three ways, all sharing the same per-base draw so
//! that a given generator state always yields the same bases:
//!
//! - From an explicit generator: [`random_nucleotides_from_rng`] or a
//!   [`NucleotideSampler`]. This is the preferred route for anything that
//!   needs to be reproducible.
//! - From a fixed seed: [`random_nucleotides_seeded`], [`rand_sequence`], or
//!   [`NucleotideSampler::new`].
//! - From the shared generator of the current thread: [`random_nucleotides`].
//!   It starts from OS entropy and can be pinned with [`seed_shared_rng`].
//!
//! The stream is xoshiro256++ seeded through [`SeedableRng::seed_from_u64`].
//!
//! [`SeedableRng::seed_from_u64`]: rand::SeedableRng::seed_from_u64

use rand::Rng;

mod rng;
mod sample;

#[cfg(test)]
mod test;

pub use rng::*;
pub use sample::*;

/// Generates a sequence of `length` symbols drawn uniformly from `alpha`,
/// using a generator seeded with `seed`.
///
/// ## Panics
///
/// `alpha` must be non-empty unless `length` is zero.
#[must_use]
pub fn rand_sequence(alpha: &[u8], length: usize, seed: u64) -> Vec<u8> {
    rand_sequence_from_rng(&mut seeded_rng(seed), alpha, length)
}

/// Generates a sequence of `length` symbols drawn uniformly from `alpha`
/// using `rng`.
///
/// ## Panics
///
/// `alpha` must be non-empty unless `length` is zero. See
/// [`try_rand_sequence_from_rng`] for a checked version.
#[must_use]
pub fn rand_sequence_from_rng<R: Rng>(rng: &mut R, alpha: &[u8], length: usize) -> Vec<u8> {
    std::iter::repeat_with(|| alpha[rng.random_range(0..alpha.len())])
        .take(length)
        .collect()
}

/// As [`rand_sequence_from_rng`], but returning an error for an empty `alpha`.
///
/// ## Errors
///
/// Returns [`GenerateError::EmptyAlphabet`] if `alpha` is empty and `length`
/// is non-zero.
///
/// [`GenerateError::EmptyAlphabet`]: crate::data::err::GenerateError::EmptyAlphabet
pub fn try_rand_sequence_from_rng<R: Rng>(
    rng: &mut R, alpha: &[u8], length: usize,
) -> Result<Vec<u8>, crate::data::err::GenerateError> {
    if alpha.is_empty() && length > 0 {
        return Err(crate::data::err::GenerateError::EmptyAlphabet);
    }
    Ok(rand_sequence_from_rng(rng, alpha, length))
}
