use super::{SeqRng, entropy_rng, rand_sequence_from_rng, seeded_rng, with_shared_rng};
use crate::data::{
    alphas::{DNA_CANONICAL_UC, RNA_CANONICAL_UC},
    err::GenerateError,
    fasta::{FastaSeq, numbered_name},
    nucleotides::Nucleotides,
};
use log::debug;
use rand::Rng;

/// The four-symbol alphabets sequences can be drawn from.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub enum Alphabet {
    /// Canonical DNA: `A`, `C`, `G`, and `T`.
    #[default]
    Dna,
    /// Canonical RNA: `A`, `C`, `G`, and `U`.
    Rna,
}

impl Alphabet {
    /// The uppercase symbols of the alphabet.
    #[inline]
    #[must_use]
    pub const fn symbols(self) -> &'static [u8; 4] {
        match self {
            Alphabet::Dna => DNA_CANONICAL_UC,
            Alphabet::Rna => RNA_CANONICAL_UC,
        }
    }

    /// Is `b` one of the symbols of the alphabet?
    #[inline]
    #[must_use]
    pub fn contains(self, b: u8) -> bool {
        self.symbols().contains(&b)
    }
}

/// The validated size of a sample: how many sequences, and how long each one
/// is.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct SampleShape {
    /// Number of sequences in the sample.
    pub sample_size: usize,
    /// Number of bases in every sequence.
    pub seq_length:  usize,
}

impl SampleShape {
    #[inline]
    #[must_use]
    pub const fn new(sample_size: usize, seq_length: usize) -> Self {
        SampleShape { sample_size, seq_length }
    }

    /// The number of bases across the whole sample, saturating at
    /// [`usize::MAX`].
    #[inline]
    #[must_use]
    pub const fn total_bases(&self) -> usize {
        self.sample_size.saturating_mul(self.seq_length)
    }
}

/// Converts a signed value to a [`usize`], mapping negative values with
/// `negative`.
fn non_negative(value: i64, negative: fn(i64) -> GenerateError) -> Result<usize, GenerateError> {
    if value < 0 {
        return Err(negative(value));
    }
    usize::try_from(value).map_err(|_| GenerateError::TooLarge(value))
}

impl TryFrom<(i64, i64)> for SampleShape {
    type Error = GenerateError;

    /// Validates a `(sample_size, seq_length)` pair of signed integers.
    ///
    /// ## Errors
    ///
    /// Either value being negative returns
    /// [`GenerateError::NegativeSampleSize`] or
    /// [`GenerateError::NegativeSequenceLength`] respectively, with the
    /// sample size checked first.
    fn try_from((sample_size, seq_length): (i64, i64)) -> Result<Self, Self::Error> {
        Ok(SampleShape {
            sample_size: non_negative(sample_size, GenerateError::NegativeSampleSize)?,
            seq_length:  non_negative(seq_length, GenerateError::NegativeSequenceLength)?,
        })
    }
}

/// Draws nucleotide sequences from an owned generator.
///
/// Every base is chosen independently and uniformly from the sampler's
/// [`Alphabet`]. Samplers built from the same seed draw the same sequences.
///
/// ```
/// # use seqdraw::prelude::*;
/// let mut sampler = NucleotideSampler::new(42).with_alphabet(Alphabet::Rna);
/// let sample = sampler.sample(SampleShape::new(3, 12));
///
/// assert_eq!(sample.len(), 3);
/// assert!(sample.iter().all(|s| s.len() == 12 && s.is_over(Alphabet::Rna)));
/// ```
#[derive(Clone, Debug)]
pub struct NucleotideSampler<R = SeqRng> {
    rng:      R,
    alphabet: Alphabet,
}

impl NucleotideSampler<SeqRng> {
    /// Creates a sampler whose generator is seeded with `seed`.
    #[inline]
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self::from_rng(seeded_rng(seed))
    }

    /// Creates a sampler whose generator is seeded from OS entropy.
    #[inline]
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::from_rng(entropy_rng())
    }
}

impl<R: Rng> NucleotideSampler<R> {
    /// Creates a sampler drawing from an existing generator, using the DNA
    /// alphabet.
    #[inline]
    #[must_use]
    pub fn from_rng(rng: R) -> Self {
        NucleotideSampler {
            rng,
            alphabet: Alphabet::default(),
        }
    }

    /// Switches the alphabet used for all subsequent draws.
    #[inline]
    #[must_use]
    pub fn with_alphabet(mut self, alphabet: Alphabet) -> Self {
        self.alphabet = alphabet;
        self
    }

    /// The alphabet bases are currently drawn from.
    #[inline]
    #[must_use]
    pub fn alphabet(&self) -> Alphabet {
        self.alphabet
    }

    /// Releases the generator, for instance to continue its stream elsewhere.
    #[inline]
    #[must_use]
    pub fn into_rng(self) -> R {
        self.rng
    }

    /// Draws one sequence of `length` bases.
    #[inline]
    #[must_use]
    pub fn sequence(&mut self, length: usize) -> Nucleotides {
        Nucleotides(rand_sequence_from_rng(&mut self.rng, self.alphabet.symbols(), length))
    }

    /// An endless iterator of sequences of `length` bases.
    pub fn sequences(&mut self, length: usize) -> impl Iterator<Item = Nucleotides> + '_ {
        std::iter::repeat_with(move || self.sequence(length))
    }

    /// Draws `shape.sample_size` sequences of `shape.seq_length` bases, in
    /// generation order.
    #[must_use]
    pub fn sample(&mut self, shape: SampleShape) -> Vec<Nucleotides> {
        debug!(
            "Drawing {} sequences of length {} over {:?}",
            shape.sample_size, shape.seq_length, self.alphabet
        );
        self.sequences(shape.seq_length).take(shape.sample_size).collect()
    }

    /// As [`sample`](NucleotideSampler::sample), returning [`String`]s.
    #[must_use]
    pub fn sample_strings(&mut self, shape: SampleShape) -> Vec<String> {
        self.sample(shape).into_iter().map(Nucleotides::into_string).collect()
    }

    /// As [`sample`](NucleotideSampler::sample), returning records named
    /// `{prefix}1`, `{prefix}2`, and so on.
    #[must_use]
    pub fn sample_fasta(&mut self, shape: SampleShape, prefix: &str) -> Vec<FastaSeq> {
        self.sample(shape)
            .into_iter()
            .enumerate()
            .map(|(i, s)| FastaSeq {
                name:     numbered_name(prefix, i + 1),
                sequence: s.into_vec(),
            })
            .collect()
    }
}

/// Draws `sample_size` DNA sequences of `seq_length` bases each from the
/// shared generator of the current thread.
///
/// Consecutive calls continue the same stream and so return different
/// sequences. Use [`seed_shared_rng`](super::seed_shared_rng) to make the
/// output reproducible, or [`random_nucleotides_from_rng`] to supply a
/// generator explicitly.
///
/// ```
/// # use seqdraw::prelude::*;
/// let sample = random_nucleotides(2, 10);
///
/// assert_eq!(sample.len(), 2);
/// assert!(sample.iter().all(|s| s.len() == 10));
/// assert!(sample.iter().flat_map(|s| s.bytes()).all(|b| b"ACGT".contains(&b)));
/// ```
#[must_use]
pub fn random_nucleotides(sample_size: usize, seq_length: usize) -> Vec<String> {
    with_shared_rng(|rng| random_nucleotides_from_rng(rng, sample_size, seq_length))
}

/// As [`random_nucleotides`], but accepting signed inputs.
///
/// ## Errors
///
/// Negative inputs are rejected; see [`SampleShape::try_from`].
pub fn try_random_nucleotides(sample_size: i64, seq_length: i64) -> Result<Vec<String>, GenerateError> {
    let shape = SampleShape::try_from((sample_size, seq_length))?;
    Ok(random_nucleotides(shape.sample_size, shape.seq_length))
}

/// As [`random_nucleotides`], but drawing from a fresh generator seeded with
/// `seed`. The output depends only on the arguments.
#[must_use]
pub fn random_nucleotides_seeded(sample_size: usize, seq_length: usize, seed: u64) -> Vec<String> {
    random_nucleotides_from_rng(&mut seeded_rng(seed), sample_size, seq_length)
}

/// As [`random_nucleotides`], but drawing from the provided generator.
#[must_use]
pub fn random_nucleotides_from_rng<R: Rng>(rng: &mut R, sample_size: usize, seq_length: usize) -> Vec<String> {
    std::iter::repeat_with(|| {
        rand_sequence_from_rng(rng, DNA_CANONICAL_UC, seq_length)
            .into_iter()
            .map(char::from)
            .collect()
    })
    .take(sample_size)
    .collect()
}
