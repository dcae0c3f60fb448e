use crate::{
    composition::{NucleotideCounts, gc_content},
    generate::{Alphabet, rand_sequence},
};

mod std_traits;


/// [`Nucleotides`] is a transparent, new-type wrapper around [`Vec<u8>`]
/// that provides nucleotide-specific functionality and semantics.
///
/// *NB: No type-state guarantees are made about the contents. Sequences
/// produced by this crate only contain the symbols of their [`Alphabet`].*
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct Nucleotides(pub(crate) Vec<u8>);

impl Nucleotides {
    // std

    /// Create a new `Nucleotides` empty object.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Nucleotides(Vec::new())
    }

    /// The length of the stored sequence.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Is the sequence empty?
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Obtains the bytes as a slice.
    #[inline]
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_slice()
    }

    #[inline]
    #[must_use]
    pub fn into_vec(self) -> Vec<u8> {
        self.0
    }

    /// Converts the sequence into a [`String`], mapping each byte to the
    /// [`char`] of the same value. ASCII bases are carried over unchanged.
    #[inline]
    #[must_use]
    pub fn into_string(self) -> String {
        self.0.into_iter().map(char::from).collect()
    }

    #[inline]
    /// Create an iterator over the nucleotides as `u8`.
    pub fn iter(&self) -> std::slice::Iter<'_, u8> {
        self.0.iter()
    }

    // Composition

    /// Tallies the bases in the sequence.
    ///
    /// ```
    /// # use seqdraw::prelude::*;
    /// let s: Nucleotides = b"ACGTTNx".into();
    /// let counts = s.nucleotide_counts();
    ///
    /// assert_eq!(counts.t(), 2);
    /// assert_eq!(counts.n(), 1);
    /// assert_eq!(counts.other(), 1);
    /// ```
    #[inline]
    #[must_use]
    pub fn nucleotide_counts(&self) -> NucleotideCounts {
        NucleotideCounts::from_seq(&self.0)
    }

    /// Counts the `G` and `C` bases in the sequence, in either case.
    #[inline]
    #[must_use]
    pub fn gc_content(&self) -> usize {
        gc_content(&self.0)
    }

    /// Is every byte of the sequence a symbol of `alphabet`?
    #[inline]
    #[must_use]
    pub fn is_over(&self, alphabet: Alphabet) -> bool {
        self.0.iter().all(|&b| alphabet.contains(b))
    }

    // Associated functions

    /// Generate a random DNA sequence of given `length` and using a random
    /// `seed`.  Canonical DNA only contains A, C, G, or T.
    #[must_use]
    pub fn generate_random_dna(length: usize, seed: u64) -> Self {
        Nucleotides(rand_sequence(Alphabet::Dna.symbols(), length, seed))
    }

    /// Generate a random RNA sequence of given `length` and using a random
    /// `seed`. Canonical RNA only contains A, C, G, or U.
    #[must_use]
    pub fn generate_random_rna(length: usize, seed: u64) -> Self {
        Nucleotides(rand_sequence(Alphabet::Rna.symbols(), length, seed))
    }
}
