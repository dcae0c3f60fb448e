use std::{
    iter::Sum,
    ops::{Add, AddAssign},
};

/// Maps a byte to its slot in [`NucleotideCounts`]. `T` and `U` share a slot.
#[inline]
const fn count_index(b: u8) -> usize {
    match b.to_ascii_uppercase() {
        b'A' => 0,
        b'C' => 1,
        b'G' => 2,
        b'T' | b'U' => 3,
        b'N' => 4,
        _ => 5,
    }
}

/// Per-base tallies for a sequence or a whole sample of sequences. Counting
/// is case-insensitive.
///
/// ```
/// # use seqdraw::prelude::*;
/// let sample = random_nucleotides_seeded(4, 25, 7);
/// let counts: NucleotideCounts = sample.iter().map(NucleotideCounts::from_seq).sum();
///
/// assert_eq!(counts.total_acgt(), 100);
/// assert_eq!(counts.other(), 0);
/// ```
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct NucleotideCounts {
    inner: [usize; 6],
}

impl NucleotideCounts {
    /// Creates a new [`NucleotideCounts`] object with counts initialized to 0.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        NucleotideCounts { inner: [0; 6] }
    }

    /// Tallies the bytes of `seq` into a new [`NucleotideCounts`].
    #[inline]
    #[must_use]
    pub fn from_seq<Q: AsRef<[u8]>>(seq: Q) -> Self {
        let mut counts = Self::new();
        counts.tally_from_seq(seq);
        counts
    }

    /// Increments the counts using the bytes in `seq`.
    #[inline]
    pub fn tally_from_seq<Q: AsRef<[u8]>>(&mut self, seq: Q) {
        for byte in seq.as_ref() {
            *self += *byte;
        }
    }

    /// Retrives the counts as an array of size 6, ordered `A`, `C`, `G`,
    /// `T/U`, `N`, and other.
    #[inline]
    #[must_use]
    pub fn into_inner(self) -> [usize; 6] {
        self.inner
    }

    /// Gets the count of the base A.
    #[inline]
    #[must_use]
    pub fn a(&self) -> usize {
        self.inner[0]
    }

    /// Gets the count of the base C.
    #[inline]
    #[must_use]
    pub fn c(&self) -> usize {
        self.inner[1]
    }

    /// Gets the count of the base G.
    #[inline]
    #[must_use]
    pub fn g(&self) -> usize {
        self.inner[2]
    }

    /// Gets the count of the bases T and U.
    #[inline]
    #[must_use]
    pub fn t(&self) -> usize {
        self.inner[3]
    }

    /// Gets the count of the base N.
    #[inline]
    #[must_use]
    pub fn n(&self) -> usize {
        self.inner[4]
    }

    /// Gets the count of every other byte.
    #[inline]
    #[must_use]
    pub fn other(&self) -> usize {
        self.inner[5]
    }

    /// Gets the total count of the bases G and C.
    #[inline]
    #[must_use]
    pub fn total_gc(&self) -> usize {
        self.g() + self.c()
    }

    /// Gets the total count of the bases A, C, G, and T/U.
    #[inline]
    #[must_use]
    pub fn total_acgt(&self) -> usize {
        self.inner[0..4].iter().sum()
    }

    /// Gets the total count of all bytes processed.
    #[inline]
    #[must_use]
    pub fn total_any(&self) -> usize {
        self.inner.iter().sum()
    }

    /// The fraction of processed bytes that were `base`, or `None` if nothing
    /// was counted.
    #[allow(clippy::cast_precision_loss)]
    #[must_use]
    pub fn frequency(&self, base: u8) -> Option<f64> {
        let total = self.total_any();
        if total == 0 {
            None
        } else {
            Some(self.inner[count_index(base)] as f64 / total as f64)
        }
    }
}

impl AddAssign for NucleotideCounts {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        for (a, b) in self.inner.iter_mut().zip(other.inner) {
            *a += b;
        }
    }
}

impl Add for NucleotideCounts {
    type Output = Self;

    #[inline]
    fn add(mut self, other: Self) -> Self {
        self += other;
        self
    }
}

impl Add<u8> for NucleotideCounts {
    type Output = Self;

    #[inline]
    fn add(mut self, other: u8) -> Self {
        self.inner[count_index(other)] += 1;
        self
    }
}

impl AddAssign<u8> for NucleotideCounts {
    #[inline]
    fn add_assign(&mut self, other: u8) {
        self.inner[count_index(other)] += 1;
    }
}

impl Sum for NucleotideCounts {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(NucleotideCounts::new(), Add::add)
    }
}

impl FromIterator<u8> for NucleotideCounts {
    fn from_iter<I: IntoIterator<Item = u8>>(iter: I) -> Self {
        iter.into_iter().fold(NucleotideCounts::new(), Add::add)
    }
}
