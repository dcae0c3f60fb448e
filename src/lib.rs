#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/README.md"))]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions, clippy::wildcard_imports)]

/// Composition statistics for sequences and samples.
pub mod composition;
/// Sequence types, records, and error handling.
pub mod data;
/// Generate random nucleotide sequences.
pub mod generate;

/// Common structures and traits re-exported
pub mod prelude {
    pub use crate::composition::{NucleotideCounts, gc_content};
    pub use crate::data::err::{GenerateError, GetCode, OrFail};
    pub use crate::data::fasta::{FastaSeq, numbered_name, write_fasta};
    pub use crate::data::nucleotides::Nucleotides;
    pub use crate::generate::{
        Alphabet, NucleotideSampler, SampleShape, SeqRng, rand_sequence, rand_sequence_from_rng, random_nucleotides,
        random_nucleotides_from_rng, random_nucleotides_seeded, seed_shared_rng, seeded_rng, try_rand_sequence_from_rng,
        try_random_nucleotides, with_shared_rng,
    };
}
