/// A module for writing
/// [FASTA](https://en.wikipedia.org/wiki/FASTA_format) records.
pub mod fasta;
