/// Owned nucleotide sequences.
pub mod nucleotides;
