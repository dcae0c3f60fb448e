/// Calculates GC content using scalar operations. Returns count of G and C
/// nucleotides in the sequence.
#[must_use]
pub fn gc_content(s: &[u8]) -> usize {
    s.iter()
        .map(u8::to_ascii_uppercase)
        .filter(|&b| b == b'G' || b == b'C')
        .count()
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_gc_content() {
        assert_eq!(gc_content(b"GGCCACCAAGGCCA"), 10);
        assert_eq!(gc_content(b"gcAT"), 2);
        assert_eq!(gc_content(b""), 0);
    }

    #[test]
    fn gc_content_matches_counts() {
        for length in [16, 1200, 10000] {
            let s = crate::generate::rand_sequence(b"ATCG", length, 42);
            let counts = super::super::NucleotideCounts::from_seq(&s);
            assert_eq!(gc_content(&s), counts.total_gc(), "when testing for length {length}");
        }
    }
}
