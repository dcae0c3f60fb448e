/// Canonical uppercase DNA bases.
pub(crate) const DNA_CANONICAL_UC: &[u8; 4] = b"ACGT";
/// Canonical uppercase RNA bases.
pub(crate) const RNA_CANONICAL_UC: &[u8; 4] = b"ACGU";
