use super::*;

// Conversion
impl AsRef<[u8]> for Nucleotides {
    #[inline]
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<String> for Nucleotides {
    fn from(s: String) -> Self {
        Nucleotides(s.into_bytes())
    }
}

impl From<&str> for Nucleotides {
    fn from(s: &str) -> Self {
        Nucleotides(s.as_bytes().to_vec())
    }
}

impl<const N: usize> From<&[u8; N]> for Nucleotides {
    fn from(bytes: &[u8; N]) -> Self {
        Nucleotides(bytes.to_vec())
    }
}

impl From<Nucleotides> for String {
    #[inline]
    fn from(s: Nucleotides) -> Self {
        s.into_string()
    }
}

impl<'a> IntoIterator for &'a Nucleotides {
    type Item = &'a u8;
    type IntoIter = std::slice::Iter<'a, u8>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

// Display
impl std::fmt::Display for Nucleotides {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", String::from_utf8_lossy(&self.0))
    }
}
