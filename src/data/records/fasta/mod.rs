use crate::data::nucleotides::Nucleotides;
use std::{
    borrow::Borrow,
    io::{self, Write},
};


/// Provides a container struct for data from a generic
/// [FASTA](https://en.wikipedia.org/wiki/FASTA_format) file.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct FastaSeq {
    pub name:     String,
    pub sequence: Vec<u8>,
}

impl FastaSeq {
    #[inline]
    #[must_use]
    pub fn new(name: impl Into<String>, sequence: impl Into<Vec<u8>>) -> Self {
        FastaSeq {
            name:     name.into(),
            sequence: sequence.into(),
        }
    }

    /// Writes the record to `writer`, starting a new sequence line every
    /// `line_width` bytes. `None` or `Some(0)` keeps the sequence on one line.
    /// An empty sequence is written as an empty line.
    ///
    /// ## Errors
    ///
    /// Any IO error from `writer` is propagated.
    pub fn write_wrapped<W: Write>(&self, writer: &mut W, line_width: Option<usize>) -> io::Result<()> {
        writer.write_all(b">")?;
        writer.write_all(self.name.as_bytes())?;
        writer.write_all(b"\n")?;

        match line_width {
            Some(width) if width > 0 && !self.sequence.is_empty() => {
                for line in self.sequence.chunks(width) {
                    writer.write_all(line)?;
                    writer.write_all(b"\n")?;
                }
            }
            _ => {
                writer.write_all(&self.sequence)?;
                writer.write_all(b"\n")?;
            }
        }

        Ok(())
    }
}

impl From<(String, Nucleotides)> for FastaSeq {
    #[inline]
    fn from((name, sequence): (String, Nucleotides)) -> Self {
        FastaSeq {
            name,
            sequence: sequence.into_vec(),
        }
    }
}

impl std::fmt::Display for FastaSeq {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, ">{}\n{}\n", self.name, String::from_utf8_lossy(&self.sequence))
    }
}

/// Builds the record name `{prefix}{index}`.
#[must_use]
pub fn numbered_name(prefix: &str, index: usize) -> String {
    let mut buffer = itoa::Buffer::new();
    let digits = buffer.format(index);

    let mut name = String::with_capacity(prefix.len() + digits.len());
    name.push_str(prefix);
    name.push_str(digits);
    name
}

/// Writes `records` to `writer` in FASTA format. See
/// [`FastaSeq::write_wrapped`] for the meaning of `line_width`.
///
/// ```
/// # use seqdraw::prelude::*;
/// let records = [FastaSeq::new("s1", "ACGTACGTAC"), FastaSeq::new("s2", "")];
/// let mut out = Vec::new();
/// write_fasta(&mut out, &records, Some(4)).unwrap();
///
/// assert_eq!(out, b">s1\nACGT\nACGT\nAC\n>s2\n\n");
/// ```
///
/// ## Errors
///
/// Any IO error from `writer` is propagated.
pub fn write_fasta<W, I>(writer: &mut W, records: I, line_width: Option<usize>) -> io::Result<()>
where
    W: Write,
    I: IntoIterator,
    I::Item: Borrow<FastaSeq>, {
    for record in records {
        record.borrow().write_wrapped(writer, line_width)?;
    }
    Ok(())
}
