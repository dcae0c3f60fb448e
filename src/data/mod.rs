//! ## Sequence types, records, and error handling.
//!
//! ## Errors in *seqdraw*
//!
//! As a library, *seqdraw* avoids making assumptions on the style of error
//! handling chosen by users, in particular by not adopting any error handling
//! crate as a dependency. Input validation failures are reported with the
//! enum-style [`GenerateError`], which the user can match on or display. For
//! writing records, *seqdraw* uses [`std::io::Error`] so that system IO
//! errors are propagated unchanged.
//!
//! Binaries can use [`unwrap_or_fail`] and [`unwrap_or_die`] to print an error
//! and exit with the status code given by [`GetCode`].
//!
//! [`GenerateError`]: err::GenerateError
//! [`GetCode`]: err::GetCode
//! [`unwrap_or_fail`]: err::OrFail::unwrap_or_fail
//! [`unwrap_or_die`]: err::OrFail::unwrap_or_die

/// A module with error types and convenience traits for handling [`Result`].
pub mod err;
/// A module for records types--usually for I/O--that are structures of other
/// more primitive types.
pub mod records;
/// A module for storing more fundamental types, like
/// [`Nucleotides`](self::types::nucleotides::Nucleotides).
pub mod types;

/// A private module for helper alphabets that can be used within public
/// methods.
pub(crate) mod constants;

pub use records::fasta;
pub use types::nucleotides;

pub(crate) use constants::alphas;
