use std::{error::Error, fmt};

/// Trait for specifying getting exit codes from errors.
pub trait GetCode {
    fn get_code(&self) -> i32 {
        1
    }
}

impl GetCode for std::io::Error {
    #[inline]
    fn get_code(&self) -> i32 {
        self.raw_os_error().unwrap_or(1)
    }
}

impl GetCode for std::num::ParseIntError {}

/// Trait for providing more graceful [`expect()`](std::result::Result::expect)
/// behavior but with a status code provided by [`GetCode`].
pub trait OrFail<T> {
    fn unwrap_or_fail(self) -> T;
    fn unwrap_or_die(self, msg: &str) -> T;
}

impl<T, E> OrFail<T> for Result<T, E>
where
    E: GetCode + fmt::Display,
{
    fn unwrap_or_fail(self) -> T {
        match self {
            Ok(result) => result,
            Err(e) => {
                eprintln!("Error: {e}");
                std::process::exit(e.get_code());
            }
        }
    }

    fn unwrap_or_die(self, msg: &str) -> T {
        match self {
            Ok(result) => result,
            Err(e) => {
                eprintln!("Error: {msg}\n\n{e}");
                std::process::exit(e.get_code());
            }
        }
    }
}

/// Errors raised while validating the inputs to sequence generation.
#[non_exhaustive]
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum GenerateError {
    /// The requested number of sequences was below zero.
    NegativeSampleSize(i64),
    /// The requested sequence length was below zero.
    NegativeSequenceLength(i64),
    /// The requested value does not fit in a [`usize`]. Only reachable on
    /// targets where `usize` is narrower than 64 bits.
    TooLarge(i64),
    /// Symbols were requested from an alphabet with no symbols.
    EmptyAlphabet,
}

impl fmt::Display for GenerateError {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            GenerateError::NegativeSampleSize(n) => write!(f, "sample size must be non-negative, got {n}"),
            GenerateError::NegativeSequenceLength(n) => write!(f, "sequence length must be non-negative, got {n}"),
            GenerateError::TooLarge(n) => write!(f, "the value {n} is too large for this platform"),
            GenerateError::EmptyAlphabet => write!(f, "the alphabet must contain at least one symbol"),
        }
    }
}

impl fmt::Debug for GenerateError {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{self}")
    }
}

impl Error for GenerateError {}

impl GetCode for GenerateError {}
