use thiserror::Error;

/// Errors raised while building, converting or reading a [`BigInt`](crate::BigInt).
#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid digit {digit:?} at byte {position}")]
    InvalidDigit { digit: char, position: usize },

    #[error("attempt to subtract a larger BigInt from a smaller one")]
    Underflow,

    #[error("BigInt does not fit in {target}")]
    Overflow { target: &'static str },

    #[error("no token left in input")]
    EmptyInput,

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
