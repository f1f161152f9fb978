use num::{BigInt, BigUint};
use thiserror::Error;

pub type Natural = BigUint;
pub type Integer = BigInt;

/// Scaled root and exact remainder, `(r, N - r^2)`.
pub type RootAndRemainder = (Natural, Natural);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ErrorsAryabhata{
    #[error("invalid radicand: {0}")]
    InvalidRadicand(String),
    #[error("invalid digit count: {0}")]
    InvalidDigitCount(String),
}
