use num::traits::{FromPrimitive, Signed};
use tracing::debug;

use crate::prelude::*;

/// A radicand as it arrives from a caller, before normalization.
///
/// Integers are taken as-is, text is read as a base-10 integer and reals are
/// truncated toward zero. Use [`normalize_radicand`] to turn any of these into
/// the canonical non-negative [`Natural`] consumed by the extractor.
#[derive(Debug, Clone, PartialEq)]
pub enum Radicand{
    Integer(Integer),
    Text(String),
    Real(f64),
}

macro_rules! radicand_from_integer {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Radicand{
                fn from(value: $t) -> Self{
                    Radicand::Integer(Integer::from(value))
                }
            }
        )*
    };
}

radicand_from_integer!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl From<Integer> for Radicand{
    fn from(value: Integer) -> Self{
        Radicand::Integer(value)
    }
}

impl From<Natural> for Radicand{
    fn from(value: Natural) -> Self{
        Radicand::Integer(Integer::from(value))
    }
}

impl From<&str> for Radicand{
    fn from(value: &str) -> Self{
        Radicand::Text(value.to_string())
    }
}

impl From<String> for Radicand{
    fn from(value: String) -> Self{
        Radicand::Text(value)
    }
}

impl From<f64> for Radicand{
    fn from(value: f64) -> Self{
        Radicand::Real(value)
    }
}

impl From<f32> for Radicand{
    fn from(value: f32) -> Self{
        Radicand::Real(f64::from(value))
    }
}

/// Coerces a raw radicand into a non-negative integer.
///
/// # Errors
///
/// Returns [`ErrorsAryabhata::InvalidRadicand`] when text does not parse as a
/// base-10 integer, when a real is NaN or infinite, or when the value is
/// negative after parsing or truncation.
pub fn normalize_radicand(input: impl Into<Radicand>) -> Result<Natural,ErrorsAryabhata>{
    let value = match input.into(){
        Radicand::Integer(value) => value,
        Radicand::Text(text) => {
            let trimmed = text.trim();
            if !is_decimal_literal(trimmed){
                return Err(ErrorsAryabhata::InvalidRadicand(format!("{trimmed:?} is not a base-10 integer")));
            }
            trimmed.parse::<Integer>().map_err(|_| {
                ErrorsAryabhata::InvalidRadicand(format!("{trimmed:?} is not a base-10 integer"))
            })?
        }
        Radicand::Real(real) => {
            if !real.is_finite(){
                return Err(ErrorsAryabhata::InvalidRadicand(format!("{real} is not finite")));
            }
            Integer::from_f64(real.trunc()).ok_or_else(|| {
                ErrorsAryabhata::InvalidRadicand(format!("{real} cannot be truncated to an integer"))
            })?
        }
    };
    if value.is_negative(){
        return Err(ErrorsAryabhata::InvalidRadicand(format!("{value} is negative")));
    }
    debug!(radicand = %value, "normalized radicand");
    // Non-negative, so the magnitude is the value itself
    Ok(value.magnitude().clone())
}

/// Optional sign, then decimal digits where `_` may only sit between two digits.
fn is_decimal_literal(text: &str) -> bool{
    let body = text.strip_prefix(|c: char| c == '+' || c == '-').unwrap_or(text);
    !body.is_empty()
        && !body.starts_with('_')
        && !body.ends_with('_')
        && !body.contains("__")
        && body.chars().all(|c| c.is_ascii_digit() || c == '_')
}

/// Validates a requested number of fractional digits.
///
/// # Errors
///
/// Returns [`ErrorsAryabhata::InvalidDigitCount`] for negative counts.
pub fn normalize_digit_count(digits: i64) -> Result<u64,ErrorsAryabhata>{
    u64::try_from(digits).map_err(|_| {
        ErrorsAryabhata::InvalidDigitCount(format!("{digits} is negative"))
    })
}
