use num::traits::{ToPrimitive, Zero};
use tracing::{debug, trace};

use crate::number_theory::radicand::{normalize_digit_count, normalize_radicand, Radicand};
use crate::prelude::*;

/// Splits `n` into decimal digit pairs, most-significant pair first.
///
/// Each entry is a base-100 digit in `0..=99`. When `n` has an odd number of
/// decimal digits the leading entry holds the lone leading digit (`0..=9`), as
/// if `n` had been padded with a zero on the left. Zero yields `[0]`.
///
/// ```text
/// 82_000_000 -> [82, 0, 0, 0]
///     12_345 -> [1, 23, 45]
/// ```
pub fn digit_pairs(n: &Natural) -> Vec<u8>{
    n.to_radix_be(100)
}

/// Computes `n * 10^(2 * digits)` exactly.
///
/// # Errors
///
/// [`ErrorsAryabhata::InvalidDigitCount`] when the exponent `2 * digits` does
/// not fit a machine index.
pub fn scaled_target(n: &Natural, digits: u64) -> Result<Natural,ErrorsAryabhata>{
    let exponent = digits
        .to_usize()
        .ok_or_else(|| ErrorsAryabhata::InvalidDigitCount(format!("{digits} exceeds the addressable range")))?;
    // 10^(2d) == 100^d
    Ok(n * num::traits::pow(Natural::from(100u32), exponent))
}

/// Computes the square root of `n` to `digits` fractional decimal digits with
/// the classical digit-pair method attributed to Aryabhata.
///
/// # Overview
/// With `N = n * 10^(2 * digits)` the function returns `(r, rem)` such that
///
/// ```text
/// r   = floor(sqrt(N))
/// rem = N - r^2,      0 <= rem <= 2r
/// ```
///
/// so `r / 10^digits` is `sqrt(n)` truncated to `digits` decimals. Only integer
/// arithmetic on arbitrary-precision values is used and the result is exact for
/// any magnitude of `n` and any digit count.
///
/// # Algorithm
/// 1. Split `N` into decimal digit pairs, most-significant first.
/// 2. Start with `r = 0` and a running remainder `carry = 0`.
/// 3. For every pair `p`:
///    - bring it down: `carry = 100 * carry + p`
///    - pick the largest digit `x` in `0..=9` with `(20r + x) * x <= carry`
///    - subtract: `carry -= (20r + x) * x`
///    - append the digit: `r = 10r + x`
/// 4. Return `(r, carry)`.
///
/// `(20r + x) * x` is exactly `(10r + x)^2 - (10r)^2`, so each step appends the
/// largest digit that does not overshoot the true square, pair by pair, as in
/// manual long-division square roots.
///
/// # Properties
/// - **Time Complexity:** O(k^2) digit operations for `N` with `k` decimal digits
/// - **Deterministic:** earlier digits are never revised, so raising `digits`
///   only appends digits to `r`
///
/// # Errors
/// [`ErrorsAryabhata::InvalidDigitCount`] when `2 * digits` cannot be addressed;
/// see [`scaled_target`].
pub fn aryabhata_square_root(n: &Natural, digits: u64) -> Result<RootAndRemainder,ErrorsAryabhata>{
    let target = scaled_target(n, digits)?;
    if target.is_zero(){
        return Ok((Natural::zero(), Natural::zero()));
    }

    let pairs = digit_pairs(&target);
    debug!(digits, pairs = pairs.len(), "extracting digit-pair square root");

    let mut root = Natural::zero();
    let mut carry = Natural::zero();
    for pair in pairs{
        // Bring down the next pair
        carry = carry * 100u32 + u32::from(pair);

        let twenty_root = &root * 20u32;
        let (digit, step) = next_root_digit(&twenty_root, &carry);
        carry -= step;
        root = root * 10u32 + digit;
        trace!(pair, digit, "digit extracted");
    }

    Ok((root, carry))
}

/// Largest `x` in `0..=9` with `(twenty_root + x) * x <= carry`, and that product.
fn next_root_digit(twenty_root: &Natural, carry: &Natural) -> (u32, Natural){
    // (20r + x) * x >= 20r * x bounds x by carry / 20r
    let mut digit = if twenty_root.is_zero(){
        9
    }else{
        (carry / twenty_root).to_u32().map_or(9, |bound| bound.min(9))
    };
    loop{
        let step = (twenty_root + digit) * digit;
        if step <= *carry || digit == 0{
            return (digit, step);
        }
        digit -= 1;
    }
}

/// Normalizes the inputs and extracts the scaled root and remainder.
///
/// This is the single entry point for callers holding raw values: the radicand
/// may be an integer, base-10 text or a real (truncated toward zero) and the
/// digit count is the signed value a command line would hand over.
///
/// ```
/// use lib_aryabhata::number_theory::digit_pair_square_root::compute_root;
/// use num::BigUint;
///
/// let (root, remainder) = compute_root(82, 3).unwrap();
/// assert_eq!(root, BigUint::from(9055u32));
/// assert_eq!(remainder, BigUint::from(82_000_000u32 - 9055 * 9055));
/// ```
///
/// # Errors
///
/// [`ErrorsAryabhata::InvalidRadicand`] for inputs that are not non-negative
/// integers after normalization and [`ErrorsAryabhata::InvalidDigitCount`] for
/// negative digit counts.
pub fn compute_root(radicand: impl Into<Radicand>, digits: i64) -> Result<RootAndRemainder,ErrorsAryabhata>{
    let digits = normalize_digit_count(digits)?;
    let n = normalize_radicand(radicand)?;
    aryabhata_square_root(&n, digits)
}
