use num::traits::One;

use crate::prelude::*;

/// Computes the integer square root of an arbitrary-precision integer using the
/// Newton–Raphson method
///
/// The integer square root of `n` is defined as the largest integer `x`
/// such that:
///
/// ```text
/// x * x <= n
/// ```
///
/// This function:
/// - Uses the Newton–Raphson iteration:
///   x_{k+1} = (x_k + n / x_k) / 2
/// - Starts from a power of two at or above `sqrt(n)`, so the iterates decrease
///   monotonically until they reach the floor
/// - Converges in `O(log log n)` iterations
///
/// It shares no code with the digit-pair extractor, which makes it a useful
/// oracle when checking and benchmarking that one.
pub fn integer_square_root_newton(n: &Natural) -> Natural {
    if *n < Natural::from(2u32) {
        return n.clone();
    }

    let bits = n.bits();
    let mut x = Natural::one() << ((bits + 1) / 2);

    loop {
        let next = (&x + n / &x) >> 1u32;
        if next >= x {
            return x;
        }
        x = next;
    }
}

/// Remainder `n - isqrt(n)^2` that goes with [`integer_square_root_newton`].
pub fn integer_square_root_remainder(n: &Natural) -> RootAndRemainder {
    let root = integer_square_root_newton(n);
    let remainder = n - &root * &root;
    (root, remainder)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_square_root_newton() {
        for i in 0u64..20000 {
            let sq = Natural::from(i * i);
            assert_eq!(integer_square_root_newton(&sq), Natural::from(i));
            if i > 0 {
                assert_eq!(integer_square_root_newton(&(sq - 1u32)), Natural::from(i - 1));
            }
        }
    }

    #[test]
    fn test_integer_square_root_newton_large() {
        let k: Natural = "98765432109876543210987654321".parse().unwrap();
        let sq = &k * &k;
        assert_eq!(integer_square_root_newton(&sq), k);
        let (root, remainder) = integer_square_root_remainder(&(&sq + &k));
        assert_eq!(root, k);
        assert_eq!(remainder, k);
    }
}
