use std::fmt;

use crate::number_theory::digit_pair_square_root::scaled_target;
use crate::prelude::*;

/// The exact relation behind one extraction, `N = r^2 + rem` with
/// `N = radicand * 10^(2 * digits)`.
///
/// Its `Display` output is the debug trace printed by the `aryabhata` binary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RootIdentity{
    radicand: Natural,
    digits: u64,
    scaled_target: Natural,
    scaled_root: Natural,
    remainder: Natural,
}

impl RootIdentity{
    /// Builds the identity, computing `N` up front.
    ///
    /// # Errors
    ///
    /// [`ErrorsAryabhata::InvalidDigitCount`] when `N` cannot be formed; see
    /// [`scaled_target`].
    pub fn new(radicand: Natural, digits: u64, (scaled_root, remainder): RootAndRemainder) -> Result<Self,ErrorsAryabhata>{
        let scaled_target = scaled_target(&radicand, digits)?;
        Ok(RootIdentity{
            radicand,
            digits,
            scaled_target,
            scaled_root,
            remainder,
        })
    }

    pub fn radicand(&self) -> &Natural{
        &self.radicand
    }

    pub fn digits(&self) -> u64{
        self.digits
    }

    /// `N`, the radicand scaled by `10^(2 * digits)`.
    pub fn scaled_target(&self) -> &Natural{
        &self.scaled_target
    }

    pub fn scaled_root(&self) -> &Natural{
        &self.scaled_root
    }

    pub fn remainder(&self) -> &Natural{
        &self.remainder
    }

    /// True when `N == r^2 + rem` holds exactly.
    pub fn holds(&self) -> bool{
        let square = &self.scaled_root * &self.scaled_root;
        self.scaled_target == square + &self.remainder
    }
}

impl fmt::Display for RootIdentity{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result{
        writeln!(f, "[scaled-root] {}", self.scaled_root)?;
        writeln!(f, "[remainder]   {}", self.remainder)?;
        write!(f, "[identity]    {} = {}^2 + {}", self.scaled_target, self.scaled_root, self.remainder)
    }
}
