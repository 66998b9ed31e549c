use num_traits::{PrimInt, Signed};
use thiserror::Error;

/// Quotient and remainder of a floored division.
///
/// For `x` divided by `y` this always satisfies `x == y * quo + modulo`, where
/// `modulo` is either zero or has the same sign as `y`, and `|modulo| < |y|`.
/// Native `%` truncates toward zero instead, which gives the remainder the sign
/// of the numerator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct QuoMod<T> {
    pub quo: T,
    pub modulo: T,
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[error("attempt to divide by zero")]
pub struct DivisionByZero;

pub trait QuoModFloor: Sized {
    fn checked_quo_mod(self, divisor: Self) -> Result<QuoMod<Self>, DivisionByZero>;

    fn quo_mod(self, divisor: Self) -> QuoMod<Self> {
        match self.checked_quo_mod(divisor) {
            Ok(qm) => qm,
            Err(err) => panic!("{}", err),
        }
    }
}

impl<T: PrimInt + Signed> QuoModFloor for T {
    fn checked_quo_mod(self, divisor: T) -> Result<QuoMod<T>, DivisionByZero> {
        if divisor.is_zero() {
            return Err(DivisionByZero);
        }
        let quo = self / divisor;
        let rem = self % divisor;
        if !rem.is_zero() && rem.is_negative() != divisor.is_negative() {
            // Same as (self - modulo) / divisor with modulo = rem + divisor, but
            // without the intermediate subtraction that can overflow near T::MIN.
            Ok(QuoMod {
                quo: quo - T::one(),
                modulo: rem + divisor,
            })
        } else {
            Ok(QuoMod { quo, modulo: rem })
        }
    }
}

/// Floored quotient and remainder of `x / y`.
///
/// # Panics
///
/// Panics if `y` is zero. A zero divisor is a bug in the caller; use
/// [`checked_quo_mod`] where the divisor is not known to be non-zero. Like
/// native division, `T::MIN / -1` also panics on overflow.
pub fn quo_mod<T: QuoModFloor>(x: T, y: T) -> QuoMod<T> {
    x.quo_mod(y)
}

pub fn checked_quo_mod<T: QuoModFloor>(x: T, y: T) -> Result<QuoMod<T>, DivisionByZero> {
    x.checked_quo_mod(y)
}
