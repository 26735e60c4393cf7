//! Shared macros for constructing the exact-arithmetic primitives.
//!
//! These macros delegate to the types they create, which keeps the public API
//! concise and avoids duplicating builder logic across the crate.

/// Simplifies constructing [`BigInt`](num_bigint::BigInt)s.
///
/// Accepts any integer type with a `From` conversion into `BigInt`.
///
/// ```
/// use math::prelude::*;
///
/// let a = big!(42);
/// assert_eq!(a, BigInt::from(42));
/// ```
#[macro_export]
macro_rules! big {
    ($value:expr) => {
        $crate::BigInt::from($value)
    };
}

/// Simplifies constructing [`Fraction`](crate::fraction::Fraction)s.
///
/// The single-argument form wraps an integer and is infallible. The
/// two-argument form builds `numerator / denominator` and returns a
/// [`Result`](core::result::Result) because the denominator may be zero.
///
/// ```
/// use math::prelude::*;
///
/// let five = frac!(5);
/// assert_eq!(five, Fraction::from_integer(big!(5)));
///
/// let half = frac!(1, 2).unwrap();
/// assert_eq!(half, frac!(3, 6).unwrap());
/// ```
#[macro_export]
macro_rules! frac {
    ($value:expr) => {
        $crate::fraction::Fraction::from($value)
    };
    ($numerator:expr, $denominator:expr) => {
        $crate::fraction::Fraction::new(
            $crate::BigInt::from($numerator),
            $crate::BigInt::from($denominator),
        )
    };
}
