use num_bigint::BigInt;
use thiserror::Error;

pub mod fraction {
    use thiserror::Error;

    #[derive(Debug, Clone, PartialEq, Eq, Error)]
    #[non_exhaustive]
    pub enum Error {
        #[error("fraction denominator must not be zero")]
        ZeroDenominator,
    }
}

pub use fraction::Error as FractionError;

/// Common result type used across this crate.
pub type Result<T, E = MathError> = core::result::Result<T, E>;

/// Top-level error type to keep error management simple for users.
#[derive(Debug, Clone, Eq, PartialEq, Error)]
#[non_exhaustive]
pub enum MathError {
    #[error(transparent)]
    Fraction(#[from] FractionError),
    #[error(transparent)]
    NonInteger(#[from] NonIntegerError),
}

pub type Error = MathError;

/// A reduced fraction whose denominator is not one cannot be converted to an
/// integer; this error carries the offending value.
#[derive(Debug, Clone, Eq, PartialEq, Error)]
#[error("fraction {numerator}/{denominator} is not an integer")]
pub struct NonIntegerError {
    pub numerator: BigInt,
    pub denominator: BigInt,
}
