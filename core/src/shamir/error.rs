use num_bigint::BigInt;
use thiserror::Error;

use math::error::MathError;

/// Result type specialized for Shamir operations.
pub type ShamirResult<T> = Result<T, ShamirError>;

/// Errors originating from the secret reconstruction engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ShamirError {
    #[error("Invalid threshold: {0}")]
    InvalidThreshold(usize),
    #[error("Insufficient points: need {required}, got {found}")]
    InsufficientPoints { required: usize, found: usize },
    #[error("Duplicate x-coordinate: {0}")]
    DuplicateXValue(BigInt),
    #[error(
        "Interpolation produced non-integer result {numerator}/{denominator}"
    )]
    NonIntegerResult {
        numerator: BigInt,
        denominator: BigInt,
    },
    #[error("Point with x = {x} disagrees with the recovered secret")]
    InconsistentPoints { x: BigInt },
    #[error(transparent)]
    Math(#[from] MathError),
}
