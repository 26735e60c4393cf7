use std::num::ParseIntError;

use num_bigint::ParseBigIntError;
use thiserror::Error;

use crate::shamir::error::ShamirError;

/// Result type specialized for case decoding.
pub type LoaderResult<T> = Result<T, LoaderError>;

/// Errors produced while decoding a recovery case.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum LoaderError {
    #[error("failed to read case file")]
    Io(#[from] std::io::Error),
    #[error("malformed case JSON")]
    Json(#[from] serde_json::Error),
    #[error("invalid base '{base}'")]
    InvalidBase {
        base: String,
        source: ParseIntError,
    },
    #[error("unsupported base {0}: expected a radix in 2..=36")]
    UnsupportedBase(u32),
    #[error("invalid share index '{key}'")]
    InvalidShareIndex {
        key: String,
        source: ParseBigIntError,
    },
    #[error("invalid share value '{value}' for base {base}")]
    InvalidShareValue {
        value: String,
        base: u32,
        source: ParseBigIntError,
    },
    #[error(transparent)]
    Shamir(#[from] ShamirError),
}
