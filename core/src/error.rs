use thiserror::Error;

use crate::loader::error::LoaderError;
use crate::shamir::error::ShamirError;

/// Result type specialized for recovery operations.
pub type RecoveryResult<T> = std::result::Result<T, RecoveryError>;

/// Errors that can arise while loading a case and recovering its secret.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum RecoveryError {
    #[error(transparent)]
    Shamir(#[from] ShamirError),
    #[error(transparent)]
    Loader(#[from] LoaderError),
}
