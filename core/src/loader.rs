pub mod error;

mod record;

pub use error::{LoaderError, LoaderResult};
pub use record::RecoveryCase;
