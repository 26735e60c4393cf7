pub mod error;
pub mod loader;
pub mod shamir;
pub mod traits;

pub use error::{RecoveryError, RecoveryResult};
pub use loader::RecoveryCase;
pub use shamir::{Point, PointSet, ShamirRecovery};
