pub mod error;

mod interpolate;
mod point;

pub use error::{ShamirError, ShamirResult};
pub use interpolate::{interpolate_constant_at_zero, ShamirRecovery};
pub use point::{Point, PointSet};
