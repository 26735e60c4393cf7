pub mod error;
pub mod fraction;
pub mod macros;
pub mod prelude;

pub use fraction::{gcd, Fraction};
pub use num_bigint::BigInt;
