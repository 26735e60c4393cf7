pub use crate::{big, frac};
pub use crate::{
    error::{FractionError, MathError, NonIntegerError},
    fraction::{gcd, Fraction},
};
pub use num_bigint::BigInt;
pub use num_traits::{One, Zero};
