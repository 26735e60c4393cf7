use std::convert::TryFrom;
use std::fmt;
use std::ops::Add;
use std::ops::AddAssign;
use std::ops::Mul;
use std::ops::MulAssign;
use std::ops::Neg;

use num_bigint::BigInt;
use num_traits::One;
use num_traits::Signed;
use num_traits::Zero;

use super::error::{FractionError, NonIntegerError};

/// Exact rational number backed by arbitrary-precision integers.
///
/// Every value is kept in canonical form: numerator and denominator share no
/// common factor and the denominator is strictly positive, so the sign always
/// lives in the numerator. Construction and every arithmetic operation
/// re-establish the form, which makes equality, hashing and the integrality
/// check ([`Fraction::is_integer`]) plain field comparisons.
#[derive(Debug, Clone, Hash, PartialEq, Eq)]
pub struct Fraction {
    numerator: BigInt,
    denominator: BigInt,
}

/// Greatest common divisor of the magnitudes of `a` and `b`.
///
/// Always non-negative regardless of operand signs, with `gcd(0, n) == |n|`
/// and `gcd(0, 0) == 0`, so dividing a fraction's parts by it is
/// deterministic for negative inputs.
pub fn gcd(a: &BigInt, b: &BigInt) -> BigInt {
    let mut a = a.abs();
    let mut b = b.abs();
    while !b.is_zero() {
        let remainder = &a % &b;
        a = std::mem::replace(&mut b, remainder);
    }
    a
}

impl Fraction {
    /// Build `numerator / denominator`, reduced to canonical form.
    pub fn new(
        numerator: BigInt,
        denominator: BigInt,
    ) -> Result<Self, FractionError> {
        if denominator.is_zero() {
            return Err(FractionError::ZeroDenominator);
        }
        let mut fraction = Fraction {
            numerator,
            denominator,
        };
        fraction.reduce();
        Ok(fraction)
    }

    /// Wrap an integer as a fraction over one.
    pub fn from_integer(value: BigInt) -> Self {
        Fraction {
            numerator: value,
            denominator: BigInt::one(),
        }
    }

    #[inline]
    pub fn numerator(&self) -> &BigInt {
        &self.numerator
    }

    #[inline]
    pub fn denominator(&self) -> &BigInt {
        &self.denominator
    }

    pub fn into_parts(self) -> (BigInt, BigInt) {
        (self.numerator, self.denominator)
    }

    /// Whether the canonical denominator is one.
    #[inline]
    pub fn is_integer(&self) -> bool {
        self.denominator.is_one()
    }

    /// Divide out the common factor and move the sign into the numerator.
    ///
    /// The denominator is non-zero on entry, so the gcd is non-zero too.
    fn reduce(&mut self) {
        let common = gcd(&self.numerator, &self.denominator);
        if !common.is_one() {
            self.numerator /= &common;
            self.denominator /= &common;
        }
        if self.denominator.is_negative() {
            self.numerator = -&self.numerator;
            self.denominator = -&self.denominator;
        }
    }
}

impl fmt::Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.denominator.is_one() {
            write!(f, "{}", self.numerator)
        } else {
            write!(f, "{}/{}", self.numerator, self.denominator)
        }
    }
}

impl From<BigInt> for Fraction {
    fn from(value: BigInt) -> Self {
        Self::from_integer(value)
    }
}

macro_rules! impl_from_int_for_fraction {
    ($($t:ident),+ $(,)?) => {$(
        impl From<$t> for Fraction {
            fn from(value: $t) -> Self {
                Self::from_integer(BigInt::from(value))
            }
        }
    )+};
}

impl_from_int_for_fraction!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize);

impl TryFrom<Fraction> for BigInt {
    type Error = NonIntegerError;

    fn try_from(value: Fraction) -> Result<Self, Self::Error> {
        if value.denominator.is_one() {
            Ok(value.numerator)
        } else {
            Err(NonIntegerError {
                numerator: value.numerator,
                denominator: value.denominator,
            })
        }
    }
}

impl TryFrom<&Fraction> for BigInt {
    type Error = NonIntegerError;

    fn try_from(value: &Fraction) -> Result<Self, Self::Error> {
        BigInt::try_from(value.clone())
    }
}

impl Add<&Fraction> for &Fraction {
    type Output = Fraction;

    fn add(self, rhs: &Fraction) -> Fraction {
        let numerator = &self.numerator * &rhs.denominator
            + &rhs.numerator * &self.denominator;
        let denominator = &self.denominator * &rhs.denominator;
        let mut sum = Fraction {
            numerator,
            denominator,
        };
        sum.reduce();
        sum
    }
}

impl Add for Fraction {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        &self + &rhs
    }
}

impl AddAssign<&Fraction> for Fraction {
    fn add_assign(&mut self, rhs: &Fraction) {
        *self = &*self + rhs;
    }
}

impl Mul<&Fraction> for &Fraction {
    type Output = Fraction;

    fn mul(self, rhs: &Fraction) -> Fraction {
        let mut product = Fraction {
            numerator: &self.numerator * &rhs.numerator,
            denominator: &self.denominator * &rhs.denominator,
        };
        product.reduce();
        product
    }
}

impl Mul for Fraction {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        &self * &rhs
    }
}

impl MulAssign<&Fraction> for Fraction {
    fn mul_assign(&mut self, rhs: &Fraction) {
        *self = &*self * rhs;
    }
}

impl Neg for Fraction {
    type Output = Self;

    fn neg(mut self) -> Self {
        self.numerator = -self.numerator;
        self
    }
}

impl Neg for &Fraction {
    type Output = Fraction;

    fn neg(self) -> Fraction {
        Fraction {
            numerator: -&self.numerator,
            denominator: self.denominator.clone(),
        }
    }
}

impl Zero for Fraction {
    fn zero() -> Self {
        Self::from_integer(BigInt::zero())
    }

    #[inline]
    fn is_zero(&self) -> bool {
        self.numerator.is_zero()
    }
}

impl One for Fraction {
    fn one() -> Self {
        Self::from_integer(BigInt::one())
    }

    #[inline]
    fn is_one(&self) -> bool {
        self.numerator.is_one() && self.denominator.is_one()
    }
}
