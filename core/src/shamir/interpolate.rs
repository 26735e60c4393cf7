use num_bigint::BigInt;
use num_traits::Zero;
use tracing::debug;

use math::error::MathError;
use math::fraction::Fraction;

use crate::shamir::error::{ShamirError, ShamirResult};
use crate::shamir::point::{Point, PointSet};
use crate::traits::SharePoint;

/// Threshold reconstruction engine for Shamir-shared secrets.
///
/// Recovers the constant term of the degree `threshold - 1` polynomial
/// passing through the supplied points, using exact rational Lagrange
/// interpolation at x = 0. All arithmetic is arbitrary precision, so the
/// result is exact for any share magnitude.
#[derive(Debug, Clone, Copy)]
pub struct ShamirRecovery {
    threshold: usize,
}

impl ShamirRecovery {
    /// Create a recovery engine requiring `threshold` points.
    pub fn new(threshold: usize) -> ShamirResult<Self> {
        if threshold == 0 {
            return Err(ShamirError::InvalidThreshold(threshold));
        }
        Ok(ShamirRecovery { threshold })
    }

    pub fn threshold(&self) -> usize {
        self.threshold
    }

    /// Recover the secret from the first `threshold` points in insertion
    /// order. Surplus points are ignored.
    pub fn recover(&self, points: &PointSet) -> ShamirResult<BigInt> {
        let active = self.select_active_points(points)?;
        debug!(
            threshold = self.threshold,
            available = points.len(),
            "recovering secret from leading points"
        );
        interpolate_constant_at_zero(active)
    }

    /// Recover the secret and cross-check every surplus point against it.
    ///
    /// After interpolating the first `threshold` points, each remaining
    /// point is swapped in for the last active point and the interpolation
    /// re-run. Any subset that disagrees on the secret (or fails to produce
    /// an integer at all) fails the whole call; the reported x-coordinate is
    /// where the disagreement surfaced, which is not necessarily the
    /// corrupted share itself.
    pub fn recover_checked(&self, points: &PointSet) -> ShamirResult<BigInt> {
        let active = self.select_active_points(points)?;
        let secret = interpolate_constant_at_zero(active)?;

        for extra in &points.points()[self.threshold..] {
            let mut subset: Vec<&Point> =
                active[..self.threshold - 1].iter().collect();
            subset.push(extra);

            let alternative = match interpolate_constant_at_zero(&subset) {
                Ok(value) => value,
                Err(ShamirError::NonIntegerResult { .. }) => {
                    return Err(ShamirError::InconsistentPoints {
                        x: extra.x().clone(),
                    });
                }
                Err(err) => return Err(err),
            };
            if alternative != secret {
                return Err(ShamirError::InconsistentPoints {
                    x: extra.x().clone(),
                });
            }
        }

        Ok(secret)
    }

    /// Take the first `threshold` points, ensuring there are enough of them.
    fn select_active_points<'a>(
        &self,
        points: &'a PointSet,
    ) -> ShamirResult<&'a [Point]> {
        if points.len() < self.threshold {
            return Err(ShamirError::InsufficientPoints {
                required: self.threshold,
                found: points.len(),
            });
        }
        Ok(&points.points()[..self.threshold])
    }
}

/// Lagrange interpolate over the points and return f(0) as an exact integer.
///
/// The running sum is kept as a reduced fraction, re-reduced after every
/// accumulated term, so the only failure modes are a repeated x-coordinate
/// and a final value that is not an integer. Interpolating an empty slice
/// yields zero.
pub fn interpolate_constant_at_zero<P: SharePoint>(
    points: &[P],
) -> ShamirResult<BigInt> {
    let mut sum = Fraction::zero();

    for (i, point) in points.iter().enumerate() {
        let mut term_numerator = point.y().clone();
        let mut term_denominator = BigInt::from(1);

        for (j, other) in points.iter().enumerate() {
            if i == j {
                continue;
            }
            let difference = point.x() - other.x();
            if difference.is_zero() {
                return Err(ShamirError::DuplicateXValue(other.x().clone()));
            }
            term_numerator *= -other.x();
            term_denominator *= difference;
        }

        let term = Fraction::new(term_numerator, term_denominator)
            .map_err(MathError::from)?;
        sum += &term;
    }

    BigInt::try_from(sum).map_err(|err| ShamirError::NonIntegerResult {
        numerator: err.numerator,
        denominator: err.denominator,
    })
}
