use std::collections::HashSet;

use num_bigint::BigInt;

use crate::shamir::error::{ShamirError, ShamirResult};
use crate::traits::SharePoint;

/// Single share: one (x, y) sample of the hidden polynomial.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Point {
    x: BigInt,
    y: BigInt,
}

impl Point {
    pub fn new(x: BigInt, y: BigInt) -> Self {
        Point { x, y }
    }

    pub fn x(&self) -> &BigInt {
        &self.x
    }

    pub fn y(&self) -> &BigInt {
        &self.y
    }
}

impl SharePoint for Point {
    fn x(&self) -> &BigInt {
        &self.x
    }

    fn y(&self) -> &BigInt {
        &self.y
    }
}

impl From<(BigInt, BigInt)> for Point {
    fn from((x, y): (BigInt, BigInt)) -> Self {
        Point::new(x, y)
    }
}

/// Ordered collection of points whose x-coordinates are pairwise distinct.
///
/// The invariant is established at construction: [`PointSet::push`] rejects a
/// repeated x-coordinate, so a `PointSet` handed to the recovery engine can
/// never trigger a division by zero during interpolation. Insertion order is
/// preserved and determines which points count as "first" for threshold
/// selection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PointSet {
    points: Vec<Point>,
    seen: HashSet<BigInt>,
}

impl PointSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        PointSet {
            points: Vec::with_capacity(capacity),
            seen: HashSet::with_capacity(capacity),
        }
    }

    /// Append a point, rejecting an x-coordinate that is already present.
    pub fn push(&mut self, point: Point) -> ShamirResult<()> {
        if self.seen.contains(&point.x) {
            return Err(ShamirError::DuplicateXValue(point.x));
        }
        self.seen.insert(point.x.clone());
        self.points.push(point);
        Ok(())
    }

    /// Collect points in iteration order, failing on the first duplicate x.
    pub fn from_points<I>(points: I) -> ShamirResult<Self>
    where
        I: IntoIterator<Item = Point>,
    {
        let iter = points.into_iter();
        let mut set = Self::with_capacity(iter.size_hint().0);
        for point in iter {
            set.push(point)?;
        }
        Ok(set)
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Point> {
        self.points.iter()
    }
}

impl TryFrom<Vec<(BigInt, BigInt)>> for PointSet {
    type Error = ShamirError;

    fn try_from(pairs: Vec<(BigInt, BigInt)>) -> Result<Self, Self::Error> {
        Self::from_points(pairs.into_iter().map(Point::from))
    }
}

impl<'a> IntoIterator for &'a PointSet {
    type Item = &'a Point;
    type IntoIter = std::slice::Iter<'a, Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}
