use num_bigint::BigInt;

/// Abstract source for interpolation points used during reconstruction.
///
/// The recovery engine only ever needs the two coordinates, so any record
/// shape that can hand out an (x, y) pair works as input.
pub trait SharePoint {
    /// The x-coordinate corresponding to this point.
    fn x(&self) -> &BigInt;

    /// The share value sampled at `x`.
    fn y(&self) -> &BigInt;
}

impl SharePoint for (BigInt, BigInt) {
    fn x(&self) -> &BigInt {
        &self.0
    }

    fn y(&self) -> &BigInt {
        &self.1
    }
}

impl<P> SharePoint for &P
where
    P: SharePoint + ?Sized,
{
    fn x(&self) -> &BigInt {
        (**self).x()
    }

    fn y(&self) -> &BigInt {
        (**self).y()
    }
}
