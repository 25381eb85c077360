use crate::math::{Isometry, Point, Real};

/// Trait of objects that can be tested for point inclusion.
pub trait PointQuery {
    /// Tests if the given point is inside of `self`.
    ///
    /// The point is assumed to be expressed in the local-space of `self`.
    /// Points on the boundary are inside.
    fn contains_local_point(&self, pt: &Point<Real>) -> bool;

    /// Tests if the given point is inside of `self` transformed by `m`.
    fn contains_point(&self, m: &Isometry<Real>, pt: &Point<Real>) -> bool {
        self.contains_local_point(&m.inverse_transform_point(pt))
    }
}
