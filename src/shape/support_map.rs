//! Support functions of convex shapes.

use crate::math::{Isometry, Point, Real, UnitVector, Vector};

/// A convex shape described by its support function.
///
/// Separating-axis and distance algorithms only see a convex shape through
/// this function.
pub trait SupportMap {
    /// Evaluates the support function of this shape.
    ///
    /// A support function is a function associating a vector to the shape point which maximizes
    /// their dot product.
    fn local_support_point(&self, dir: &Vector<Real>) -> Point<Real>;

    /// [`SupportMap::local_support_point`] for a unit direction.
    fn local_support_point_toward(&self, dir: &UnitVector<Real>) -> Point<Real> {
        self.local_support_point(dir.as_ref())
    }

    /// Evaluates the support function of this shape transformed by `transform`.
    ///
    /// `dir` is rotated into local space, and the local support point is mapped back to world
    /// space.
    fn support_point(&self, transform: &Isometry<Real>, dir: &Vector<Real>) -> Point<Real> {
        let local_dir = transform.inverse_transform_vector(dir);
        transform * self.local_support_point(&local_dir)
    }

    /// [`SupportMap::support_point`] for a unit direction.
    fn support_point_toward(
        &self,
        transform: &Isometry<Real>,
        dir: &UnitVector<Real>,
    ) -> Point<Real> {
        let local_dir = UnitVector::new_unchecked(transform.inverse_transform_vector(dir));
        transform * self.local_support_point_toward(&local_dir)
    }
}
