use crate::bounding_volume::{Aabb, BoundingVolume};
use crate::math::{Isometry, Real};
use crate::shape::PolygonShape;

impl PolygonShape {
    /// Computes the world-space [`Aabb`] of this polygon, transformed by `pos`.
    ///
    /// This is derived from the oriented bounding box, not from the vertices,
    /// so it is conservative for rotated poses.
    #[inline]
    pub fn aabb(&self, pos: &Isometry<Real>) -> Aabb {
        self.obb().aabb(pos)
    }

    /// Computes the local-space [`Aabb`] of this polygon.
    #[inline]
    pub fn local_aabb(&self) -> Aabb {
        self.aabb(&Isometry::identity())
    }

    /// Computes the [`Aabb`] enclosing this polygon at both the start and the
    /// end of a motion step.
    #[inline]
    pub fn swept_aabb(&self, start: &Isometry<Real>, end: &Isometry<Real>) -> Aabb {
        self.aabb(start).merged(&self.aabb(end))
    }
}
