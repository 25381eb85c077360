//! Definition of the segment used by segment casts.

use crate::math::{Isometry, Point, Real, Vector};

/// A segment going from `a` to `b`.
///
/// Points along the segment are `a + (b - a) * lambda`, so `lambda = 0` is `a`
/// and `lambda = 1` is `b`. Casts may be bounded by a `max_lambda` above one to
/// extend the segment beyond `b`.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct Segment {
    /// Where the segment starts, at `lambda = 0`.
    pub a: Point<Real>,
    /// Where the segment ends, at `lambda = 1`.
    pub b: Point<Real>,
}

impl Segment {
    /// The segment from `a` to `b`.
    #[inline]
    pub fn new(a: Point<Real>, b: Point<Real>) -> Segment {
        Segment { a, b }
    }

    /// `b - a`, not normalized.
    #[inline]
    pub fn scaled_direction(&self) -> Vector<Real> {
        self.b - self.a
    }

    /// The distance between `a` and `b`.
    #[inline]
    pub fn length(&self) -> Real {
        self.scaled_direction().norm()
    }

    /// The point at fraction `lambda` of this segment.
    #[inline]
    pub fn point_at(&self, lambda: Real) -> Point<Real> {
        self.a + self.scaled_direction() * lambda
    }

    /// This segment with both endpoints moved by `m`.
    #[inline]
    pub fn transformed(&self, m: &Isometry<Real>) -> Self {
        Segment::new(m * self.a, m * self.b)
    }

    /// This segment with both endpoints moved by the inverse of `m`.
    #[inline]
    pub fn inverse_transformed(&self, m: &Isometry<Real>) -> Self {
        Segment::new(
            m.inverse_transform_point(&self.a),
            m.inverse_transform_point(&self.b),
        )
    }
}
