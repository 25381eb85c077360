//! Traits and structure needed to cast segments.

use crate::math::{Isometry, Real, Vector};
use crate::shape::Segment;

/// Structure containing the result of a successful segment cast.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SegmentIntersection {
    /// The fraction of the segment at which it enters the shape.
    ///
    /// The entry point is `segment.point_at(lambda)`.
    pub lambda: Real,

    /// The outward unit normal of the edge the segment enters through.
    pub normal: Vector<Real>,

    /// The index of the edge the segment enters through.
    pub edge: usize,
}

impl SegmentIntersection {
    #[inline]
    /// Creates a new `SegmentIntersection`.
    pub fn new(lambda: Real, normal: Vector<Real>, edge: usize) -> SegmentIntersection {
        SegmentIntersection {
            lambda,
            normal,
            edge,
        }
    }

    /// Rotates the normal of this intersection by `transform`.
    ///
    /// The fraction is invariant under rigid transforms.
    #[inline]
    pub fn transform_by(&self, transform: &Isometry<Real>) -> Self {
        SegmentIntersection {
            lambda: self.lambda,
            normal: transform * self.normal,
            edge: self.edge,
        }
    }
}

/// Traits of objects which can be intersected by a segment.
pub trait SegmentCast {
    /// Computes where `segment` enters `self`, if it does within `[0, max_lambda]`.
    ///
    /// The segment is assumed to be expressed in the local-space of `self`.
    /// A segment starting inside of `self` does not enter it and yields `None`.
    fn cast_local_segment(&self, segment: &Segment, max_lambda: Real)
        -> Option<SegmentIntersection>;

    /// Tests whether `segment` enters `self` within `[0, max_lambda]`.
    #[inline]
    fn intersects_local_segment(&self, segment: &Segment, max_lambda: Real) -> bool {
        self.cast_local_segment(segment, max_lambda).is_some()
    }

    /// Computes where the world-space `segment` enters `self` transformed by `m`.
    ///
    /// The returned normal is in world-space.
    fn cast_segment(
        &self,
        m: &Isometry<Real>,
        segment: &Segment,
        max_lambda: Real,
    ) -> Option<SegmentIntersection> {
        let ls_segment = segment.inverse_transformed(m);
        self.cast_local_segment(&ls_segment, max_lambda)
            .map(|inter| inter.transform_by(m))
    }

    /// Tests whether the world-space `segment` enters `self` transformed by `m`.
    #[inline]
    fn intersects_segment(&self, m: &Isometry<Real>, segment: &Segment, max_lambda: Real) -> bool {
        let ls_segment = segment.inverse_transformed(m);
        self.intersects_local_segment(&ls_segment, max_lambda)
    }
}
