use crate::math::{Point, Real, UnitVector, Vector};

/// Computes the outward normal of the edge `pts[0] → pts[1]` of a counter-clockwise polygon.
///
/// This is the normalized right-hand perpendicular `(e.y, -e.x)` of the edge vector.
/// Returns `None` if the squared length of the edge is not above `eps`.
#[inline]
pub fn ccw_face_normal(pts: [&Point<Real>; 2], eps: Real) -> Option<UnitVector<Real>> {
    let ab = pts[1] - pts[0];

    if ab.norm_squared() <= eps {
        return None;
    }

    let res = Vector::new(ab.y, -ab.x);
    UnitVector::try_new(res, 0.0)
}
