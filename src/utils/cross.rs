use crate::math::{Real, Vector};

/// The scalar 2D cross product `a.x * b.y - a.y * b.x`.
#[inline]
pub fn perp(a: &Vector<Real>, b: &Vector<Real>) -> Real {
    a.x * b.y - a.y * b.x
}
