use crate::math::Real;

/// The inverse of `val`, or zero if `val` is zero.
#[inline]
pub fn inv(val: Real) -> Real {
    if val == 0.0 {
        0.0
    } else {
        1.0 / val
    }
}
