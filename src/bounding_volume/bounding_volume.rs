use crate::math::{Point, Real};

/// A conservative region of space enclosing one or several shapes.
///
/// The broad-phase only manipulates bounds through this trait: overlap and
/// inclusion tests, merging the bounds of several poses or shapes, and growing
/// a bound by a margin.
pub trait BoundingVolume {
    /// A point inside of this volume, its center when it has one.
    fn center(&self) -> Point<Real>;

    /// Whether `self` and `other` overlap. Touching volumes overlap.
    fn intersects(&self, other: &Self) -> bool;

    /// Whether `other` lies entirely inside of `self`.
    fn contains(&self, other: &Self) -> bool;

    /// Grows `self` so it also encloses `other`.
    fn merge(&mut self, other: &Self);

    /// The smallest volume of this kind enclosing both `self` and `other`.
    fn merged(&self, other: &Self) -> Self;

    /// A copy of `self` grown by `margin` in every direction.
    fn loosened(&self, margin: Real) -> Self;
}
