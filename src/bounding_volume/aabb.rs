//! Axis-aligned bounding box.

use crate::bounding_volume::BoundingVolume;
use crate::math::{Isometry, Point, Real, Vector};
use crate::utils::IsometryOps;

/// An axis-aligned bounding box.
///
/// Defined by its minimum and maximum corners, with `mins.x ≤ maxs.x` and
/// `mins.y ≤ maxs.y` for any valid box. This is what the broad-phase consumes:
/// every polygon query that produces a world-space bound returns one.
///
/// # Example
///
/// ```rust
/// # #[cfg(feature = "f32")] {
/// use polyshape2d::bounding_volume::Aabb;
/// use polyshape2d::math::Point;
///
/// let aabb = Aabb::from_points([
///     Point::new(1.0, 2.0),
///     Point::new(-1.0, 4.0),
///     Point::new(0.0, 0.0),
/// ]);
///
/// assert_eq!(aabb.mins, Point::new(-1.0, 0.0));
/// assert_eq!(aabb.maxs, Point::new(1.0, 4.0));
/// assert!(aabb.contains_local_point(&Point::new(0.5, 3.0)));
/// # }
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "bytemuck", derive(bytemuck::Pod, bytemuck::Zeroable))]
#[derive(Debug, PartialEq, Copy, Clone)]
#[repr(C)]
pub struct Aabb {
    /// The point with minimum coordinates.
    pub mins: Point<Real>,
    /// The point with maximum coordinates.
    pub maxs: Point<Real>,
}

impl Aabb {
    /// The box spanning from `mins` to `maxs`.
    #[inline]
    pub fn new(mins: Point<Real>, maxs: Point<Real>) -> Aabb {
        Aabb { mins, maxs }
    }

    /// The empty box: `mins` at the largest representable value and `maxs` at
    /// the lowest, so that merging anything into it yields that thing.
    #[inline]
    pub fn new_invalid() -> Self {
        Self::new(Point::new(Real::MAX, Real::MAX), Point::new(-Real::MAX, -Real::MAX))
    }

    /// The box centered at `center` reaching `half_extents` away on each axis.
    #[inline]
    pub fn from_half_extents(center: Point<Real>, half_extents: Vector<Real>) -> Self {
        Self::new(center - half_extents, center + half_extents)
    }

    /// The tightest box around `pts`, or the empty box if there are none.
    pub fn from_points<I>(pts: I) -> Self
    where
        I: IntoIterator<Item = Point<Real>>,
    {
        pts.into_iter().fold(Self::new_invalid(), |mut acc, pt| {
            acc.take_point(pt);
            acc
        })
    }

    /// The midpoint of `mins` and `maxs`.
    #[inline]
    pub fn center(&self) -> Point<Real> {
        na::center(&self.mins, &self.maxs)
    }

    /// Half the width and height.
    #[inline]
    pub fn half_extents(&self) -> Vector<Real> {
        self.extents() / 2.0
    }

    /// The width and height.
    #[inline]
    pub fn extents(&self) -> Vector<Real> {
        self.maxs - self.mins
    }

    /// Width times height.
    #[inline]
    pub fn area(&self) -> Real {
        self.extents().product()
    }

    /// Grows this box just enough to enclose `pt`.
    #[inline]
    pub fn take_point(&mut self, pt: Point<Real>) {
        self.mins = self.mins.inf(&pt);
        self.maxs = self.maxs.sup(&pt);
    }

    /// The box enclosing `self` once moved by `m`.
    ///
    /// Rotations inflate the result: the half extents go through the
    /// component-wise absolute value of the rotation matrix.
    #[inline]
    pub fn transform_by(&self, m: &Isometry<Real>) -> Self {
        Aabb::from_half_extents(
            m * self.center(),
            m.absolute_transform_vector(&self.half_extents()),
        )
    }

    /// Whether `point`, in the frame of this box, is inside of it or on its boundary.
    #[inline]
    pub fn contains_local_point(&self, point: &Point<Real>) -> bool {
        na::partial_le(&self.mins, point) && na::partial_le(point, &self.maxs)
    }

    /// The corners of this box in counter-clockwise order, `mins` first.
    #[inline]
    pub fn vertices(&self) -> [Point<Real>; 4] {
        let (lo, hi) = (self.mins, self.maxs);
        [lo, Point::new(hi.x, lo.y), hi, Point::new(lo.x, hi.y)]
    }
}

impl BoundingVolume for Aabb {
    #[inline]
    fn center(&self) -> Point<Real> {
        Aabb::center(self)
    }

    #[inline]
    fn intersects(&self, other: &Aabb) -> bool {
        na::partial_le(&self.mins, &other.maxs) && na::partial_le(&other.mins, &self.maxs)
    }

    #[inline]
    fn contains(&self, other: &Aabb) -> bool {
        self.contains_local_point(&other.mins) && self.contains_local_point(&other.maxs)
    }

    #[inline]
    fn merge(&mut self, other: &Aabb) {
        self.take_point(other.mins);
        self.take_point(other.maxs);
    }

    #[inline]
    fn merged(&self, other: &Aabb) -> Aabb {
        let mut result = *self;
        result.merge(other);
        result
    }

    #[inline]
    fn loosened(&self, margin: Real) -> Aabb {
        assert!(margin >= 0.0, "Cannot loosen an AABB by a negative margin.");
        let margin = Vector::repeat(margin);
        Aabb::new(self.mins - margin, self.maxs + margin)
    }
}
