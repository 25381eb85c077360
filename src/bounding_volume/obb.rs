//! Oriented Bounding Box.

use crate::bounding_volume::Aabb;
use crate::math::{Isometry, Matrix, Point, Real, Vector};
use crate::utils::IsometryOps;

/// An Oriented Bounding Box (OBB).
///
/// A rectangle with an arbitrary orientation: the columns of `rotation` are
/// the box's own x and y axes, `extents` its half-width and half-height along
/// these axes, and `center` its center. All three are expressed in the local
/// space of the shape the box was fitted to.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, PartialEq, Copy, Clone)]
pub struct Obb {
    /// The center of the box.
    pub center: Point<Real>,
    /// The orthonormal matrix whose columns are the box axes.
    pub rotation: Matrix<Real>,
    /// The half extents of the box along its own axes.
    pub extents: Vector<Real>,
}

impl Obb {
    /// Creates a new oriented bounding box.
    #[inline]
    pub fn new(center: Point<Real>, rotation: Matrix<Real>, extents: Vector<Real>) -> Self {
        Self {
            center,
            rotation,
            extents,
        }
    }

    /// Fits a minimal-area box to the closed polyline `hull`.
    ///
    /// Every edge `hull[i - 1] → hull[i]` (including the closing one) is tried
    /// as the box x axis and the smallest box wins. Ties keep the earliest edge.
    ///
    /// Returns `None` if `hull` has fewer than two points or if all its edges
    /// are degenerate.
    pub fn fit(hull: &[Point<Real>]) -> Option<Self> {
        if hull.len() < 2 {
            return None;
        }

        let mut min_area = Real::MAX;
        let mut result = None;

        for i in 0..hull.len() {
            let root = hull[(i + hull.len() - 1) % hull.len()];
            let (ux, length) = na::Unit::new_and_get(hull[i] - root);

            if length <= Real::EPSILON {
                continue;
            }

            let uy = Vector::new(-ux.y, ux.x);
            let mut lower = Vector::repeat(Real::MAX);
            let mut upper = Vector::repeat(-Real::MAX);

            for pt in hull {
                let d = pt - root;
                let r = Vector::new(ux.dot(&d), uy.dot(&d));
                lower = lower.inf(&r);
                upper = upper.sup(&r);
            }

            let area = (upper.x - lower.x) * (upper.y - lower.y);

            if area < min_area {
                min_area = area;
                let rotation = Matrix::from_columns(&[*ux, uy]);
                let local_center = (lower + upper) * 0.5;
                result = Some(Obb {
                    center: root + rotation * local_center,
                    rotation,
                    extents: (upper - lower) * 0.5,
                });
                log::trace!("OBB candidate from edge {} with area {}", i, area);
            }
        }

        result
    }

    /// The four corners of this box, counter-clockwise, in the frame of `center`.
    pub fn corners(&self) -> [Point<Real>; 4] {
        let ex = self.rotation.column(0) * self.extents.x;
        let ey = self.rotation.column(1) * self.extents.y;
        [
            self.center - ex - ey,
            self.center + ex - ey,
            self.center + ex + ey,
            self.center - ex + ey,
        ]
    }

    /// Does this box contain `point`, expressed in the same frame as `center`?
    pub fn contains_local_point(&self, point: &Point<Real>) -> bool {
        let local = self.rotation.tr_mul(&(point - self.center));
        local.x.abs() <= self.extents.x && local.y.abs() <= self.extents.y
    }

    /// Computes the world-space AABB of this box transformed by `pos`.
    ///
    /// The half extents are rotated through `|pos.rotation * self.rotation|`,
    /// which bounds every corner of the rotated box.
    #[inline]
    pub fn aabb(&self, pos: &Isometry<Real>) -> Aabb {
        let rot = pos.rotation_matrix() * self.rotation;
        let half_extents = rot.abs() * self.extents;
        let center = pos * self.center;
        Aabb::from_half_extents(center, half_extents)
    }
}
