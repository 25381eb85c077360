use crate::math::{Point, Real};
use crate::query::PointQuery;
use crate::shape::PolygonShape;

impl PolygonShape {
    /// The largest signed distance from `pt` to the lines of the edges of this polygon.
    ///
    /// Negative inside, zero on the boundary, positive outside. For points
    /// outside, this is a lower bound of the actual distance.
    pub fn max_edge_separation(&self, pt: &Point<Real>) -> Real {
        self.normals()
            .iter()
            .zip(self.vertices())
            .map(|(n, v)| n.dot(&(pt - v)))
            .fold(-Real::MAX, Real::max)
    }
}

impl PointQuery for PolygonShape {
    /// Tests `pt` against the half-plane of every edge. The core polygon plays no part here.
    #[inline]
    fn contains_local_point(&self, pt: &Point<Real>) -> bool {
        self.normals()
            .iter()
            .zip(self.vertices())
            .all(|(n, v)| n.dot(&(pt - v)) <= 0.0)
    }
}
