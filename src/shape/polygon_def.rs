use crate::math::{Isometry, Point, Real, Vector};
use crate::settings::MAX_POLYGON_VERTICES;
use crate::shape::PolygonShapeError;
use arrayvec::ArrayVec;

/// The raw description a [`PolygonShape`](crate::shape::PolygonShape) is built from.
///
/// The vertices are expressed in the local space of the shape and must describe
/// a strictly convex polygon in counter-clockwise order. They are copied verbatim
/// at construction: no hull is computed and no vertex is reordered.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PolygonDef {
    /// The polygon vertices, counter-clockwise, in local space.
    pub vertices: ArrayVec<Point<Real>, MAX_POLYGON_VERTICES>,
    /// The density, in mass per unit area.
    pub density: Real,
    /// The Coulomb friction coefficient.
    pub friction: Real,
    /// The restitution (bounciness) coefficient.
    pub restitution: Real,
}

impl Default for PolygonDef {
    fn default() -> Self {
        Self {
            vertices: ArrayVec::new(),
            density: 0.0,
            friction: 0.2,
            restitution: 0.0,
        }
    }
}

impl PolygonDef {
    /// An empty definition with default material.
    pub fn new() -> Self {
        Self::default()
    }

    /// A definition with the given vertices and default material.
    ///
    /// Fails if there are more than [`MAX_POLYGON_VERTICES`] vertices.
    pub fn from_vertices(vertices: &[Point<Real>]) -> Result<Self, PolygonShapeError> {
        let mut result = Self::default();
        for pt in vertices {
            result.push_vertex(*pt)?;
        }
        Ok(result)
    }

    /// Appends a vertex.
    ///
    /// Fails if the definition already holds [`MAX_POLYGON_VERTICES`] vertices.
    pub fn push_vertex(&mut self, pt: Point<Real>) -> Result<(), PolygonShapeError> {
        self.vertices
            .try_push(pt)
            .map_err(|_| PolygonShapeError::CapacityExceeded(MAX_POLYGON_VERTICES))
    }

    /// Replaces the vertices with an axis-aligned box centered on the local origin.
    #[must_use]
    pub fn set_as_box(mut self, hx: Real, hy: Real) -> Self {
        self.vertices.clear();
        self.vertices.extend([
            Point::new(-hx, -hy),
            Point::new(hx, -hy),
            Point::new(hx, hy),
            Point::new(-hx, hy),
        ]);
        self
    }

    /// Replaces the vertices with a box of half extents `hx`, `hy`, centered at
    /// `center` and rotated by `angle` radians.
    #[must_use]
    pub fn set_as_oriented_box(self, hx: Real, hy: Real, center: Point<Real>, angle: Real) -> Self {
        let pos = Isometry::new(Vector::new(center.x, center.y), angle);
        let mut result = self.set_as_box(hx, hy);
        for pt in result.vertices.iter_mut() {
            *pt = pos * *pt;
        }
        result
    }

    /// Sets the density.
    #[must_use]
    pub fn density(mut self, density: Real) -> Self {
        self.density = density;
        self
    }

    /// Sets the friction coefficient.
    #[must_use]
    pub fn friction(mut self, friction: Real) -> Self {
        self.friction = friction;
        self
    }

    /// Sets the restitution coefficient.
    #[must_use]
    pub fn restitution(mut self, restitution: Real) -> Self {
        self.restitution = restitution;
        self
    }
}
