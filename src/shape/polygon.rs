use crate::bounding_volume::Obb;
use crate::mass_properties::{details, MassProperties};
use crate::math::{Isometry, Matrix, Point, Real, UnitVector, Vector};
use crate::settings::{PolygonSettings, AREA_EPSILON, EDGE_EPSILON, MAX_POLYGON_VERTICES};
use crate::shape::{PolygonDef, PolygonShapeError, SupportMap};
use crate::utils;
use arrayvec::ArrayVec;
use na::ComplexField;

/// A validated 2D convex polygon collision shape.
///
/// Every derived structure is computed once, at construction:
///
/// - `normals[i]` is the outward unit normal of the edge `vertices[i] → vertices[i + 1]`.
/// - `centroid` is the area-weighted centroid.
/// - `core_vertices` is the polygon with every edge moved inward by the
///   time-of-impact slop. Support queries run on it so that continuous
///   collision keeps a small margin against coincident contacts.
/// - `obb` is the minimal-area oriented box fitted to the vertices.
///
/// The only mutable state is the sweep radius, see [`PolygonShape::update_sweep_radius`].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PolygonShape {
    vertices: ArrayVec<Point<Real>, MAX_POLYGON_VERTICES>,
    normals: ArrayVec<UnitVector<Real>, MAX_POLYGON_VERTICES>,
    core_vertices: ArrayVec<Point<Real>, MAX_POLYGON_VERTICES>,
    centroid: Point<Real>,
    area: Real,
    obb: Obb,
    sweep_radius: Real,
    density: Real,
    friction: Real,
    restitution: Real,
    settings: PolygonSettings,
}

impl PolygonShape {
    /// Builds a polygon shape from `def` with the default [`PolygonSettings`].
    pub fn new(def: &PolygonDef) -> Result<Self, PolygonShapeError> {
        Self::with_settings(def, PolygonSettings::default())
    }

    /// Builds a polygon shape from `def` with custom tolerances.
    ///
    /// The vertex count, edge lengths, area and core polygon are always
    /// validated. Strict convexity and counter-clockwise winding are only
    /// validated if `settings.strict` is set; they never repair the input.
    pub fn with_settings(
        def: &PolygonDef,
        settings: PolygonSettings,
    ) -> Result<Self, PolygonShapeError> {
        Self::build(def, settings).map_err(|err| {
            log::debug!("Rejected polygon definition {:?}: {}", def.vertices, err);
            err
        })
    }

    fn build(def: &PolygonDef, settings: PolygonSettings) -> Result<Self, PolygonShapeError> {
        let vertices = def.vertices.clone();
        let count = vertices.len();

        if count < 3 || count > MAX_POLYGON_VERTICES {
            return Err(PolygonShapeError::VertexCount {
                count,
                max: MAX_POLYGON_VERTICES,
            });
        }

        let mut normals = ArrayVec::new();
        for i1 in 0..count {
            let i2 = (i1 + 1) % count;
            let normal = utils::ccw_face_normal([&vertices[i1], &vertices[i2]], EDGE_EPSILON)
                .ok_or(PolygonShapeError::DegenerateEdge(i1))?;
            normals.push(normal);
        }

        if settings.strict {
            check_convexity(&vertices, &normals, settings.linear_slop)?;
            check_winding(&normals, settings.angular_slop)?;
        }

        let (area, centroid) = details::polygon_area_and_centroid(&vertices);

        if area <= AREA_EPSILON {
            return Err(PolygonShapeError::DegenerateArea(area));
        }

        let obb = Obb::fit(&vertices).ok_or(PolygonShapeError::DegenerateBoundingBox)?;
        let core_vertices = core_polygon(&vertices, &normals, &centroid, settings.toi_slop)?;

        let mut result = PolygonShape {
            vertices,
            normals,
            core_vertices,
            centroid,
            area,
            obb,
            sweep_radius: 0.0,
            density: def.density,
            friction: def.friction,
            restitution: def.restitution,
            settings,
        };
        result.update_sweep_radius(&centroid);

        log::trace!(
            "Built polygon: {} vertices, area {}, centroid {:?}, core {:?}",
            count,
            area,
            centroid,
            result.core_vertices
        );

        Ok(result)
    }

    /// The number of vertices of this polygon.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// The vertices of this polygon, in local space.
    #[inline]
    pub fn vertices(&self) -> &[Point<Real>] {
        &self.vertices
    }

    /// The outward normals of the edges of this polygon.
    #[inline]
    pub fn normals(&self) -> &[UnitVector<Real>] {
        &self.normals
    }

    /// The vertices of the inward-shrunk core polygon, in local space.
    #[inline]
    pub fn core_vertices(&self) -> &[Point<Real>] {
        &self.core_vertices
    }

    /// The area-weighted centroid, in local space.
    #[inline]
    pub fn centroid(&self) -> Point<Real> {
        self.centroid
    }

    /// The area of this polygon.
    #[inline]
    pub fn area(&self) -> Real {
        self.area
    }

    /// The oriented bounding box fitted to this polygon, in local space.
    #[inline]
    pub fn obb(&self) -> &Obb {
        &self.obb
    }

    /// The maximum distance between the last sweep reference point and any core vertex.
    #[inline]
    pub fn sweep_radius(&self) -> Real {
        self.sweep_radius
    }

    /// The density of this shape.
    #[inline]
    pub fn density(&self) -> Real {
        self.density
    }

    /// The friction coefficient of this shape.
    #[inline]
    pub fn friction(&self) -> Real {
        self.friction
    }

    /// The restitution coefficient of this shape.
    #[inline]
    pub fn restitution(&self) -> Real {
        self.restitution
    }

    /// The tolerances this shape was built with.
    #[inline]
    pub fn settings(&self) -> &PolygonSettings {
        &self.settings
    }

    /// The centroid of this polygon placed at `pos`.
    #[inline]
    pub fn world_centroid(&self, pos: &Isometry<Real>) -> Point<Real> {
        pos * self.centroid
    }

    /// The first core vertex of this polygon placed at `pos`.
    ///
    /// Support-based distance iterations use it as their initial simplex point.
    #[inline]
    pub fn first_vertex(&self, pos: &Isometry<Real>) -> Point<Real> {
        pos * self.core_vertices[0]
    }

    /// Recomputes the sweep radius as the maximum distance from `center` to any core vertex.
    ///
    /// `center` is in local space, usually the center of mass of the owning body.
    /// This is the only operation that mutates a built shape.
    pub fn update_sweep_radius(&mut self, center: &Point<Real>) {
        self.sweep_radius = self
            .core_vertices
            .iter()
            .map(|pt| na::distance(pt, center))
            .fold(0.0, Real::max);
    }

    /// Computes the mass, centroid, and rotational inertia about the local origin.
    ///
    /// Runs the same fan integral as construction, so the returned center of
    /// mass is bit-for-bit [`PolygonShape::centroid`].
    pub fn compute_mass(&self) -> MassProperties {
        MassProperties::from_polygon(self.density, &self.vertices)
    }
}

impl SupportMap for PolygonShape {
    /// The core vertex furthest along `dir`, lowest index first on ties.
    #[inline]
    fn local_support_point(&self, dir: &Vector<Real>) -> Point<Real> {
        utils::point_cloud_support_point(dir, &self.core_vertices)
    }
}

/// Every vertex not on edge `i` must lie strictly inside its half-plane.
fn check_convexity(
    vertices: &[Point<Real>],
    normals: &[UnitVector<Real>],
    linear_slop: Real,
) -> Result<(), PolygonShapeError> {
    let count = vertices.len();

    for (i1, normal) in normals.iter().enumerate() {
        let i2 = (i1 + 1) % count;

        for (j, pt) in vertices.iter().enumerate() {
            if j == i1 || j == i2 {
                continue;
            }

            let distance = normal.dot(&(pt - vertices[i1]));

            if distance >= -linear_slop {
                return Err(PolygonShapeError::NotConvex {
                    edge: i1,
                    vertex: j,
                    distance,
                });
            }
        }
    }

    Ok(())
}

/// Consecutive edges must turn left by more than `angular_slop`.
fn check_winding(
    normals: &[UnitVector<Real>],
    angular_slop: Real,
) -> Result<(), PolygonShapeError> {
    let count = normals.len();

    for i in 0..count {
        let prev = &normals[(i + count - 1) % count];
        let cross = utils::perp(&**prev, &*normals[i]).clamp(-1.0, 1.0);
        let angle = ComplexField::asin(cross);

        if angle <= angular_slop {
            return Err(PolygonShapeError::NotCounterClockwise { vertex: i, angle });
        }
    }

    Ok(())
}

/// Moves every edge inward by `toi_slop` and intersects consecutive moved edges.
///
/// Vertex `i` of the result solves `[n(i-1); n(i)] x = [n(i-1)·v - slop; n(i)·v - slop]`
/// with `v` the vertex relative to the centroid.
fn core_polygon(
    vertices: &[Point<Real>],
    normals: &[UnitVector<Real>],
    centroid: &Point<Real>,
    toi_slop: Real,
) -> Result<ArrayVec<Point<Real>, MAX_POLYGON_VERTICES>, PolygonShapeError> {
    let count = vertices.len();
    let mut result = ArrayVec::new();

    for (i, pt) in vertices.iter().enumerate() {
        let n1 = &normals[(i + count - 1) % count];
        let n2 = &normals[i];
        let v = pt - centroid;

        let d = Vector::new(n1.dot(&v) - toi_slop, n2.dot(&v) - toi_slop);

        if d.x < 0.0 || d.y < 0.0 {
            return Err(PolygonShapeError::CoreCrossesCentroid(i));
        }

        let a = Matrix::new(n1.x, n1.y, n2.x, n2.y);
        let inv_a = a
            .try_inverse()
            .ok_or(PolygonShapeError::SingularCore(i))?;
        result.push(centroid + inv_a * d);
    }

    Ok(result)
}
